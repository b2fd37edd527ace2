//! Flowshop instance model.
//!
//! An [`Instance`] holds the job and machine counts and the processing-time
//! matrix `times[job][machine]`. Jobs are indexed `0..jobs` inside the
//! crate; results report 1-based job identifiers.
//!
//! Loading benchmark files is left to the caller. The [`InstanceProvider`]
//! trait is the seam for that, and [`InstanceCatalog`] is a simple
//! in-memory implementation.
//!
//! # Reference
//! Taillard (1993), "Benchmarks for basic scheduling problems"

use crate::error::{FlowshopError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A permutation flowshop instance.
///
/// Immutable once constructed. All algorithms borrow it read-only.
///
/// # Examples
///
/// ```
/// use u_flowshop::Instance;
///
/// let inst = Instance::new("toy", vec![vec![2, 3], vec![4, 1], vec![1, 5]]).unwrap();
/// assert_eq!(inst.jobs(), 3);
/// assert_eq!(inst.machines(), 2);
/// assert_eq!(inst.time(2, 1), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    name: String,
    jobs: usize,
    machines: usize,
    times: Vec<Vec<u64>>,
}

impl Instance {
    /// Creates an instance from a `jobs × machines` matrix.
    ///
    /// The dimensions are taken from the matrix itself.
    pub fn new(name: impl Into<String>, times: Vec<Vec<u64>>) -> Result<Self> {
        let jobs = times.len();
        let machines = times.first().map_or(0, Vec::len);
        Self::with_dimensions(name, jobs, machines, times)
    }

    /// Creates an instance with explicitly declared dimensions.
    ///
    /// Fails with [`FlowshopError::InvalidInstance`] if the matrix does not
    /// match the declared counts.
    pub fn with_dimensions(
        name: impl Into<String>,
        jobs: usize,
        machines: usize,
        times: Vec<Vec<u64>>,
    ) -> Result<Self> {
        let instance = Self {
            name: name.into(),
            jobs,
            machines,
            times,
        };
        instance.validate()?;
        Ok(instance)
    }

    /// Checks dimensions, matrix shape and that the total processing time
    /// fits in `u64`. The total bounds every completion time, so evaluation
    /// cannot overflow on a valid instance.
    ///
    /// Constructors already call this; it exists for instances obtained
    /// through deserialisation.
    pub fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(FlowshopError::InvalidInstance(
                "job count must be positive".into(),
            ));
        }
        if self.machines == 0 {
            return Err(FlowshopError::InvalidInstance(
                "machine count must be positive".into(),
            ));
        }
        if self.times.len() != self.jobs {
            return Err(FlowshopError::InvalidInstance(format!(
                "expected {} rows of processing times, got {}",
                self.jobs,
                self.times.len()
            )));
        }
        if let Some((job, row)) = self
            .times
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.machines)
        {
            return Err(FlowshopError::InvalidInstance(format!(
                "job {} has {} processing times, expected {}",
                job + 1,
                row.len(),
                self.machines
            )));
        }
        let total = self
            .times
            .iter()
            .flatten()
            .try_fold(0u64, |acc, &p| acc.checked_add(p));
        if total.is_none() {
            return Err(FlowshopError::InvalidInstance(
                "total processing time exceeds the u64 range".into(),
            ));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    pub fn machines(&self) -> usize {
        self.machines
    }

    /// Processing time of `job` on `machine` (both 0-based).
    #[inline]
    pub fn time(&self, job: usize, machine: usize) -> u64 {
        self.times[job][machine]
    }

    /// Processing-time row of one job.
    #[inline]
    pub fn job_times(&self, job: usize) -> &[u64] {
        &self.times[job]
    }

    pub fn times(&self) -> &[Vec<u64>] {
        &self.times
    }

    /// Sum of a job's processing times over all machines.
    pub fn total_time(&self, job: usize) -> u64 {
        self.times[job].iter().sum()
    }

    /// Sum of all processing times in the instance.
    pub fn total_work(&self) -> u64 {
        self.times.iter().flatten().sum()
    }
}

/// Source of instances by name.
///
/// Implementations own the mapping from instance names to data (files,
/// databases, embedded tables). Unknown names must fail with
/// [`FlowshopError::InstanceNotFound`] rather than produce substitute data.
pub trait InstanceProvider {
    fn load_instance(&self, name: &str) -> Result<Instance>;
}

/// In-memory instance registry.
///
/// A fallback instance is returned for unmapped names only when one was
/// configured with [`with_fallback`](Self::with_fallback).
#[derive(Debug, Clone, Default)]
pub struct InstanceCatalog {
    instances: HashMap<String, Instance>,
    fallback: Option<Instance>,
}

impl InstanceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an instance under its own name, replacing any previous entry.
    pub fn insert(&mut self, instance: Instance) {
        self.instances.insert(instance.name().to_string(), instance);
    }

    /// Sets the instance returned for unmapped names.
    pub fn with_fallback(mut self, instance: Instance) -> Self {
        self.fallback = Some(instance);
        self
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.instances.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl InstanceProvider for InstanceCatalog {
    fn load_instance(&self, name: &str) -> Result<Instance> {
        match self.instances.get(name) {
            Some(instance) => Ok(instance.clone()),
            None => match &self.fallback {
                Some(fallback) => {
                    log::warn!(
                        "instance {name:?} not registered, using fallback {:?}",
                        fallback.name()
                    );
                    Ok(fallback.clone())
                }
                None => Err(FlowshopError::InstanceNotFound(name.to_string())),
            },
        }
    }
}

impl FromIterator<Instance> for InstanceCatalog {
    fn from_iter<T: IntoIterator<Item = Instance>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for instance in iter {
            catalog.insert(instance);
        }
        catalog
    }
}
