//! Authoritative employee collection mirrored into a key-value backing store.
//!
//! The collection is loaded once when the store is opened. Every successful
//! mutation rewrites the whole snapshot under [`STORAGE_KEY`]; when that write
//! fails the mutation is undone in memory and [`HrError::Unpersisted`] is
//! returned, so memory and the durable snapshot stay in step.

use std::collections::{HashMap, HashSet};

use platform_db::KeyValueStore;
use tracing::{error, info, warn};

use crate::{
    Employee, EmployeeUpdate, HrError, HrResult, NewEmployee, id::new_record_id, seed,
};

/// The single backing-store key holding the serialized collection.
pub const STORAGE_KEY: &str = "employee_management_data";

/// How the initial collection was obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A well-formed snapshot was found.
    Restored { count: usize },
    /// No snapshot existed; the seed was written.
    Seeded { count: usize },
    /// The stored snapshot was malformed and has been replaced by the seed.
    RecoveredFromCorrupt { reason: String, count: usize },
}

impl LoadOutcome {
    pub fn count(&self) -> usize {
        match self {
            Self::Restored { count }
            | Self::Seeded { count }
            | Self::RecoveredFromCorrupt { count, .. } => *count,
        }
    }
}

pub struct RecordStore<S> {
    backend: S,
    seed: Vec<Employee>,
    records: Vec<Employee>,
    index: HashMap<String, usize>,
    outcome: LoadOutcome,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Opens the store over `backend`, seeding it with the built-in dataset
    /// when no usable snapshot is present.
    pub fn open(backend: S) -> HrResult<Self> {
        Self::open_with_seed(backend, seed::default_employees())
    }

    pub fn open_with_seed(mut backend: S, seed: Vec<Employee>) -> HrResult<Self> {
        if let Some(dup) = first_duplicate(&seed) {
            return Err(HrError::DuplicateSeedId(dup.to_string()));
        }
        let (records, outcome) = load(&mut backend, &seed)?;
        info!(count = records.len(), ?outcome, "employee store loaded");
        let index = build_index(&records);
        Ok(Self {
            backend,
            seed,
            records,
            index,
            outcome,
        })
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    /// Owned copy of every record in insertion order.
    pub fn list(&self) -> Vec<Employee> {
        self.records.clone()
    }

    /// Borrowed view of every record in insertion order.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Employee> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn add(&mut self, data: NewEmployee) -> HrResult<Employee> {
        let mut id = new_record_id();
        while self.index.contains_key(&id) {
            id = new_record_id();
        }
        let employee = Employee::from_new(id, data);
        self.index.insert(employee.id.clone(), self.records.len());
        self.records.push(employee.clone());

        if let Err(err) = self.write_snapshot("add") {
            self.records.pop();
            self.index.remove(&employee.id);
            return Err(err);
        }
        info!(id = %employee.id, "employee added");
        Ok(employee)
    }

    /// Merges `update` into the record with `id`. Unknown ids return
    /// `Ok(None)` and leave the backing store untouched.
    pub fn update(&mut self, id: &str, update: EmployeeUpdate) -> HrResult<Option<Employee>> {
        let Some(&position) = self.index.get(id) else {
            return Ok(None);
        };
        let previous = self.records[position].clone();
        self.records[position].apply(update);

        if let Err(err) = self.write_snapshot("update") {
            self.records[position] = previous;
            return Err(err);
        }
        info!(id, "employee updated");
        Ok(Some(self.records[position].clone()))
    }

    /// Removes the record with `id`. Returns `Ok(false)` without writing
    /// when no such record exists.
    pub fn delete(&mut self, id: &str) -> HrResult<bool> {
        let Some(&position) = self.index.get(id) else {
            return Ok(false);
        };
        let removed = self.records.remove(position);
        self.index = build_index(&self.records);

        if let Err(err) = self.write_snapshot("delete") {
            self.records.insert(position, removed);
            self.index = build_index(&self.records);
            return Err(err);
        }
        info!(id, "employee deleted");
        Ok(true)
    }

    /// Replaces the stored collection with the seed in a single snapshot
    /// write. On failure both memory and the backing store keep the old data.
    pub fn reset(&mut self) -> HrResult<LoadOutcome> {
        let previous = std::mem::replace(&mut self.records, self.seed.clone());
        if let Err(err) = self.write_snapshot("reset") {
            self.records = previous;
            return Err(err);
        }
        self.index = build_index(&self.records);
        let outcome = LoadOutcome::Seeded {
            count: self.records.len(),
        };
        warn!(count = self.records.len(), "employee store reset to seed");
        self.outcome = outcome.clone();
        Ok(outcome)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    fn write_snapshot(&mut self, operation: &'static str) -> HrResult<()> {
        let snapshot = serde_json::to_string(&self.records)?;
        self.backend
            .set(STORAGE_KEY, &snapshot)
            .map_err(|source| {
                error!(operation, %source, "snapshot write failed; rolling back");
                HrError::Unpersisted { operation, source }
            })
    }
}

fn load<S: KeyValueStore>(
    backend: &mut S,
    seed: &[Employee],
) -> HrResult<(Vec<Employee>, LoadOutcome)> {
    let mut corrupt_reason = None;
    if let Some(raw) = backend.get(STORAGE_KEY)? {
        match parse_snapshot(&raw) {
            Ok(records) => {
                let count = records.len();
                return Ok((records, LoadOutcome::Restored { count }));
            }
            Err(reason) => {
                error!(key = STORAGE_KEY, %reason, "failed to parse employees from backing store");
                backend.remove(STORAGE_KEY)?;
                corrupt_reason = Some(reason);
            }
        }
    }

    backend.set(STORAGE_KEY, &serde_json::to_string(seed)?)?;
    let count = seed.len();
    let outcome = match corrupt_reason {
        Some(reason) => LoadOutcome::RecoveredFromCorrupt { reason, count },
        None => LoadOutcome::Seeded { count },
    };
    Ok((seed.to_vec(), outcome))
}

fn parse_snapshot(raw: &str) -> Result<Vec<Employee>, String> {
    let records: Vec<Employee> = serde_json::from_str(raw).map_err(|err| err.to_string())?;
    if let Some(dup) = first_duplicate(&records) {
        return Err(format!("duplicate id {dup:?}"));
    }
    Ok(records)
}

fn first_duplicate(records: &[Employee]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .find(|employee| !seen.insert(employee.id.as_str()))
        .map(|employee| employee.id.as_str())
}

fn build_index(records: &[Employee]) -> HashMap<String, usize> {
    records
        .iter()
        .enumerate()
        .map(|(position, employee)| (employee.id.clone(), position))
        .collect()
}
