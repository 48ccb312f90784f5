use tracing::error;

use crate::Employee;

const SEED_JSON: &str = include_str!("../data/employees.json");

/// Built-in dataset written to an empty or corrupt backing store.
pub fn default_employees() -> Vec<Employee> {
    serde_json::from_str(SEED_JSON).unwrap_or_else(|err| {
        error!(%err, "built-in seed dataset failed to parse");
        Vec::new()
    })
}
