//! HR vertical slice: the employee record store and the listing pipeline.

mod employee;
mod error;
pub mod id;
pub mod query;
pub mod seed;
pub mod store;
pub mod validation;

pub use employee::{Department, Employee, EmployeeUpdate, NewEmployee, ParseEnumError, Position};
pub use error::{HrError, HrResult};
pub use query::{DEFAULT_PAGE_SIZE, ListingPage, ListingQuery, filter, page_count, paginate};
pub use store::{LoadOutcome, RecordStore, STORAGE_KEY};
