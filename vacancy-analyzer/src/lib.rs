pub mod api;
pub mod display;
pub mod models;
pub mod pipeline;
pub mod salary;
pub mod types;

pub use models::{Listing, Site, Vacancy};
pub use salary::SalaryRange;
pub use types::{Error, Result};
