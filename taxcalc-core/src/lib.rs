pub mod calculations;
pub mod models;

pub use calculations::{ScheduleError, TaxCalculator, TaxSchedule};
pub use models::*;
