//! Progressive tax schedule construction and income assessment.
//!
//! [`TaxSchedule`] validates the shape of a band table at construction;
//! [`TaxCalculator`] assesses incomes against it with a single band lookup.

pub mod calculator;
pub mod common;
pub mod schedule;

pub use calculator::TaxCalculator;
pub use schedule::{ScheduleError, TaxSchedule};
