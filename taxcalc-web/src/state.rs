use std::sync::Arc;

use taxcalc_core::TaxSchedule;

/// Application state shared across all HTTP handlers.
///
/// Holds the tax schedule built in `main` and passed into the router; no
/// handler reaches for process-wide globals.
#[derive(Clone)]
pub struct AppState {
    pub schedule: Arc<TaxSchedule>,
}

impl AppState {
    /// Wraps a schedule for sharing across handlers.
    pub fn new(schedule: TaxSchedule) -> Self {
        Self {
            schedule: Arc::new(schedule),
        }
    }
}
