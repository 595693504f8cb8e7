use std::sync::Arc;

use crate::mailer::Mailer;

/// Application state shared across all HTTP handlers.
///
/// Carries the mailer built in `main` behind its trait object; no handler
/// reaches for a process-wide transport.
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Wraps a mailer for sharing across handlers.
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }
}
