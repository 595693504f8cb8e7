//! Portfolio site with a contact form that emails submissions onward.

pub mod config;
pub mod mailer;
pub mod routes;
pub mod state;
