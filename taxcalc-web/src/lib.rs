//! Server-rendered web front end for the progressive tax calculator.

pub mod forms;
pub mod routes;
pub mod state;
pub mod views;
