//! # Settings Module
//!
//! Account data management: the clear-data endpoint that wipes one user's
//! rows and uploaded files.

pub mod handlers;
pub mod routes;

pub use routes::settings_routes;
