//! Backend services.
//!
//! # Services
//!
//! - [`api`] - Upload and registration requests to the mediadrop server

pub mod api;

pub use api::*;
