//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert DTOs into domain
//! parameters, call the service layer and turn the results back into DTOs.

pub mod auth;
pub mod mission;
pub mod user;
