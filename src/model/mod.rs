//! Data transfer objects shared by the HTTP API and its OpenAPI document.

pub mod api;
pub mod mission;
pub mod user;
