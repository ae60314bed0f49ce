//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Applying mission progress rules and account checks
//! - **Orchestration**: Coordinating repository calls and the Kakao OAuth flow
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running each write as one all-or-nothing transaction

pub mod auth;
pub mod mission;
pub mod user;

#[cfg(test)]
mod test;
