//! Domain types and pure business rules for the airport operations service.
//!
//! Nothing in this crate touches the database or HTTP. Repositories and
//! handlers call into these functions so the rules can be unit-tested in
//! isolation.

pub mod checkin;
pub mod crew;
pub mod delete_guard;
pub mod error;
pub mod flight;
pub mod incident;
pub mod maintenance;
pub mod pagination;
pub mod roles;
pub mod types;
pub mod validation;
