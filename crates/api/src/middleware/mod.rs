//! Authentication and authorization.
//!
//! - [`gate`] -- per-request gate that resolves the [`auth::Principal`] and
//!   turns away unauthenticated or under-privileged requests.
//! - [`auth::Principal`] -- extractor for the resolved identity.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.

pub mod auth;
pub mod gate;
pub mod rbac;
