//! Authentication and authorization middleware.
//!
//! - [`access::enforce_access_policy`] -- the route-level gate (401 / 403).
//! - [`auth::AuthUser`] -- extractor for the verified caller identity.

pub mod access;
pub mod auth;
