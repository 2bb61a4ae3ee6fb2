//! Authentication and authorization primitives.
//!
//! - [`jwt`] -- JWT access-token verification (and minting for tests).
//! - [`policy`] -- route-level access policy: which scope each endpoint needs.

pub mod jwt;
pub mod policy;
