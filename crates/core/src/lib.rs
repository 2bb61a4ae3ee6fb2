//! Domain rules for sticker albums.
//!
//! Everything here is pure logic with no database or HTTP dependencies:
//! error taxonomy, shared types, scope names, payload validation helpers and
//! the album ownership check.

pub mod error;
pub mod ownership;
pub mod scopes;
pub mod types;
pub mod validation;
