//! Well-known OAuth2 scope constants.
//!
//! These must match the scopes granted by the identity provider's client
//! configuration for the albums API.

pub const SCOPE_ALBUMS_READ: &str = "albums:read";
pub const SCOPE_ALBUMS_WRITE: &str = "albums:write";

/// Split a space-delimited `scope` claim into individual scope names.
pub fn parse_scope_claim(claim: &str) -> Vec<String> {
    claim.split_whitespace().map(str::to_string).collect()
}
