//! Route-level access policy.
//!
//! A pure mapping from `(method, path)` to the access a request needs. It is
//! evaluated once per request by
//! [`enforce_access_policy`](crate::middleware::access::enforce_access_policy)
//! before any handler runs. Album ownership is checked separately, inside the
//! handlers, once the album has been loaded.

use albums_core::scopes::{SCOPE_ALBUMS_READ, SCOPE_ALBUMS_WRITE};

/// Prefix under which all versioned API routes are mounted.
pub const API_PREFIX: &str = "/api/v1";

/// What a request must present to reach its handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No token needed.
    Public,
    /// Any valid token.
    Authenticated,
    /// A valid token granting this scope.
    Scope(&'static str),
}

/// Resolve the access requirement for a request.
///
/// | Method | Path                                  | Access                 |
/// |--------|---------------------------------------|------------------------|
/// | any    | `/health`                             | public                 |
/// | POST   | `/api/v1/albums`                      | `albums:write`         |
/// | POST   | `/api/v1/albums/{id}/.../stickers`    | `albums:write`         |
/// | GET    | `/api/v1/albums[/...]`                | `albums:read`          |
/// | any    | anything else                         | authenticated          |
pub fn required_access(method: &str, path: &str) -> Access {
    if path == "/health" {
        return Access::Public;
    }

    let Some(rest) = path.strip_prefix(API_PREFIX) else {
        return Access::Authenticated;
    };
    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

    match (method, segments.as_slice()) {
        ("POST", ["albums"]) => Access::Scope(SCOPE_ALBUMS_WRITE),
        ("POST", ["albums", _, .., "stickers"]) => Access::Scope(SCOPE_ALBUMS_WRITE),
        ("GET", ["albums", ..]) => Access::Scope(SCOPE_ALBUMS_READ),
        _ => Access::Authenticated,
    }
}
