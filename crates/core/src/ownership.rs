//! Resource-level authorization: only an album's owner may modify it.
//!
//! This runs after the scope gate has already admitted the request, and
//! after the album has been loaded (a missing album is a 404, never a 403).

use crate::error::CoreError;

/// Fixed reason returned when a caller tries to modify someone else's album.
pub const NOT_OWNER_MESSAGE: &str = "a user cannot modify another user's albums";

/// Fail with [`CoreError::Forbidden`] unless `actor` is the album `owner`.
///
/// Comparison is exact: usernames are case-sensitive identity strings taken
/// verbatim from the token's `preferred_username` claim.
pub fn ensure_owner(owner: &str, actor: &str) -> Result<(), CoreError> {
    if owner != actor {
        return Err(CoreError::Forbidden(NOT_OWNER_MESSAGE.to_string()));
    }
    Ok(())
}
