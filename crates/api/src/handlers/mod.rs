//! Request handlers for albums and their stickers.
//!
//! Mutating handlers own an explicit transaction: every step runs on it,
//! `commit()` is the last fallible call, and any early `?` return drops the
//! transaction, which rolls it back.

pub mod album;
pub mod sticker;

/// Entity name used in not-found errors (`"album not found"`).
pub(crate) const ALBUM: &str = "album";
