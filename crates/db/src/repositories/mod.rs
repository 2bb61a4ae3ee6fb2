//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Single-statement methods are generic over [`sqlx::PgExecutor`] so they run
//! on the pool or inside a caller-owned transaction; multi-statement methods
//! take `&mut PgConnection` (pass `&mut *tx` to stay in a transaction).

pub mod album_repo;
pub mod sticker_repo;

pub use album_repo::AlbumRepo;
pub use sticker_repo::StickerRepo;
