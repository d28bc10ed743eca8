//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Reads
//! take `&PgPool`; writes that the submission workflow runs inside a
//! transaction accept any `PgExecutor` so callers can pass `&mut *tx`.

pub mod draft_repo;
pub mod master_record_repo;

pub use draft_repo::DraftRepo;
pub use master_record_repo::MasterRecordRepo;
