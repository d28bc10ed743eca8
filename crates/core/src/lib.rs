//! Domain types and pure logic for the form wizard backend.
//!
//! Nothing in this crate performs I/O. The database and HTTP crates build
//! on the types defined here.

pub mod error;
pub mod extraction;
pub mod mapping;
pub mod submission;
pub mod types;
