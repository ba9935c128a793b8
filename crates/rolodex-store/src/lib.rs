//! File-backed persistence for the Rolodex directory.
//!
//! The whole [`Directory`](rolodex_core::Directory) is written as one JSON
//! snapshot and read back whole. Loading never fails: a missing or unreadable
//! snapshot yields an empty directory.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{load, save};
