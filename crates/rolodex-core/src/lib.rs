//! Core types for the Rolodex contact directory.
//!
//! This crate is pure and synchronous. It knows nothing about files or
//! terminals; persistence lives in `rolodex-store` and the command loop in
//! `rolodex-cli`.

pub mod birthdays;
pub mod directory;
pub mod error;
pub mod field;
pub mod record;

pub use birthdays::{Congratulation, DEFAULT_HORIZON_DAYS};
pub use directory::{Directory, Upsert};
pub use error::{Error, Result};
pub use field::{Birthday, Name, Phone};
pub use record::ContactRecord;
