//! # primarykey
//!
//! A compact, type-safe primary key: 16 bytes that are a UUID underneath,
//! with a short URL-safe text form.
//!
//! ## Representations
//!
//! Every [`Id`] has three interchangeable representations:
//!
//! - raw bytes: `[u8; 16]`
//! - long form: `7d444840-9dc0-11d1-b245-5ffdce74fad2` (canonical UUID text)
//! - short form: `QJQQv92onGb5t9gCsNLDgT` (base 57, at most 22 characters)
//!
//! The short form is what users see: `Display`, `FromStr` and serde all use
//! it. The long form is for systems that expect UUID text, and is what gets
//! written to databases.
//!
//! ## Storage
//!
//! [`Id::scan`] and [`Id::to_storage_value`] implement the driver-neutral
//! read/write contract over [`StorageValue`]. With the `postgres` feature
//! (on by default) `Id` also implements the `sqlx` `Type`, `Encode` and
//! `Decode` traits and can be bound and fetched like a `Uuid`.
//!
//! ## Example
//!
//! ```
//! use primarykey::Id;
//!
//! let id = Id::parse_uuid("7d444840-9dc0-11d1-b245-5ffdce74fad2").unwrap();
//! assert_eq!(id.to_string(), "QJQQv92onGb5t9gCsNLDgT");
//! assert_eq!("QJQQv92onGb5t9gCsNLDgT".parse::<Id>().unwrap(), id);
//! ```

mod error;
mod id;
#[cfg(feature = "postgres")]
mod postgres;
mod short;
mod storage;

pub use error::IdError;
pub use id::{Id, ID_LEN};
pub use short::{ALPHABET, MAX_LEN};
pub use storage::StorageValue;

/// Re-export uuid for consumers that need the long form as a `Uuid`.
pub use uuid::Uuid;

/// Generates a new random ID.
#[must_use]
pub fn new() -> Id {
    Id::new()
}

/// Encodes an ID as its short form. Same as `id.to_string()`.
#[must_use]
pub fn encode(id: Id) -> String {
    short::encode(&id)
}

/// Decodes a short-form string into an ID.
pub fn decode(s: &str) -> Result<Id, IdError> {
    short::decode(s)
}

/// Decodes a short-form string into an ID, panicking if it is invalid.
///
/// For IDs that are known to be valid, such as literals in source code.
///
/// ```
/// const ROOT: &str = "QJQQv92onGb5t9gCsNLDgT";
/// let root = primarykey::must_decode(ROOT);
/// assert_eq!(root.to_uuid_string(), "7d444840-9dc0-11d1-b245-5ffdce74fad2");
/// ```
///
/// # Panics
///
/// Panics if `s` is not a valid short-form ID.
#[must_use]
#[track_caller]
pub fn must_decode(s: &str) -> Id {
    short::must_decode(s)
}
