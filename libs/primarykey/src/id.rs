//! The [`Id`] type.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::{short, IdError};

/// Number of bytes in an [`Id`].
pub const ID_LEN: usize = 16;

/// A 128-bit primary key, byte-for-byte a UUID.
///
/// `Display`, `FromStr` and serde all use the short form
/// (`QJQQv92onGb5t9gCsNLDgT`). The long form
/// (`7d444840-9dc0-11d1-b245-5ffdce74fad2`) is available through
/// [`Id::uuid`] and [`Id::to_uuid_string`], and is what gets stored in
/// databases.
///
/// Every 16-byte pattern is a valid ID. Ordering is byte-lexicographic.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Id([u8; ID_LEN]);

impl Id {
    /// The all-zero ID.
    pub const EMPTY: Self = Self([0; ID_LEN]);

    /// Creates a new random (version 4) ID.
    #[must_use]
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Returns the all-zero ID. It is valid, but carries no entropy.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Returns true if every byte is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Creates an ID from a fixed-size byte array.
    #[must_use]
    pub const fn from_array(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Creates an ID from a byte slice, which must be exactly 16 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IdError> {
        let array: [u8; ID_LEN] = bytes.try_into().map_err(|_| IdError::InvalidLength {
            expected: ID_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(array))
    }

    /// Creates an ID from a UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.into_bytes())
    }

    /// Creates an ID from its big-endian integer value.
    #[must_use]
    pub const fn from_u128(n: u128) -> Self {
        Self(n.to_be_bytes())
    }

    /// Returns the ID as a big-endian integer.
    #[must_use]
    pub const fn to_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Consumes the ID, returning the raw bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; ID_LEN] {
        self.0
    }

    /// Returns the "long" UUID for interop with anything that expects one.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        Uuid::from_bytes(self.0)
    }

    /// Formats the ID as a canonical lowercase hyphenated UUID string.
    #[must_use]
    pub fn to_uuid_string(&self) -> String {
        self.uuid().hyphenated().to_string()
    }

    /// Parses an ID from its long (UUID) form.
    ///
    /// Besides the hyphenated form this accepts the other textual UUID
    /// forms: simple (32 hex digits), braced and `urn:uuid:`.
    pub fn parse_uuid(s: &str) -> Result<Self, IdError> {
        Uuid::parse_str(s)
            .map(Self::from_uuid)
            .map_err(|e| IdError::InvalidUuid(e.to_string()))
    }

    /// Formats the ID in its short form.
    #[must_use]
    pub fn encode(&self) -> String {
        short::encode(self)
    }

    /// Parses an ID from its short form.
    pub fn decode(s: &str) -> Result<Self, IdError> {
        short::decode(s)
    }

    /// Parses an ID from its short form, panicking if it is invalid.
    ///
    /// See [`must_decode`](crate::must_decode).
    #[must_use]
    #[track_caller]
    pub fn must_decode(s: &str) -> Self {
        short::must_decode(s)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.encode()).finish()
    }
}

impl FromStr for Id {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl From<Uuid> for Id {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl From<Id> for Uuid {
    fn from(id: Id) -> Self {
        id.uuid()
    }
}

impl From<[u8; ID_LEN]> for Id {
    fn from(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Id> for [u8; ID_LEN] {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl TryFrom<&[u8]> for Id {
    type Error = IdError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl serde::Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> serde::Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::decode(&s).map_err(serde::de::Error::custom)
    }
}
