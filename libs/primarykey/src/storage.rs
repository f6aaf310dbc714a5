//! Driver-neutral persistence adapter.
//!
//! Database drivers surface UUID columns in different shapes: some hand
//! back the textual UUID, some the raw 16 bytes, and nullable columns may
//! hold nothing at all. [`StorageValue`] models those shapes and
//! [`Id::scan`] / [`Id::to_storage_value`] implement the read/write
//! contract on top of them.

use std::borrow::Cow;

use crate::{Id, IdError, ID_LEN};

/// A value as handed over by (or to) a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue<'a> {
    /// SQL `NULL`.
    Null,
    /// A textual value.
    Text(Cow<'a, str>),
    /// A raw byte buffer.
    Bytes(Cow<'a, [u8]>),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
}

impl StorageValue<'_> {
    /// Short name of the value's shape, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            StorageValue::Null => "null",
            StorageValue::Text(_) => "text",
            StorageValue::Bytes(_) => "bytes",
            StorageValue::Int(_) => "int",
            StorageValue::Float(_) => "float",
            StorageValue::Bool(_) => "bool",
        }
    }
}

impl<'a> From<&'a str> for StorageValue<'a> {
    fn from(s: &'a str) -> Self {
        StorageValue::Text(Cow::Borrowed(s))
    }
}

impl From<String> for StorageValue<'static> {
    fn from(s: String) -> Self {
        StorageValue::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a [u8]> for StorageValue<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        StorageValue::Bytes(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for StorageValue<'static> {
    fn from(bytes: Vec<u8>) -> Self {
        StorageValue::Bytes(Cow::Owned(bytes))
    }
}

impl From<i64> for StorageValue<'static> {
    fn from(n: i64) -> Self {
        StorageValue::Int(n)
    }
}

impl From<f64> for StorageValue<'static> {
    fn from(n: f64) -> Self {
        StorageValue::Float(n)
    }
}

impl From<bool> for StorageValue<'static> {
    fn from(b: bool) -> Self {
        StorageValue::Bool(b)
    }
}

impl<'a, T> From<Option<T>> for StorageValue<'a>
where
    T: Into<StorageValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(StorageValue::Null, Into::into)
    }
}

impl From<Id> for StorageValue<'static> {
    fn from(id: Id) -> Self {
        id.to_storage_value()
    }
}

impl Id {
    /// Returns the value to hand to a database driver: the long (UUID) form
    /// as text, which every backend can store.
    ///
    /// Backends with a native 16-byte column type can use
    /// [`Id::as_bytes`] instead.
    #[must_use]
    pub fn to_storage_value(&self) -> StorageValue<'static> {
        StorageValue::Text(Cow::Owned(self.to_uuid_string()))
    }

    /// Reads an ID out of a driver value.
    ///
    /// Text is parsed as a UUID string. A 16-byte buffer holds the raw ID;
    /// any other buffer is UUID text, as drivers return `CHAR(36)` columns
    /// as bytes. `NULL`, an empty string and an empty buffer all yield
    /// `Ok(None)`. Any other shape is rejected with
    /// [`IdError::UnsupportedSourceType`].
    pub fn from_storage_value(value: StorageValue<'_>) -> Result<Option<Self>, IdError> {
        match value {
            StorageValue::Null => Ok(None),
            StorageValue::Text(text) if text.is_empty() => Ok(None),
            StorageValue::Bytes(bytes) if bytes.is_empty() => Ok(None),
            StorageValue::Text(text) => Self::parse_uuid(&text).map(Some),
            StorageValue::Bytes(bytes) if bytes.len() == ID_LEN => {
                Self::from_bytes(&bytes).map(Some)
            }
            StorageValue::Bytes(bytes) => match std::str::from_utf8(&bytes) {
                Ok(text) => Self::parse_uuid(text).map(Some),
                Err(_) => Err(IdError::InvalidLength {
                    expected: ID_LEN,
                    actual: bytes.len(),
                }),
            },
            other => Err(IdError::UnsupportedSourceType(other.kind().to_string())),
        }
    }

    /// Scans a driver value into `self`.
    ///
    /// A `NULL` value succeeds and leaves `self` untouched, as does any
    /// error.
    pub fn scan(&mut self, value: StorageValue<'_>) -> Result<(), IdError> {
        if let Some(id) = Self::from_storage_value(value)? {
            *self = id;
        }
        Ok(())
    }
}
