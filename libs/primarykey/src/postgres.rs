//! `sqlx` integration for Postgres.
//!
//! IDs are bound as native `UUID` parameters. When reading, `UUID`, text and
//! `BYTEA` columns are all accepted; the column value is turned into a
//! [`StorageValue`] and goes through [`Id::from_storage_value`], so the
//! rules are the same as for any other driver.

use std::borrow::Cow;

use sqlx::encode::IsNull;
use sqlx::error::{BoxDynError, UnexpectedNullError};
use sqlx::postgres::{
    PgArgumentBuffer, PgHasArrayType, PgTypeInfo, PgValueFormat, PgValueRef, Postgres,
};
use sqlx::{Decode, Encode, Type, TypeInfo, ValueRef};
use uuid::Uuid;

use crate::{Id, IdError, StorageValue};

impl Type<Postgres> for Id {
    fn type_info() -> PgTypeInfo {
        <Uuid as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <Uuid as Type<Postgres>>::compatible(ty)
            || <str as Type<Postgres>>::compatible(ty)
            || <[u8] as Type<Postgres>>::compatible(ty)
    }
}

impl PgHasArrayType for Id {
    fn array_type_info() -> PgTypeInfo {
        <Uuid as PgHasArrayType>::array_type_info()
    }
}

impl<'q> Encode<'q, Postgres> for Id {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <Uuid as Encode<'q, Postgres>>::encode_by_ref(&self.uuid(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for Id {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let type_name = value.type_info().name().to_owned();
        let result = storage_value(&value, &type_name)
            .and_then(|stored| Id::from_storage_value(stored).map_err(BoxDynError::from));

        match result {
            Ok(Some(id)) => Ok(id),
            Ok(None) => Err(UnexpectedNullError.into()),
            Err(err) => {
                tracing::trace!(column_type = %type_name, error = %err, "rejected ID column value");
                Err(err)
            }
        }
    }
}

/// Maps a Postgres column value onto the driver-neutral value shapes.
fn storage_value<'r>(
    value: &PgValueRef<'r>,
    type_name: &str,
) -> Result<StorageValue<'r>, BoxDynError> {
    if value.is_null() {
        return Ok(StorageValue::Null);
    }

    match (type_name, value.format()) {
        ("UUID", PgValueFormat::Binary) | ("BYTEA", PgValueFormat::Binary) => {
            Ok(StorageValue::Bytes(Cow::Borrowed(value.as_bytes()?)))
        }
        ("BYTEA", PgValueFormat::Text) => {
            // Text-format bytea is hex with a `\x` prefix.
            let text = value.as_str()?;
            let hex_digits = text
                .strip_prefix("\\x")
                .ok_or_else(|| IdError::UnsupportedSourceType("escaped BYTEA".to_string()))?;
            Ok(StorageValue::Bytes(Cow::Owned(hex::decode(hex_digits)?)))
        }
        (
            "UUID" | "TEXT" | "VARCHAR" | "CHAR" | "BPCHAR" | "NAME" | "CITEXT" | "UNKNOWN",
            _,
        ) => {
            Ok(StorageValue::Text(Cow::Borrowed(value.as_str()?)))
        }
        _ => Err(IdError::UnsupportedSourceType(type_name.to_string()).into()),
    }
}
