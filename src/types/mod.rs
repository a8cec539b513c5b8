//! Built-in ClickHouse column types and their RowBinary layouts.

mod container;
mod number;
mod string;
mod temporal;
mod uuid;

pub use container::{Array, Nullable};
pub use number::{
    Bool, Float32, Float64, Int8, Int16, Int32, Int64, UInt8, UInt16, UInt32, UInt64,
};
pub use string::{FixedString, StringType};
pub use temporal::{Date, DateTime};
pub use self::uuid::Uuid;

use std::fmt::Display;

use crate::error::{Error, Result};
use crate::value::Value;

/// Convert an integer-like value to `T`, rejecting values that do not fit
pub(crate) fn int_from_value<T>(type_name: &str, value: &Value) -> Result<T>
where
    T: TryFrom<i64> + TryFrom<u64>,
    <T as TryFrom<i64>>::Error: Display,
    <T as TryFrom<u64>>::Error: Display,
{
    match value {
        Value::Int(v) => <T as TryFrom<i64>>::try_from(*v)
            .map_err(|e| Error::invalid_value(type_name, format!("{v}: {e}"))),
        Value::UInt(v) => <T as TryFrom<u64>>::try_from(*v)
            .map_err(|e| Error::invalid_value(type_name, format!("{v}: {e}"))),
        Value::Bool(b) => <T as TryFrom<u64>>::try_from(u64::from(*b))
            .map_err(|e| Error::invalid_value(type_name, format!("{b}: {e}"))),
        other => Err(mismatch(type_name, other)),
    }
}

pub(crate) fn mismatch(type_name: &str, value: &Value) -> Error {
    Error::invalid_value(type_name, format!("cannot encode {} value", value.kind()))
}
