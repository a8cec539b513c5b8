//! Typed extraction of decoded rows.
//!
//! [`FromValue`] converts a single [`Value`] into a Rust type and [`FromRow`] converts a
//! whole row into a tuple, so callers can skip matching on `Value` variants.

use crate::error::{Error, Result};
use crate::value::Value;

/// Trait for types that can be converted from a decoded [`Value`].
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

fn bad_conversion<T>(value: &Value) -> Error {
    Error::BadUsageError(format!(
        "Cannot decode ClickHouse value {} to {}",
        value.kind(),
        std::any::type_name::<T>()
    ))
}

macro_rules! impl_from_value_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: &Value) -> Result<Self> {
                    let converted = match value {
                        Value::Int(v) => <$ty>::try_from(*v).ok(),
                        Value::UInt(v) => <$ty>::try_from(*v).ok(),
                        _ => None,
                    };
                    converted.ok_or_else(|| bad_conversion::<$ty>(value))
                }
            }
        )+
    };
}

impl_from_value_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(bad_conversion::<Self>(value)),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Float32(v) => Ok(*v),
            _ => Err(bad_conversion::<Self>(value)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Float64(v) => Ok(*v),
            Value::Float32(v) => Ok(f64::from(*v)),
            _ => Err(bad_conversion::<Self>(value)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            _ => Err(bad_conversion::<Self>(value)),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: &Value) -> Result<Self> {
        value
            .as_bytes()
            .map(<[u8]>::to_vec)
            .ok_or_else(|| bad_conversion::<Self>(value))
    }
}

impl FromValue for uuid::Uuid {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Uuid(u) => Ok(*u),
            _ => Err(bad_conversion::<Self>(value)),
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            _ => T::from_value(value).map(Some),
        }
    }
}

/// Trait for types that can be decoded from a whole row.
pub trait FromRow: Sized {
    fn from_row(row: &[Value]) -> Result<Self>;
}

// ============================================================================
// FromRow implementations for tuples
// ============================================================================

macro_rules! count {
    () => { 0_usize };
    ($head:tt $($tail:tt)*) => { 1_usize + count!($($tail)*) };
}

macro_rules! impl_from_row_tuple {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T: FromValue),+> FromRow for ($($T,)+) {
            fn from_row(row: &[Value]) -> Result<Self> {
                let expected = count!($($T)+);
                if row.len() != expected {
                    return Err(Error::BadUsageError(format!(
                        "Cannot decode a row of {} columns into a tuple of {}",
                        row.len(),
                        expected
                    )));
                }
                Ok(($($T::from_value(&row[$idx])?,)+))
            }
        }
    };
}

impl_from_row_tuple!(0: A);
impl_from_row_tuple!(0: A, 1: B);
impl_from_row_tuple!(0: A, 1: B, 2: C);
impl_from_row_tuple!(0: A, 1: B, 2: C, 3: D);
impl_from_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E);
impl_from_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F);
impl_from_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G);
impl_from_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H);
impl_from_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I);
impl_from_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J);
impl_from_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J, 10: K);
impl_from_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J, 10: K, 11: L);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_integers() {
        assert_eq!(u8::from_value(&Value::UInt(200)).unwrap(), 200);
        assert_eq!(i64::from_value(&Value::UInt(5)).unwrap(), 5);
        assert_eq!(i16::from_value(&Value::Int(-3)).unwrap(), -3);
        assert!(matches!(
            u8::from_value(&Value::UInt(300)),
            Err(Error::BadUsageError(_))
        ));
        assert!(matches!(
            u32::from_value(&Value::Int(-1)),
            Err(Error::BadUsageError(_))
        ));
        assert!(u64::from_value(&Value::from("1")).is_err());
    }

    #[test]
    fn test_from_value_option() {
        assert_eq!(Option::<u32>::from_value(&Value::Null).unwrap(), None);
        assert_eq!(Option::<u32>::from_value(&Value::UInt(1)).unwrap(), Some(1));
        assert!(u32::from_value(&Value::Null).is_err());
    }

    #[test]
    fn test_from_value_strings() {
        assert_eq!(String::from_value(&Value::from("x")).unwrap(), "x");
        assert_eq!(
            Vec::<u8>::from_value(&Value::Bytes(vec![1, 2])).unwrap(),
            vec![1, 2]
        );
        assert_eq!(Vec::<u8>::from_value(&Value::from("ab")).unwrap(), b"ab");
        assert!(String::from_value(&Value::Bytes(vec![0xFF])).is_err());
    }

    #[test]
    fn test_from_row_tuple() {
        let row = vec![Value::UInt(1), Value::from("a"), Value::Null];
        let (id, name, note): (u64, String, Option<String>) = FromRow::from_row(&row).unwrap();
        assert_eq!(id, 1);
        assert_eq!(name, "a");
        assert_eq!(note, None);
    }

    #[test]
    fn test_from_row_arity_mismatch() {
        let row = vec![Value::UInt(1), Value::UInt(2)];
        let result = <(u64,)>::from_row(&row);
        assert!(matches!(result, Err(Error::BadUsageError(_))));
    }
}
