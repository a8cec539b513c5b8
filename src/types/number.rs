use crate::constant::type_name;
use crate::error::{Error, Result};
use crate::opts::UInt64Handling;
use crate::protocol::ByteCursor;
use crate::protocol::TypeHandle;
use crate::protocol::primitive::*;
use crate::types::{int_from_value, mismatch};
use crate::value::Value;

// ============================================================================
// Integers up to 32 bits
// ============================================================================

macro_rules! impl_unsigned_type {
    ($ty:ident, $name:expr, $native:ty, $read:ident) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $ty;

        impl TypeHandle for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
                Ok(Value::UInt(u64::from(cursor.$read()?)))
            }

            fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
                let v: $native = int_from_value($name, value)?;
                out.extend_from_slice(&v.to_le_bytes());
                Ok(())
            }
        }
    };
}

macro_rules! impl_signed_type {
    ($ty:ident, $name:expr, $native:ty, $read:ident) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $ty;

        impl TypeHandle for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
                Ok(Value::Int(i64::from(cursor.$read()? as $native)))
            }

            fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
                let v: $native = int_from_value($name, value)?;
                out.extend_from_slice(&v.to_le_bytes());
                Ok(())
            }
        }
    };
}

impl_unsigned_type!(UInt8, type_name::UINT8, u8, read_u8);
impl_unsigned_type!(UInt16, type_name::UINT16, u16, read_u16);
impl_unsigned_type!(UInt32, type_name::UINT32, u32, read_u32);
impl_signed_type!(Int8, type_name::INT8, i8, read_u8);
impl_signed_type!(Int16, type_name::INT16, i16, read_u16);
impl_signed_type!(Int32, type_name::INT32, i32, read_u32);

// ============================================================================
// 64-bit integers
// ============================================================================

/// `UInt64`, optionally surfaced as `Value::Int` for consumers without unsigned 64-bit
/// support
#[derive(Debug, Clone, Copy, Default)]
pub struct UInt64 {
    handling: UInt64Handling,
}

impl UInt64 {
    pub fn new(handling: UInt64Handling) -> Self {
        Self { handling }
    }
}

impl TypeHandle for UInt64 {
    fn name(&self) -> &str {
        type_name::UINT64
    }

    fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
        let raw = cursor.read_u64()?;
        Ok(match self.handling {
            UInt64Handling::Unsigned => Value::UInt(raw),
            UInt64Handling::Signed => Value::Int(raw as i64),
        })
    }

    fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        let raw = match (self.handling, value) {
            // bit pattern written back as read
            (UInt64Handling::Signed, Value::Int(v)) => *v as u64,
            _ => int_from_value::<u64>(type_name::UINT64, value)?,
        };
        write_int_8(out, raw);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Int64;

impl TypeHandle for Int64 {
    fn name(&self) -> &str {
        type_name::INT64
    }

    fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
        Ok(Value::Int(cursor.read_u64()? as i64))
    }

    fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        let v: i64 = int_from_value(type_name::INT64, value)?;
        out.extend_from_slice(&v.to_le_bytes());
        Ok(())
    }
}

// ============================================================================
// Floating point
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct Float32;

impl TypeHandle for Float32 {
    fn name(&self) -> &str {
        type_name::FLOAT32
    }

    fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
        Ok(Value::Float32(f32::from_bits(cursor.read_u32()?)))
    }

    fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        let v = match value {
            Value::Float32(v) => *v,
            Value::Float64(v) => *v as f32,
            Value::Int(v) => *v as f32,
            Value::UInt(v) => *v as f32,
            other => return Err(mismatch(type_name::FLOAT32, other)),
        };
        write_int_4(out, v.to_bits());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Float64;

impl TypeHandle for Float64 {
    fn name(&self) -> &str {
        type_name::FLOAT64
    }

    fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
        Ok(Value::Float64(f64::from_bits(cursor.read_u64()?)))
    }

    fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        let v = match value {
            Value::Float64(v) => *v,
            Value::Float32(v) => f64::from(*v),
            Value::Int(v) => *v as f64,
            Value::UInt(v) => *v as f64,
            other => return Err(mismatch(type_name::FLOAT64, other)),
        };
        write_int_8(out, v.to_bits());
        Ok(())
    }
}

// ============================================================================
// Bool
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct Bool;

impl TypeHandle for Bool {
    fn name(&self) -> &str {
        type_name::BOOL
    }

    fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
        Ok(Value::Bool(cursor.read_u8()? != 0))
    }

    fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        let v = match value {
            Value::Bool(b) => *b,
            Value::Int(0) | Value::UInt(0) => false,
            Value::Int(1) | Value::UInt(1) => true,
            Value::Int(_) | Value::UInt(_) => {
                return Err(Error::invalid_value(type_name::BOOL, "expected 0 or 1"));
            }
            other => return Err(mismatch(type_name::BOOL, other)),
        };
        write_int_1(out, u8::from(v));
        Ok(())
    }
}
