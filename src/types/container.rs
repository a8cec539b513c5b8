use std::sync::Arc;

use crate::constant::{NOT_NULL_MARKER, NULL_MARKER, type_name};
use crate::error::{Error, Result};
use crate::protocol::primitive::*;
use crate::protocol::{ByteCursor, TypeHandle};
use crate::types::mismatch;
use crate::value::Value;

/// `Nullable(T)` - one marker byte, followed by the `T` encoding unless NULL
#[derive(Debug, Clone)]
pub struct Nullable {
    name: String,
    inner: Arc<dyn TypeHandle>,
}

impl Nullable {
    pub fn new(inner: Arc<dyn TypeHandle>) -> Self {
        Self {
            name: format!("{}({})", type_name::NULLABLE, inner.name()),
            inner,
        }
    }

    pub fn inner(&self) -> &Arc<dyn TypeHandle> {
        &self.inner
    }
}

impl TypeHandle for Nullable {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
        match cursor.read_u8()? {
            NOT_NULL_MARKER => self.inner.read_row_binary(cursor),
            _ => Ok(Value::Null),
        }
    }

    fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        if value.is_null() {
            write_int_1(out, NULL_MARKER);
            return Ok(());
        }
        let start = out.len();
        write_int_1(out, NOT_NULL_MARKER);
        self.inner.write_row_binary(value, out).inspect_err(|_| {
            out.truncate(start);
        })
    }
}

/// `Array(T)` - LEB128 element count followed by each element's `T` encoding
#[derive(Debug, Clone)]
pub struct Array {
    name: String,
    inner: Arc<dyn TypeHandle>,
}

impl Array {
    pub fn new(inner: Arc<dyn TypeHandle>) -> Self {
        Self {
            name: format!("{}({})", type_name::ARRAY, inner.name()),
            inner,
        }
    }

    pub fn inner(&self) -> &Arc<dyn TypeHandle> {
        &self.inner
    }
}

impl TypeHandle for Array {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
        let len = cursor.read_leb128()?;
        let len = usize::try_from(len).map_err(|_overflow| Error::TruncatedBuffer {
            needed: usize::MAX,
            available: cursor.remaining().len(),
        })?;
        // the count comes off the wire; never reserve more than the buffer could hold
        let mut values = Vec::with_capacity(len.min(cursor.remaining().len()));
        for _ in 0..len {
            values.push(self.inner.read_row_binary(cursor)?);
        }
        Ok(Value::Array(values))
    }

    fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        let Value::Array(values) = value else {
            return Err(mismatch(&self.name, value));
        };
        let start = out.len();
        write_leb128(out, values.len() as u64);
        for v in values {
            if let Err(e) = self.inner.write_row_binary(v, out) {
                out.truncate(start);
                return Err(e);
            }
        }
        Ok(())
    }
}
