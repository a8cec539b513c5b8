use simdutf8::basic::from_utf8;

use crate::constant::type_name;
use crate::error::{Error, Result};
use crate::opts::FixedStringHandling;
use crate::protocol::primitive::*;
use crate::protocol::{ByteCursor, TypeHandle};
use crate::types::mismatch;
use crate::value::Value;

/// `String` - LEB128 length followed by raw bytes
///
/// ClickHouse strings are arbitrary bytes. Valid UTF-8 decodes to `Value::String`,
/// anything else to `Value::Bytes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringType;

impl TypeHandle for StringType {
    fn name(&self) -> &str {
        type_name::STRING
    }

    fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
        let bytes = cursor.read_bytes()?;
        Ok(match from_utf8(bytes) {
            Ok(s) => Value::String(s.to_string()),
            Err(_) => Value::Bytes(bytes.to_vec()),
        })
    }

    fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        match value.as_bytes() {
            Some(bytes) => {
                write_leb128_bytes(out, bytes);
                Ok(())
            }
            None => Err(mismatch(type_name::STRING, value)),
        }
    }
}

/// `FixedString(N)` - exactly N bytes, zero padded on the right
#[derive(Debug, Clone)]
pub struct FixedString {
    name: String,
    len: usize,
    handling: FixedStringHandling,
}

impl FixedString {
    pub fn new(len: usize, handling: FixedStringHandling) -> Self {
        Self {
            name: format!("{}({})", type_name::FIXED_STRING, len),
            len,
            handling,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn trim_zero_padding(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}

impl TypeHandle for FixedString {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
        let bytes = cursor.read_fixed(self.len)?;
        match self.handling {
            FixedStringHandling::Bytes => Ok(Value::Bytes(bytes.to_vec())),
            FixedStringHandling::Utf8 => {
                Ok(Value::String(from_utf8(trim_zero_padding(bytes))?.to_string()))
            }
            FixedStringHandling::Utf8OrHex => match from_utf8(trim_zero_padding(bytes)) {
                Ok(s) => Ok(Value::String(s.to_string())),
                Err(_) => Ok(Value::String(hex::encode(bytes))),
            },
        }
    }

    fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        let bytes = value
            .as_bytes()
            .ok_or_else(|| mismatch(&self.name, value))?;
        if bytes.len() > self.len {
            return Err(Error::invalid_value(
                &self.name,
                format!("{} bytes do not fit", bytes.len()),
            ));
        }
        write_bytes_fix(out, bytes);
        out.resize(out.len() + self.len - bytes.len(), 0);
        Ok(())
    }
}
