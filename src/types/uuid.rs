use crate::constant::type_name;
use crate::error::{Error, Result};
use crate::protocol::primitive::*;
use crate::protocol::{ByteCursor, TypeHandle};
use crate::types::mismatch;
use crate::value::Value;

/// `UUID` - two little-endian u64 halves, high half first
#[derive(Debug, Clone, Copy, Default)]
pub struct Uuid;

impl TypeHandle for Uuid {
    fn name(&self) -> &str {
        type_name::UUID
    }

    fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
        let high = cursor.read_u64()?;
        let low = cursor.read_u64()?;
        let bits = (u128::from(high) << 64) | u128::from(low);
        Ok(Value::Uuid(::uuid::Uuid::from_u128(bits)))
    }

    fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        let uuid = match value {
            Value::Uuid(u) => *u,
            Value::String(s) => ::uuid::Uuid::parse_str(s)
                .map_err(|e| Error::invalid_value(type_name::UUID, format!("'{s}': {e}")))?,
            other => return Err(mismatch(type_name::UUID, other)),
        };
        let bits = uuid.as_u128();
        write_int_8(out, (bits >> 64) as u64);
        write_int_8(out, bits as u64);
        Ok(())
    }
}
