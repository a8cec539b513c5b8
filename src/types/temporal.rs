use crate::constant::type_name;
use crate::error::Result;
use crate::protocol::primitive::*;
use crate::protocol::{ByteCursor, TypeHandle};
use crate::types::{int_from_value, mismatch};
use crate::value::Value;

/// `Date` - u16 days since 1970-01-01
#[derive(Debug, Clone, Copy, Default)]
pub struct Date;

impl TypeHandle for Date {
    fn name(&self) -> &str {
        type_name::DATE
    }

    fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
        Ok(Value::Date(cursor.read_u16()?))
    }

    fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        let days = match value {
            Value::Date(days) => *days,
            Value::Int(_) | Value::UInt(_) => int_from_value(type_name::DATE, value)?,
            other => return Err(mismatch(type_name::DATE, other)),
        };
        write_int_2(out, days);
        Ok(())
    }
}

/// `DateTime` / `DateTime('tz')` - u32 seconds since the Unix epoch
///
/// The timezone only affects how the server renders the value; the wire format is
/// always UTC seconds.
#[derive(Debug, Clone)]
pub struct DateTime {
    name: String,
    timezone: Option<String>,
}

impl DateTime {
    pub fn new(timezone: Option<String>) -> Self {
        let name = match &timezone {
            Some(tz) => format!("{}('{}')", type_name::DATETIME, tz),
            None => type_name::DATETIME.to_string(),
        };
        Self { name, timezone }
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TypeHandle for DateTime {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value> {
        Ok(Value::DateTime(cursor.read_u32()?))
    }

    fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        let secs = match value {
            Value::DateTime(secs) => *secs,
            Value::Int(_) | Value::UInt(_) => int_from_value(&self.name, value)?,
            other => return Err(mismatch(&self.name, other)),
        };
        write_int_4(out, secs);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_date() {
        // 2024-12-25 is day 20082
        let mut out = Vec::new();
        Date.write_row_binary(&Value::Date(20082), &mut out).unwrap();
        assert_eq!(out, 20082_u16.to_le_bytes());

        let mut cursor = ByteCursor::new(&out);
        assert_eq!(Date.read_row_binary(&mut cursor).unwrap(), Value::Date(20082));

        let err = Date
            .write_row_binary(&Value::Int(70_000), &mut out)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }

    #[test]
    fn test_datetime_with_timezone() {
        let handle = DateTime::new(Some("Europe/Berlin".to_string()));
        assert_eq!(handle.name(), "DateTime('Europe/Berlin')");
        assert_eq!(handle.timezone(), Some("Europe/Berlin"));
        assert_eq!(DateTime::default().name(), "DateTime");

        let mut out = Vec::new();
        handle
            .write_row_binary(&Value::UInt(1_700_000_000), &mut out)
            .unwrap();
        let mut cursor = ByteCursor::new(&out);
        assert_eq!(
            handle.read_row_binary(&mut cursor).unwrap(),
            Value::DateTime(1_700_000_000)
        );
    }

    #[test]
    fn test_datetime_rejects_strings() {
        let mut out = Vec::new();
        let err = DateTime::default()
            .write_row_binary(&Value::from("2024-01-01"), &mut out)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }
}
