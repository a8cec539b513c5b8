/// A single decoded RowBinary value
///
/// Type handles produce and consume these; the variant is chosen by the column type,
/// not by the bytes on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL of a `Nullable(T)` column
    Null,
    Bool(bool),
    /// Int8, Int16, Int32, Int64 (and UInt64 in signed mode)
    Int(i64),
    /// UInt8, UInt16, UInt32, UInt64
    UInt(u64),
    Float32(f32),
    Float64(f64),
    /// String with valid UTF-8, or decoded FixedString
    String(String),
    /// String with invalid UTF-8, or raw FixedString
    Bytes(Vec<u8>),
    /// Date - days since 1970-01-01
    Date(u16),
    /// DateTime - seconds since 1970-01-01 00:00:00 UTC
    DateTime(u32),
    Uuid(uuid::Uuid),
    Array(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short variant name for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::UInt(_) => "UInt",
            Value::Float32(_) => "Float32",
            Value::Float64(_) => "Float64",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Date(_) => "Date",
            Value::DateTime(_) => "DateTime",
            Value::Uuid(_) => "Uuid",
            Value::Array(_) => "Array",
        }
    }

    /// Bytes of a `String` or `Bytes` value
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s.as_bytes()),
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_from_for_value {
    ($($native:ty => $variant:ident as $wide:ty),+ $(,)?) => {
        $(
            impl From<$native> for Value {
                fn from(v: $native) -> Self {
                    Value::$variant(<$wide>::from(v))
                }
            }
        )+
    };
}

impl_from_for_value!(
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    u8 => UInt as u64,
    u16 => UInt as u64,
    u32 => UInt as u64,
);

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInt(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<uuid::Uuid> for Value {
    fn from(value: uuid::Uuid) -> Self {
        Value::Uuid(value)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
