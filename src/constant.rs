/// Maximum encoded length of a 64-bit LEB128 integer
pub const MAX_LEB128_LEN: usize = 10;

/// Deepest `Nullable`/`Array` nesting accepted in a type name
pub const MAX_TYPE_DEPTH: usize = 64;

/// `Nullable(T)` marker byte preceding a NULL value
pub const NULL_MARKER: u8 = 1;

/// `Nullable(T)` marker byte preceding a present value
pub const NOT_NULL_MARKER: u8 = 0;

/// ClickHouse type names understood by the default registry
pub mod type_name {
    pub const UINT8: &str = "UInt8";
    pub const UINT16: &str = "UInt16";
    pub const UINT32: &str = "UInt32";
    pub const UINT64: &str = "UInt64";
    pub const INT8: &str = "Int8";
    pub const INT16: &str = "Int16";
    pub const INT32: &str = "Int32";
    pub const INT64: &str = "Int64";
    pub const FLOAT32: &str = "Float32";
    pub const FLOAT64: &str = "Float64";
    pub const BOOL: &str = "Bool";
    pub const STRING: &str = "String";
    pub const DATE: &str = "Date";
    pub const DATETIME: &str = "DateTime";
    pub const UUID: &str = "UUID";

    // parametric
    pub const FIXED_STRING: &str = "FixedString";
    pub const NULLABLE: &str = "Nullable";
    pub const ARRAY: &str = "Array";
}
