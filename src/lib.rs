//! A ClickHouse RowBinary codec.
//!
//! Decodes `RowBinaryWithNamesAndTypes` responses into rows of [`Value`]s and encodes
//! rows back into the RowBinary insert payload. Column types are resolved by name
//! through a [`TypeResolver`]; [`Registry`] provides the built-in ClickHouse types.
//!
//! ```ignore
//! let registry = Registry::default();
//! let result_set = decode_result(&response_bytes, &registry)?;
//! let payload = encode_rows(result_set.rows(), &result_set.column_types().collect::<Vec<_>>())?;
//! ```

pub mod col;
pub mod constant;
pub mod error;
pub mod generic;
pub mod handler;
mod opts;
pub mod protocol;
pub mod registry;
pub mod resultset;
pub mod row;
pub mod types;
pub mod value;

pub use col::ColumnDescriptor;
pub use error::{Error, Result};
pub use generic::GenericType;
pub use opts::{FixedStringHandling, Opts, UInt64Handling};
pub use protocol::insert::{encode_rows, encode_rows_by_name, write_rows};
pub use protocol::response::{
    decode_header, decode_result, encode_header, read_rows, write_header,
};
pub use protocol::{ByteCursor, ResultSetHandler, TypeHandle, TypeResolver};
pub use registry::Registry;
pub use resultset::ResultSet;
pub use row::{FromRow, FromValue};
pub use value::Value;

#[cfg(test)]
mod value_test;
