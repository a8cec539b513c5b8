use std::sync::Arc;

use auto_impl::auto_impl;

use crate::col::ColumnDescriptor;
use crate::error::Result;
use crate::generic::GenericType;
use crate::protocol::ByteCursor;
use crate::value::Value;

/// Encoder/decoder for one ClickHouse column type
///
/// The row stream codec only calls through this trait and never inspects the concrete
/// type. Each implementation owns its wire layout.
#[auto_impl(&, Box, Arc)]
pub trait TypeHandle: Send + Sync + std::fmt::Debug {
    /// Canonical type name, e.g. `UInt8` or `Nullable(String)`
    fn name(&self) -> &str;

    /// Decode one value, advancing the cursor past it
    ///
    /// # Returns
    /// * `Ok(Value)` - the decoded value
    /// * `Err(Error::TruncatedBuffer)` - the value extends past the end of the buffer
    fn read_row_binary(&self, cursor: &mut ByteCursor<'_>) -> Result<Value>;

    /// Append the encoding of `value` to `out`
    ///
    /// Nothing is appended when an error is returned.
    fn write_row_binary(&self, value: &Value, out: &mut Vec<u8>) -> Result<()>;

    fn generic_type(&self) -> GenericType {
        GenericType::classify(self.name())
    }
}

/// Maps a type name from a response header to its handle
#[auto_impl(&, Box, Arc)]
pub trait TypeResolver {
    /// Fails with `Error::UnknownType` if the name is not known
    fn resolve(&self, type_name: &str) -> Result<Arc<dyn TypeHandle>>;
}

/// Callbacks for a decoded RowBinary response
pub trait ResultSetHandler {
    fn resultset_start(&mut self, cols: &[ColumnDescriptor]) -> Result<()>;
    fn row(&mut self, cols: &[ColumnDescriptor], row: Vec<Value>) -> Result<()>;
    fn resultset_end(&mut self, num_rows: usize) -> Result<()>;
}
