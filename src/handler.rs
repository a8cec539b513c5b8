use crate::col::ColumnDescriptor;
use crate::error::Result;
use crate::protocol::ResultSetHandler;
use crate::value::Value;

/// A handler that ignores all row data but counts rows
///
/// Useful for validating a response without keeping it.
#[derive(Default)]
pub struct DropHandler {
    num_columns: usize,
    num_rows: usize,
}

impl DropHandler {
    /// Number of columns in the last response
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Number of rows in the last response
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }
}

impl ResultSetHandler for DropHandler {
    fn resultset_start(&mut self, cols: &[ColumnDescriptor]) -> Result<()> {
        self.num_columns = cols.len();
        self.num_rows = 0;
        Ok(())
    }

    fn row(&mut self, _: &[ColumnDescriptor], _: Vec<Value>) -> Result<()> {
        self.num_rows += 1;
        Ok(())
    }

    fn resultset_end(&mut self, num_rows: usize) -> Result<()> {
        self.num_rows = num_rows;
        Ok(())
    }
}

/// A wrapper handler that forwards calls to an inner handler but stops after the first row
///
/// Later rows are still decoded, so a malformed tail still fails the call.
pub struct FirstRowHandler<'a, H> {
    pub inner: &'a mut H,
    pub found_row: bool,
}

impl<'a, H> FirstRowHandler<'a, H> {
    pub fn new(inner: &'a mut H) -> Self {
        Self {
            inner,
            found_row: false,
        }
    }
}

impl<'a, H: ResultSetHandler> ResultSetHandler for FirstRowHandler<'a, H> {
    fn resultset_start(&mut self, cols: &[ColumnDescriptor]) -> Result<()> {
        self.inner.resultset_start(cols)
    }

    fn row(&mut self, cols: &[ColumnDescriptor], row: Vec<Value>) -> Result<()> {
        if !self.found_row {
            self.found_row = true;
            self.inner.row(cols, row)
        } else {
            Ok(()) // Ignore subsequent rows
        }
    }

    fn resultset_end(&mut self, num_rows: usize) -> Result<()> {
        self.inner.resultset_end(num_rows)
    }
}
