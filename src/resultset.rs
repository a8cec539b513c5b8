use std::sync::Arc;

use crate::col::ColumnDescriptor;
use crate::error::Result;
use crate::protocol::{ResultSetHandler, TypeHandle};
use crate::row::FromRow;
use crate::value::Value;

/// Rows and column metadata of a decoded RowBinary response
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    columns: Vec<ColumnDescriptor>,
    rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(ColumnDescriptor::name)
    }

    pub fn column_types(&self) -> impl Iterator<Item = &Arc<dyn TypeHandle>> {
        self.columns.iter().map(ColumnDescriptor::type_handle)
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Value>> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Convert every row with [`FromRow`]
    pub fn typed<T: FromRow>(&self) -> Result<Vec<T>> {
        self.rows.iter().map(|row| T::from_row(row)).collect()
    }
}

impl ResultSetHandler for ResultSet {
    fn resultset_start(&mut self, cols: &[ColumnDescriptor]) -> Result<()> {
        self.columns = cols.to_vec();
        self.rows.clear();
        Ok(())
    }

    fn row(&mut self, _: &[ColumnDescriptor], row: Vec<Value>) -> Result<()> {
        self.rows.push(row);
        Ok(())
    }

    fn resultset_end(&mut self, _: usize) -> Result<()> {
        Ok(())
    }
}
