use std::sync::Arc;

use crate::protocol::TypeHandle;

/// A column from a RowBinary response header
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    name: String,
    type_handle: Arc<dyn TypeHandle>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, type_handle: Arc<dyn TypeHandle>) -> Self {
        Self {
            name: name.into(),
            type_handle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_handle(&self) -> &Arc<dyn TypeHandle> {
        &self.type_handle
    }

    /// Name of the column type as it appears in the header
    pub fn type_name(&self) -> &str {
        self.type_handle.name()
    }
}
