use std::sync::Arc;

use crate::error::{Error, Result};
use crate::protocol::r#trait::{TypeHandle, TypeResolver};
use crate::value::Value;

/// Append the RowBinary encoding of `rows` to `out`
///
/// Only row data is written, never a header. Every row must have exactly
/// `column_types.len()` values. On error `out` is restored to its original length.
///
/// Returns the number of rows written.
#[tracing::instrument(skip_all)]
pub fn write_rows<I, R, H>(out: &mut Vec<u8>, rows: I, column_types: &[H]) -> Result<usize>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[Value]>,
    H: TypeHandle,
{
    let start = out.len();
    let mut num_rows = 0;
    for row in rows {
        if let Err(e) = write_row(out, num_rows, row.as_ref(), column_types) {
            out.truncate(start);
            return Err(e);
        }
        num_rows += 1;
    }
    tracing::debug!(num_rows, bytes = out.len() - start, "Encoded rows");
    Ok(num_rows)
}

fn write_row<H: TypeHandle>(
    out: &mut Vec<u8>,
    row_index: usize,
    row: &[Value],
    column_types: &[H],
) -> Result<()> {
    if row.len() != column_types.len() {
        return Err(Error::RowWidthMismatch {
            row: row_index,
            expected: column_types.len(),
            actual: row.len(),
        });
    }
    for (value, handle) in row.iter().zip(column_types) {
        handle.write_row_binary(value, out)?;
    }
    Ok(())
}

/// Encode `rows` as an insert payload using explicit type handles
pub fn encode_rows<I, R, H>(rows: I, column_types: &[H]) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[Value]>,
    H: TypeHandle,
{
    let mut out = Vec::new();
    write_rows(&mut out, rows, column_types)?;
    Ok(out)
}

/// Encode `rows` as an insert payload, resolving column types by name first
///
/// All names are resolved before any row is encoded.
pub fn encode_rows_by_name<I, R, N, T>(
    rows: I,
    column_type_names: &[N],
    resolver: &T,
) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[Value]>,
    N: AsRef<str>,
    T: TypeResolver + ?Sized,
{
    let column_types = column_type_names
        .iter()
        .map(|name| resolver.resolve(name.as_ref()))
        .collect::<Result<Vec<Arc<dyn TypeHandle>>>>()?;
    encode_rows(rows, &column_types)
}
