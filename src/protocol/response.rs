use crate::col::ColumnDescriptor;
use crate::error::{Error, Result};
use crate::protocol::primitive::*;
use crate::protocol::r#trait::{ResultSetHandler, TypeResolver};
use crate::protocol::ByteCursor;
use crate::resultset::ResultSet;

/// Read the response header: column count, column names, then column type names
///
/// Every type name is resolved before this returns; one unknown name fails the whole
/// header because the row layout depends on all of them.
pub fn decode_header<R: TypeResolver + ?Sized>(
    cursor: &mut ByteCursor<'_>,
    resolver: &R,
) -> Result<Vec<ColumnDescriptor>> {
    let num_columns = cursor.read_leb128()?;
    let num_columns = usize::try_from(num_columns).map_err(|_overflow| Error::TruncatedBuffer {
        needed: usize::MAX,
        available: cursor.remaining().len(),
    })?;
    tracing::debug!(num_columns, "Processing response");

    // each name takes at least one byte
    let capacity = num_columns.min(cursor.remaining().len());
    let mut names = Vec::with_capacity(capacity);
    for _ in 0..num_columns {
        names.push(cursor.read_str()?);
    }
    tracing::debug!(names = %names.join(","), "Processing response, column names");

    let mut columns = Vec::with_capacity(capacity);
    for name in names {
        let type_name = cursor.read_str()?;
        let handle = resolver.resolve(type_name)?;
        columns.push(ColumnDescriptor::new(name, handle));
    }
    tracing::debug!(
        types = %columns.iter().map(ColumnDescriptor::type_name).collect::<Vec<_>>().join(","),
        "Processing response, column types"
    );
    Ok(columns)
}

/// Decode a complete RowBinary response, passing each row to `handler`
///
/// The buffer must hold exactly one complete response: rows are read until the buffer
/// is exhausted, and a row that runs past the end is an error rather than a signal to
/// wait for more data. Rows already passed to `handler` stay delivered when a later row
/// fails.
#[tracing::instrument(skip_all)]
pub fn read_rows<R, H>(buffer: &[u8], resolver: &R, handler: &mut H) -> Result<()>
where
    R: TypeResolver + ?Sized,
    H: ResultSetHandler + ?Sized,
{
    let mut cursor = ByteCursor::new(buffer);
    let columns = decode_header(&mut cursor, resolver)?;
    handler.resultset_start(&columns)?;

    let mut num_rows = 0;
    while !cursor.is_exhausted() {
        let row_start = cursor.position();
        let mut row = Vec::with_capacity(columns.len());
        for col in &columns {
            row.push(col.type_handle().read_row_binary(&mut cursor)?);
        }
        // a row that consumes nothing would never reach the end of the buffer
        if cursor.position() == row_start {
            return Err(Error::TrailingBytes {
                position: row_start,
                remaining: cursor.remaining().len(),
            });
        }
        handler.row(&columns, row)?;
        num_rows += 1;
    }

    tracing::debug!(num_rows, "Processed response");
    handler.resultset_end(num_rows)
}

/// Decode a complete RowBinary response into a [`ResultSet`]
///
/// Nothing is returned unless the whole buffer decodes.
pub fn decode_result<R: TypeResolver + ?Sized>(buffer: &[u8], resolver: &R) -> Result<ResultSet> {
    let mut result_set = ResultSet::default();
    read_rows(buffer, resolver, &mut result_set)?;
    Ok(result_set)
}

/// Write a response header for the given column names and type names
pub fn write_header<N, T>(out: &mut Vec<u8>, names: &[N], type_names: &[T]) -> Result<()>
where
    N: AsRef<str>,
    T: AsRef<str>,
{
    if names.len() != type_names.len() {
        return Err(Error::BadUsageError(format!(
            "{} column names but {} type names",
            names.len(),
            type_names.len()
        )));
    }
    write_leb128(out, names.len() as u64);
    for name in names {
        write_leb128_str(out, name.as_ref());
    }
    for type_name in type_names {
        write_leb128_str(out, type_name.as_ref());
    }
    Ok(())
}

/// Encode the response header for `columns`
pub fn encode_header(columns: &[ColumnDescriptor]) -> Vec<u8> {
    let mut out = Vec::new();
    write_leb128(&mut out, columns.len() as u64);
    for col in columns {
        write_leb128_str(&mut out, col.name());
    }
    for col in columns {
        write_leb128_str(&mut out, col.type_name());
    }
    out
}
