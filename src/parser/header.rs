//! Header loading and cross-file header matching

use std::io::BufRead;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{ReconError, Result};
use crate::model::{Header, HeaderRow};

use super::DelimitedReader;

/// Read the canonical header and flag key and excluded columns
///
/// Every requested key name and exclude name must be present. Missing key
/// columns are reported before missing exclude columns, each in request order.
pub fn load_header<R: BufRead>(
    reader: &mut DelimitedReader<R>,
    key_columns: &[String],
    exclude_columns: &[String],
) -> Result<HeaderRow> {
    let mut keys_seen: IndexMap<&str, bool> =
        key_columns.iter().map(|k| (k.as_str(), false)).collect();
    let mut excludes_seen: IndexMap<&str, bool> =
        exclude_columns.iter().map(|x| (x.as_str(), false)).collect();

    let mut header = HeaderRow::from_names(reader.read_header()?);
    for column in header.columns_mut() {
        if let Some(seen) = keys_seen.get_mut(column.name()) {
            column.mark_key();
            *seen = true;
        }
        if let Some(seen) = excludes_seen.get_mut(column.name()) {
            column.mark_excluded();
            *seen = true;
        }
    }

    if let Some((missing, _)) = keys_seen.iter().find(|(_, seen)| !**seen) {
        return Err(ReconError::KeyNotFoundInHeader {
            column: missing.to_string(),
            file: reader.path().to_path_buf(),
        });
    }
    if let Some((missing, _)) = excludes_seen.iter().find(|(_, seen)| !**seen) {
        return Err(ReconError::ExcludeNotFoundInHeader {
            column: missing.to_string(),
            file: reader.path().to_path_buf(),
        });
    }

    log::debug!(
        "loaded {} header columns from {}: {}",
        header.len(),
        reader.path().display(),
        header
            .iter()
            .map(Header::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(header)
}

/// Check that the reader's header line names the same columns in the same order
pub fn match_header<R: BufRead>(
    reader: &mut DelimitedReader<R>,
    reference: &HeaderRow,
    reference_path: &Path,
) -> Result<()> {
    let names = reader.read_header()?;
    if reference.matches_names(&names) {
        Ok(())
    } else {
        log::debug!(
            "header of {} is [{}], expected [{}]",
            reader.path().display(),
            names.join(","),
            reference.names().collect::<Vec<_>>().join(",")
        );
        Err(ReconError::HeaderMismatch {
            reference: reference_path.to_path_buf(),
            subject: reader.path().to_path_buf(),
        })
    }
}
