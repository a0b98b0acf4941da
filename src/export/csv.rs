use crate::errors::{AppError, AppResult};
use crate::export::model::EventExport;
use std::path::Path;

/// Write the rows as CSV with a header line.
pub(crate) fn write_csv(path: &Path, rows: &[EventExport]) -> AppResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
