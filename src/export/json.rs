use crate::errors::{AppError, AppResult};
use crate::export::model::EventExport;
use std::path::Path;

/// Write the rows as pretty-printed JSON.
pub(crate) fn write_json(path: &Path, rows: &[EventExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
