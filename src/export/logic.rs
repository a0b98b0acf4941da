use crate::errors::AppResult;
use crate::export::model::EventExport;
use crate::export::{ExportFormat, csv, fs_utils, json, notify_export_success};
use crate::store::EventStore;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the store, in its current order, to `file`.
    pub fn run(
        store: &EventStore,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        fs_utils::prepare_target(path, force)?;

        let rows: Vec<EventExport> = store.iter().map(EventExport::from).collect();

        match format {
            ExportFormat::Csv => csv::write_csv(path, &rows)?,
            ExportFormat::Json => json::write_json(path, &rows)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
