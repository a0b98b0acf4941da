use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Refuse to overwrite an existing file unless forced, and make sure
/// the parent directory exists.
pub(crate) fn prepare_target(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "file {} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
