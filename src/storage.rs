use std::fs;
use std::path::Path;

use crate::config::DATA_FILE;
use crate::error::{AppError, AppResult};
use crate::medicine::Medicine;

/// Load the medicine list from the local JSON file.
///
/// A missing file means "no records yet" and yields an empty list.
/// Malformed content is a hard storage error rather than silent data loss.
pub fn load_local(app_data_path: &Path) -> AppResult<Vec<Medicine>> {
    let path = app_data_path.join(DATA_FILE);

    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&path).map_err(|e| AppError::storage(e.to_string()))?;

    serde_json::from_str(&content)
        .map_err(|e| AppError::storage(format!("malformed {}: {}", DATA_FILE, e)))
}

/// Save the full medicine list to the local JSON file, overwriting it
pub fn save_local(app_data_path: &Path, medicines: &[Medicine]) -> AppResult<()> {
    let path = app_data_path.join(DATA_FILE);
    let content =
        serde_json::to_string_pretty(medicines).map_err(|e| AppError::storage(e.to_string()))?;
    fs::write(&path, content).map_err(|e| AppError::storage(e.to_string()))?;
    Ok(())
}
