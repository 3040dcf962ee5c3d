use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::Value;

use crate::{
    errors::{InventoryError, Result},
    inventory::InventoryReport,
};

const TMP_SUFFIX: &str = "tmp";

/// Writes `value` as pretty JSON, staging to a sibling temp file before renaming.
///
/// Parent directories are created as needed. Non-ASCII text is written as-is.
pub fn save_inventory_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    write_json_atomic(path, &json)?;
    tracing::info!(path = %path.display(), "inventory snapshot saved");
    Ok(())
}

/// Saves `value`, logging instead of propagating failures. Returns whether the write succeeded.
pub fn save_or_report<T: Serialize + ?Sized>(value: &T, path: &Path) -> bool {
    match save_inventory_json(value, path) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "failed to save inventory snapshot");
            false
        }
    }
}

/// Reads a JSON snapshot. Missing or unreadable files yield an empty object.
pub fn load_inventory_json(path: &Path) -> Value {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "inventory snapshot not found");
            return empty_object();
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read inventory snapshot");
            return empty_object();
        }
    };
    match serde_json::from_str(&data) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to parse inventory snapshot");
            empty_object()
        }
    }
}

/// Loads a snapshot written by [`save_inventory_json`] into typed records.
pub fn load_inventory_report(path: &Path) -> Result<InventoryReport> {
    let value = load_inventory_json(path);
    if value.as_object().map_or(true, |map| map.is_empty()) {
        return Err(InventoryError::EmptySnapshot(path.to_path_buf()));
    }
    Ok(serde_json::from_value(value)?)
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Stages `data` next to `path` and renames it into place. The staging file
/// never outlives a failed write.
pub(crate) fn write_json_atomic(path: &Path, data: &str) -> Result<()> {
    let tmp = tmp_path(path);
    let staged = write_atomic(&tmp, data)
        .and_then(|()| fs::rename(&tmp, path).map_err(InventoryError::from));
    if staged.is_err() && tmp.is_file() {
        if let Err(err) = fs::remove_file(&tmp) {
            tracing::warn!(path = %tmp.display(), error = %err, "failed to remove staging file");
        }
    }
    staged
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
