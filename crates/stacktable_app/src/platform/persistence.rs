use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stacktable_core::{SortDirection, SortField};
use stacktable_logging::{table_error, table_info, table_warn};

const PREFS_FILENAME: &str = ".stacktable_prefs.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPrefs {
    sort_field: String,
    sort_direction: String,
}

pub(crate) fn prefs_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(PREFS_FILENAME)
}

pub(crate) fn load_sort_prefs(path: &Path) -> Option<(SortField, SortDirection)> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            table_warn!("Failed to read preferences from {:?}: {}", path, err);
            return None;
        }
    };

    let prefs: PersistedPrefs = match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            table_warn!("Failed to parse preferences from {:?}: {}", path, err);
            return None;
        }
    };

    let sort_field = SortField::parse(&prefs.sort_field)?;
    let sort_direction = SortDirection::parse(&prefs.sort_direction)?;
    table_info!("Restored sort preferences from {:?}", path);
    Some((sort_field, sort_direction))
}

pub(crate) fn save_sort_prefs(path: &Path, sort_field: SortField, sort_direction: SortDirection) {
    let prefs = PersistedPrefs {
        sort_field: sort_field.as_str().to_string(),
        sort_direction: sort_direction.as_str().to_string(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&prefs, pretty) {
        Ok(text) => text,
        Err(err) => {
            table_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    if let Err(err) = fs::write(path, content) {
        table_error!("Failed to write preferences to {:?}: {}", path, err);
    }
}
