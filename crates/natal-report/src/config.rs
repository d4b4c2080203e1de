use std::path::Path;

use natal_export::styles::SheetStyles;
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    /// Suggested filenames are `{filename_prefix}_{timestamp}.xlsx`.
    pub filename_prefix: String,
    pub styles: SheetStyles,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            filename_prefix: "reporte_bs22".to_string(),
            styles: SheetStyles::default(),
        }
    }
}

impl ReportConfig {
    pub fn from_json_str(contents: &str) -> Result<Self, ReportError> {
        // Parse as raw JSON so migrations run before deserializing.
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let on_disk_version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        let on_disk_version = u32::try_from(on_disk_version).map_err(|_| {
            ReportError::Config(format!("config_version {on_disk_version} is out of range"))
        })?;

        let migrated = migrate(json, on_disk_version)?;
        let config: ReportConfig = serde_json::from_value(migrated)?;
        if config.filename_prefix.trim().is_empty() {
            return Err(ReportError::Config("filename_prefix is empty".to_string()));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ReportError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), "report config loaded");
        Ok(config)
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, ReportError> {
    if from_version > CURRENT_VERSION {
        return Err(ReportError::Config(format!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        )));
    }

    // v0 → v1: the prefix key was called `filename`.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| ReportError::Config("config is not a JSON object".to_string()))?;
        if let Some(legacy) = obj.remove("filename") {
            obj.entry("filename_prefix").or_insert(legacy);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(CURRENT_VERSION.into()),
        );
        tracing::info!("migrated report config v0 → v1");
    }

    Ok(json)
}
