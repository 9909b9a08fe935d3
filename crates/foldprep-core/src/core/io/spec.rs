use super::IoError;
use crate::core::models::job::TargetSpec;
use std::path::Path;

/// Loads a YAML target specification, preserving cycle declaration order.
pub fn load_spec(path: &Path) -> Result<TargetSpec, IoError> {
    let content = std::fs::read_to_string(path).map_err(|e| IoError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    serde_yaml::from_str(&content).map_err(|e| IoError::Yaml {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}
