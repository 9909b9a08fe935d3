use super::IoError;
use crate::core::models::catalog::AliasMap;
use std::path::Path;

/// Loads a JSON object of entity display names to catalog keys.
pub fn load_alias_map(path: &Path) -> Result<AliasMap, IoError> {
    let content = std::fs::read_to_string(path).map_err(|e| IoError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| IoError::Json {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_name_to_key_pairs() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"ActA\": \"P33379\", \"CheY\": \"P0AE67\"}}").unwrap();

        let aliases = load_alias_map(file.path()).unwrap();
        assert_eq!(aliases["ActA"], "P33379");
        assert_eq!(aliases["CheY"], "P0AE67");
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"ActA\": ").unwrap();

        let err = load_alias_map(file.path()).unwrap_err();
        assert!(matches!(err, IoError::Json { .. }));
    }
}
