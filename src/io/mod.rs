pub mod output;

pub use output::{create_writer, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter};

use crate::core::errors::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Input {
        message: format!("failed to read {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(source),
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::Input {
        message: format!("failed to write {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(source),
    })
}

/// Read and deserialize one JSON record file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read_file(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Component;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"[{"key": "focus", "name": "Focus"}]"#).unwrap();

        let catalog: Vec<Component> = read_json(&path).unwrap();
        assert_eq!(catalog, vec![Component::new("focus", "Focus")]);
    }

    #[test]
    fn test_read_json_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        let error = read_json::<Vec<Component>>(&path).unwrap_err();
        assert!(error.to_string().contains("missing.json"));
    }

    #[test]
    fn test_read_json_malformed_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json").unwrap();

        assert!(read_json::<Vec<Component>>(&path).is_err());
    }
}
