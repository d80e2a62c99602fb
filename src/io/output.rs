use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use super::DocumentFormat;

pub fn serialize_document(value: &Value, format: DocumentFormat, pretty: bool) -> Result<String> {
    match format {
        DocumentFormat::Json => {
            if pretty {
                serde_json::to_string_pretty(value).context("failed to serialize JSON")
            } else {
                serde_json::to_string(value).context("failed to serialize JSON")
            }
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::to_string(value).context("failed to serialize YAML"),
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => {
            if pretty {
                toml::to_string_pretty(value).context("failed to serialize TOML")
            } else {
                toml::to_string(value).context("failed to serialize TOML")
            }
        }
    }
}

/// Serialize the document and replace the file at `path` with it.
pub fn write_document(path: &Path, value: &Value, format: DocumentFormat) -> Result<()> {
    let payload = serialize_document(value, format, true)?;
    let mut file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(payload.as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_pretty_and_compact_json() {
        let value = json!({"title": "Spring canvass"});
        let pretty = serialize_document(&value, DocumentFormat::Json, true).unwrap();
        assert!(pretty.contains("\n"));
        let compact = serialize_document(&value, DocumentFormat::Json, false).unwrap();
        assert_eq!(compact, "{\"title\":\"Spring canvass\"}");
    }

    #[test]
    fn writes_json_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campaign.json");
        write_document(&path, &json!({"title": "Door knock"}), DocumentFormat::Json).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Door knock"));
    }
}
