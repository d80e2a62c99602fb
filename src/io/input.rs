use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => {
            toml::from_str::<Value>(contents).with_context(|| "failed to parse TOML document")
        }
    }
}

pub fn read_document(path: &Path, format: DocumentFormat) -> Result<Value> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_document_str(&contents, format)
        .with_context(|| format!("failed to load {}", path.display()))
}

/// Lists every string leaf as a JSON pointer, in document order.
pub fn string_pointers(value: &Value) -> Vec<String> {
    let mut pointers = Vec::new();
    collect_strings(value, String::new(), &mut pointers);
    pointers
}

fn collect_strings(value: &Value, pointer: String, out: &mut Vec<String>) {
    match value {
        Value::String(_) => out.push(pointer),
        Value::Object(map) => {
            for (key, child) in map {
                collect_strings(child, format!("{pointer}/{}", escape_segment(key)), out);
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                collect_strings(child, format!("{pointer}/{idx}"), out);
            }
        }
        _ => {}
    }
}

fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Last segment of a pointer, unescaped, used as a default label.
pub fn pointer_label(pointer: &str) -> String {
    let segment = pointer.rsplit('/').next().unwrap_or(pointer);
    let label = segment.replace("~1", "/").replace("~0", "~");
    if label.is_empty() {
        "value".to_string()
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_json_documents() {
        let raw = "{\"title\":\"Spring canvass\"}";
        let parsed = parse_document_str(raw, DocumentFormat::Json).unwrap();
        assert_eq!(parsed["title"], json!("Spring canvass"));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn parse_yaml_documents() {
        let raw = "title: Spring canvass\nseats: 4";
        let parsed = parse_document_str(raw, DocumentFormat::Yaml).unwrap();
        assert_eq!(parsed["title"], json!("Spring canvass"));
        assert_eq!(parsed["seats"], json!(4));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parse_toml_documents() {
        let raw = "title = \"Spring canvass\"";
        let parsed = parse_document_str(raw, DocumentFormat::Toml).unwrap();
        assert_eq!(parsed["title"], json!("Spring canvass"));
    }

    #[test]
    fn lists_string_leaves_only() {
        let value = json!({
            "title": "Spring canvass",
            "seats": 4,
            "event": {"info/text": "Bring water", "tags": ["door", 3]}
        });
        let pointers = string_pointers(&value);
        assert!(pointers.contains(&"/title".to_string()));
        assert!(pointers.contains(&"/event/info~1text".to_string()));
        assert!(pointers.contains(&"/event/tags/0".to_string()));
        assert_eq!(pointers.len(), 3);
    }

    #[test]
    fn labels_unescape_the_last_segment() {
        assert_eq!(pointer_label("/event/info~1text"), "info/text");
        assert_eq!(pointer_label(""), "value");
    }
}
