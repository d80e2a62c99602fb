use std::{fmt, path::Path};

use anyhow::Result;

/// Supported document formats for the backing store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    #[default]
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    #[cfg(feature = "toml")]
    Toml,
}

impl DocumentFormat {
    /// Picks a format from the file extension. Unknown extensions read as JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(ext) = path.extension() else {
            return Ok(DocumentFormat::Json);
        };
        let normalized = ext.to_string_lossy().to_ascii_lowercase();
        match normalized.as_str() {
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            #[cfg(not(feature = "yaml"))]
            "yaml" | "yml" => anyhow::bail!(
                "'{}' requires yaml support, but this build lacks the 'yaml' feature",
                path.display()
            ),
            #[cfg(feature = "toml")]
            "toml" => Ok(DocumentFormat::Toml),
            #[cfg(not(feature = "toml"))]
            "toml" => anyhow::bail!(
                "'{}' requires toml support, but this build lacks the 'toml' feature",
                path.display()
            ),
            _ => Ok(DocumentFormat::Json),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            #[cfg(feature = "yaml")]
            DocumentFormat::Yaml => write!(f, "yaml"),
            #[cfg(feature = "toml")]
            DocumentFormat::Toml => write!(f, "toml"),
        }
    }
}
