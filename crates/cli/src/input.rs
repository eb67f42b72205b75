use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Load a YAML or JSON file, picking the format from the extension
/// (`.json` is JSON, anything else is YAML).
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(?path, "loading input");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON: {}", path.display())),
        _ => serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML: {}", path.display())),
    }
}
