// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Loading the source document.
//!
//! The document is YAML (JSON also parses, being a YAML subset). YAML merge
//! keys (`<<: *anchor`) are applied, then the tree is converted to a
//! [`serde_json::Value`], the shape shared by the model and the template
//! engine. Mapping keys must be scalars.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::errors::ConfigError;

/// Read and parse the document at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Load`] if the file cannot be read or parsed.
pub fn load_document(path: &Path) -> Result<Value, ConfigError> {
    let origin = path.display().to_string();
    debug!("Loading configuration from {}", origin);

    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
        origin: origin.clone(),
        reason: e.to_string(),
    })?;

    parse_document(&text, &origin)
}

/// Parse document text. `origin` labels the source in errors.
///
/// # Examples
///
/// ```
/// use dnsconfig::loader::parse_document;
///
/// let doc = parse_document("domains:\n  - name: lan\n", "inline").unwrap();
/// assert_eq!(doc["domains"][0]["name"], "lan");
/// ```
///
/// # Errors
///
/// Returns [`ConfigError::Load`] if the text is not valid YAML or contains
/// keys that cannot be represented as strings.
pub fn parse_document(text: &str, origin: &str) -> Result<Value, ConfigError> {
    let fail = |reason: String| ConfigError::Load {
        origin: origin.to_string(),
        reason,
    };

    let mut yaml: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| fail(e.to_string()))?;
    yaml.apply_merge().map_err(|e| fail(e.to_string()))?;

    serde_json::to_value(yaml).map_err(|e| fail(e.to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
