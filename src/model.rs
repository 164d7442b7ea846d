// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Checked views over the loaded source document.
//!
//! The loader hands over an untyped [`serde_json::Value`]. The types here
//! borrow from it and validate shape on construction, failing with
//! [`ConfigError::MissingField`] or [`ConfigError::TypeMismatch`]. A field
//! that is present but null counts as absent.
//!
//! Each view keeps a reference to its raw mapping so templates can read
//! keys this crate does not interpret (for example `host.comment`).

use serde_json::{Map, Value};

use crate::constants::KEY_DOMAINS;
use crate::errors::ConfigError;

/// Shape names used in [`ConfigError::TypeMismatch`]
const SEQUENCE: &str = "sequence";
const MAPPING: &str = "mapping";
const STRING: &str = "string";

/// The top-level document.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    /// The whole document, bound as `configuration` in the head template
    pub raw: &'a Value,
    /// Unvalidated domain entries in document order
    pub domains: &'a [Value],
}

impl<'a> Document<'a> {
    /// Validate the single top-level contract: `domains` is a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] naming `domains` when the key is
    /// absent, null, or not a sequence, or when the document itself is not a
    /// mapping.
    pub fn from_value(raw: &'a Value) -> Result<Self, ConfigError> {
        let domains = raw
            .as_object()
            .and_then(|map| present(map, KEY_DOMAINS))
            .and_then(Value::as_array)
            .ok_or_else(|| ConfigError::TypeMismatch {
                field: KEY_DOMAINS.to_string(),
                expected: SEQUENCE,
            })?;

        Ok(Self { raw, domains })
    }
}

/// One domain entry.
#[derive(Debug, Clone)]
pub struct Domain<'a> {
    /// Domain name, used as the suffix of every name in the domain
    pub name: String,
    /// Unvalidated host entries in document order
    pub hosts: &'a [Value],
    /// Unvalidated dynamic range, if one is configured
    pub dynamic: Option<&'a Value>,
    /// The raw domain mapping, bound as `network` in the network template
    pub raw: &'a Value,
    /// Location in the document, e.g. `domains[2]`
    pub path: String,
}

impl<'a> Domain<'a> {
    /// Validate the domain entry at `domains[index]`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::TypeMismatch`] if the entry is not a mapping, or
    ///   `hosts` is present but not a sequence
    /// - [`ConfigError::MissingField`] if `name` is absent
    pub fn from_value(raw: &'a Value, index: usize) -> Result<Self, ConfigError> {
        let path = format!("{KEY_DOMAINS}[{index}]");
        let map = as_mapping(raw, &path)?;

        let name = required_string(map, "name", &path, || format!("domain at {path}"))?;

        let hosts_path = format!("{path}.hosts");
        let hosts = optional_sequence(map, "hosts", &hosts_path)?;

        let dynamic = present(map, "dynamic");

        Ok(Self {
            name,
            hosts,
            dynamic,
            raw,
            path,
        })
    }
}

/// One static host entry.
#[derive(Debug, Clone)]
pub struct Host<'a> {
    /// Short host name, qualified with the domain name
    pub name: String,
    /// IPv4 address, unvalidated at this stage
    pub ip: String,
    /// Short alias names
    pub aliases: Vec<String>,
    /// Short extra address names
    pub addresses: Vec<String>,
    /// Extra names that are already fully qualified
    pub fqdns: Vec<String>,
    /// The raw host mapping, bound as `host` in the host template
    pub raw: &'a Value,
}

impl<'a> Host<'a> {
    /// Validate the host entry at `hosts[index]` of `domain`.
    ///
    /// Checks run in a fixed order: `name`, `ip`, then the shape of
    /// `aliases`, `addresses` and `fqdns`. Absent optional sequences default
    /// to empty.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingField`] if `name` or `ip` is absent
    /// - [`ConfigError::TypeMismatch`] if an optional field is not a sequence
    ///   of scalars, or the entry is not a mapping
    pub fn from_value(
        raw: &'a Value,
        index: usize,
        domain: &Domain<'_>,
    ) -> Result<Self, ConfigError> {
        let path = format!("{}.hosts[{index}]", domain.path);
        let map = as_mapping(raw, &path)?;

        let name = required_string(map, "name", &path, || format!("host at {path}"))?;
        let ip = required_string(map, "ip", &path, || {
            format!("host '{name}' in domain '{}'", domain.name)
        })?;

        let aliases = string_sequence(map, "aliases", &path)?;
        let addresses = string_sequence(map, "addresses", &path)?;
        let fqdns = string_sequence(map, "fqdns", &path)?;

        Ok(Self {
            name,
            ip,
            aliases,
            addresses,
            fqdns,
            raw,
        })
    }
}

/// The dynamically-named address range of a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicRange {
    /// First address of the range
    pub start: String,
    /// Last address of the range; its final octet is exclusive
    pub end: String,
    /// Per-address naming template, e.g. `dhcp-{c}-{d}`
    pub template: String,
    /// Block comment attached to the first generated record
    pub comment: Option<String>,
}

impl DynamicRange {
    /// Validate the `dynamic` entry of `domain`.
    ///
    /// A blank `comment` (`""`, `"0"`, `0` or `false`) is treated as absent.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::TypeMismatch`] if the entry is not a mapping
    /// - [`ConfigError::MissingField`] if `start`, `end` or `template` is absent
    pub fn from_value(raw: &Value, domain: &Domain<'_>) -> Result<Self, ConfigError> {
        let path = format!("{}.dynamic", domain.path);
        let map = as_mapping(raw, &path)?;
        let entity = || format!("dynamic range of domain '{}'", domain.name);

        let start = required_string(map, "start", &path, entity)?;
        let end = required_string(map, "end", &path, entity)?;
        let template = required_string(map, "template", &path, entity)?;
        let comment = match present(map, "comment") {
            Some(value) if is_blank(value) => None,
            _ => optional_string(map, "comment", &path)?,
        };

        Ok(Self {
            start,
            end,
            template,
            comment,
        })
    }
}

// ============================================================================
// Field helpers
// ============================================================================

/// Look up `key`, treating null as absent.
fn present<'v>(map: &'v Map<String, Value>, key: &str) -> Option<&'v Value> {
    map.get(key).filter(|v| !v.is_null())
}

fn as_mapping<'v>(value: &'v Value, path: &str) -> Result<&'v Map<String, Value>, ConfigError> {
    value.as_object().ok_or_else(|| ConfigError::TypeMismatch {
        field: path.to_string(),
        expected: MAPPING,
    })
}

/// Render a scalar in display form; `None` for sequences and mappings.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Scalars that count as "no value" for optional text such as comments.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn required_string(
    map: &Map<String, Value>,
    key: &'static str,
    path: &str,
    entity: impl FnOnce() -> String,
) -> Result<String, ConfigError> {
    optional_string(map, key, path)?.ok_or_else(|| ConfigError::MissingField {
        entity: entity(),
        field: key,
    })
}

fn optional_string(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<String>, ConfigError> {
    present(map, key)
        .map(|value| {
            scalar_to_string(value).ok_or_else(|| ConfigError::TypeMismatch {
                field: format!("{path}.{key}"),
                expected: STRING,
            })
        })
        .transpose()
}

fn optional_sequence<'v>(
    map: &'v Map<String, Value>,
    key: &str,
    field: &str,
) -> Result<&'v [Value], ConfigError> {
    match present(map, key) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(ConfigError::TypeMismatch {
            field: field.to_string(),
            expected: SEQUENCE,
        }),
    }
}

fn string_sequence(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Vec<String>, ConfigError> {
    let field = format!("{path}.{key}");
    optional_sequence(map, key, &field)?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            scalar_to_string(item).ok_or_else(|| ConfigError::TypeMismatch {
                field: format!("{field}[{i}]"),
                expected: STRING,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod model_tests;
