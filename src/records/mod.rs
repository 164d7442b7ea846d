// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Derived host records.
//!
//! A [`DerivedRecord`] is the fully-qualified form of one host: forward name,
//! address, reverse name, and qualified alias and extra-address names. Static
//! hosts produce one record each ([`host`]); dynamic ranges produce one per
//! address ([`range`]). Records are rendered through the `host` template and
//! then dropped.

pub mod host;
pub mod range;

use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::ConfigError;
use crate::template::TemplateSlot;

/// Where a record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOrigin {
    /// A host listed in the domain, with its raw mapping
    Static {
        /// Raw host mapping as written in the document
        host: Value,
    },
    /// An address synthesized from a dynamic range
    Dynamic {
        /// Address octets `[a, b, c, d]`
        octets: [u8; 4],
        /// Block comment, set on the first record of an expansion only
        comment: Option<String>,
    },
}

/// One fully-qualified host record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedRecord {
    /// `<name>.<domain>`
    pub forward_fqdn: String,
    /// Dotted-quad IPv4 address
    pub ip: String,
    /// `d.c.b.a.in-addr.arpa`
    pub reverse_name: String,
    /// `<alias>.<domain>` per alias, in order
    pub alias_fqdns: Vec<String>,
    /// Qualified short addresses followed by verbatim FQDNs
    pub extra_address_fqdns: Vec<String>,
    /// Static host or dynamic address
    pub origin: RecordOrigin,
}

#[derive(Serialize)]
struct HostBindings<'a> {
    host: &'a Value,
    address: &'a str,
    ip: &'a str,
    aliases: &'a [String],
    addresses: &'a [String],
    reverse: &'a str,
    #[serde(flatten)]
    octets: Option<OctetBindings>,
}

#[derive(Serialize)]
struct OctetBindings {
    a: u8,
    b: u8,
    c: u8,
    d: u8,
}

impl DerivedRecord {
    /// The block comment carried by a dynamic record, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        match &self.origin {
            RecordOrigin::Dynamic { comment, .. } => comment.as_deref(),
            RecordOrigin::Static { .. } => None,
        }
    }

    /// Variable bindings for the `host` template.
    ///
    /// Static records bind the raw host mapping as `host`. Dynamic records
    /// bind `{comment}` on the first record and `{}` on the rest, plus the
    /// octets as `a`, `b`, `c`, `d`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Render`] if the bindings cannot be serialized.
    pub fn bindings(&self) -> Result<Value, ConfigError> {
        let dynamic_host;
        let (host, octets) = match &self.origin {
            RecordOrigin::Static { host } => (host, None),
            RecordOrigin::Dynamic {
                octets: [a, b, c, d],
                comment,
            } => {
                dynamic_host = match comment {
                    Some(comment) => json!({ "comment": comment }),
                    None => json!({}),
                };
                let octets = OctetBindings {
                    a: *a,
                    b: *b,
                    c: *c,
                    d: *d,
                };
                (&dynamic_host, Some(octets))
            }
        };

        let bindings = HostBindings {
            host,
            address: &self.forward_fqdn,
            ip: &self.ip,
            aliases: &self.alias_fqdns,
            addresses: &self.extra_address_fqdns,
            reverse: &self.reverse_name,
            octets,
        };

        serde_json::to_value(bindings).map_err(|e| ConfigError::Render {
            template: TemplateSlot::Host.name().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Qualify a short name with its domain: `<name>.<domain>`.
#[must_use]
pub fn qualify(name: &str, domain: &str) -> String {
    format!("{name}.{domain}")
}
