// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Per-address naming templates for dynamic ranges.
//!
//! A naming template is plain text with single-brace `{var}` placeholders,
//! e.g. `dhcp-{c}-{d}`. Available variables:
//!
//! | Variable       | Value                             |
//! |----------------|-----------------------------------|
//! | `a` .. `d`     | octets of the address             |
//! | `ip`           | dotted-quad address               |
//! | `reverse_name` | `d.c.b.a.in-addr.arpa`            |
//!
//! Each placeholder is a Handlebars expression with one brace pair instead of
//! two, rendered in strict mode. Templates are validated once, before a range
//! is expanded, so a typo fails the run without rendering anything.

use std::fmt;

use handlebars::Handlebars;
use serde_json::json;

use crate::errors::ConfigError;

/// Registry key of the single template held by a [`NameTemplate`]
const TEMPLATE_NAME: &str = "name";

/// Values bound for one address.
#[derive(Debug, Clone, Copy)]
pub struct NameBindings<'a> {
    /// Address octets `[a, b, c, d]`
    pub octets: [u8; 4],
    /// Dotted-quad form of the address
    pub ip: &'a str,
    /// Reverse-DNS name of the address
    pub reverse_name: &'a str,
}

impl NameBindings<'static> {
    /// Bindings for `0.0.0.0`, used to check a template before expansion
    const UNSPECIFIED: Self = Self {
        octets: [0; 4],
        ip: "0.0.0.0",
        reverse_name: "0.0.0.0.in-addr.arpa",
    };
}

/// A compiled naming template.
pub struct NameTemplate {
    source: String,
    registry: Handlebars<'static>,
}

impl fmt::Debug for NameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameTemplate")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl NameTemplate {
    /// Compile a naming template.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Render`] for an unknown variable or an
    /// unbalanced brace.
    pub fn compile(source: &str) -> Result<Self, ConfigError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .register_template_string(TEMPLATE_NAME, source.replace('{', "{{").replace('}', "}}"))
            .map_err(|e| ConfigError::Render {
                template: source.to_string(),
                reason: e.to_string(),
            })?;

        let template = Self {
            source: source.to_string(),
            registry,
        };

        // Strict mode only reports unknown variables when rendering
        template.render(&NameBindings::UNSPECIFIED)?;

        Ok(template)
    }

    /// The template text as configured.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render the unqualified host name for one address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Render`] if the template engine fails.
    pub fn render(&self, bindings: &NameBindings<'_>) -> Result<String, ConfigError> {
        let [a, b, c, d] = bindings.octets;
        let data = json!({
            "a": a,
            "b": b,
            "c": c,
            "d": d,
            "ip": bindings.ip,
            "reverse_name": bindings.reverse_name,
        });

        self.registry
            .render(TEMPLATE_NAME, &data)
            .map_err(|e| ConfigError::Render {
                template: self.source.clone(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod name_tests;
