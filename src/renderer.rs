// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Whole-document rendering.
//!
//! Output is the `head` template, each domain in document order, then the
//! `tail` template. Every domain entry is validated before the head renders.
//! The text is accumulated and returned only when every domain rendered, so
//! a failed run never yields partial output.

use serde_json::{json, Value};
use tracing::info;

use crate::domain::render_domain;
use crate::errors::ConfigError;
use crate::model::{Document, Domain};
use crate::template::{TemplateRenderer, TemplateSlot};

/// The generated configuration and what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedConfiguration {
    /// Complete output text
    pub text: String,
    /// Number of domains rendered
    pub domain_count: usize,
    /// Number of host records rendered across all domains
    pub record_count: usize,
}

/// Renders a loaded document with an injected template renderer.
pub struct ConfigurationRenderer<'t, R: TemplateRenderer + ?Sized> {
    templates: &'t R,
}

impl<'t, R: TemplateRenderer + ?Sized> ConfigurationRenderer<'t, R> {
    /// Create a renderer using `templates` for every slot.
    pub fn new(templates: &'t R) -> Self {
        Self { templates }
    }

    /// Render `document` into configuration text.
    ///
    /// `domains` and each domain entry are validated before any template is
    /// rendered.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] naming `domains` if it is not a
    /// sequence, otherwise the first error from any domain or template.
    pub fn render(&self, document: &Value) -> Result<RenderedConfiguration, ConfigError> {
        let document = Document::from_value(document)?;
        let domains = document
            .domains
            .iter()
            .enumerate()
            .map(|(index, raw)| Domain::from_value(raw, index))
            .collect::<Result<Vec<_>, _>>()?;

        let fragment = json!({ "configuration": document.raw });

        let mut text = self.templates.render(TemplateSlot::Head, &fragment)?;
        let mut record_count = 0;

        for domain in &domains {
            let rendered = render_domain(domain, self.templates)?;
            text.push_str(&rendered.text);
            record_count += rendered.record_count;
        }

        text.push_str(&self.templates.render(TemplateSlot::Tail, &fragment)?);

        info!(
            "Rendered {} domains with {} records",
            domains.len(),
            record_count
        );

        Ok(RenderedConfiguration {
            text,
            domain_count: domains.len(),
            record_count,
        })
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod renderer_tests;
