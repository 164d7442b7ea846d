// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Template slots and the rendering capability.
//!
//! Output is produced through four template slots:
//!
//! | Slot      | Bound variables                                              |
//! |-----------|--------------------------------------------------------------|
//! | `head`    | `configuration`                                              |
//! | `tail`    | `configuration`                                              |
//! | `network` | `network`, `records`                                         |
//! | `host`    | `host`, `address`, `ip`, `aliases`, `addresses`, `reverse`   |
//!
//! Host renders of dynamic-range records also receive `a`, `b`, `c`, `d`.
//!
//! Templates are Handlebars. Output is not HTML-escaped and a missing
//! variable renders as nothing. The built-in templates keep block tags on
//! the same line as text, so no line consists of a lone `{{/each}}`.
//!
//! The renderer is injected as a [`TemplateRenderer`], so callers can swap
//! in their own engine. [`TemplateSet`] is the stock implementation backed
//! by a [`handlebars`] registry.

pub mod name;

use std::fmt;
use std::path::Path;

use handlebars::Handlebars;
use serde_json::Value;
use tracing::debug;

use crate::constants::{
    HEAD_TEMPLATE_FILE, HOST_TEMPLATE_FILE, NETWORK_TEMPLATE_FILE, TAIL_TEMPLATE_FILE,
};
use crate::errors::ConfigError;

// Embed default templates at compile time
const HEAD_TEMPLATE: &str = include_str!("../../templates/head.tpl");
const TAIL_TEMPLATE: &str = include_str!("../../templates/tail.tpl");
const NETWORK_TEMPLATE: &str = include_str!("../../templates/network.tpl");
const HOST_TEMPLATE: &str = include_str!("../../templates/host.tpl");

/// The renderable template slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateSlot {
    /// Fixed fragment at the start of the output
    Head,
    /// Fixed fragment at the end of the output
    Tail,
    /// Per-domain wrapper around the rendered host records
    Network,
    /// One host record
    Host,
}

impl TemplateSlot {
    /// All slots, in output order.
    pub const ALL: [Self; 4] = [Self::Head, Self::Network, Self::Host, Self::Tail];

    /// Slot name used in errors and logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Tail => "tail",
            Self::Network => "network",
            Self::Host => "host",
        }
    }

    /// File name of this slot inside a template directory.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Head => HEAD_TEMPLATE_FILE,
            Self::Tail => TAIL_TEMPLATE_FILE,
            Self::Network => NETWORK_TEMPLATE_FILE,
            Self::Host => HOST_TEMPLATE_FILE,
        }
    }

    fn builtin_source(self) -> &'static str {
        match self {
            Self::Head => HEAD_TEMPLATE,
            Self::Tail => TAIL_TEMPLATE,
            Self::Network => NETWORK_TEMPLATE,
            Self::Host => HOST_TEMPLATE,
        }
    }
}

impl fmt::Display for TemplateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Turns a slot plus variable bindings into text.
pub trait TemplateRenderer {
    /// Render `slot` with `bindings`, a mapping of variable names to values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Render`] identifying the slot on failure.
    fn render(&self, slot: TemplateSlot, bindings: &Value) -> Result<String, ConfigError>;
}

/// A compiled set of the four slot templates.
pub struct TemplateSet {
    registry: Handlebars<'static>,
}

impl fmt::Debug for TemplateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateSet")
            .field("templates", &self.registry.get_templates().keys())
            .finish()
    }
}

impl TemplateSet {
    /// Compile the templates embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Render`] if an embedded template is malformed.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_sources(|slot| Ok(slot.builtin_source().to_string()))
    }

    /// Compile templates from `dir`.
    ///
    /// Each slot is read from its file name (`head.tpl`, `tail.tpl`,
    /// `network.tpl`, `host.tpl`). A slot whose file does not exist falls back
    /// to the embedded default.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Load`] if `dir` is not a directory or a file cannot be read
    /// - [`ConfigError::Render`] if a template is malformed
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        if !dir.is_dir() {
            return Err(ConfigError::Load {
                origin: dir.display().to_string(),
                reason: "not a template directory".to_string(),
            });
        }

        Self::from_sources(|slot| {
            let path = dir.join(slot.file_name());
            if !path.exists() {
                debug!("No {} in {}, using built-in template", slot.file_name(), dir.display());
                return Ok(slot.builtin_source().to_string());
            }

            debug!("Loading {} template from {}", slot, path.display());
            std::fs::read_to_string(&path).map_err(|e| ConfigError::Load {
                origin: path.display().to_string(),
                reason: e.to_string(),
            })
        })
    }

    /// Compile the four slots from caller-provided sources.
    ///
    /// # Errors
    ///
    /// Propagates errors from `source` and from template compilation.
    pub fn from_sources(
        mut source: impl FnMut(TemplateSlot) -> Result<String, ConfigError>,
    ) -> Result<Self, ConfigError> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);

        for slot in TemplateSlot::ALL {
            registry
                .register_template_string(slot.name(), source(slot)?)
                .map_err(|e| render_error(slot, &e))?;
        }

        Ok(Self { registry })
    }
}

impl TemplateRenderer for TemplateSet {
    fn render(&self, slot: TemplateSlot, bindings: &Value) -> Result<String, ConfigError> {
        self.registry
            .render(slot.name(), bindings)
            .map_err(|e| render_error(slot, &e))
    }
}

fn render_error(slot: TemplateSlot, err: &impl fmt::Display) -> ConfigError {
    ConfigError::Render {
        template: slot.name().to_string(),
        reason: err.to_string(),
    }
}
