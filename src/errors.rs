// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for dnsconfig.
//!
//! This module provides the error taxonomy for a generation run:
//! - Loading the source document
//! - Missing required fields and wrongly-shaped fields
//! - Invalid IPv4 addresses
//! - Template compilation and rendering failures
//!
//! Every error is fatal. The first one detected aborts the run and is
//! surfaced to the operator as a single message.

use thiserror::Error;

/// Errors raised by the address codec.
///
/// The codec only knows the offending value. Callers add the field context
/// when lifting this into [`ConfigError::InvalidAddress`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The value is not a dotted-quad IPv4 address
    #[error("Invalid IP address detected: {value}")]
    InvalidAddress {
        /// The rejected value, verbatim
        value: String,
    },
}

/// Errors that can occur while turning a document into configuration text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The source document could not be read or parsed
    ///
    /// Raised before any rendering happens.
    #[error("Unable to load '{origin}': {reason}")]
    Load {
        /// File path (or other origin label) of the document
        origin: String,
        /// Underlying I/O or parser message
        reason: String,
    },

    /// A required field is absent (or null)
    #[error("The {entity} is missing a {field}")]
    MissingField {
        /// Human-readable description of the containing entity
        entity: String,
        /// Name of the missing field
        field: &'static str,
    },

    /// A field is present but not of the expected shape
    #[error("The key {field} is not of expected format of {expected}")]
    TypeMismatch {
        /// Field path, e.g. `domains` or `aliases`
        field: String,
        /// Expected shape: `sequence`, `mapping` or `string`
        expected: &'static str,
    },

    /// A value expected to be IPv4 failed validation
    #[error("Invalid IP address detected in {context}: {value}")]
    InvalidAddress {
        /// Which entity and field held the value
        context: String,
        /// The rejected value, verbatim
        value: String,
    },

    /// A template failed to compile or render
    #[error("Template '{template}' failed: {reason}")]
    Render {
        /// Template identity (slot name or naming template text)
        template: String,
        /// What went wrong
        reason: String,
    },
}

impl ConfigError {
    /// Lift an [`AddressError`] into a [`ConfigError`] with field context.
    #[must_use]
    pub fn invalid_address(context: impl Into<String>, err: AddressError) -> Self {
        let AddressError::InvalidAddress { value } = err;
        Self::InvalidAddress {
            context: context.into(),
            value,
        }
    }

    /// Returns the stable kind name of this error.
    ///
    /// Used in log fields and by tests that only care about the category.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Load { .. } => "LoadError",
            Self::MissingField { .. } => "MissingField",
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::InvalidAddress { .. } => "InvalidAddress",
            Self::Render { .. } => "RenderError",
        }
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
