// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # dnsconfig - dnsmasq record generator
//!
//! dnsconfig turns a declarative description of network domains and hosts
//! into dnsmasq host and reverse-DNS records.
//!
//! ## Overview
//!
//! The input is a document with a `domains` sequence. Each domain has a
//! `name`, a list of static `hosts`, and an optional `dynamic` range whose
//! addresses are named procedurally. The output combines a head fragment,
//! one rendered block per domain, and a tail fragment.
//!
//! ## Modules
//!
//! - [`loader`] - YAML source loading
//! - [`model`] - Checked views over the loaded document
//! - [`address`] - IPv4 validation and reverse-DNS names
//! - [`records`] - Host record derivation and dynamic range expansion
//! - [`template`] - Template slots, Handlebars template sets, naming templates
//! - [`domain`] - Per-domain rendering
//! - [`renderer`] - Whole-document rendering
//! - [`errors`] - Error types
//!
//! ## Example
//!
//! ```rust
//! use dnsconfig::loader::parse_document;
//! use dnsconfig::renderer::ConfigurationRenderer;
//! use dnsconfig::template::TemplateSet;
//!
//! let document = parse_document(
//!     r"
//! domains:
//!   - name: example.com
//!     hosts:
//!       - name: www
//!         ip: 10.0.0.1
//!         aliases: [web]
//!     dynamic:
//!       start: 10.0.0.100
//!       end: 10.0.0.102
//!       template: 'dhcp-{d}'
//! ",
//!     "inline",
//! )
//! .unwrap();
//!
//! let templates = TemplateSet::builtin().unwrap();
//! let rendered = ConfigurationRenderer::new(&templates).render(&document).unwrap();
//!
//! assert!(rendered.text.contains("address=/www.example.com/10.0.0.1"));
//! assert!(rendered.text.contains("cname=web.example.com,www.example.com"));
//! assert!(rendered.text.contains("ptr-record=101.0.0.10.in-addr.arpa,dhcp-101.example.com"));
//! assert!(!rendered.text.contains("dhcp-102"));
//! ```

pub mod address;
pub mod constants;
pub mod domain;
pub mod errors;
pub mod loader;
pub mod model;
pub mod records;
pub mod renderer;
pub mod template;
