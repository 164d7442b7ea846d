// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for dnsconfig.
//!
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Input Constants
// ============================================================================

/// Default location of the source document when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "files/dnsmasq.yml";

/// Top-level document key holding the sequence of domains
pub const KEY_DOMAINS: &str = "domains";

// ============================================================================
// DNS Constants
// ============================================================================

/// Suffix appended to reversed IPv4 octets to form a reverse-DNS name
pub const IN_ADDR_ARPA_SUFFIX: &str = "in-addr.arpa";

// ============================================================================
// Template Constants
// ============================================================================

/// File name of the head template inside a template directory
pub const HEAD_TEMPLATE_FILE: &str = "head.tpl";

/// File name of the tail template inside a template directory
pub const TAIL_TEMPLATE_FILE: &str = "tail.tpl";

/// File name of the per-domain template inside a template directory
pub const NETWORK_TEMPLATE_FILE: &str = "network.tpl";

/// File name of the per-host template inside a template directory
pub const HOST_TEMPLATE_FILE: &str = "host.tpl";

// ============================================================================
// Logging Constants
// ============================================================================

/// Log filter used when `RUST_LOG` is unset
///
/// Kept at `warn` so the generated configuration on stdout is the only
/// thing a plain invocation prints.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Environment variable selecting the log output format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "RUST_LOG_FORMAT";
