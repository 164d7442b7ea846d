// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Static host records.

use serde_json::Value;
use tracing::debug;

use super::{qualify, DerivedRecord, RecordOrigin};
use crate::address::to_reverse;
use crate::errors::ConfigError;
use crate::model::{Domain, Host};

/// Derive the record for a validated host.
///
/// # Arguments
///
/// * `host` - Validated host entry
/// * `domain` - Name of the owning domain (e.g., "example.com")
///
/// # Errors
///
/// Returns [`ConfigError::InvalidAddress`] if `host.ip` is not IPv4.
///
/// # Examples
///
/// ```
/// use dnsconfig::model::{Domain, Host};
/// use dnsconfig::records::host::derive_host_record;
/// use serde_json::json;
///
/// let domain_raw = json!({ "name": "example.com" });
/// let domain = Domain::from_value(&domain_raw, 0).unwrap();
/// let raw = json!({ "name": "www", "ip": "10.0.0.1", "aliases": ["web"] });
/// let host = Host::from_value(&raw, 0, &domain).unwrap();
///
/// let record = derive_host_record(&host, "example.com").unwrap();
/// assert_eq!(record.forward_fqdn, "www.example.com");
/// assert_eq!(record.alias_fqdns, vec!["web.example.com"]);
/// assert_eq!(record.reverse_name, "1.0.0.10.in-addr.arpa");
/// ```
pub fn derive_host_record(host: &Host<'_>, domain: &str) -> Result<DerivedRecord, ConfigError> {
    let reverse_name = to_reverse(&host.ip).map_err(|e| {
        ConfigError::invalid_address(
            format!("host '{}' in domain '{domain}' field 'ip'", host.name),
            e,
        )
    })?;

    let alias_fqdns = host
        .aliases
        .iter()
        .map(|alias| qualify(alias, domain))
        .collect();

    // Short addresses first, then the already-qualified names
    let extra_address_fqdns = host
        .addresses
        .iter()
        .map(|address| qualify(address, domain))
        .chain(host.fqdns.iter().cloned())
        .collect();

    Ok(DerivedRecord {
        forward_fqdn: qualify(&host.name, domain),
        ip: host.ip.clone(),
        reverse_name,
        alias_fqdns,
        extra_address_fqdns,
        origin: RecordOrigin::Static {
            host: host.raw.clone(),
        },
    })
}

/// Validate the host entry at `hosts[index]` of `domain` and derive its record.
///
/// # Errors
///
/// Returns the validation errors of [`Host::from_value`] and the address
/// errors of [`derive_host_record`].
pub fn build_host_record(
    raw: &Value,
    index: usize,
    domain: &Domain<'_>,
) -> Result<DerivedRecord, ConfigError> {
    let host = Host::from_value(raw, index, domain)?;
    let record = derive_host_record(&host, &domain.name)?;

    debug!(
        "Host {} -> {} ({} aliases, {} extra addresses)",
        record.forward_fqdn,
        record.ip,
        record.alias_fqdns.len(),
        record.extra_address_fqdns.len()
    );

    Ok(record)
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod host_tests;
