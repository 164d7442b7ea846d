// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! IPv4 validation and reverse-DNS naming.
//!
//! Addresses are accepted only in strict dotted-quad form: four decimal
//! octets in `0..=255`, no leading zeros, no surrounding whitespace.
//! IPv6 literals are rejected.

use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::constants::IN_ADDR_ARPA_SUFFIX;
use crate::errors::AddressError;

/// Returns `true` if `value` is a dotted-quad IPv4 address.
///
/// # Examples
///
/// ```
/// use dnsconfig::address::validate_ipv4;
///
/// assert!(validate_ipv4("192.168.1.10"));
/// assert!(!validate_ipv4("192.168.1"));
/// assert!(!validate_ipv4("192.168.1.256"));
/// assert!(!validate_ipv4("fe80::1"));
/// ```
#[must_use]
pub fn validate_ipv4(value: &str) -> bool {
    parse_ipv4(value).is_ok()
}

/// Parse a dotted-quad IPv4 address.
///
/// # Errors
///
/// Returns [`AddressError::InvalidAddress`] carrying `value` verbatim if it
/// is not a valid IPv4 address.
pub fn parse_ipv4(value: &str) -> Result<Ipv4Addr, AddressError> {
    Ipv4Addr::from_str(value).map_err(|_| AddressError::InvalidAddress {
        value: value.to_string(),
    })
}

/// Convert an IPv4 address string to its reverse-DNS name.
///
/// `a.b.c.d` becomes `d.c.b.a.in-addr.arpa`.
///
/// # Examples
///
/// ```
/// use dnsconfig::address::to_reverse;
///
/// assert_eq!(to_reverse("10.0.0.1").unwrap(), "1.0.0.10.in-addr.arpa");
/// assert!(to_reverse("10.0.0").is_err());
/// ```
///
/// # Errors
///
/// Returns [`AddressError::InvalidAddress`] if `value` fails [`validate_ipv4`].
pub fn to_reverse(value: &str) -> Result<String, AddressError> {
    parse_ipv4(value).map(reverse_name)
}

/// Reverse-DNS name of an already parsed address.
#[must_use]
pub fn reverse_name(addr: Ipv4Addr) -> String {
    let [a, b, c, d] = addr.octets();
    format!("{d}.{c}.{b}.{a}.{IN_ADDR_ARPA_SUFFIX}")
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod address_tests;
