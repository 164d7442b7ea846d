// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Dynamic range expansion.
//!
//! A range from `sa.sb.sc.sd` to `ea.eb.ec.ed` is walked as four nested
//! loops in ascending order:
//!
//! ```text
//! for a in sa..=ea
//!   for b in sb..=eb
//!     for c in sc..=ec
//!       for d in sd..ed      <- last octet excludes its end value
//! ```
//!
//! Every octet is looped independently, so `10.0.1.250 - 10.0.2.10` yields
//! nothing: `d` starts at 250 and must stay below 10. A start octet above its
//! end octet simply produces zero iterations.
//!
//! The expansion is lazy. [`RangeExpander`] yields one [`DerivedRecord`] per
//! address without materializing the range. Items are results because the
//! naming template is rendered per address; the iterator stops after the
//! first error.

use std::net::Ipv4Addr;

use tracing::{debug, warn};

use super::{qualify, DerivedRecord, RecordOrigin};
use crate::address::{parse_ipv4, reverse_name};
use crate::errors::ConfigError;
use crate::model::DynamicRange;
use crate::template::name::{NameBindings, NameTemplate};

/// Iterator over the records of one dynamic range.
#[derive(Debug)]
pub struct RangeExpander {
    domain: String,
    template: NameTemplate,
    comment: Option<String>,
    start: [u8; 4],
    end: [u8; 4],
    next: Option<[u8; 4]>,
}

impl RangeExpander {
    /// Prepare the expansion of `range` inside `domain`.
    ///
    /// Validates both endpoints and compiles the naming template before any
    /// record is produced.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidAddress`] if `start` or `end` is not IPv4
    /// - [`ConfigError::Render`] if the naming template is malformed
    pub fn new(range: &DynamicRange, domain: &str) -> Result<Self, ConfigError> {
        let endpoint = |field: &str, value: &str| {
            parse_ipv4(value).map(|addr| addr.octets()).map_err(|e| {
                ConfigError::invalid_address(
                    format!("dynamic range of domain '{domain}' field '{field}'"),
                    e,
                )
            })
        };
        let start = endpoint("start", &range.start)?;
        let end = endpoint("end", &range.end)?;
        let template = NameTemplate::compile(&range.template)?;

        let expander = Self {
            domain: domain.to_string(),
            template,
            comment: range.comment.clone(),
            start,
            end,
            next: first_address(start, end),
        };

        let total = expander.total();
        if total == 0 {
            warn!(
                "Dynamic range {} - {} of domain {} contains no addresses",
                range.start, range.end, domain
            );
        } else {
            debug!(
                "Dynamic range {} - {} of domain {} expands to {} addresses",
                range.start, range.end, domain, total
            );
        }

        Ok(expander)
    }

    /// Number of addresses in the whole expansion.
    #[must_use]
    pub fn total(&self) -> usize {
        let [sa, sb, sc, sd] = self.start.map(usize::from);
        let [ea, eb, ec, ed] = self.end.map(usize::from);

        let inclusive = |s: usize, e: usize| if s <= e { e - s + 1 } else { 0 };
        let exclusive = |s: usize, e: usize| e.saturating_sub(s);

        inclusive(sa, ea) * inclusive(sb, eb) * inclusive(sc, ec) * exclusive(sd, ed)
    }

    /// Step to the address after `current` in nested-loop order.
    fn advance(&self, current: [u8; 4]) -> Option<[u8; 4]> {
        let [a, b, c, d] = current;
        let [_, sb, sc, sd] = self.start;
        let [ea, eb, ec, ed] = self.end;

        // d < ed holds for every yielded address, so d + 1 cannot overflow
        if d + 1 < ed {
            return Some([a, b, c, d + 1]);
        }
        if c < ec {
            return Some([a, b, c + 1, sd]);
        }
        if b < eb {
            return Some([a, b + 1, sc, sd]);
        }
        if a < ea {
            return Some([a + 1, sb, sc, sd]);
        }
        None
    }
}

impl Iterator for RangeExpander {
    type Item = Result<DerivedRecord, ConfigError>;

    fn next(&mut self) -> Option<Self::Item> {
        let octets = self.next?;
        self.next = self.advance(octets);

        let addr = Ipv4Addr::from(octets);
        let ip = addr.to_string();
        let reverse = reverse_name(addr);
        let rendered = self.template.render(&NameBindings {
            octets,
            ip: &ip,
            reverse_name: &reverse,
        });
        let name = match rendered {
            Ok(name) => name,
            Err(e) => {
                self.next = None;
                return Some(Err(e));
            }
        };

        Some(Ok(DerivedRecord {
            forward_fqdn: qualify(&name, &self.domain),
            ip,
            reverse_name: reverse,
            alias_fqdns: Vec::new(),
            extra_address_fqdns: Vec::new(),
            origin: RecordOrigin::Dynamic {
                octets,
                // Attached to the first record only
                comment: self.comment.take(),
            },
        }))
    }
}

/// First address of the expansion, or `None` if any loop level is empty.
fn first_address(start: [u8; 4], end: [u8; 4]) -> Option<[u8; 4]> {
    let [sa, sb, sc, sd] = start;
    let [ea, eb, ec, ed] = end;

    (sa <= ea && sb <= eb && sc <= ec && sd < ed).then_some(start)
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod range_tests;
