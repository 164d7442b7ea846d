// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Per-domain rendering.
//!
//! A domain renders its static hosts in document order, then the addresses
//! of its dynamic range, each through the `host` template. The concatenated
//! text is bound as `records`, next to the raw domain as `network`, for one
//! `network` template render.

use serde_json::json;
use tracing::{debug, info};

use crate::errors::ConfigError;
use crate::model::{Domain, DynamicRange};
use crate::records::host::build_host_record;
use crate::records::range::RangeExpander;
use crate::records::DerivedRecord;
use crate::template::{TemplateRenderer, TemplateSlot};

/// The rendered text of one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDomain {
    /// Domain name
    pub name: String,
    /// Output of the `network` template
    pub text: String,
    /// Static hosts plus dynamic addresses rendered
    pub record_count: usize,
}

/// Render a validated domain.
///
/// Hosts and the dynamic range are validated here, as they are reached.
///
/// # Errors
///
/// Returns the first validation, address or template error encountered.
/// Nothing is returned for a domain that fails part way.
pub fn render_domain<R>(domain: &Domain<'_>, templates: &R) -> Result<RenderedDomain, ConfigError>
where
    R: TemplateRenderer + ?Sized,
{
    debug!("Rendering domain {} ({})", domain.name, domain.path);

    let mut records = String::new();
    let mut record_count = 0;

    for (i, host) in domain.hosts.iter().enumerate() {
        let record = build_host_record(host, i, domain)?;
        render_record(&record, templates, &mut records)?;
        record_count += 1;
    }

    if let Some(dynamic) = domain.dynamic {
        let range = DynamicRange::from_value(dynamic, domain)?;
        for record in RangeExpander::new(&range, &domain.name)? {
            render_record(&record?, templates, &mut records)?;
            record_count += 1;
        }
    }

    let bindings = json!({
        "network": domain.raw,
        "records": records,
    });
    let text = templates.render(TemplateSlot::Network, &bindings)?;

    info!(
        "Rendered domain {} with {} records",
        domain.name, record_count
    );

    Ok(RenderedDomain {
        name: domain.name.clone(),
        text,
        record_count,
    })
}

fn render_record<R>(
    record: &DerivedRecord,
    templates: &R,
    out: &mut String,
) -> Result<(), ConfigError>
where
    R: TemplateRenderer + ?Sized,
{
    let text = templates.render(TemplateSlot::Host, &record.bindings()?)?;
    out.push_str(&text);
    Ok(())
}

#[cfg(test)]
#[path = "domain_tests.rs"]
mod domain_tests;
