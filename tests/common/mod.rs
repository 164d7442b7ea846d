// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A document exercising every record feature across two domains
pub const SAMPLE_CONFIG: &str = "\
domains:
  - name: example.com
    hosts:
      - name: www
        ip: 10.0.0.1
        aliases: [web]
        addresses: [alt]
        fqdns: [x.example.org]
  - name: lan
    hosts:
      - name: gw
        ip: 192.168.1.1
        comment: Router
    dynamic:
      start: 192.168.1.100
      end: 192.168.1.102
      template: 'dhcp-{d}'
      comment: DHCP pool
";

/// Expected output of `SAMPLE_CONFIG` with the built-in templates
pub const SAMPLE_OUTPUT: &str = "\
# dnsmasq host and reverse-DNS records
#
# Generated by dnsconfig. Do not edit by hand, changes are overwritten
# on the next run.
#
# Domains:
#   example.com
#   lan

#
# example.com
#
address=/www.example.com/10.0.0.1
address=/alt.example.com/10.0.0.1
address=/x.example.org/10.0.0.1
cname=web.example.com,www.example.com
ptr-record=1.0.0.10.in-addr.arpa,www.example.com

#
# lan
#
# Router
address=/gw.lan/192.168.1.1
ptr-record=1.1.168.192.in-addr.arpa,gw.lan
# DHCP pool
address=/dhcp-100.lan/192.168.1.100
ptr-record=100.1.168.192.in-addr.arpa,dhcp-100.lan
address=/dhcp-101.lan/192.168.1.101
ptr-record=101.1.168.192.in-addr.arpa,dhcp-101.lan

# End of generated records
";

/// Scratch directory holding a config file and optional templates
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Root directory of the workspace
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the workspace and return its path
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, contents).expect("failed to write file");
        path
    }
}
