// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `main.rs` - argument parsing and the run pipeline

#[cfg(test)]
mod tests {
    use super::super::{run, Args};
    use clap::{CommandFactory, Parser};
    use std::fs;
    use std::path::PathBuf;

    const CONFIG: &str = "\
domains:
  - name: lan
    hosts:
      - name: gw
        ip: 192.168.1.1
";

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["dnsconfig"]).unwrap();

        assert_eq!(args.config, PathBuf::from("files/dnsmasq.yml"));
        assert!(args.templates.is_none());
        assert!(args.output.is_none());
        assert!(!args.check);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "dnsconfig",
            "-c",
            "net.yml",
            "--templates",
            "tpl",
            "-o",
            "out.conf",
            "--check",
        ])
        .unwrap();

        assert_eq!(args.config, PathBuf::from("net.yml"));
        assert_eq!(args.templates, Some(PathBuf::from("tpl")));
        assert_eq!(args.output, Some(PathBuf::from("out.conf")));
        assert!(args.check);
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("dnsmasq.yml");
        let output = dir.path().join("hosts.conf");
        fs::write(&config, CONFIG).unwrap();

        let args = Args {
            config,
            templates: None,
            output: Some(output.clone()),
            check: false,
        };
        run(&args).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("address=/gw.lan/192.168.1.1\n"));
        assert!(text.contains("ptr-record=1.1.168.192.in-addr.arpa,gw.lan\n"));
    }

    #[test]
    fn test_run_check_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("dnsmasq.yml");
        let output = dir.path().join("hosts.conf");
        fs::write(&config, CONFIG).unwrap();

        let args = Args {
            config,
            templates: None,
            output: Some(output.clone()),
            check: true,
        };
        run(&args).unwrap();

        assert!(!output.exists());
    }

    #[test]
    fn test_run_failure_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("dnsmasq.yml");
        let output = dir.path().join("hosts.conf");
        fs::write(&config, "domains:\n  - name: lan\n    hosts:\n      - name: gw\n").unwrap();

        let args = Args {
            config,
            templates: None,
            output: Some(output.clone()),
            check: false,
        };
        let err = run(&args).unwrap_err();

        assert_eq!(
            format!("{err:#}"),
            "Unable to parse the configuration file: The host 'gw' in domain 'lan' is missing a ip"
        );
        assert!(!output.exists());
    }
}
