// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for document loading

#[cfg(test)]
mod tests {
    use super::super::{load_document, parse_document};
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_parse_yaml_document() {
        let text = r"
domains:
  - name: example.com
    hosts:
      - name: www
        ip: 10.0.0.1
        aliases: [web]
    dynamic:
      start: 10.0.0.100
      end: 10.0.0.200
      template: 'dhcp-{d}'
";
        let doc = parse_document(text, "inline").unwrap();

        assert_eq!(
            doc,
            json!({
                "domains": [{
                    "name": "example.com",
                    "hosts": [{ "name": "www", "ip": "10.0.0.1", "aliases": ["web"] }],
                    "dynamic": { "start": "10.0.0.100", "end": "10.0.0.200", "template": "dhcp-{d}" },
                }],
            })
        );
    }

    #[test]
    fn test_parse_json_document() {
        let doc = parse_document(r#"{"domains": [{"name": "lan"}]}"#, "inline").unwrap();
        assert_eq!(doc, json!({ "domains": [{ "name": "lan" }] }));
    }

    #[test]
    fn test_merge_keys_are_applied() {
        let text = r"
base: &base
  aliases: [shared]
domains:
  - name: lan
    hosts:
      - <<: *base
        name: a
        ip: 10.0.0.1
";
        let doc = parse_document(text, "inline").unwrap();
        assert_eq!(
            doc["domains"][0]["hosts"][0],
            json!({ "aliases": ["shared"], "name": "a", "ip": "10.0.0.1" })
        );
    }

    #[test]
    fn test_empty_document_is_null() {
        assert_eq!(parse_document("", "inline").unwrap(), json!(null));
    }

    #[test]
    fn test_parse_errors_are_load_errors() {
        let err = parse_document("domains: [unclosed", "files/broken.yml").unwrap_err();

        assert_eq!(err.kind(), "LoadError");
        assert!(
            err.to_string().starts_with("Unable to load 'files/broken.yml': "),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dnsmasq.yml");
        fs::write(&path, "domains:\n  - name: lan\n").unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc, json!({ "domains": [{ "name": "lan" }] }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("missing.yml")).unwrap_err();
        assert_eq!(err.kind(), "LoadError");
    }
}
