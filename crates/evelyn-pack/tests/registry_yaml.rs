//! # Registry YAML Loading
//!
//! A registry dumped with `to_yaml()` must load back identically, and
//! malformed documents must be rejected at load rather than at lookup.

use std::io::Write;

use evelyn_core::JurisdictionCode;
use evelyn_pack::{CapitalGainsRate, JurisdictionRegistry, PackError};

fn builtin_yaml() -> String {
    JurisdictionRegistry::build_builtin()
        .expect("built-in registry should build")
        .to_yaml()
        .expect("built-in registry should serialize")
}

#[test]
fn builtin_roundtrips_through_yaml() {
    let original = JurisdictionRegistry::build_builtin().unwrap();
    let reloaded = JurisdictionRegistry::from_yaml_str(&builtin_yaml()).unwrap();
    assert_eq!(reloaded, original);
}

#[test]
fn reloaded_patterns_still_validate() {
    let registry = JurisdictionRegistry::from_yaml_str(&builtin_yaml()).unwrap();
    let ie = registry.get(JurisdictionCode::IE).unwrap();
    assert!(ie.address.postcode_pattern.matches_normalized("D02 AF30"));
    assert_eq!(ie.tax.capital_gains_rate, CapitalGainsRate::Flat(33));
}

#[test]
fn loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(builtin_yaml().as_bytes()).unwrap();

    let registry = JurisdictionRegistry::from_yaml_path(file.path()).unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    let err = JurisdictionRegistry::from_yaml_path(&path).unwrap_err();
    match err {
        PackError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn esg_section_is_optional() {
    let yaml = builtin_yaml();
    let without_esg = yaml
        .split("\nesg:")
        .next()
        .expect("document has a jurisdictions section")
        .to_string();
    let registry = JurisdictionRegistry::from_yaml_str(&without_esg).unwrap();
    assert_eq!(registry.esg().priority_areas.len(), 3);
}

#[test]
fn broken_pattern_is_rejected_at_load() {
    let yaml = builtin_yaml().replacen("{7}[A-Z]{1,2}$", "{7}[A-Z", 1);
    assert!(!yaml.contains("{7}[A-Z]{1,2}$"));
    let err = JurisdictionRegistry::from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(err, PackError::Yaml(_)), "got {err:?}");
}

#[test]
fn lowercase_code_is_rejected_at_load() {
    let yaml = builtin_yaml().replacen("code: IE", "code: ie", 1);
    let err = JurisdictionRegistry::from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(err, PackError::Yaml(_)), "got {err:?}");
}

#[test]
fn registry_without_uk_is_rejected() {
    let yaml = builtin_yaml().replacen("code: UK", "code: GB", 1);
    let err = JurisdictionRegistry::from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(err, PackError::MissingDefault(JurisdictionCode::UK)));
}

#[test]
fn empty_registry_is_rejected() {
    let err = JurisdictionRegistry::from_yaml_str("jurisdictions: []\n").unwrap_err();
    assert!(matches!(err, PackError::Empty));
}
