//! End-to-end runs of the style guide pipeline on files in a temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use ontoci_conformance::tests::fixtures::{
    STYLEGUIDE_EMPTY, STYLEGUIDE_MIXED, STYLEGUIDE_RDFXML, STYLEGUIDE_RELATIVE_TURTLE,
};
use ontoci_conformance::{run_styleguide, Error, RdfFormat, StyleguideConfig};

fn config_for(dir: &Path, name: &str, content: &str) -> StyleguideConfig {
    let ontology = dir.join(name);
    fs::write(&ontology, content).unwrap();
    let mut config = StyleguideConfig::new(ontology);
    config.report_file = dir.join("styleguide_report.json");
    config.badge_cmdfile = dir.join("styleguide_badge.sh");
    config.badge_svgfile = PathBuf::from("styleguide_badge.svg");
    config
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn turtle_report_without_badge() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), "ontology.ttl", STYLEGUIDE_MIXED);

    let outcome = run_styleguide(&config).unwrap();
    assert_eq!(outcome.summary.classes.total, 2);
    assert_eq!(outcome.summary.classes.compliant, 1);
    assert_eq!(outcome.summary.object_properties.total, 1);
    assert_eq!(outcome.summary.object_properties.compliant, 1);
    assert!(!config.badge_cmdfile.exists());

    let json = read_json(&config.report_file);
    let step = &json["classes"]["https://w3id.org/example/ProcessingStep"];
    assert_eq!(step["rdfsLabelExists"], true);
    assert_eq!(step["classNameStyle"], true);
    let tensile = &json["classes"]["https://w3id.org/example/tensile_test"];
    assert_eq!(tensile["rdfsLabelsLang"], false);
    assert_eq!(tensile["oboCurationStatusExists"], false);
    assert_eq!(tensile["oboTermEditorExistsValid"], false);
    assert_eq!(tensile["classNameStyle"], false);
    let has_input = &json["objectProperties"]["https://w3id.org/example/hasInput"];
    assert_eq!(has_input["objectPropertyNameStyle"], true);
    assert!(json["classes"]
        .get("https://w3id.org/example/Specimen")
        .is_none());
}

#[test]
fn badge_reflects_compliance_fraction() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path(), "ontology.ttl", STYLEGUIDE_MIXED);
    config.create_badge = true;

    let outcome = run_styleguide(&config).unwrap();
    let fraction = outcome.summary.fraction().unwrap();
    assert!((fraction - 2.0 / 3.0).abs() < 1e-9);

    let badge = fs::read_to_string(&config.badge_cmdfile).unwrap();
    assert_eq!(
        badge,
        "badge \"Styleguide compliance\" \"66.7%\" :green > styleguide_badge.svg"
    );
}

#[test]
fn empty_ontology_gets_na_badge() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path(), "empty.ttl", STYLEGUIDE_EMPTY);
    config.create_badge = true;

    let outcome = run_styleguide(&config).unwrap();
    assert_eq!(outcome.summary.total(), 0);
    assert_eq!(outcome.summary.fraction(), None);

    let badge = fs::read_to_string(&config.badge_cmdfile).unwrap();
    assert_eq!(
        badge,
        "badge \"Styleguide compliance\" \"n/a\" :lightgrey > styleguide_badge.svg"
    );
    let json = read_json(&config.report_file);
    assert_eq!(json, serde_json::json!({"classes": {}, "objectProperties": {}}));
}

#[test]
fn rdf_xml_input_is_guessed_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), "ontology.owl", STYLEGUIDE_RDFXML);
    assert_eq!(config.format(), RdfFormat::RdfXml);

    let outcome = run_styleguide(&config).unwrap();
    assert_eq!(outcome.summary.classes.compliant, 1);
    assert_eq!(outcome.summary.object_properties.total, 1);
    assert_eq!(outcome.summary.object_properties.compliant, 0);

    let json = read_json(&config.report_file);
    let has_part = &json["objectProperties"]["https://w3id.org/example/HasPart"];
    assert_eq!(has_part["objectPropertyNameStyle"], false);
    assert_eq!(has_part["skosDefinitionExists"], false);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path(), "ontology.ttl", STYLEGUIDE_MIXED);
    config.create_badge = true;

    run_styleguide(&config).unwrap();
    let report = fs::read(&config.report_file).unwrap();
    let badge = fs::read(&config.badge_cmdfile).unwrap();

    run_styleguide(&config).unwrap();
    assert_eq!(fs::read(&config.report_file).unwrap(), report);
    assert_eq!(fs::read(&config.badge_cmdfile).unwrap(), badge);
}

#[test]
fn explicit_format_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path(), "ontology.nt", STYLEGUIDE_MIXED);
    assert_eq!(config.format(), RdfFormat::NTriples);

    let err = run_styleguide(&config).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { .. }), "{err}");
    assert!(!config.report_file.exists());

    config.format = Some(RdfFormat::Turtle);
    run_styleguide(&config).unwrap();
    assert!(config.report_file.exists());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = StyleguideConfig::new(dir.path().join("absent.ttl"));

    let err = run_styleguide(&config).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "{err}");
}

#[test]
fn relative_iris_are_reported_under_the_file_iri() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), "relative.ttl", STYLEGUIDE_RELATIVE_TURTLE);

    let outcome = run_styleguide(&config).unwrap();
    assert_eq!(outcome.summary.classes.total, 1);
    assert_eq!(outcome.summary.object_properties.total, 1);

    let classes: Vec<&String> = outcome.report.classes.keys().collect();
    assert!(classes[0].starts_with("file:///"), "{classes:?}");
    assert!(classes[0].ends_with("/relative.ttl#Foo"), "{classes:?}");
}
