//! Style guide compliance of an ontology graph.
//!
//! Every `owl:Class` and `owl:ObjectProperty` subject is checked for:
//! - labels: present, language-tagged (English required), capitalized
//! - definitions: present, language-tagged (English required)
//! - exactly one OBO curation status
//! - at least one OBO term editor, each a `PERSON:` reference
//! - local name style: UpperCamelCase for classes, lowerCamelCase for object properties

pub mod element;
pub mod naming;

use std::collections::BTreeMap;

use tracing::debug;

use crate::graph::{GraphQuery, Node};
use crate::report::{ClassChecks, ComplianceReport, ObjectPropertyChecks};
use crate::vocab;

pub use element::{check_class, check_common, check_object_property};

/// Checks all subjects typed `owl:Class`.
pub fn check_classes<G: GraphQuery + ?Sized>(graph: &G) -> BTreeMap<String, ClassChecks> {
    graph
        .subjects(vocab::RDF_TYPE, &Node::iri(vocab::OWL_CLASS))
        .into_iter()
        .map(|subject| {
            let checks = check_class(subject, graph);
            debug!(class = %subject, compliant = checks.is_compliant(), "checked class");
            (subject.lexical().to_owned(), checks)
        })
        .collect()
}

/// Checks all subjects typed `owl:ObjectProperty`.
pub fn check_object_properties<G: GraphQuery + ?Sized>(
    graph: &G,
) -> BTreeMap<String, ObjectPropertyChecks> {
    graph
        .subjects(vocab::RDF_TYPE, &Node::iri(vocab::OWL_OBJECT_PROPERTY))
        .into_iter()
        .map(|subject| {
            let checks = check_object_property(subject, graph);
            debug!(
                object_property = %subject,
                compliant = checks.is_compliant(),
                "checked object property"
            );
            (subject.lexical().to_owned(), checks)
        })
        .collect()
}

/// Builds the compliance report for a whole graph.
pub fn check_graph<G: GraphQuery + ?Sized>(graph: &G) -> ComplianceReport {
    ComplianceReport {
        classes: check_classes(graph),
        object_properties: check_object_properties(graph),
    }
}
