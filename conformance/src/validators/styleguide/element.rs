//! Per-element style guide checks.

use crate::graph::{GraphQuery, Node};
use crate::report::{ClassChecks, CommonChecks, ObjectPropertyChecks};
use crate::vocab;

use super::naming::{
    extract_local_name, has_language, is_capitalized, is_lower_camel_case, is_person_reference,
    is_upper_camel_case, DEFAULT_LANGUAGES,
};

/// Exactly one `obo:IAO_0000114` value.
pub fn has_curation_status<G: GraphQuery + ?Sized>(subject: &Node, graph: &G) -> bool {
    graph.objects(subject, vocab::OBO_CURATION_STATUS).len() == 1
}

/// At least one `obo:IAO_0000117` value, and every value is a `PERSON:` reference.
///
/// An element without term editor fails.
pub fn has_valid_term_editor<G: GraphQuery + ?Sized>(subject: &Node, graph: &G) -> bool {
    let editors = graph.objects(subject, vocab::OBO_TERM_EDITOR);
    !editors.is_empty()
        && editors
            .iter()
            .all(|editor| is_person_reference(editor.lexical()))
}

/// Checks shared by classes and object properties.
pub fn check_common<G: GraphQuery + ?Sized>(subject: &Node, graph: &G) -> CommonChecks {
    let labels = graph.objects(subject, vocab::RDFS_LABEL);
    let definitions = graph.objects(subject, vocab::SKOS_DEFINITION);
    CommonChecks {
        rdfs_label_exists: !labels.is_empty(),
        rdfs_labels_lang: has_language(labels.iter().copied(), DEFAULT_LANGUAGES),
        rdfs_labels_style: labels.iter().all(|label| is_capitalized(label.lexical())),
        skos_definition_exists: !definitions.is_empty(),
        skos_definitions_lang: has_language(definitions.iter().copied(), DEFAULT_LANGUAGES),
        obo_curation_status_exists: has_curation_status(subject, graph),
        obo_term_editor_exists_valid: has_valid_term_editor(subject, graph),
    }
}

/// Common checks plus an UpperCamelCase local name.
pub fn check_class<G: GraphQuery + ?Sized>(subject: &Node, graph: &G) -> ClassChecks {
    ClassChecks {
        common: check_common(subject, graph),
        class_name_style: is_upper_camel_case(extract_local_name(subject.lexical())),
    }
}

/// Common checks plus a lowerCamelCase local name.
pub fn check_object_property<G: GraphQuery + ?Sized>(
    subject: &Node,
    graph: &G,
) -> ObjectPropertyChecks {
    ObjectPropertyChecks {
        common: check_common(subject, graph),
        object_property_name_style: is_lower_camel_case(extract_local_name(subject.lexical())),
    }
}
