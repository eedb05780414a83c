//! Fixed vocabulary IRIs queried by the style guide checks.

/// `rdf:type`
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// `rdfs:label`
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// `owl:Class`
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";

/// `owl:ObjectProperty`
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";

/// `skos:definition`
pub const SKOS_DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";

/// OBO namespace.
pub const OBO: &str = "http://purl.obolibrary.org/obo/";

/// `obo:IAO_0000114` (has curation status).
pub const OBO_CURATION_STATUS: &str = "http://purl.obolibrary.org/obo/IAO_0000114";

/// `obo:IAO_0000117` (term editor).
pub const OBO_TERM_EDITOR: &str = "http://purl.obolibrary.org/obo/IAO_0000117";

/// Namespace of OOPS! response documents.
pub const OOPS_NS: &str = "http://www.oeg-upm.net/oops";
