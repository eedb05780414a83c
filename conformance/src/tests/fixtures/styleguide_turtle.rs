//! Turtle ontologies for the style guide checks.

/// Two classes (one compliant) and one compliant object property.
///
/// `ex:ProcessingStep` and `ex:hasInput` satisfy every check;
/// `ex:tensile_test` fails all but the existence and definition-language checks.
pub const STYLEGUIDE_MIXED: &str = r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix obo:  <http://purl.obolibrary.org/obo/> .
@prefix ex:   <https://w3id.org/example/> .

<https://w3id.org/example> a owl:Ontology ;
    rdfs:label "Example Ontology"@en .

ex:ProcessingStep a owl:Class ;
    rdfs:label "Processing Step"@en , "Verarbeitungsschritt"@de ;
    skos:definition "A step of a manufacturing process."@en ;
    obo:IAO_0000114 obo:IAO_0000125 ;
    obo:IAO_0000117 "PERSON:Jane Doe" .

ex:tensile_test a owl:Class ;
    rdfs:label "tensile test" ;
    skos:definition "A mechanical test."@en ;
    obo:IAO_0000117 "Jane Doe" .

ex:hasInput a owl:ObjectProperty ;
    rdfs:label "Has Input"@en ;
    skos:definition "Relates a process to its input."@en ;
    obo:IAO_0000114 obo:IAO_0000125 ;
    obo:IAO_0000117 "PERSON:John Roe" .

ex:Specimen rdfs:label "Not Declared"@en .
"#;

/// An ontology header with no classes and no object properties.
pub const STYLEGUIDE_EMPTY: &str = r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

<https://w3id.org/empty> a owl:Ontology ;
    rdfs:label "Empty"@en .
"#;

/// One named class and one anonymous union class.
pub const STYLEGUIDE_ANONYMOUS: &str = r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex:   <https://w3id.org/example/> .

ex:Material a owl:Class ;
    rdfs:label "Material"@en .

_:union a owl:Class ;
    owl:unionOf ( ex:Material ex:Material ) .
"#;

/// A class and an object property with relative IRIs.
pub const STYLEGUIDE_RELATIVE_TURTLE: &str = r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .

<#Foo> a owl:Class .
<#hasFoo> a owl:ObjectProperty .
"#;
