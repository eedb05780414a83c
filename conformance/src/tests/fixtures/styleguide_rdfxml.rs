//! RDF/XML ontology for the style guide checks.

/// A compliant class `ex:Specimen` and a non-compliant object property `ex:HasPart`.
pub const STYLEGUIDE_RDFXML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#"
         xmlns:skos="http://www.w3.org/2004/02/skos/core#"
         xmlns:obo="http://purl.obolibrary.org/obo/">
  <owl:Ontology rdf:about="https://w3id.org/example"/>
  <owl:Class rdf:about="https://w3id.org/example/Specimen">
    <rdfs:label xml:lang="en">Specimen</rdfs:label>
    <skos:definition xml:lang="en">A piece of material prepared for testing.</skos:definition>
    <obo:IAO_0000114 rdf:resource="http://purl.obolibrary.org/obo/IAO_0000125"/>
    <obo:IAO_0000117>PERSON:Jane Doe</obo:IAO_0000117>
  </owl:Class>
  <owl:ObjectProperty rdf:about="https://w3id.org/example/HasPart">
    <rdfs:label xml:lang="en">Has Part</rdfs:label>
  </owl:ObjectProperty>
</rdf:RDF>
"#;

/// A class named by a fragment relative to the document IRI.
pub const STYLEGUIDE_RELATIVE_RDFXML: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:Class rdf:about="#Foo">
    <rdfs:label xml:lang="en">Foo</rdfs:label>
  </owl:Class>
</rdf:RDF>
"##;
