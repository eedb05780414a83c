//! OOPS! REST API responses.

/// Three pitfalls (Minor, Critical, Minor) and one suggestion.
///
/// Affected elements span the `http://ex.org/A` and `http://ex.org/B`
/// namespaces so that restriction filtering can be observed.
pub const OOPS_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:oops="http://www.oeg-upm.net/oops">
  <oops:Response>
    <oops:Pitfall>
      <oops:Code>P08</oops:Code>
      <oops:Name>Missing annotations</oops:Name>
      <oops:Description>Ontology terms lack annotations.</oops:Description>
      <oops:Importance>Minor</oops:Importance>
      <oops:NumberAffectedElements>2</oops:NumberAffectedElements>
      <oops:AffectedElement>http://ex.org/A/X</oops:AffectedElement>
      <oops:AffectedElement>http://ex.org/B/Y</oops:AffectedElement>
    </oops:Pitfall>
    <oops:Pitfall>
      <oops:Code>P10</oops:Code>
      <oops:Name>Missing disjointness</oops:Name>
      <oops:Description>The ontology lacks disjoint axioms.</oops:Description>
      <oops:Importance>Critical</oops:Importance>
      <oops:NumberAffectedElements>1</oops:NumberAffectedElements>
      <oops:AffectedElement>http://ex.org/B/Z</oops:AffectedElement>
    </oops:Pitfall>
    <oops:Pitfall>
      <oops:Code>P22</oops:Code>
      <oops:Name>Using different naming conventions in the ontology</oops:Name>
      <oops:Description>The ontology elements are not named following the same convention.</oops:Description>
      <oops:Importance>Minor</oops:Importance>
      <oops:NumberAffectedElements>1</oops:NumberAffectedElements>
      <oops:Affects>
        <oops:AffectedElement>http://ex.org/A/W</oops:AffectedElement>
      </oops:Affects>
    </oops:Pitfall>
    <oops:Suggestion>
      <oops:Name>Symmetric or transitive object properties</oops:Name>
      <oops:Description>The domain and range axioms are equal for each property.</oops:Description>
      <oops:NumberAffectedElements>2</oops:NumberAffectedElements>
      <oops:AffectedElement>http://ex.org/B/Y</oops:AffectedElement>
      <oops:AffectedElement>http://ex.org/A/V</oops:AffectedElement>
    </oops:Suggestion>
  </oops:Response>
</rdf:RDF>
"#;

/// A response without pitfalls or suggestions.
pub const OOPS_EMPTY_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:oops="http://www.oeg-upm.net/oops">
  <oops:Response/>
</rdf:RDF>
"#;

/// A pitfall whose importance is not one of the known levels.
pub const OOPS_UNKNOWN_IMPORTANCE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<oops:Response xmlns:oops="http://www.oeg-upm.net/oops">
  <oops:Pitfall>
    <oops:Code>P99</oops:Code>
    <oops:Name>Invented</oops:Name>
    <oops:Description>Not a real pitfall.</oops:Description>
    <oops:Importance>Severe</oops:Importance>
    <oops:AffectedElement>http://ex.org/A/X</oops:AffectedElement>
  </oops:Pitfall>
</oops:Response>
"#;
