//! Ontology graphs and OOPS! responses used by unit and integration tests.
//!
//! Each constant holds a complete document: Turtle or RDF/XML for the style
//! guide checks, OOPS! response XML for the pitfall report.

mod oops_response;
mod styleguide_rdfxml;
mod styleguide_turtle;

pub use oops_response::{OOPS_EMPTY_RESPONSE, OOPS_RESPONSE, OOPS_UNKNOWN_IMPORTANCE};
pub use styleguide_rdfxml::{STYLEGUIDE_RDFXML, STYLEGUIDE_RELATIVE_RDFXML};
pub use styleguide_turtle::{
    STYLEGUIDE_ANONYMOUS, STYLEGUIDE_EMPTY, STYLEGUIDE_MIXED, STYLEGUIDE_RELATIVE_TURTLE,
};
