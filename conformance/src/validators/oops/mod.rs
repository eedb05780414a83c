//! OOPS! (OntOlogy Pitfall Scanner) client.
//!
//! The ontology is posted to the OOPS! REST API; the XML answer lists
//! `Pitfall` and `Suggestion` elements in the `http://www.oeg-upm.net/oops`
//! namespace, each with the ontology elements it affects.

pub mod request;
pub mod response;

pub use request::{HttpTransport, OopsRequest, RawResponse, Transport, DEFAULT_ENDPOINT};
pub use response::{make_report, make_report_from_bytes};
