//! Ontology CI checks.
//!
//! Two report generators for an ontology-engineering CI workflow:
//!
//! | Pipeline | Input | Artifacts |
//! |----------|-------|-----------|
//! | OOPS! pitfall report | ontology file or URL, sent to the OOPS! REST API | `oops_report.json`, `_oops_badge_command.sh`, `oops_request_raw.txt` |
//! | Style guide compliance | local ontology file (RDF/XML, Turtle, N-Triples) | JSON compliance report, optional badge command |
//!
//! Badges are never rendered here; the pipelines only write the one-line
//! `badge` shell command that a later CI step executes.
//!
//! # Entry Point
//!
//! ```no_run
//! use ontoci_conformance::{run_styleguide, StyleguideConfig};
//! use std::path::PathBuf;
//!
//! let config = StyleguideConfig::new(PathBuf::from("ontology.ttl"));
//! let outcome = run_styleguide(&config).expect("style guide check failed");
//! println!("{:?}", outcome.summary.fraction());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod badge;
pub mod config;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod report;
pub mod tests;
pub mod validators;
pub mod vocab;

pub use badge::{select_badge_color, BadgeDirective};
pub use config::{OopsConfig, OntologySource, StyleguideConfig};
pub use error::{Error, Result};
pub use graph::{GraphQuery, Literal, Node, OntologyGraph, RdfFormat};
pub use pipeline::{run_oops, run_styleguide, OopsOutcome, StyleguideOutcome};
pub use report::{
    CategorySummary, ClassChecks, CommonChecks, ComplianceReport, ComplianceSummary, Level,
    ObjectPropertyChecks, OopsReport, Pitfall, Suggestion,
};
pub use validators::oops::request::{HttpTransport, RawResponse, Transport};
