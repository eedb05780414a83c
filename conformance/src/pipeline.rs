//! The two report pipelines.
//!
//! Artifacts are written one after another with no cross-file atomicity: a
//! failure part-way leaves whatever was written so far. For OOPS! the order is
//! placeholder badge, raw response, final badge, JSON report.

use std::path::Path;

use tracing::{debug, info};

use crate::badge::BadgeDirective;
use crate::config::{OntologySource, OopsConfig, StyleguideConfig};
use crate::error::{Error, Result};
use crate::graph::{self, OntologyGraph};
use crate::report::{self, ComplianceReport, ComplianceSummary, Level, OopsReport};
use crate::validators::oops::{make_report_from_bytes, OopsRequest, Transport};
use crate::validators::styleguide::check_graph;

/// Result of [`run_oops`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OopsOutcome {
    /// The filtered report written to `oops_report.json`.
    pub report: OopsReport,
    /// Highest pitfall importance in the report.
    pub level: Level,
}

/// Result of [`run_styleguide`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleguideOutcome {
    /// The report written to the JSON file.
    pub report: ComplianceReport,
    /// Counts and fraction derived from `report`.
    pub summary: ComplianceSummary,
}

/// Turns the configured source into a request; a file wins over a URL.
///
/// # Errors
///
/// Returns [`Error::MissingSource`] if neither is set, or the errors of
/// [`graph::to_rdf_xml`] for an unreadable file.
pub fn build_request(source: &OntologySource) -> Result<OopsRequest> {
    if let Some(file) = &source.file {
        let content = graph::to_rdf_xml(file, source.file_format)?;
        debug!(file = %file.display(), bytes = content.len(), "serialized ontology as RDF/XML");
        return Ok(OopsRequest::Content(content));
    }
    match &source.url {
        Some(url) => Ok(OopsRequest::Uri(url.clone())),
        None => Err(Error::MissingSource),
    }
}

/// Scans an ontology with OOPS! and writes report, badge command and raw response.
///
/// # Errors
///
/// - [`Error::MissingSource`] / [`Error::MalformedInput`] before anything is written
/// - [`Error::Timeout`] / [`Error::Transport`] after the placeholder badge is written
/// - [`Error::RemoteService`] for a non-200 answer (error badge and raw dump are written)
/// - [`Error::MalformedResponse`] if a 200 answer cannot be parsed
/// - [`Error::Io`] / [`Error::Json`] when an artifact cannot be written
pub fn run_oops<T: Transport + ?Sized>(config: &OopsConfig, transport: &T) -> Result<OopsOutcome> {
    let request = build_request(&config.source)?;

    std::fs::create_dir_all(&config.output_dir).map_err(|e| Error::io(&config.output_dir, e))?;
    let badge_path = config.badge_command_path();
    BadgeDirective::oops_error().write(&badge_path)?;

    let response = transport.post(&request.to_xml())?;
    write_artifact(&config.raw_response_path(), &response.body)?;

    if !response.is_ok() {
        BadgeDirective::oops_error().write(&badge_path)?;
        return Err(Error::RemoteService {
            status: response.status,
        });
    }

    let report = make_report_from_bytes(&response.body, &config.restriction)?;
    let level = report.max_level();
    BadgeDirective::oops(level).write(&badge_path)?;
    info!(
        "Report shows {} pitfalls and {} suggestions. Max level is {}:{}",
        report.pitfalls.len(),
        report.suggestions.len(),
        level.rank(),
        level
    );

    write_artifact(&config.report_path(), report::to_json_string(&report)?)?;
    Ok(OopsOutcome { report, level })
}

/// Checks an ontology file against the style guide and writes the report
/// (and, if requested, the badge command).
///
/// # Errors
///
/// - [`Error::Io`] if the ontology cannot be read or an artifact cannot be written
/// - [`Error::MalformedInput`] if the ontology does not parse
/// - [`Error::Json`] if the report cannot be serialized
pub fn run_styleguide(config: &StyleguideConfig) -> Result<StyleguideOutcome> {
    let graph = OntologyGraph::load(&config.ontology_file, config.format())?;
    let report = check_graph(&graph);
    let summary = report.summary();

    if config.create_badge {
        let svg = config.badge_svgfile.display().to_string();
        BadgeDirective::styleguide(summary.fraction(), svg)?.write(&config.badge_cmdfile)?;
    }

    write_artifact(&config.report_file, report::to_json_string(&report)?)?;
    Ok(StyleguideOutcome { report, summary })
}

fn write_artifact(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), "wrote artifact");
    Ok(())
}
