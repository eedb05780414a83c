//! Pipeline configuration and artifact file names.

use std::path::PathBuf;
use std::time::Duration;

use crate::graph::RdfFormat;
use crate::validators::oops::DEFAULT_ENDPOINT;

/// Default OOPS! request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// OOPS! JSON report.
pub const OOPS_REPORT_FILE: &str = "oops_report.json";
/// OOPS! badge command.
pub const OOPS_BADGE_COMMAND_FILE: &str = "_oops_badge_command.sh";
/// Raw OOPS! response body.
pub const OOPS_RAW_RESPONSE_FILE: &str = "oops_request_raw.txt";

/// Default style guide report path.
pub const STYLEGUIDE_REPORT_FILE: &str = "styleguide_report.json";
/// Default style guide badge command path.
pub const STYLEGUIDE_BADGE_CMDFILE: &str = "styleguide_badge.sh";
/// Default SVG path the style guide badge command renders to.
pub const STYLEGUIDE_BADGE_SVGFILE: &str = "styleguide_badge.svg";

/// Ontology handed to OOPS!: a local file (preferred) or a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologySource {
    /// Local ontology file; re-serialized as RDF/XML before sending.
    pub file: Option<PathBuf>,
    /// Format of `file`.
    pub file_format: RdfFormat,
    /// URL the service fetches itself; ignored when `file` is set.
    pub url: Option<String>,
}

impl Default for OntologySource {
    fn default() -> Self {
        Self {
            file: None,
            file_format: RdfFormat::RdfXml,
            url: None,
        }
    }
}

/// Settings of the OOPS! pipeline.
#[derive(Debug, Clone)]
pub struct OopsConfig {
    /// What to scan.
    pub source: OntologySource,
    /// Prefix an affected element must start with to be reported.
    pub restriction: String,
    /// OOPS! REST endpoint.
    pub endpoint: String,
    /// Overall request timeout.
    pub timeout: Duration,
    /// Directory receiving the three artifacts.
    pub output_dir: PathBuf,
}

impl OopsConfig {
    /// Default settings for `source`.
    pub fn new(source: OntologySource) -> Self {
        Self {
            source,
            restriction: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            output_dir: PathBuf::from("."),
        }
    }

    /// Path of `oops_report.json`.
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(OOPS_REPORT_FILE)
    }

    /// Path of `_oops_badge_command.sh`.
    pub fn badge_command_path(&self) -> PathBuf {
        self.output_dir.join(OOPS_BADGE_COMMAND_FILE)
    }

    /// Path of `oops_request_raw.txt`.
    pub fn raw_response_path(&self) -> PathBuf {
        self.output_dir.join(OOPS_RAW_RESPONSE_FILE)
    }
}

/// Settings of the style guide pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleguideConfig {
    /// Ontology to check.
    pub ontology_file: PathBuf,
    /// Input format; guessed from the file extension when `None`.
    pub format: Option<RdfFormat>,
    /// JSON report destination.
    pub report_file: PathBuf,
    /// Whether to write the badge command.
    pub create_badge: bool,
    /// Badge command destination.
    pub badge_cmdfile: PathBuf,
    /// SVG path used inside the badge command.
    pub badge_svgfile: PathBuf,
}

impl StyleguideConfig {
    /// Default settings for `ontology_file`.
    pub fn new(ontology_file: PathBuf) -> Self {
        Self {
            ontology_file,
            format: None,
            report_file: PathBuf::from(STYLEGUIDE_REPORT_FILE),
            create_badge: false,
            badge_cmdfile: PathBuf::from(STYLEGUIDE_BADGE_CMDFILE),
            badge_svgfile: PathBuf::from(STYLEGUIDE_BADGE_SVGFILE),
        }
    }

    /// The effective input format.
    pub fn format(&self) -> RdfFormat {
        self.format
            .unwrap_or_else(|| RdfFormat::from_path(&self.ontology_file))
    }
}
