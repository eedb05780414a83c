//! Report types: OOPS! findings, severity levels, style guide compliance.
//!
//! Field names of every serialized type are the JSON contract of the
//! generated reports and must not change.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Importance of an OOPS! pitfall, ordered from harmless to critical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Level {
    /// No pitfall found.
    #[default]
    Pass,
    /// Minor pitfall.
    Minor,
    /// Important pitfall.
    Important,
    /// Critical pitfall.
    Critical,
}

impl Level {
    /// Name as used by the OOPS! API and the badge text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Pass => "Pass",
            Level::Minor => "Minor",
            Level::Important => "Important",
            Level::Critical => "Critical",
        }
    }

    /// Numeric rank: Pass=0, Minor=1, Important=2, Critical=3.
    pub const fn rank(self) -> u8 {
        match self {
            Level::Pass => 0,
            Level::Minor => 1,
            Level::Important => 2,
            Level::Critical => 3,
        }
    }

    /// Badge color for this level.
    pub const fn color(self) -> &'static str {
        match self {
            Level::Critical => "red",
            Level::Important => "orange",
            Level::Minor => "yellow",
            Level::Pass => "brightgreen",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Pass" => Ok(Level::Pass),
            "Minor" => Ok(Level::Minor),
            "Important" => Ok(Level::Important),
            "Critical" => Ok(Level::Critical),
            other => Err(Error::MalformedResponse(format!(
                "unknown pitfall importance {other:?}"
            ))),
        }
    }
}

/// A pitfall detected by OOPS!.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pitfall {
    /// Pitfall title.
    pub name: String,
    /// Pitfall explanation.
    pub description: String,
    /// Catalogue code, e.g. `P08`.
    pub code: String,
    /// Importance level.
    pub importance: Level,
    /// Affected ontology elements after restriction filtering.
    pub affected_elements: Vec<String>,
}

/// A suggestion made by OOPS!. Suggestions carry no importance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Suggestion title.
    pub name: String,
    /// Suggestion explanation.
    pub description: String,
    /// Affected ontology elements after restriction filtering.
    pub affected_elements: Vec<String>,
}

/// Contents of `oops_report.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OopsReport {
    /// Pitfalls with at least one affected element in scope.
    pub pitfalls: Vec<Pitfall>,
    /// Suggestions with at least one affected element in scope.
    pub suggestions: Vec<Suggestion>,
}

impl OopsReport {
    /// Highest pitfall importance; [`Level::Pass`] without pitfalls.
    pub fn max_level(&self) -> Level {
        self.pitfalls
            .iter()
            .map(|p| p.importance)
            .max()
            .unwrap_or_default()
    }
}

/// Checks shared by classes and object properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonChecks {
    /// At least one `rdfs:label`.
    pub rdfs_label_exists: bool,
    /// Every label is language-tagged and one of them is English.
    pub rdfs_labels_lang: bool,
    /// Every label is capitalized.
    pub rdfs_labels_style: bool,
    /// At least one `skos:definition`.
    pub skos_definition_exists: bool,
    /// Every definition is language-tagged and one of them is English.
    pub skos_definitions_lang: bool,
    /// Exactly one curation status.
    pub obo_curation_status_exists: bool,
    /// At least one term editor, all of the form `PERSON:...`.
    pub obo_term_editor_exists_valid: bool,
}

impl CommonChecks {
    /// True if every check passed.
    pub fn all_passed(&self) -> bool {
        self.rdfs_label_exists
            && self.rdfs_labels_lang
            && self.rdfs_labels_style
            && self.skos_definition_exists
            && self.skos_definitions_lang
            && self.obo_curation_status_exists
            && self.obo_term_editor_exists_valid
    }
}

/// Check results for one `owl:Class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassChecks {
    /// Shared checks.
    #[serde(flatten)]
    pub common: CommonChecks,
    /// Local name is UpperCamelCase.
    pub class_name_style: bool,
}

impl ClassChecks {
    /// True if the class complies with the style guide.
    pub fn is_compliant(&self) -> bool {
        self.common.all_passed() && self.class_name_style
    }
}

/// Check results for one `owl:ObjectProperty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPropertyChecks {
    /// Shared checks.
    #[serde(flatten)]
    pub common: CommonChecks,
    /// Local name is lowerCamelCase.
    pub object_property_name_style: bool,
}

impl ObjectPropertyChecks {
    /// True if the object property complies with the style guide.
    pub fn is_compliant(&self) -> bool {
        self.common.all_passed() && self.object_property_name_style
    }
}

/// Contents of the style guide report, keyed by element identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// Results per class.
    pub classes: BTreeMap<String, ClassChecks>,
    /// Results per object property.
    pub object_properties: BTreeMap<String, ObjectPropertyChecks>,
}

impl ComplianceReport {
    /// Counts elements and compliant elements per category.
    pub fn summary(&self) -> ComplianceSummary {
        ComplianceSummary {
            classes: CategorySummary::tally(self.classes.values().map(ClassChecks::is_compliant)),
            object_properties: CategorySummary::tally(
                self.object_properties
                    .values()
                    .map(ObjectPropertyChecks::is_compliant),
            ),
        }
    }
}

/// Element counts of one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySummary {
    /// Number of elements.
    pub total: usize,
    /// Number of elements passing every check.
    pub compliant: usize,
}

impl CategorySummary {
    fn tally(compliance: impl Iterator<Item = bool>) -> Self {
        compliance.fold(Self::default(), |acc, ok| Self {
            total: acc.total + 1,
            compliant: acc.compliant + usize::from(ok),
        })
    }
}

/// Summary scalars of a [`ComplianceReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplianceSummary {
    /// Class counts.
    pub classes: CategorySummary,
    /// Object property counts.
    pub object_properties: CategorySummary,
}

impl ComplianceSummary {
    /// Total number of checked definitions.
    pub fn total(&self) -> usize {
        self.classes.total + self.object_properties.total
    }

    /// Number of compliant definitions.
    pub fn compliant(&self) -> usize {
        self.classes.compliant + self.object_properties.compliant
    }

    /// Fraction of compliant definitions; `None` when nothing was checked.
    pub fn fraction(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.compliant() as f64 / total as f64),
        }
    }
}

/// Serializes a report as JSON indented by four spaces.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialization fails.
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
