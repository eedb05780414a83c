//! OOPS! response parsing and restriction filtering.

use roxmltree::{Document, Node as XmlNode};

use crate::error::{Error, Result};
use crate::report::{OopsReport, Pitfall, Suggestion};
use crate::vocab::OOPS_NS;

/// Builds the report from an OOPS! XML response.
///
/// Only findings with at least one affected element starting with
/// `restriction` are kept, and their affected elements are reduced to the
/// matching ones. The empty restriction keeps every finding that has an
/// affected element.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] if the document is not well-formed,
/// a kept finding lacks a required child, or a pitfall importance is unknown.
pub fn make_report(xml: &str, restriction: &str) -> Result<OopsReport> {
    let doc = Document::parse(xml).map_err(|e| Error::MalformedResponse(e.to_string()))?;
    let mut report = OopsReport::default();

    for pitfall in oops_elements(doc.root(), "Pitfall") {
        let Some(affected_elements) = affected_in_scope(pitfall, restriction) else {
            continue;
        };
        report.pitfalls.push(Pitfall {
            name: child_text(pitfall, "Name")?,
            description: child_text(pitfall, "Description")?,
            code: child_text(pitfall, "Code")?,
            importance: child_text(pitfall, "Importance")?.parse()?,
            affected_elements,
        });
    }

    for suggestion in oops_elements(doc.root(), "Suggestion") {
        let Some(affected_elements) = affected_in_scope(suggestion, restriction) else {
            continue;
        };
        report.suggestions.push(Suggestion {
            name: child_text(suggestion, "Name")?,
            description: child_text(suggestion, "Description")?,
            affected_elements,
        });
    }

    Ok(report)
}

/// Same as [`make_report`] for a raw response body.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] if the body is not UTF-8 or not a
/// valid OOPS! document.
pub fn make_report_from_bytes(body: &[u8], restriction: &str) -> Result<OopsReport> {
    let xml = std::str::from_utf8(body).map_err(|e| Error::MalformedResponse(e.to_string()))?;
    make_report(xml, restriction)
}

fn oops_elements<'a, 'input: 'a>(
    scope: XmlNode<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = XmlNode<'a, 'input>> + 'a {
    scope
        .descendants()
        .filter(move |n| n.has_tag_name((OOPS_NS, name)))
}

fn affected_in_scope(finding: XmlNode<'_, '_>, restriction: &str) -> Option<Vec<String>> {
    let affected: Vec<String> = oops_elements(finding, "AffectedElement")
        .map(|n| n.text().unwrap_or_default())
        .filter(|text| text.starts_with(restriction))
        .map(str::to_owned)
        .collect();
    (!affected.is_empty()).then_some(affected)
}

fn child_text(finding: XmlNode<'_, '_>, name: &str) -> Result<String> {
    oops_elements(finding, name)
        .next()
        .map(|n| n.text().unwrap_or_default().to_owned())
        .ok_or_else(|| {
            Error::MalformedResponse(format!(
                "{} element without {name}",
                finding.tag_name().name()
            ))
        })
}
