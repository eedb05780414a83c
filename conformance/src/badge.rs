//! Badge directives: one-line `badge` shell commands for a later CI step.
//!
//! The OOPS! badge maps the report's severity level to a fixed color; the
//! style guide badge maps the compliance fraction to one of six color bands.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::report::Level;

/// Label of the OOPS! badge.
pub const OOPS_LABEL: &str = "OOPS!";

/// SVG written by the OOPS! badge command.
pub const OOPS_SVG: &str = "oops_badge.svg";

/// Label of the style guide badge.
pub const STYLEGUIDE_LABEL: &str = "Styleguide compliance";

/// Color bands from the highest threshold down; band `i` starts at `(5 - i) / 6`.
const FRACTION_BANDS: [&str; 6] = ["brightgreen", "green", "yellow", "yellowgreen", "orange", "red"];

/// Maps a compliance fraction in `[0.0, 1.0]` to a badge color.
///
/// # Errors
///
/// Returns [`Error::FractionOutOfRange`] for values outside `[0.0, 1.0]` (and NaN).
pub fn select_badge_color(fraction: f64) -> Result<&'static str> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(Error::FractionOutOfRange(fraction));
    }
    let step = 1.0 / FRACTION_BANDS.len() as f64;
    let color = FRACTION_BANDS
        .iter()
        .enumerate()
        .find(|(i, _)| fraction >= (FRACTION_BANDS.len() - 1 - i) as f64 * step)
        .map_or("red", |(_, color)| *color);
    Ok(color)
}

/// A request to draw a badge, rendered as a `badge` command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeDirective {
    /// Left-hand text.
    pub label: String,
    /// Right-hand text.
    pub value: String,
    /// Badge color name.
    pub color: String,
    /// SVG file the command redirects into.
    pub svg_path: String,
    quoted: bool,
}

impl BadgeDirective {
    /// OOPS! badge for the report's overall level.
    pub fn oops(level: Level) -> Self {
        Self {
            label: OOPS_LABEL.into(),
            value: level.as_str().into(),
            color: level.color().into(),
            svg_path: OOPS_SVG.into(),
            quoted: false,
        }
    }

    /// Placeholder OOPS! badge used until a valid answer is processed.
    pub fn oops_error() -> Self {
        Self {
            label: OOPS_LABEL.into(),
            value: "Error".into(),
            color: "blue".into(),
            svg_path: OOPS_SVG.into(),
            quoted: false,
        }
    }

    /// Style guide badge showing the compliance percentage.
    ///
    /// An undefined fraction (nothing was checked) renders as a grey `n/a` badge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FractionOutOfRange`] if `fraction` is outside `[0.0, 1.0]`.
    pub fn styleguide(fraction: Option<f64>, svg_path: impl Into<String>) -> Result<Self> {
        let (value, color) = match fraction {
            Some(fraction) => (
                format!("{:.1}%", fraction * 100.0),
                select_badge_color(fraction)?,
            ),
            None => ("n/a".to_owned(), "lightgrey"),
        };
        Ok(Self {
            label: STYLEGUIDE_LABEL.into(),
            value,
            color: color.into(),
            svg_path: svg_path.into(),
            quoted: true,
        })
    }

    /// The shell command line, without trailing newline.
    pub fn command(&self) -> String {
        if self.quoted {
            format!(
                "badge \"{}\" \"{}\" :{} > {}",
                self.label, self.value, self.color, self.svg_path
            )
        } else {
            format!(
                "badge {} {} :{} > {}",
                self.label, self.value, self.color, self.svg_path
            )
        }
    }

    /// Writes the command line to `path`, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.command()).map_err(|e| Error::io(path, e))?;
        debug!(path = %path.display(), value = %self.value, color = %self.color, "wrote badge command");
        Ok(())
    }
}
