//! `styleguide-checker`: Checks an ontology against the style guide.
//!
//! Every class and object property is checked for labels, definitions,
//! curation status, term editor and naming style. The results are written to
//! a JSON report; with `--create_badge` a badge command is written as well.
//!
//! **Usage:**
//! ```text
//! styleguide-checker <ontology_file> [-t <format>] [-r <report>] [-b]
//!                    [--badge_cmdfile <sh>] [--badge_svgfile <svg>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ontoci_conformance::config::{
    STYLEGUIDE_BADGE_CMDFILE, STYLEGUIDE_BADGE_SVGFILE, STYLEGUIDE_REPORT_FILE,
};
use ontoci_conformance::{run_styleguide, RdfFormat, StyleguideConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Check compliance of an ontology file with the style guide.
#[derive(Parser)]
#[command(
    name = "styleguide-checker",
    about = "Check compliance of an ontology file with the style guide"
)]
struct Args {
    /// Ontology file to check.
    ontology_file: PathBuf,

    /// Input format (xml, turtle, nt); guessed from the extension by default.
    #[arg(short = 't', long)]
    format: Option<RdfFormat>,

    /// File path for the style guide report.
    #[arg(short = 'r', long = "report_file", default_value = STYLEGUIDE_REPORT_FILE)]
    report_file: PathBuf,

    /// Create a badge command based on the style guide report.
    #[arg(short = 'b', long = "create_badge")]
    create_badge: bool,

    /// File path for the badge command file.
    #[arg(long = "badge_cmdfile", default_value = STYLEGUIDE_BADGE_CMDFILE)]
    badge_cmdfile: PathBuf,

    /// File path for the badge SVG file.
    #[arg(long = "badge_svgfile", default_value = STYLEGUIDE_BADGE_SVGFILE)]
    badge_svgfile: PathBuf,

    /// Print verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = StyleguideConfig {
        ontology_file: args.ontology_file,
        format: args.format,
        report_file: args.report_file,
        create_badge: args.create_badge,
        badge_cmdfile: args.badge_cmdfile,
        badge_svgfile: args.badge_svgfile,
    };

    info!(
        file = %config.ontology_file.display(),
        format = %config.format(),
        "Checking ontology against the style guide"
    );
    let outcome = run_styleguide(&config).with_context(|| {
        format!(
            "Style guide check of {} failed",
            config.ontology_file.display()
        )
    })?;
    let summary = outcome.summary;

    println!("=============== Style guide compliance report ===============");
    println!(
        "Classes: {} of {} classes comply with the style guide",
        summary.classes.compliant, summary.classes.total
    );
    println!(
        "Object properties: {} of {} object properties comply with the style guide",
        summary.object_properties.compliant, summary.object_properties.total
    );
    println!(
        "Overall Definitions: {} of {} definitions comply with the style guide",
        summary.compliant(),
        summary.total()
    );
    match summary.fraction() {
        Some(fraction) => println!("Compliance: {:.1}%", fraction * 100.0),
        None => println!("Compliance: n/a (no classes or object properties found)"),
    }
    println!("=============================================================");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
