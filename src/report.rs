//! Output rendering
//!
//! Text output is one line per repository, with versions space separated:
//!
//! ```text
//! latest versions of kubernetes/kubernetes: [1.9.3 1.8.5]
//! ```

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::app::RepoReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    repository: String,
    versions: &'a [semver::Version],
}

/// Format the report line for a single repository.
pub fn format_line(report: &RepoReport) -> String {
    let versions: Vec<String> = report.versions.iter().map(|v| v.to_string()).collect();
    format!(
        "latest versions of {}: [{}]",
        report.repo,
        versions.join(" ")
    )
}

/// Write all reports to `out` in the requested format.
pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[RepoReport],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                writeln!(out, "{}", format_line(report))?;
            }
        }
        OutputFormat::Json => {
            let json: Vec<JsonReport<'_>> = reports
                .iter()
                .map(|r| JsonReport {
                    repository: r.repo.to_string(),
                    versions: &r.versions,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
