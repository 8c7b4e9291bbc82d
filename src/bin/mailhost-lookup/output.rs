use std::fmt::Write as _;

use anyhow::{Result, bail};
use mailhost_lookup::{Evidence, LookupReport, Signal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Human,
    Json,
}

impl Format {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => bail!("unknown --format '{other}', use: human|json"),
        }
    }
}

pub fn write_report(report: &LookupReport, format: Format) -> Result<()> {
    match format {
        Format::Human => {
            println!();
            println!("{}", render_human(report));
            Ok(())
        }
        Format::Json => write_json(report),
    }
}

#[cfg(feature = "with-serde")]
fn write_json(report: &LookupReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &LookupReport) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

/// Report as printed by the CLI: one block per signal, blocks separated by
/// a blank line. No leading or trailing newline.
pub fn render_human(report: &LookupReport) -> String {
    let mut out = format!("Domain: {}", report.domain());

    for (signal, entry) in report.iter() {
        let _ = write!(out, "\n\n[{}]", signal.heading());
        match (signal, &entry.evidence) {
            (Signal::Mx, Evidence::Mx { hosts: records })
            | (Signal::Spf | Signal::Dmarc, Evidence::Txt { records }) => {
                let _ = write!(out, "\n  Likely Mail Provider: {}", entry.guess.label);
                if records.is_empty() {
                    let _ = write!(out, "\n  No {} Records found.", signal.tag());
                } else {
                    let _ = write!(out, "\n  {} Records:", signal.tag());
                    for record in records {
                        let _ = write!(out, "\n    - {record}");
                    }
                }
            }
            (Signal::Mx | Signal::Spf | Signal::Dmarc, _) => {
                let _ = write!(out, "\n  Likely Mail Provider: {}", entry.guess.label);
            }
            _ => {
                let _ = write!(out, "\n  {}", entry.guess.label);
            }
        }
    }

    out
}
