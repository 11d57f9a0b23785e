//! Markdown report maintenance.
//!
//! An update reads the report once, places the entry in the section tree
//! (see [`document`]), refreshes the footer and writes the file back once.

pub mod document;
pub mod scaffold;
pub mod table;

pub use document::{Placement, ReportDocument};
pub use table::EntryTable;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use crate::error::TrackerError;

/// One classified article as consumed by the updater. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportEntry {
    pub date: String,
    pub industry: String,
    pub impact_type: String,
    pub summary: String,
    pub url: String,
}

impl ReportEntry {
    pub fn from_json(raw: &str) -> Result<Self, TrackerError> {
        serde_json::from_str(raw).map_err(|e| TrackerError::EntryError(e.to_string()))
    }

    pub fn to_row(&self) -> String {
        format!(
            "| {} | {} | {} | [链接]({}) |",
            self.date, self.impact_type, self.summary, self.url
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Created,
    Updated(Placement),
}

impl UpdateOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            UpdateOutcome::Created => "README 已创建",
            UpdateOutcome::Updated(_) => "README 已更新",
        }
    }
}

/// Read the report with line endings normalized to `\n`. A missing or
/// empty file yields `None`.
pub fn load_report(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) if content.is_empty() => Ok(None),
        Ok(content) if content.contains("\r\n") => {
            debug!("Normalizing CRLF line endings in {}", path.display());
            Ok(Some(content.replace("\r\n", "\n")))
        }
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(TrackerError::Io(err))
            .with_context(|| format!("Failed to read report {}", path.display())),
    }
}

/// Write the report through a sibling temp file and rename it into place.
pub fn save_report(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Report path has no file name: {}", path.display()))?;
    let tmp_path = path.with_file_name(format!("{}.tmp", file_name.to_string_lossy()));
    fs::write(&tmp_path, content)
        .map_err(TrackerError::Io)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .map_err(TrackerError::Io)
        .with_context(|| format!("Failed to finalize report {}", path.display()))?;
    debug!("Saved report to {}", path.display());
    Ok(())
}

/// Record `entry` in the report at `path`, creating the report when absent.
pub fn apply_entry(path: &Path, entry: &ReportEntry, now: NaiveDateTime) -> Result<UpdateOutcome> {
    let Some(existing) = load_report(path)? else {
        info!("No report at {}, creating scaffold", path.display());
        save_report(path, &scaffold::scaffold(entry, now))?;
        return Ok(UpdateOutcome::Created);
    };

    let mut document = ReportDocument::parse(&existing);
    let placement = document.record(entry)?;
    info!(
        "Recorded {} entry for {} ({:?})",
        entry.industry, entry.date, placement
    );

    let rendered = scaffold::refresh_footer(&document.render(), now);
    save_report(path, &rendered)?;
    Ok(UpdateOutcome::Updated(placement))
}
