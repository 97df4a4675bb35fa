use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::ParkFactorReport;

/// Writes the report document to disk and renders it for standard output.
pub struct ReportWriter {
    pretty: bool,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Serialize the report to `path`, creating parent directories.
    pub fn write_report(&self, report: &ParkFactorReport, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, self.render(report)?)?;
        Ok(())
    }

    /// Render the report as a JSON string.
    pub fn render(&self, report: &ParkFactorReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    /// Parse a previously written report file.
    pub fn read_report(&self, path: &Path) -> Result<ParkFactorReport> {
        let contents = fs::read_to_string(path)?;
        let report = serde_json::from_str(&contents)?;
        Ok(report)
    }
}
