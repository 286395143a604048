//!
//! Comparison report output.
//!

pub mod format;
pub mod markdown;
pub mod units;


use std::io::Write;
use std::path::Path;

use self::format::Format;

///
/// A rendered comparison report.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Markdown document.
    Markdown(String),
    /// Pretty-printed JSON document.
    Json(String),
}

impl Output {
    ///
    /// Renders a report in the requested format.
    ///
    /// The markdown document is produced by `report`, the JSON document is the serialized `data`.
    ///
    pub fn new<D, S>(format: Format, report: &D, data: &S) -> anyhow::Result<Self>
    where
        D: std::fmt::Display,
        S: serde::Serialize,
    {
        Ok(match format {
            Format::Markdown => Self::Markdown(report.to_string()),
            Format::Json => Self::Json(serde_json::to_string_pretty(data)?),
        })
    }

    ///
    /// Returns the rendered document.
    ///
    pub fn content(&self) -> &str {
        match self {
            Self::Markdown(content) => content.as_str(),
            Self::Json(content) => content.as_str(),
        }
    }

    ///
    /// Writes the report to a file.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let mut content = self.content().to_owned();
        if !content.ends_with('\n') {
            content.push('\n');
        }
        std::fs::write(path, content)
            .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
        Ok(())
    }

    ///
    /// Writes the report to `stdout`.
    ///
    pub fn write_to_stdout(&self) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", self.content().trim_end_matches('\n'))?;
        stdout.flush()?;
        Ok(())
    }
}
