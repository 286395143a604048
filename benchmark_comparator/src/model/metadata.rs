//!
//! Information about the run a result set was loaded from.
//!

///
/// Information about the run a result set was loaded from.
///
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Metadata {
    /// The run timestamp, as written by the benchmark tool.
    pub timestamp: Option<Timestamp>,
    /// The benchmark tool version.
    pub version: Option<String>,
    /// The number of inputs processed per run.
    pub input_size: Option<u64>,
}

///
/// A run timestamp.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Seconds since the Unix epoch.
    Unix(u64),
    /// Free-form text.
    Text(String),
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unix(seconds) => {
                write!(f, "{seconds}")?;
                if let Some(date_time) = i64::try_from(*seconds)
                    .ok()
                    .and_then(|seconds| chrono::DateTime::from_timestamp(seconds, 0))
                {
                    write!(f, " ({})", date_time.format("%Y-%m-%d %H:%M:%S UTC"))?;
                }
                Ok(())
            }
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}
