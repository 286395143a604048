//!
//! Non-fatal problems found while normalizing an input report.
//!

///
/// Non-fatal problems found while normalizing an input report.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A benchmark entry without results, omitted from the result set.
    EmptyResults {
        /// The item identifier.
        name: String,
    },
    /// Two entries with the same identifier. The later one is kept.
    DuplicateItem {
        /// The item identifier.
        name: String,
    },
    /// A hyperfine command without a `--template` argument.
    MissingTemplate {
        /// The command line.
        command: String,
        /// The identifier assigned instead.
        name: String,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyResults { name } => {
                write!(f, "Template `{name}` has no results and will be skipped.")
            }
            Self::DuplicateItem { name } => write!(
                f,
                "Template `{name}` appears more than once. Only the last entry is used."
            ),
            Self::MissingTemplate { command, name } => write!(
                f,
                "Command `{command}` has no `--template` argument and is reported as `{name}`."
            ),
        }
    }
}
