//!
//! Template identifier extraction from hyperfine command lines.
//!

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `--template <value>` and `--template=<value>`.
static TEMPLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)--template(?:\s+|=)(\S+)").expect("Always valid")
});

///
/// Extracts the template identifier from a command line such as
/// `bench --template {upper} --size 1000 --output /dev/null`.
///
pub fn template(command: &str) -> Option<&str> {
    TEMPLATE
        .captures(command)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str())
}

///
/// The identifier of the `row`-th command without a template argument.
///
pub fn unknown(row: usize) -> String {
    format!("unknown#{row}")
}
