//!
//! Benchmark input formats.
//!

pub mod diagnostic;
pub mod error;
pub mod hyperfine;
pub mod native;

#[cfg(test)]
mod tests;

use std::path::Path;

use self::error::Error as InputError;

///
/// Reads and parses a JSON benchmark report.
///
pub fn read_json<T>(path: &Path) -> Result<T, InputError>
where
    T: serde::de::DeserializeOwned,
{
    let text = std::fs::read_to_string(path).map_err(|error| match error.kind() {
        std::io::ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Reading {
            error,
            path: path.to_path_buf(),
        },
    })?;
    if text.trim().is_empty() {
        return Err(InputError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    let json: T = serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
        error,
        path: path.to_path_buf(),
    })?;
    Ok(json)
}
