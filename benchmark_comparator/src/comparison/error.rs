//!
//! Comparison error.
//!

///
/// Comparison error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The two runs share no items.
    #[error("No common templates found between baseline and current results.")]
    NoCommonItems,
}
