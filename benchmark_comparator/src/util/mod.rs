//!
//! Utility functions.
//!

pub mod btreemap;

use colored::Colorize;

///
/// Prints non-fatal problems to `stderr`.
///
pub fn print_warnings<I, D>(warnings: I)
where
    I: IntoIterator<Item = D>,
    D: std::fmt::Display,
{
    for warning in warnings.into_iter() {
        eprintln!("{} {warning}", "Warning:".bright_yellow());
    }
}
