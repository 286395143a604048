//!
//! The normalized benchmark data model shared by all input schemas.
//!

pub mod metadata;
pub mod metric;
pub mod result_set;
