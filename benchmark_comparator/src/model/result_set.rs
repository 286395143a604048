//!
//! The normalized results of one benchmark run.
//!

use std::collections::BTreeMap;
use std::path::Path;

use crate::input::diagnostic::Diagnostic;
use crate::model::metadata::Metadata;

///
/// The normalized results of one benchmark run.
///
/// Records are keyed by item identifier, so iteration is always in sorted order.
///
#[derive(Debug, Clone)]
pub struct ResultSet<R> {
    /// One metric record per item.
    pub records: BTreeMap<String, R>,
    /// Run metadata.
    pub metadata: Metadata,
    /// Problems found while normalizing the input.
    pub diagnostics: Vec<Diagnostic>,
}

impl<R> Default for ResultSet<R> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            metadata: Metadata::default(),
            diagnostics: Vec::new(),
        }
    }
}

impl<R> ResultSet<R> {
    ///
    /// Inserts a record, reporting a diagnostic if it replaces an existing one.
    ///
    pub fn insert(&mut self, name: String, record: R) {
        if self.records.contains_key(name.as_str()) {
            self.diagnostics
                .push(Diagnostic::DuplicateItem { name: name.clone() });
        }
        self.records.insert(name, record);
    }

    ///
    /// Describes the problems found in the report loaded from `source`.
    ///
    pub fn warnings<'a>(&'a self, source: &'a Path) -> impl Iterator<Item = String> + 'a {
        self.diagnostics
            .iter()
            .map(move |diagnostic| format!("{}: {diagnostic}", source.display()))
    }

    ///
    /// Returns the number of items.
    ///
    pub fn len(&self) -> usize {
        self.records.len()
    }

    ///
    /// Returns `true` if there are no items.
    ///
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
