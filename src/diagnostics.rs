//! Diagnostics Module
//!
//! Single diagnostic type used across parsing, validation, and reporting.
//! Every inconsistency found during a run is recorded here; nothing in the
//! pipeline aborts on a diagnostic. The collector is created by the driver
//! and threaded through each stage, and its append order is the order the
//! final report prints.

use serde::{Deserialize, Serialize};

/// Diagnostic codes for categorizing issues
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticCode {
    // =========================================================================
    // Parse diagnostics
    // =========================================================================
    InvalidClusterId,
    DuplicateWeatherId,
    DuplicateMapEntry,
    NoDeclarations,
    BadCatalogValue,
    EmptyCatalog,
    MissingTableSource,
    NoTableLabels,

    // =========================================================================
    // Cross-reference diagnostics
    // =========================================================================
    UnknownMap,
    MapWithoutWeather,
    UnusedCluster,
    MissingClusterTable,
}

/// A single recorded inconsistency
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
}

/// Append-only diagnostic collector for one generator run.
///
/// Diagnostics are surfaced twice: immediately on the operator's error
/// stream as they are recorded, and verbatim in the report's trailing
/// warnings section.
#[derive(Debug, Default, Serialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and echo it to the log right away.
    pub fn warn(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(code = ?code, "{message}");
        self.entries.push(Diagnostic { code, message });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Messages in the order they were recorded.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_append_order_preserved() {
        let mut diags = Diagnostics::new();
        diags.warn(DiagnosticCode::UnknownMap, "first");
        diags.warn(DiagnosticCode::UnusedCluster, "second");
        diags.warn(DiagnosticCode::UnknownMap, "third");

        let messages: Vec<&str> = diags.messages().collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_collector() {
        let diags = Diagnostics::new();
        assert!(diags.is_empty());
        assert_eq!(diags.len(), 0);
    }

    #[test]
    fn test_entry_carries_code() {
        let mut diags = Diagnostics::new();
        diags.warn(DiagnosticCode::MissingClusterTable, "no table for Y0");
        assert_eq!(diags.entries()[0].code, DiagnosticCode::MissingClusterTable);
    }
}
