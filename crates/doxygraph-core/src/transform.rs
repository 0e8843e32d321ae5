//! Per-file transform: compound graphs first, then member call graphs.

use std::fmt;

use crate::compound::inject_compound_graphs;
use crate::consts::DEFAULT_MAX_NODES;
use crate::member::inject_member_graphs;

/// How include-graph node labels are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// Last path component only (assumes no two files share a name).
    #[default]
    Basename,
    /// Path exactly as Doxygen reports it.
    Full,
}

/// Settings for [`transform`].
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Diagrams with more nodes than this are not generated.
    pub max_nodes: usize,
    /// Label style for include dependency graphs.
    pub include_labels: LabelMode,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            include_labels: LabelMode::default(),
        }
    }
}

/// Result of transforming one document.
#[derive(Debug, Default)]
pub struct Transformed {
    /// Document text with diagrams inserted.
    pub text: String,
    /// Number of diagram sections inserted.
    pub diagrams: usize,
    /// Diagrams that were rendered but could not be placed.
    pub warnings: Vec<DroppedDiagrams>,
}

/// Diagrams of a function that has no description block to hold them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedDiagrams {
    /// Function name.
    pub member: String,
    /// Number of diagram sections discarded.
    pub diagrams: usize,
}

impl fmt::Display for DroppedDiagrams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "function `{}` has no description block; dropped {} diagram(s)",
            self.member, self.diagrams
        )
    }
}

/// Counters shared by the injection passes.
#[derive(Debug, Default)]
pub(crate) struct Report {
    pub diagrams: usize,
    pub warnings: Vec<DroppedDiagrams>,
}

/// Insert `PlantUML` diagrams for every graph found in a Doxygen XML document.
///
/// The document is treated as an immutable buffer: diagrams are spliced in at
/// computed offsets and every other byte is preserved. Running the transform
/// on its own output inserts nothing.
#[must_use]
pub fn transform(text: &str, options: &TransformOptions) -> Transformed {
    let mut report = Report::default();
    let text = inject_compound_graphs(text, options, &mut report);
    let text = inject_member_graphs(&text, options, &mut report);
    Transformed {
        text,
        diagrams: report.diagrams,
        warnings: report.warnings,
    }
}
