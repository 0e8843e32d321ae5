//! Graph extraction and `PlantUML` injection for Doxygen XML output.
//!
//! Doxygen embeds include, inheritance, collaboration and call graphs in its
//! XML as node/edge blocks. This crate turns them into `PlantUML` diagrams and
//! splices them back into the same XML as titled `<simplesect kind="par">`
//! sections, so a markdown generator downstream can render them. Every byte
//! outside the inserted sections is preserved.
//!
//! # Architecture
//!
//! - [`parser`]: regex extraction of graph blocks and call references
//! - [`resolve`]: finds the node representing the documented compound
//! - [`plantuml`]: renders graphs and call stars with size limits
//! - `compound` / `member`: locate insertion points and splice diagrams
//! - [`transform()`]: the pure per-file transform
//! - [`batch`]: in-place processing of a Doxygen XML directory
//!
//! # Example
//!
//! ```
//! use doxygraph_core::{TransformOptions, transform};
//!
//! let xml = r#"<memberdef kind="function" id="f">
//! <name>run</name>
//! <detaileddescription>
//! </detaileddescription>
//! <references refid="g">step</references>
//! </memberdef>"#;
//!
//! let result = transform(xml, &TransformOptions::default());
//! assert_eq!(result.diagrams, 1);
//! assert!(result.text.contains("current --> r0"));
//! ```

pub mod batch;
mod block;
mod compound;
mod consts;
mod error;
mod member;
pub mod model;
pub mod parser;
pub mod plantuml;
pub mod resolve;
mod transform;

#[cfg(test)]
mod fixtures;

pub use batch::{BatchOptions, BatchSummary, process_directory, process_file};
pub use block::DiagramTarget;
pub use compound::compound_diagrams;
pub use consts::DEFAULT_MAX_NODES;
pub use error::{BatchError, FileError};
pub use member::member_diagrams;
pub use model::{Edge, Graph, Node};
pub use transform::{DroppedDiagrams, LabelMode, TransformOptions, Transformed, transform};
