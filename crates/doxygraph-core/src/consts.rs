//! Shared constants.

/// Default node cap per diagram, matching Doxygen's `DOT_GRAPH_MAX_NODES`.
pub const DEFAULT_MAX_NODES: usize = 50;

/// Closing tag of the extended-description sub-block.
pub(crate) const DETAILED_CLOSE: &str = "</detaileddescription>";

/// Opening tag prefix of the in-body-description sub-block.
pub(crate) const INBODY_OPEN: &str = "<inbodydescription";

/// Name used for compounds without a `<compoundname>`.
pub(crate) const UNKNOWN_NAME: &str = "unknown";
