//! Node/edge model for graphs embedded in Doxygen XML.
//!
//! A [`Graph`] is built from the text of one graph block and lives only for
//! the duration of a single file transform.

/// A graph node: Doxygen node id plus its display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub label: String,
}

/// A directed edge between two node ids.
///
/// `relation` is the raw Doxygen relation attribute (e.g. `public-inheritance`,
/// `usage`, `include`). Unknown values are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub relation: String,
}

/// One parsed graph block.
///
/// Nodes keep first-seen order. Re-inserting an existing id replaces its label
/// but not its position, so iteration order is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing the label of an existing id in place.
    pub fn insert_node(&mut self, id: impl Into<String>, label: impl Into<String>) {
        let id = id.into();
        let label = label.into();
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.label = label;
        } else {
            self.nodes.push(Node { id, label });
        }
    }

    /// Append an edge. Endpoints are not checked here.
    pub fn push_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        relation: impl Into<String>,
    ) {
        self.edges.push(Edge {
            from: from.into(),
            to: to.into(),
            relation: relation.into(),
        });
    }

    /// Nodes in first-seen order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in document order, dangling ones included.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether a node with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Edges whose endpoints both exist in the node set.
    pub fn valid_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|e| self.contains(&e.from) && self.contains(&e.to))
    }

    /// Copy of this graph with every label reduced to its last path component.
    #[must_use]
    pub fn with_basename_labels(&self) -> Self {
        Self {
            nodes: self
                .nodes
                .iter()
                .map(|n| Node {
                    id: n.id.clone(),
                    label: basename(&n.label).to_owned(),
                })
                .collect(),
            edges: self.edges.clone(),
        }
    }
}

/// Last `/`-separated component of a path-like name.
///
/// `"calc/src/calc.c"` becomes `"calc.c"`; a trailing slash yields `""`.
#[must_use]
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
