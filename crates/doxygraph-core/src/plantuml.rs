//! `PlantUML` rendering of graphs and call stars.
//!
//! Output is the diagram body only: a `caption` line, shape lines, then
//! connector lines. `@startuml`/`@enduml` are left to the downstream renderer.

use std::collections::HashSet;

use crate::model::Graph;

/// Fill color of the highlighted (self) node.
const HIGHLIGHT_COLOR: &str = "#LightBlue";

/// Alias of the center node in star diagrams.
const CENTER_ALIAS: &str = "current";

/// Direction of the edges in a star diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallDirection {
    /// Center calls each peripheral (`current --> rN`).
    Outgoing,
    /// Each peripheral calls the center (`cN --> current`).
    Incoming,
}

impl CallDirection {
    fn alias_prefix(self) -> char {
        match self {
            Self::Outgoing => 'r',
            Self::Incoming => 'c',
        }
    }
}

/// Escape a label for use inside a double-quoted `PlantUML` string.
fn escape_label(label: &str) -> String {
    label.replace('"', "\\\"")
}

fn shape_line(label: &str, alias: &str, highlight: bool) -> String {
    let escaped = escape_label(label);
    if highlight {
        format!("rectangle \"**{escaped}**\" as {alias} {HIGHLIGHT_COLOR}")
    } else {
        format!("rectangle \"{escaped}\" as {alias}")
    }
}

/// Connector for a Doxygen relation attribute.
fn arrow_for(relation: &str) -> &'static str {
    match relation {
        "public-inheritance" | "protected-inheritance" | "private-inheritance" => "--|>",
        "usage" => "..>",
        _ => "-->",
    }
}

/// Render a node/edge graph.
///
/// Returns `None` when the graph has no nodes, more than `max_nodes` nodes,
/// or no edge whose endpoints are both known. Node ids are prefixed with `n`
/// so they never clash with `PlantUML` keywords. `self_id`, if present, is
/// drawn bold on a highlighted fill.
#[must_use]
pub fn render_graph(
    graph: &Graph,
    title: &str,
    self_id: Option<&str>,
    max_nodes: usize,
) -> Option<String> {
    let nodes = graph.nodes();
    if nodes.is_empty() || nodes.len() > max_nodes {
        return None;
    }

    let edges: Vec<_> = graph.valid_edges().collect();
    if edges.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(1 + nodes.len() + edges.len());
    lines.push(format!("caption {title}"));

    for node in nodes {
        let alias = format!("n{}", node.id);
        lines.push(shape_line(
            &node.label,
            &alias,
            self_id == Some(node.id.as_str()),
        ));
    }

    for edge in edges {
        lines.push(format!(
            "n{} {} n{}",
            edge.from,
            arrow_for(&edge.relation),
            edge.to
        ));
    }

    Some(lines.join("\n"))
}

/// Render a star: one highlighted center connected to each peripheral name.
///
/// Peripherals are deduplicated in first-seen order before the size check.
/// Returns `None` if no peripheral remains or the diagram would exceed
/// `max_nodes` nodes including the center.
#[must_use]
pub fn render_star(
    center: &str,
    peripherals: &[String],
    title: &str,
    direction: CallDirection,
    max_nodes: usize,
) -> Option<String> {
    let mut seen = HashSet::new();
    let unique: Vec<&str> = peripherals
        .iter()
        .map(String::as_str)
        .filter(|name| seen.insert(*name))
        .collect();

    if unique.is_empty() || unique.len() + 1 > max_nodes {
        return None;
    }

    let prefix = direction.alias_prefix();
    let mut lines = Vec::with_capacity(2 + unique.len() * 2);
    lines.push(format!("caption {title}"));
    lines.push(shape_line(center, CENTER_ALIAS, true));

    for (i, name) in unique.iter().enumerate() {
        lines.push(shape_line(name, &format!("{prefix}{i}"), false));
    }

    for i in 0..unique.len() {
        lines.push(match direction {
            CallDirection::Outgoing => format!("{CENTER_ALIAS} --> {prefix}{i}"),
            CallDirection::Incoming => format!("{prefix}{i} --> {CENTER_ALIAS}"),
        });
    }

    Some(lines.join("\n"))
}
