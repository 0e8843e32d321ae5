//! Self-node lookup: which graph node stands for the enclosing compound.

use crate::model::{Node, basename};

/// Find the node representing `compound_name`.
///
/// Returns the id of the first node, in first-seen order, whose label equals
/// `compound_name` or whose last path component equals the compound's last
/// path component.
#[must_use]
pub fn find_self_node<'a>(nodes: &'a [Node], compound_name: &str) -> Option<&'a str> {
    let name = basename(compound_name);
    nodes
        .iter()
        .find(|n| n.label == compound_name || basename(&n.label) == name)
        .map(|n| n.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(pairs: &[(&str, &str)]) -> Vec<Node> {
        pairs
            .iter()
            .map(|(id, label)| Node {
                id: (*id).to_owned(),
                label: (*label).to_owned(),
            })
            .collect()
    }

    #[test]
    fn test_basename_match() {
        let nodes = nodes(&[("1", "a/b/x.c"), ("2", "y.c")]);
        assert_eq!(find_self_node(&nodes, "q/b/x.c"), Some("1"));
    }

    #[test]
    fn test_exact_match() {
        let nodes = nodes(&[("1", "Base"), ("2", "ns::Derived")]);
        assert_eq!(find_self_node(&nodes, "ns::Derived"), Some("2"));
    }

    #[test]
    fn test_first_seen_wins() {
        let nodes = nodes(&[("5", "lib/util.h"), ("3", "src/util.h")]);
        assert_eq!(find_self_node(&nodes, "src/util.h"), Some("5"));
    }

    #[test]
    fn test_no_match() {
        let nodes = nodes(&[("1", "a.h"), ("2", "b.h")]);
        assert_eq!(find_self_node(&nodes, "c.h"), None);
        assert_eq!(find_self_node(&[], "c.h"), None);
    }
}
