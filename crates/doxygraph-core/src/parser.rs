//! Pattern-based extraction of graph blocks and call references.
//!
//! The XML is never run through a structural parser: every lookup is an
//! anchored regex over the raw text, so regions that are not touched keep
//! their exact bytes.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Graph;

static INCDEPGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<incdepgraph>(.*?)</incdepgraph>").unwrap());

static INVINCDEPGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<invincdepgraph>(.*?)</invincdepgraph>").unwrap());

static INHERITANCEGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<inheritancegraph>(.*?)</inheritancegraph>").unwrap());

static COLLABORATIONGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<collaborationgraph>(.*?)</collaborationgraph>").unwrap()
});

static NODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<node\s+id="([^"]*)">(.*?)</node>"#).unwrap());

static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<label>([^<]*)</label>").unwrap());

static CHILDNODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<childnode\s+refid="([^"]*)"\s+relation="([^"]*)""#).unwrap()
});

static REFERENCES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<references[^>]*>([^<]*)</references>").unwrap());

static REFERENCEDBY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<referencedby[^>]*>([^<]*)</referencedby>").unwrap());

/// Graph block tags emitted by Doxygen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphTag {
    /// Files included by this file (`<incdepgraph>`).
    IncludeDependency,
    /// Files that include this file (`<invincdepgraph>`).
    ReverseIncludeDependency,
    /// Base and derived classes (`<inheritancegraph>`).
    Inheritance,
    /// Classes used by members (`<collaborationgraph>`).
    Collaboration,
}

impl GraphTag {
    /// XML element name of the block.
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::IncludeDependency => "incdepgraph",
            Self::ReverseIncludeDependency => "invincdepgraph",
            Self::Inheritance => "inheritancegraph",
            Self::Collaboration => "collaborationgraph",
        }
    }

    /// Suffix appended to the compound name to build the diagram title.
    #[must_use]
    pub fn title_suffix(self) -> &'static str {
        match self {
            Self::IncludeDependency => "include dependency",
            Self::ReverseIncludeDependency => "reverse include dependency",
            Self::Inheritance => "inheritance",
            Self::Collaboration => "collaboration",
        }
    }

    fn block_regex(self) -> &'static Regex {
        match self {
            Self::IncludeDependency => &INCDEPGRAPH_RE,
            Self::ReverseIncludeDependency => &INVINCDEPGRAPH_RE,
            Self::Inheritance => &INHERITANCEGRAPH_RE,
            Self::Collaboration => &COLLABORATIONGRAPH_RE,
        }
    }
}

/// Extract every graph block of the given kind from `text`.
///
/// Returns one [`Graph`] per block, in document order. A node without a
/// `<label>` is left out of the node set, but its `<childnode>` edges are still
/// recorded; they become dangling and are dropped at render time.
#[must_use]
pub fn extract_graphs(text: &str, tag: GraphTag) -> Vec<Graph> {
    tag.block_regex()
        .captures_iter(text)
        .map(|block| parse_graph_block(&block[1]))
        .collect()
}

fn parse_graph_block(block: &str) -> Graph {
    let mut graph = Graph::new();

    for node in NODE_RE.captures_iter(block) {
        let id = &node[1];
        let content = &node[2];

        if let Some(label) = LABEL_RE.captures(content) {
            graph.insert_node(id, &label[1]);
        }

        for child in CHILDNODE_RE.captures_iter(content) {
            graph.push_edge(id, &child[1], &child[2]);
        }
    }

    graph
}

/// Names of functions called by a member (`<references>`), in document order.
///
/// Names are trimmed; empty ones are skipped. Duplicates are kept.
#[must_use]
pub fn outgoing_calls(member: &str) -> Vec<String> {
    collect_names(&REFERENCES_RE, member)
}

/// Names of functions calling a member (`<referencedby>`), in document order.
#[must_use]
pub fn incoming_calls(member: &str) -> Vec<String> {
    collect_names(&REFERENCEDBY_RE, member)
}

fn collect_names(re: &Regex, text: &str) -> Vec<String> {
    re.captures_iter(text)
        .map(|caps| caps[1].trim().to_owned())
        .filter(|name| !name.is_empty())
        .collect()
}
