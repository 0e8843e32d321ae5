//! Compound-level diagrams: include dependencies for files, inheritance and
//! collaboration for classes and structs.
//!
//! Diagrams go into the compound's own `<detaileddescription>`. Member
//! definitions nested in the compound carry their own description blocks, and
//! Doxygen writes all of them before the compound's trailing description, so
//! the compound's block is the LAST `</detaileddescription>` in its span.

use std::sync::LazyLock;

use regex::Regex;

use crate::block::{DiagramTarget, new_detailed_description, pending_blocks};
use crate::consts::{DETAILED_CLOSE, UNKNOWN_NAME};
use crate::model::basename;
use crate::parser::{GraphTag, extract_graphs};
use crate::plantuml::render_graph;
use crate::resolve::find_self_node;
use crate::transform::{LabelMode, Report, TransformOptions};

static COMPOUNDDEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)(<compounddef\s[^>]*\bkind="(\w+)"[^>]*>)(.*?)(</compounddef>)"#).unwrap()
});

static COMPOUNDNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<compoundname>([^<]*)</compoundname>").unwrap());

/// Splice compound-level diagrams into every `file`, `class` and `struct`
/// compound of `text`.
pub(crate) fn inject_compound_graphs(
    text: &str,
    options: &TransformOptions,
    report: &mut Report,
) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    for caps in COMPOUNDDEF_RE.captures_iter(text) {
        let (Some(kind), Some(content)) = (caps.get(2), caps.get(3)) else {
            continue;
        };

        let diagrams = compound_diagrams(kind.as_str(), content.as_str(), options);
        let blocks = pending_blocks(&diagrams, content.as_str());
        if blocks.is_empty() {
            continue;
        }

        let joined = blocks.concat();
        let (offset, insertion) = match content.as_str().rfind(DETAILED_CLOSE) {
            Some(pos) => (content.start() + pos, joined),
            None => (content.end(), new_detailed_description(&joined)),
        };

        output.push_str(&text[last..offset]);
        output.push_str(&insertion);
        last = offset;
        report.diagrams += blocks.len();
    }

    output.push_str(&text[last..]);
    output
}

/// Render the diagrams of one compound body.
///
/// `kind` is the compound's `kind` attribute; kinds other than `file`,
/// `class` and `struct` produce nothing.
#[must_use]
pub fn compound_diagrams(
    kind: &str,
    content: &str,
    options: &TransformOptions,
) -> Vec<DiagramTarget> {
    let name = COMPOUNDNAME_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map_or(UNKNOWN_NAME, |m| m.as_str());

    match kind {
        "file" => {
            let display_name = basename(name);
            [GraphTag::IncludeDependency, GraphTag::ReverseIncludeDependency]
                .into_iter()
                .flat_map(|tag| {
                    extract_graphs(content, tag)
                        .into_iter()
                        .filter_map(move |graph| {
                            // Resolve against full paths before labels are shortened
                            let self_id = find_self_node(graph.nodes(), name).map(str::to_owned);
                            let graph = match options.include_labels {
                                LabelMode::Basename => graph.with_basename_labels(),
                                LabelMode::Full => graph,
                            };
                            let title = format!("{display_name} {}", tag.title_suffix());
                            let body =
                                render_graph(&graph, &title, self_id.as_deref(), options.max_nodes)?;
                            Some(DiagramTarget { title, body })
                        })
                })
                .collect()
        }
        "class" | "struct" => [GraphTag::Inheritance, GraphTag::Collaboration]
            .into_iter()
            .flat_map(|tag| {
                extract_graphs(content, tag)
                    .into_iter()
                    .filter_map(move |graph| {
                        let self_id = find_self_node(graph.nodes(), name);
                        let title = format!("{name} {}", tag.title_suffix());
                        let body = render_graph(&graph, &title, self_id, options.max_nodes)?;
                        Some(DiagramTarget { title, body })
                    })
            })
            .collect(),
        _ => Vec::new(),
    }
}
