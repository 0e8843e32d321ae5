//! Function-level call and caller graphs.
//!
//! Member definitions do not nest, so the first `</detaileddescription>`
//! inside a member is its own.

use std::sync::LazyLock;

use regex::Regex;

use crate::block::{DiagramTarget, new_detailed_description, pending_blocks};
use crate::consts::{DETAILED_CLOSE, INBODY_OPEN};
use crate::parser::{incoming_calls, outgoing_calls};
use crate::plantuml::{CallDirection, render_star};
use crate::transform::{DroppedDiagrams, Report, TransformOptions};

static MEMBERDEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)(<memberdef\s[^>]*\bkind="function"[^>]*>)(.*?)(</memberdef>)"#).unwrap()
});

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<name>([^<]*)</name>").unwrap());

/// Splice call/caller diagrams into every function member of `text`.
///
/// Diagrams for a member with neither a `<detaileddescription>` nor an
/// `<inbodydescription>` are dropped and reported as a warning.
pub(crate) fn inject_member_graphs(
    text: &str,
    options: &TransformOptions,
    report: &mut Report,
) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    for caps in MEMBERDEF_RE.captures_iter(text) {
        let Some(content) = caps.get(2) else {
            continue;
        };
        let Some(name) = NAME_RE.captures(content.as_str()).and_then(|c| c.get(1)) else {
            continue;
        };

        let diagrams = member_diagrams(name.as_str(), content.as_str(), options);
        let blocks = pending_blocks(&diagrams, content.as_str());
        if blocks.is_empty() {
            continue;
        }

        let joined = blocks.concat();
        let body = content.as_str();
        let (offset, insertion) = if let Some(pos) = body.find(DETAILED_CLOSE) {
            (content.start() + pos, joined)
        } else if let Some(pos) = body.find(INBODY_OPEN) {
            (content.start() + pos, new_detailed_description(&joined))
        } else {
            report.warnings.push(DroppedDiagrams {
                member: name.as_str().to_owned(),
                diagrams: blocks.len(),
            });
            continue;
        };

        output.push_str(&text[last..offset]);
        output.push_str(&insertion);
        last = offset;
        report.diagrams += blocks.len();
    }

    output.push_str(&text[last..]);
    output
}

/// Render the call graph and caller graph of one function.
#[must_use]
pub fn member_diagrams(
    name: &str,
    content: &str,
    options: &TransformOptions,
) -> Vec<DiagramTarget> {
    [
        (outgoing_calls(content), CallDirection::Outgoing, "call graph"),
        (incoming_calls(content), CallDirection::Incoming, "caller graph"),
    ]
    .into_iter()
    .filter_map(|(names, direction, suffix)| {
        let title = format!("{name} {suffix}");
        let body = render_star(name, &names, &title, direction, options.max_nodes)?;
        Some(DiagramTarget { title, body })
    })
    .collect()
}
