//! XML wrapping of rendered diagrams.
//!
//! Each diagram becomes a `<simplesect kind="par">` paragraph, which the
//! markdown generator turns into its own titled section.

/// A rendered diagram waiting to be spliced into the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramTarget {
    /// Section title, also used as the diagram caption.
    pub title: String,
    /// `PlantUML` body without `@startuml`/`@enduml`.
    pub body: String,
}

impl DiagramTarget {
    /// Wrap the diagram as a titled `par` section.
    #[must_use]
    pub fn to_xml(&self) -> String {
        format!(
            "<para><simplesect kind=\"par\"><title>{}</title>\
             <para><plantuml>\n{}\n</plantuml></para>\
             </simplesect></para>\n",
            self.title, self.body
        )
    }
}

/// XML of every diagram not already present in `region`.
///
/// Rerunning over processed output therefore yields nothing to insert.
pub(crate) fn pending_blocks(diagrams: &[DiagramTarget], region: &str) -> Vec<String> {
    diagrams
        .iter()
        .map(DiagramTarget::to_xml)
        .filter(|xml| !region.contains(xml.as_str()))
        .collect()
}

/// Wrap inserted blocks in a new `<detaileddescription>` element.
pub(crate) fn new_detailed_description(blocks: &str) -> String {
    format!("<detaileddescription>{blocks}</detaileddescription>\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn target() -> DiagramTarget {
        DiagramTarget {
            title: "calc.c include dependency".to_owned(),
            body: "caption calc.c include dependency\nn1 --> n2".to_owned(),
        }
    }

    #[test]
    fn test_to_xml() {
        assert_eq!(
            target().to_xml(),
            "<para><simplesect kind=\"par\"><title>calc.c include dependency</title>\
             <para><plantuml>\ncaption calc.c include dependency\nn1 --> n2\n</plantuml></para>\
             </simplesect></para>\n"
        );
    }

    #[test]
    fn test_pending_blocks_skips_present_blocks() {
        let diagrams = vec![target()];
        let region = format!("<detaileddescription>{}</detaileddescription>", target().to_xml());
        assert!(pending_blocks(&diagrams, &region).is_empty());
        assert_eq!(
            pending_blocks(&diagrams, "<detaileddescription/>"),
            vec![target().to_xml()]
        );
    }
}
