//! Static prose blocks: headings, paragraphs, bullet lists and links.

use serde::Serialize;

/// A run of inline text with an optional emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Inline {
    /// Plain text.
    Text(&'static str),
    /// Bold text.
    Strong(&'static str),
    /// Text on a highlighted background.
    Highlight(&'static str),
}

/// A bullet that may carry nested bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// The bullet text.
    pub text: &'static str,
    /// Nested bullets, in display order.
    pub children: &'static [&'static str],
}

impl ListItem {
    /// A bullet without nested bullets.
    pub const fn leaf(text: &'static str) -> ListItem {
        Self { text, children: &[] }
    }
}

/// The page header and introduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    /// The glyph shown above the title.
    pub glyph: &'static str,
    /// The product name.
    pub title: &'static str,
    /// The lines shown below the title.
    pub taglines: [&'static str; 2],
    /// The heading that opens the introduction.
    pub lead: &'static str,
    /// The introduction paragraph.
    pub intro: &'static [Inline],
}

/// The protocol description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Protocol {
    /// The section heading.
    pub heading: &'static str,
    /// The full name of the protocol.
    pub name: &'static str,
    /// The sentence that introduces the bullets.
    pub intro: &'static str,
    /// The protocol features.
    pub items: &'static [ListItem],
}

/// The preformatted sample of a per-query report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleOutput {
    /// The section heading.
    pub heading: &'static str,
    /// The sub-heading above the sample.
    pub title: &'static str,
    /// The sample, shown verbatim.
    pub text: &'static str,
}

/// How a link is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// The main action.
    Primary,
    /// The alternative action.
    Secondary,
}

/// An outbound link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    /// The visible label.
    pub label: &'static str,
    /// The destination.
    pub href: &'static str,
    /// The button style.
    pub style: LinkStyle,
}

/// The call-to-action panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    /// The panel heading.
    pub heading: &'static str,
    /// The panel text.
    pub text: &'static str,
    /// The two action links.
    pub links: [Link; 2],
}

/// The page footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Footer {
    /// The footer lines.
    pub lines: [&'static str; 2],
}
