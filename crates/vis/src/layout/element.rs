//! The leaf elements a section is built from.

use greenlens_content::prose::Inline;
use greenlens_content::prose::Link;
use greenlens_content::prose::ListItem;

use crate::layout::ElementKind;

/// A heading of level 1 to 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// The heading level, clamped to `1..=4`.
    pub level: u8,
    /// The heading text.
    pub text: &'static str,
    /// An optional CSS class.
    pub class: Option<&'static str>,
}

impl Heading {
    /// Creates an unstyled heading.
    pub fn new(level: u8, text: &'static str) -> Heading {
        Self {
            level: level.clamp(1, 4),
            text,
            class: None,
        }
    }

    /// Sets the CSS class.
    pub fn class(mut self, class: &'static str) -> Heading {
        self.class = Some(class);
        self
    }
}

/// A paragraph made of inline runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// The runs, in reading order.
    pub runs: Vec<Inline>,
    /// An optional CSS class.
    pub class: Option<&'static str>,
}

impl Paragraph {
    /// Creates a paragraph from inline runs.
    pub fn new(runs: &[Inline]) -> Paragraph {
        Self {
            runs: runs.to_vec(),
            class: None,
        }
    }

    /// Creates a paragraph of plain text.
    pub fn text(text: &'static str) -> Paragraph {
        Self::new(&[Inline::Text(text)])
    }

    /// Sets the CSS class.
    pub fn class(mut self, class: &'static str) -> Paragraph {
        self.class = Some(class);
        self
    }
}

/// Equal-width columns laid out side by side.
#[derive(Debug, Clone, Default)]
pub struct Columns {
    /// The elements of each column, left to right.
    pub columns: Vec<Vec<ElementKind>>,
}

impl Columns {
    /// Creates an empty row of columns.
    pub fn new() -> Columns {
        Self::default()
    }

    /// Appends a column.
    pub fn add(mut self, column: Vec<ElementKind>) -> Columns {
        self.columns.push(column);
        self
    }
}

/// A bullet list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    /// The top-level items.
    pub items: Vec<ListItem>,
}

impl List {
    /// Creates a list from its items.
    pub fn new(items: impl IntoIterator<Item = ListItem>) -> List {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

/// Text shown verbatim in a preformatted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeBlock {
    /// The text, line breaks included.
    pub text: &'static str,
}

/// A styled container.
#[derive(Debug, Clone)]
pub struct Panel {
    /// The CSS class of the container.
    pub class: &'static str,
    /// The contained elements.
    pub elements: Vec<ElementKind>,
}

impl Panel {
    /// Creates an empty panel.
    pub fn new(class: &'static str) -> Panel {
        Self {
            class,
            elements: Vec::new(),
        }
    }

    /// Appends an element.
    pub fn add(mut self, element: ElementKind) -> Panel {
        self.elements.push(element);
        self
    }
}

/// An icon, a title and a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// The icon glyph.
    pub icon: &'static str,
    /// The card title.
    pub title: &'static str,
    /// The card body.
    pub description: &'static str,
}

/// A row of link buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    /// The links, in display order.
    pub links: Vec<Link>,
}
