//! Page sections.

use crate::id::Id;
use crate::layout::ElementKind;

/// The HTML element a section is emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// The page header.
    Header,
    /// A body section.
    Body,
    /// The page footer.
    Footer,
}

impl SectionKind {
    /// The tag name of the section.
    pub fn tag(&self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Body => "section",
            SectionKind::Footer => "footer",
        }
    }
}

/// A titled part of the page holding a sequence of elements.
#[derive(Debug, Clone)]
pub struct Section {
    id: Id,
    /// The element the section is emitted as.
    pub kind: SectionKind,
    /// The contents, in display order.
    pub elements: Vec<ElementKind>,
}

impl Section {
    /// Creates an empty body section.
    pub fn new(id: Id) -> Section {
        Self {
            id,
            kind: SectionKind::Body,
            elements: Vec::new(),
        }
    }

    /// Changes the kind of the section.
    pub fn kind(mut self, kind: SectionKind) -> Section {
        self.kind = kind;
        self
    }

    /// Appends an element.
    pub fn add(mut self, element: ElementKind) -> Section {
        self.elements.push(element);
        self
    }

    /// The section anchor.
    pub fn id(&self) -> &Id {
        &self.id
    }
}
