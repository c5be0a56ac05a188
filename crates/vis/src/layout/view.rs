//! The root of the element tree.

use crate::layout::section::Section;

/// The whole page: a title and its sections in display order.
#[derive(Debug, Clone)]
pub struct View {
    /// The document title.
    pub title: &'static str,
    /// The sections, in display order.
    pub sections: Vec<Section>,
}

impl View {
    /// Creates a page without sections.
    pub fn new(title: &'static str) -> View {
        View {
            title,
            sections: Vec::new(),
        }
    }

    /// Appends a section.
    pub fn add(mut self, section: Section) -> View {
        self.sections.push(section);
        self
    }

    /// Finds a section by its anchor name.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id().as_str() == id)
    }
}
