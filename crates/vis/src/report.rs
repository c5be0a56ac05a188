//! The entry point that turns content and a theme into a document.

use greenlens_content::PageContent;
use tracing::info;

use crate::error::Result;
use crate::layout;
use crate::render::OutputStream;
use crate::render::Render;
use crate::template::Context;
use crate::template::TemplateEngine;
use crate::theme::Theme;

/// The Green Lens page, ready to be rendered.
///
/// Rendering is deterministic: the same content and theme always produce the
/// same document, byte for byte.
#[derive(Debug, Clone)]
pub struct PageReport {
    content: PageContent,
    theme: Theme,
}

impl PageReport {
    /// Prepares the page for the given content and theme.
    pub fn new(content: PageContent, theme: Theme) -> PageReport {
        Self { content, theme }
    }

    /// Renders the complete document into memory.
    ///
    /// Fails with [VisError::DataShape] without producing any output when a
    /// content table is malformed.
    ///
    /// [VisError::DataShape]: crate::error::VisError::DataShape
    pub fn render(&self) -> Result<String> {
        let view = layout::compose(&self.content)?;

        let mut body = String::new();
        view.render(&mut body)?;

        let stylesheet = self.theme.stylesheet();
        let engine = TemplateEngine::new()?;
        let document = engine.render(&Context::new(view.title, &stylesheet, &body))?;

        info!(
            sections = view.sections.len(),
            bytes = document.len(),
            "rendered page"
        );

        Ok(document)
    }

    /// Renders the document and then writes it to `output` in one piece.
    pub fn write_to<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        let document = self.render()?;
        output.write(&document)?;

        Ok(())
    }
}

impl Default for PageReport {
    fn default() -> Self {
        Self::new(PageContent::green_lens(), Theme::default())
    }
}
