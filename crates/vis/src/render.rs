//! Emits the element tree as HTML.

pub mod error;
pub mod output;
pub mod view;

use crate::render::error::RenderError;

/// A sink for rendered markup.
pub trait OutputStream {
    /// Appends `data` to the output.
    fn write(&mut self, data: &str) -> Result<(), RenderError>;
}

/// An element that knows how to emit itself.
pub trait Render {
    /// Emits the markup of `self` to `output`.
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream;
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.push_str(data);
        Ok(())
    }
}

/// Returns `text` with the HTML special characters escaped.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    tinytemplate::escape(text, &mut escaped);
    escaped
}
