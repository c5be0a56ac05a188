//! Defines the `Error` and `Result` types that this crate uses.

use greenlens_content::DataShapeError;
use thiserror::Error;
use tinytemplate::error::Error as TinyTemplateError;

use crate::render::error::RenderError;

/// The result type that uses [VisError] as the error type.
pub type Result<T> = std::result::Result<T, VisError>;

/// The error type for rendering the page.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VisError {
    /// A content table is malformed. Nothing has been rendered.
    #[error("vis error: {0}")]
    DataShape(#[from] DataShapeError),

    /// A [RenderError] encountered while emitting markup.
    #[error("vis error: {0}")]
    Render(#[from] RenderError),

    /// A [tinytemplate::error::Error] encountered while parsing or rendering
    /// the document template.
    #[error("vis error: template error: {0}")]
    Template(#[from] TinyTemplateError),
}
