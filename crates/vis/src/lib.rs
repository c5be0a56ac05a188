//! Green Lens page renderer.
//!
//! Turns a [PageContent] into a standalone HTML document. Rendering is a pure
//! function of the content and the [Theme]: the layout script composes an
//! element tree, the tree is rendered into an in-memory buffer, and the
//! buffer is wrapped in the document template. Nothing is written to an
//! output surface until the whole document has been produced.
//!
//! [PageContent]: greenlens_content::PageContent

#![warn(missing_docs)]

pub(crate) mod template;

pub mod error;
pub mod id;
pub mod layout;
pub mod render;
pub mod report;
pub mod theme;

pub use crate::report::PageReport;
pub use crate::theme::Theme;
