//! Errors raised while emitting markup.

use std::io;

use thiserror::Error;

/// The error type for emitting markup to an [OutputStream].
///
/// [OutputStream]: crate::render::OutputStream
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Writing to the underlying output failed.
    #[error("render error: I/O error: {0}")]
    Io(#[from] io::Error),
}
