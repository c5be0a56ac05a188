use std::io;

use greenlens_content::DataShapeError;
use greenlens_vis::error::VisError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("CLI error: {0}")]
    Vis(#[from] VisError),

    #[error("CLI error: {0}")]
    DataShape(#[from] DataShapeError),

    #[error("CLI error: JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CLI error: I/O error: {0}")]
    Io(#[from] io::Error),
}
