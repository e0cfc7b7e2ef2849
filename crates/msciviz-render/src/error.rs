//! 렌더링 에러 타입.

use std::path::PathBuf;
use thiserror::Error;

/// 렌더링 과정에서 발생하는 에러.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to serialize figure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to create output directory: {0}")]
    OutputDir(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

impl From<RenderError> for msciviz_core::VizError {
    fn from(err: RenderError) -> Self {
        msciviz_core::VizError::Render(err.to_string())
    }
}
