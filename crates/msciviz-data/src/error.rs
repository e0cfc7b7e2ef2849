//! 데이터 모듈 오류 타입.

use std::path::PathBuf;
use thiserror::Error;

/// 데이터 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 입력 파일을 찾을 수 없음
    #[error("Input file not found: {0}")]
    FileNotFound(PathBuf),

    /// CSV 읽기 오류
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// 잘못된 데이터 형식
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// 필요한 컬럼 없음
    #[error("No usable value column in {0}")]
    MissingColumn(PathBuf),

    /// 입출력 오류
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 데이터 작업을 위한 Result 타입.
pub type Result<T> = std::result::Result<T, DataError>;

impl From<DataError> for msciviz_core::VizError {
    fn from(err: DataError) -> Self {
        msciviz_core::VizError::Data(err.to_string())
    }
}
