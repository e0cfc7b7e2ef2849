//! 차트 생성기의 에러 타입.
//!
//! 이 모듈은 시스템 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 차트 생성 에러.
#[derive(Debug, Error)]
pub enum VizError {
    /// 설정 에러
    #[error("Configuration error: {0}")]
    Config(String),

    /// 입력 데이터 에러 (CSV 누락/형식 오류 등)
    #[error("Data error: {0}")]
    Data(String),

    /// 시계열 검증 에러
    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    /// 차트 렌더링 에러
    #[error("Render error: {0}")]
    Render(String),

    /// 직렬화 에러
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// 입출력 에러
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 차트 생성 작업을 위한 Result 타입.
pub type VizResult<T> = Result<T, VizError>;

impl VizError {
    /// 입력 파일 문제로 인한 치명적 에러인지 확인합니다.
    ///
    /// 입력 파일이 없거나 형식이 잘못된 경우 복구하지 않고 호출자에게
    /// 그대로 전달됩니다. 보유 기간 부족 등은 에러가 아니라 빈 셀로
    /// 처리되므로 여기에 해당하지 않습니다.
    pub fn is_fatal_input(&self) -> bool {
        matches!(self, VizError::Data(_) | VizError::Io(_))
    }
}

impl From<serde_json::Error> for VizError {
    fn from(err: serde_json::Error) -> Self {
        VizError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for VizError {
    fn from(err: config::ConfigError) -> Self {
        VizError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_input_classification() {
        let data_err = VizError::Data("missing file".to_string());
        assert!(data_err.is_fatal_input());

        let render_err = VizError::Render("bad trace".to_string());
        assert!(!render_err.is_fatal_input());
    }

    #[test]
    fn test_serde_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{not json")
            .expect_err("must fail");
        let viz: VizError = err.into();
        assert!(matches!(viz, VizError::Serialization(_)));
    }
}
