//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! 기본값 → TOML 파일 → `MSCIVIZ` 접두사 환경 변수 순으로 적용됩니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// 입력 데이터 설정
    pub data: DataConfig,
    /// 출력 설정
    pub output: OutputConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
}

/// 입력 데이터 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// MSCI World 일별 지수 CSV 경로
    pub input_path: String,
    /// 이 연도 이후의 수익률은 제외 (진행 중인 연도 필터링)
    pub cutoff_year: i32,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            input_path: "data/MSCI_World_daily.csv".to_string(),
            cutoff_year: 2025,
        }
    }
}

/// 출력 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// HTML 차트가 저장되는 디렉터리
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "img".to_string(),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// 파일에서 설정을 로드합니다.
    ///
    /// 파일 값은 기본값을 덮어쓰고, `MSCIVIZ__` 환경 변수가 다시
    /// 파일 값을 덮어씁니다 (예: `MSCIVIZ__OUTPUT__DIR=out`).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("data.input_path", DataConfig::default().input_path)?
            .set_default("data.cutoff_year", i64::from(DataConfig::default().cutoff_year))?
            .set_default("output.dir", OutputConfig::default().dir)?
            .set_default("logging.level", LoggingConfig::default().level)?
            .set_default("logging.format", LoggingConfig::default().format)?
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("MSCIVIZ")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값을 반환합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        let default_path = Path::new("config/default.toml");
        if default_path.exists() {
            Self::load(default_path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.data.cutoff_year, 2025);
        assert_eq!(config.output.dir, "img");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.data.input_path, config.data.input_path);
        assert_eq!(parsed.data.cutoff_year, config.data.cutoff_year);
    }
}
