//! # MSCI Viz Core
//!
//! MSCI World 차트 생성기의 핵심 도메인 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 가격 시계열 및 연간 수익률 타입
//! - 에러 타입
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use types::*;
