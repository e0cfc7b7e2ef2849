//! 수익률 집계와 차트용 데이터 변환.
//!
//! 연간 수익률에서 시작 연도 × 보유 기간 행렬, 보유 기간별 범위,
//! 수익률 구간 분류, 연도별 일간 프로파일을 계산합니다.
//! 모든 계산은 NaN을 에러 없이 전파합니다.

pub mod aggregate;
pub mod envelope;
pub mod intervals;
pub mod profiles;

pub use aggregate::ReturnMatrix;
pub use envelope::ReturnEnvelope;
pub use intervals::{bin_annual_returns, Interval, INTERVAL_EDGES};
pub use profiles::{year_profiles, YearProfile};
