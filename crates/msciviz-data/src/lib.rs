//! MSCI World 가격 데이터 적재 모듈.
//!
//! Yahoo Finance 내보내기 형식의 CSV 파일에서 일별 가격 시계열을
//! 읽어 들이고, 달력 기준 리샘플링 (연말 종가, 주별 첫 관측치)을
//! 제공합니다.

pub mod error;
pub mod loader;
pub mod resample;

pub use error::{DataError, Result};
pub use loader::load_price_series;
pub use resample::{week_first, year_end_closes};
