//! 차트별 피겨 빌더.
//!
//! 각 모듈이 차트 하나를 담당하며, 분석 결과를 받아
//! [`Chart`](crate::html::Chart)를 돌려줍니다.

pub mod context;
pub mod heatmap;
pub mod long_term;
pub mod multiple;
pub mod returns_one;
pub mod returns_two;
pub mod single;
