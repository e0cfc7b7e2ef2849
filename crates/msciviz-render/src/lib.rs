//! Plotly 피겨 생성과 HTML 출력.
//!
//! 분석 크레이트의 결과를 받아 차트별 피겨 JSON을 만들고, CDN의
//! Plotly 스크립트를 참조하는 독립 HTML 파일로 씁니다.

pub mod error;
pub mod figures;
pub mod html;

pub use error::{RenderError, Result};
pub use html::{default_config, render_page, write_chart, Chart};
