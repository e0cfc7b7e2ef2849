//! 차트 렌더링 명령.
//!
//! CSV를 한 번 읽어 분석 단계를 거친 뒤, 요청된 차트의 피겨를
//! 만들어 HTML 파일로 씁니다.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use msciviz_analytics::{
    bin_annual_returns, year_profiles, ReturnEnvelope, ReturnMatrix,
};
use msciviz_core::{AnnualReturns, AppConfig, PriceSeries};
use msciviz_data::{load_price_series, week_first, year_end_closes};
use msciviz_render::{figures, write_chart, Chart};

/// 렌더링 가능한 차트 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Heatmap,
    LongTerm,
    Multiple,
    ReturnsOne,
    ReturnsTwo,
    Single,
}

impl ChartKind {
    /// 모든 차트 (all 명령의 렌더링 순서).
    pub fn all() -> [ChartKind; 6] {
        [
            ChartKind::Heatmap,
            ChartKind::LongTerm,
            ChartKind::Multiple,
            ChartKind::ReturnsOne,
            ChartKind::ReturnsTwo,
            ChartKind::Single,
        ]
    }
}

/// 모든 차트가 공유하는 입력 데이터.
struct ChartInputs {
    series: PriceSeries,
    annual_returns: AnnualReturns,
}

impl ChartInputs {
    fn load(config: &AppConfig) -> Result<Self> {
        let series = load_price_series(&config.data.input_path)
            .with_context(|| format!("failed to load {}", config.data.input_path))?;

        let closes = year_end_closes(&series);
        let annual_returns =
            AnnualReturns::from_year_end_closes(&closes, config.data.cutoff_year);

        info!(
            observations = series.len(),
            annual_returns = annual_returns.len(),
            "chart inputs prepared"
        );

        Ok(Self {
            series,
            annual_returns,
        })
    }

    /// 기록상 가능한 최장 보유 기간.
    fn max_horizon(&self) -> usize {
        match (self.annual_returns.years.first(), self.annual_returns.years.last()) {
            (Some(first), Some(last)) => (last - first + 1) as usize,
            _ => 0,
        }
    }

    fn figure(&self, kind: ChartKind) -> Chart {
        match kind {
            ChartKind::Heatmap => {
                let matrix = ReturnMatrix::compute(&self.annual_returns, self.max_horizon());
                figures::heatmap::build(&matrix)
            }
            ChartKind::LongTerm => {
                let matrix = ReturnMatrix::compute(&self.annual_returns, self.max_horizon());
                figures::long_term::build(&ReturnEnvelope::from_matrix(&matrix))
            }
            ChartKind::Multiple => {
                figures::multiple::build(&year_profiles(&self.series))
            }
            ChartKind::ReturnsOne => {
                figures::returns_one::build(&bin_annual_returns(&self.annual_returns))
            }
            ChartKind::ReturnsTwo => figures::returns_two::build(&self.annual_returns),
            ChartKind::Single => figures::single::build(&week_first(&self.series)),
        }
    }
}

/// 차트 하나를 렌더링하고 출력 경로를 반환합니다.
pub fn render_chart(config: &AppConfig, kind: ChartKind) -> Result<PathBuf> {
    let inputs = ChartInputs::load(config)?;
    write_one(config, &inputs, kind)
}

/// 여섯 개 차트를 모두 렌더링합니다. 입력은 한 번만 읽습니다.
pub fn render_all(config: &AppConfig) -> Result<Vec<PathBuf>> {
    let inputs = ChartInputs::load(config)?;
    ChartKind::all()
        .iter()
        .map(|kind| write_one(config, &inputs, *kind))
        .collect()
}

fn write_one(config: &AppConfig, inputs: &ChartInputs, kind: ChartKind) -> Result<PathBuf> {
    let chart = inputs.figure(kind);
    let path = write_chart(&chart, Path::new(&config.output.dir))
        .with_context(|| format!("failed to write chart {:?}", kind))?;
    Ok(path)
}
