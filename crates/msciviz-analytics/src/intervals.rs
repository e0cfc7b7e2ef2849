//! 수익률 구간 분류.
//!
//! 연간 수익률을 10%p 폭의 고정 구간 12개로 분류합니다.
//! 구간은 왼쪽 닫힘 `[lo, hi)`이며 양 끝은 무한대로 열려 있습니다.

use msciviz_core::AnnualReturns;
use tracing::warn;

/// 구간 경계. 12개 구간을 만드는 13개 경계값입니다.
pub const INTERVAL_EDGES: [f64; 13] = [
    f64::NEG_INFINITY,
    -0.5,
    -0.4,
    -0.3,
    -0.2,
    -0.1,
    0.0,
    0.1,
    0.2,
    0.3,
    0.4,
    0.5,
    f64::INFINITY,
];

/// 하나의 수익률 구간과 거기에 속한 연도들.
#[derive(Debug, Clone)]
pub struct Interval {
    /// 하한 (포함)
    pub lower: f64,
    /// 상한 (제외)
    pub upper: f64,
    /// 축 상의 구간 식별자 (예: "[-0.5, -0.4)")
    pub key: String,
    /// 표시용 라벨 (예: "-50% to -40%")
    pub label: String,
    /// 구간에 속한 (연도, 수익률) 쌍 (연도 오름차순)
    pub members: Vec<(i32, f64)>,
}

/// 연간 수익률을 구간별로 묶습니다.
///
/// 유한하지 않은 수익률은 분류하지 않고 경고 후 건너뜁니다.
/// 빈 구간도 결과에 포함됩니다 (멤버가 없을 뿐 축에는 나타남).
pub fn bin_annual_returns(returns: &AnnualReturns) -> Vec<Interval> {
    let mut intervals: Vec<Interval> = INTERVAL_EDGES
        .windows(2)
        .map(|edge| Interval {
            lower: edge[0],
            upper: edge[1],
            key: interval_key(edge[0], edge[1]),
            label: interval_label(edge[0], edge[1]),
            members: Vec::new(),
        })
        .collect();

    for (year, value) in returns.iter() {
        if !value.is_finite() {
            warn!(year, value, "skipping non-finite annual return");
            continue;
        }
        if let Some(interval) = intervals
            .iter_mut()
            .find(|iv| iv.lower <= value && value < iv.upper)
        {
            interval.members.push((year, value));
        }
    }

    intervals
}

fn interval_key(lower: f64, upper: f64) -> String {
    let fmt = |v: f64| {
        if v == f64::NEG_INFINITY {
            "-inf".to_string()
        } else if v == f64::INFINITY {
            "inf".to_string()
        } else {
            format!("{v:.1}")
        }
    };
    format!("[{}, {})", fmt(lower), fmt(upper))
}

fn interval_label(lower: f64, upper: f64) -> String {
    let pct = |v: f64| format!("{:.0}%", v * 100.0);
    if lower == f64::NEG_INFINITY {
        format!("< {}", pct(upper))
    } else if upper == f64::INFINITY {
        format!(">= {}", pct(lower))
    } else {
        format!("{} to {}", pct(lower), pct(upper))
    }
}
