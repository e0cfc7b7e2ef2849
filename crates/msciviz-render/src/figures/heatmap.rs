//! 수익률 삼각형 히트맵.
//!
//! y축은 투자 시작 연도 (최신이 위), x축은 보유 기간입니다. 버튼으로
//! 연환산 수익률과 누적 수익률 뷰를 전환합니다.

use msciviz_analytics::ReturnMatrix;
use serde_json::{json, Value};

use crate::html::Chart;

/// 양쪽 뷰가 공유하는 발산형 팔레트 (손실 → 이익).
const COLOR_LIST: [&str; 8] = [
    "#581845", "#900C3F", "#CD5C5C", "#E9967A", "#E4D39D", "#8ACBB7", "#0C888A", "#124C4C",
];

/// 연환산 뷰: 색 위치를 균등 분할.
fn colorscale_avg() -> Value {
    let n = COLOR_LIST.len();
    let stops: Vec<Value> = COLOR_LIST
        .iter()
        .enumerate()
        .map(|(i, color)| json!([i as f64 / (n - 1) as f64, color]))
        .collect();
    Value::Array(stops)
}

/// 누적 뷰: 누적 수익률의 지수적 스케일에 맞춰 색 위치를 기하급수로 배치.
fn colorscale_total() -> Value {
    let n = COLOR_LIST.len();
    let positions: Vec<f64> = (0..n)
        .map(|i| 100f64.powf(i as f64 / (n - 1) as f64))
        .collect();
    let lo = positions[0];
    let hi = positions[n - 1];

    let stops: Vec<Value> = positions
        .iter()
        .zip(COLOR_LIST.iter())
        .map(|(p, color)| json!([(p - lo) / (hi - lo), color]))
        .collect();
    Value::Array(stops)
}

/// 셀 행렬에서 z 값, 텍스트, 값 범위를 만듭니다.
///
/// 결측 셀은 null로 직렬화되어 Plotly가 빈 칸으로 그립니다.
fn z_and_text(
    matrix: &ReturnMatrix,
    cell: impl Fn(usize, usize) -> Option<f64>,
) -> (Vec<Vec<Value>>, Vec<Vec<String>>, f64, f64) {
    let n_years = matrix.years().len();
    let horizons = matrix.horizons();

    let mut z = Vec::with_capacity(n_years);
    let mut text = Vec::with_capacity(n_years);
    let mut zmin = f64::INFINITY;
    let mut zmax = f64::NEG_INFINITY;

    // 최신 연도가 위로 오도록 역순
    for year_idx in (0..n_years).rev() {
        let mut z_row = Vec::with_capacity(horizons.len());
        let mut text_row = Vec::with_capacity(horizons.len());

        for &h in horizons {
            match cell(year_idx, h) {
                Some(v) if v.is_finite() => {
                    zmin = zmin.min(v);
                    zmax = zmax.max(v);
                    z_row.push(json!(v));
                    text_row.push(format!("{:.1}%", v * 100.0));
                }
                _ => {
                    z_row.push(Value::Null);
                    text_row.push(String::new());
                }
            }
        }
        z.push(z_row);
        text.push(text_row);
    }

    (z, text, zmin, zmax)
}

/// 수익률 행렬에서 히트맵 차트를 만듭니다.
pub fn build(matrix: &ReturnMatrix) -> Chart {
    let x_years: Vec<usize> = matrix.horizons().to_vec();
    let y_years: Vec<i32> = matrix.years().iter().rev().copied().collect();

    let (z_avg, text_avg, avg_min, avg_max) =
        z_and_text(matrix, |i, h| matrix.annualized(i, h));
    let (z_tot, text_tot, tot_min, tot_max) = z_and_text(matrix, |i, h| matrix.total(i, h));

    let trace_avg = json!({
        "type": "heatmap",
        "z": z_avg,
        "x": x_years,
        "y": y_years,
        "colorscale": colorscale_avg(),
        "zmin": avg_min,
        "zmax": avg_max,
        "zmid": 0,
        "text": text_avg,
        "texttemplate": "%{text}",
        "hovertemplate": "Year %{y}<br>Holding %{x} yr<br>Avg Return %{z:.2%}<extra></extra>",
        "visible": true,
        "showscale": false,
    });
    let trace_tot = json!({
        "type": "heatmap",
        "z": z_tot,
        "x": x_years,
        "y": y_years,
        "colorscale": colorscale_total(),
        "zmin": tot_min,
        "zmax": tot_max,
        "zmid": 0,
        "text": text_tot,
        "texttemplate": "%{text}",
        "hovertemplate": "Year %{y}<br>Holding %{x} yr<br>Total Return %{z:.2%}<extra></extra>",
        "visible": false,
        "showscale": false,
    });

    let layout = json!({
        "title": "MSCI World: Returns Heatmap by Holding Period",
        "updatemenus": [{
            "type": "buttons",
            "direction": "right",
            "x": 1,
            "xanchor": "right",
            "y": 1,
            "yanchor": "bottom",
            "pad": {"r": 10, "b": 10},
            "showactive": true,
            "buttons": [
                {
                    "label": "Average Return",
                    "method": "update",
                    "args": [{"visible": [true, false]}],
                },
                {
                    "label": "Total Return",
                    "method": "update",
                    "args": [{"visible": [false, true]}],
                },
            ],
        }],
        "xaxis": {
            "title": "Holding Period in Years",
            "tickmode": "linear",
            "dtick": 1,
            "tick0": x_years.first().copied().unwrap_or(1),
            "showgrid": false,
            "ticks": "outside",
            "tickson": "boundaries",
            "ticklen": 8,
        },
        "yaxis": {
            "title": "Year of Initial Investment",
            "tickmode": "linear",
            "dtick": 1,
            "tick0": y_years.last().copied().unwrap_or(0),
            "showgrid": false,
            "ticks": "outside",
            "tickson": "boundaries",
            "ticklen": 8,
        },
        "plot_bgcolor": "rgba(0,0,0,0)",
        "paper_bgcolor": "rgba(0,0,0,0)",
        "annotations": [{
            "x": 1,
            "y": 1,
            "xref": "paper",
            "yref": "paper",
            "text": "Return triangle of MSCI World Index by start year and holding span in years;<br>\
                     toggle between average annualized and total returns;<br>\
                     Data source: MSCI World Index via Yahoo Finance (Ticker: ^990100-USD-STRD)",
            "showarrow": false,
            "font": {"size": 8, "color": "black"},
            "xanchor": "right",
            "yanchor": "top",
            "align": "right",
        }],
    });

    // 히트맵은 선택 도구 버튼을 그대로 둠
    let config = json!({
        "displayModeBar": true,
        "scrollZoom": false,
        "doubleClick": "reset",
        "displaylogo": false,
    });

    Chart {
        slug: "heatmap",
        title: "MSCI World: Returns Heatmap by Holding Period",
        div_id: "chart",
        data: vec![trace_avg, trace_tot],
        layout,
        config,
        post_script: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msciviz_core::AnnualReturns;

    fn matrix() -> ReturnMatrix {
        let returns = AnnualReturns {
            years: vec![2020, 2021, 2022],
            values: vec![0.10, -0.05, 0.20],
        };
        ReturnMatrix::compute(&returns, 3)
    }

    #[test]
    fn test_newest_year_on_top() {
        let chart = build(&matrix());
        assert_eq!(chart.data[0]["y"], json!([2022, 2021, 2020]));
    }

    #[test]
    fn test_missing_cells_serialize_as_null() {
        let chart = build(&matrix());
        // 최상단 행 (2022년 시작)은 2년 이상 보유가 불가능
        let top_row = &chart.data[0]["z"][0];
        assert!(top_row[1].is_null());
        assert!(top_row[2].is_null());
        assert!(!top_row[0].is_null());
    }

    #[test]
    fn test_text_matches_cells() {
        let chart = build(&matrix());
        // 2020년 시작 1년 보유 = +10.0%
        assert_eq!(chart.data[0]["text"][2][0], json!("10.0%"));
        // 결측 셀의 텍스트는 빈 문자열
        assert_eq!(chart.data[0]["text"][0][1], json!(""));
    }

    #[test]
    fn test_total_colorscale_is_geometric() {
        let chart = build(&matrix());
        let stops = chart.data[1]["colorscale"].as_array().unwrap();
        assert_eq!(stops.len(), 8);
        assert_eq!(stops[0][0], json!(0.0));
        assert_eq!(stops[7][0], json!(1.0));
        // 기하급수 배치라 중간 지점이 0.5보다 작음
        assert!(stops[4][0].as_f64().unwrap() < 0.5);
    }
}
