//! 수익률 구간별 연도 블록 차트.
//!
//! 연간 수익률을 구간으로 묶고, 구간마다 연도를 단위 높이 블록으로
//! 쌓아 빈도 분포를 보여줍니다. 블록에 호버하면 해당 연도의 시장
//! 배경 설명이 표시됩니다.

use msciviz_analytics::Interval;
use serde_json::{json, Value};

use crate::figures::context::historical_context;
use crate::html::{default_config, Chart};

/// 구간 순서에 대응하는 블록 색. 손실 구간은 어두운 자주색 계열,
/// 이익 구간은 청록색 계열입니다.
const INTERVAL_COLORS: [&str; 12] = [
    "#581845", "#581845", "#581845", "#900C3F", "#CD5C5C", "#E9967A", "#124C4C", "#8ACBB7",
    "#0C888A", "#124C4C", "#186C6C", "#186C6C",
];

/// 구간 분류 결과에서 블록 차트를 만듭니다.
///
/// 연도 하나가 트레이스 하나입니다. `base`를 직접 관리해 같은 구간의
/// 블록이 아래에서부터 차곡차곡 쌓입니다.
pub fn build(intervals: &[Interval]) -> Chart {
    let mut data = Vec::new();

    for (idx, interval) in intervals.iter().enumerate() {
        let color = INTERVAL_COLORS[idx % INTERVAL_COLORS.len()];

        for (stack_pos, (year, ret)) in interval.members.iter().enumerate() {
            data.push(json!({
                "type": "bar",
                "x": [interval.key],
                "y": [1],
                "base": [stack_pos],
                "text": [format!("{year}<br><b>{:.1}%</b>", ret * 100.0)],
                "hoverinfo": "text",
                "hovertext": historical_context(*year).unwrap_or(""),
                "marker": {
                    "color": color,
                    "line": {"color": "white", "width": 2},
                },
                "showlegend": false,
                "textposition": "inside",
                "insidetextanchor": "middle",
            }));
        }
    }

    let tickvals: Vec<&str> = intervals.iter().map(|iv| iv.key.as_str()).collect();
    let ticktext: Vec<&str> = intervals.iter().map(|iv| iv.label.as_str()).collect();

    let layout = json!({
        "barmode": "stack",
        "yaxis": {
            "showticklabels": false,
            "fixedrange": true,
            "showgrid": false,
        },
        "xaxis": {
            "showline": true,
            "linewidth": 2,
            "linecolor": "black",
            "layer": "above traces",
            "tickangle": 0,
            "tickmode": "array",
            "tickvals": tickvals,
            "ticktext": ticktext,
            "fixedrange": true,
            "showgrid": false,
        },
        "plot_bgcolor": "rgba(0,0,0,0)",
        "paper_bgcolor": "rgba(0,0,0,0)",
        "dragmode": false,
        "title": "Annual Returns of the MSCI World Index by Return Interval",
        "annotations": [{
            "x": 0,
            "y": 1,
            "xref": "paper",
            "yref": "paper",
            "text": "Annual return of investments in the MSCI World Index,<br>\
                     categorized by calendar year and grouped into return intervals.<br>\
                     Returns are calculated as the percentage change between<br>\
                     the closing values of the final trading days of consecutive years.<br>\
                     Data source: MSCI World Index via Yahoo Finance (Ticker: ^990100-USD-STRD)",
            "showarrow": false,
            "font": {"size": 12, "color": "black"},
            "xanchor": "left",
            "yanchor": "top",
            "align": "left",
            "bordercolor": "black",
            "borderwidth": 1,
            "borderpad": 4,
            "bgcolor": "white",
            "opacity": 0.8,
        }],
    });

    Chart {
        slug: "returns-one",
        title: "Annual Returns of the MSCI World Index by Return Interval",
        div_id: "chart",
        data,
        layout,
        config: default_config(),
        post_script: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msciviz_analytics::bin_annual_returns;
    use msciviz_core::AnnualReturns;

    fn intervals() -> Vec<Interval> {
        bin_annual_returns(&AnnualReturns {
            years: vec![2008, 2019, 2020],
            values: vec![-0.42, 0.25, 0.14],
        })
    }

    #[test]
    fn test_one_trace_per_year() {
        let chart = build(&intervals());
        assert_eq!(chart.data.len(), 3);
    }

    #[test]
    fn test_blocks_stack_from_zero() {
        let chart = build(&bin_annual_returns(&AnnualReturns {
            years: vec![2018, 2020],
            values: vec![0.05, 0.07],
        }));

        // 같은 구간의 두 블록은 base 0과 1에 쌓임
        assert_eq!(chart.data[0]["base"], json!([0]));
        assert_eq!(chart.data[1]["base"], json!([1]));
        assert_eq!(chart.data[0]["x"], chart.data[1]["x"]);
    }

    #[test]
    fn test_block_text_shows_year_and_return() {
        let chart = build(&intervals());
        // 구간 순서상 첫 블록은 2008년 (-42%)
        assert_eq!(chart.data[0]["text"], json!(["2008<br><b>-42.0%</b>"]));
    }

    #[test]
    fn test_hover_shows_historical_context() {
        let chart = build(&intervals());
        let hover = chart.data[0]["hovertext"].as_str().unwrap();
        assert!(hover.contains("Global Financial Crisis"));
    }

    #[test]
    fn test_axis_lists_all_twelve_intervals() {
        let chart = build(&intervals());
        let ticktext = chart.layout["xaxis"]["ticktext"].as_array().unwrap();
        assert_eq!(ticktext.len(), 12);
        assert_eq!(ticktext[0], json!("< -50%"));
        assert_eq!(ticktext[11], json!(">= 50%"));
    }
}
