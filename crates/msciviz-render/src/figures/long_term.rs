//! 장기 수익률 곡선.
//!
//! 보유 기간별 연환산 수익률의 최소/평균/최대 세 곡선을 그립니다.
//! 보유 기간이 길수록 범위가 평균으로 수렴하는 모습을 보여줍니다.

use msciviz_analytics::ReturnEnvelope;
use serde_json::{json, Value};

use crate::html::{default_config, Chart};

const LINE_WIDTH: u32 = 5;
const HOVER_TEMPLATE: &str = "%{y:.2f}%";

fn line_trace(horizons: &[usize], values: &[f64], color: &str, name: &str) -> Value {
    json!({
        "type": "scatter",
        "x": horizons,
        "y": values,
        "mode": "lines",
        "line": {"color": color, "width": LINE_WIDTH},
        "opacity": 1,
        "name": name,
        "hoverinfo": "text",
        "hovertemplate": HOVER_TEMPLATE,
        "showlegend": false,
    })
}

/// 수익률 범위에서 장기 곡선 차트를 만듭니다.
pub fn build(envelope: &ReturnEnvelope) -> Chart {
    let horizons = &envelope.horizons;
    let max_horizon = horizons.last().copied().unwrap_or(1);

    let data = vec![
        line_trace(horizons, &envelope.lower, "#581845", "Lower Bound"),
        line_trace(horizons, &envelope.upper, "#186C6C", "Upper Bound"),
        line_trace(horizons, &envelope.mean, "#E4D39D", "Average Return"),
    ];

    let layout = json!({
        "title": "Long-Term Saving Harnesses Regression Toward the Mean",
        "xaxis": {
            "title": "Holding Period in Years",
            "range": [1, max_horizon],
            "tick0": 0,
            "dtick": 5,
            "ticksuffix": " years",
            "showline": true,
            "linewidth": 0.5,
            "linecolor": "black",
            "zeroline": true,
            "zerolinecolor": "black",
            "fixedrange": true,
            "showgrid": false,
        },
        "yaxis": {
            "title": "Average Return (nominal) in Percent",
            "ticksuffix": "%",
            "tickformat": ".0f%",
            "showline": true,
            "linewidth": 0.5,
            "linecolor": "black",
            "zeroline": true,
            "zerolinecolor": "black",
            "showgrid": true,
            "gridcolor": "lightgrey",
            "fixedrange": true,
        },
        "hovermode": "x unified",
        "hoverlabel": {"bgcolor": "white"},
        "plot_bgcolor": "rgba(0,0,0,0)",
        "paper_bgcolor": "rgba(0,0,0,0)",
        "annotations": [{
            "x": 1,
            "y": 1,
            "xref": "paper",
            "yref": "paper",
            "text": "Annualized return bands of the MSCI World Index by holding period.<br>\
                     Data source: MSCI World Index via Yahoo Finance (Ticker: ^990100-USD-STRD)",
            "showarrow": false,
            "font": {"size": 8, "color": "black"},
            "xanchor": "right",
            "yanchor": "top",
            "align": "right",
        }],
    });

    Chart {
        slug: "long-term",
        title: "Long-Term Saving Harnesses Regression Toward the Mean",
        div_id: "chart",
        data,
        layout,
        config: default_config(),
        post_script: None,
    }
}
