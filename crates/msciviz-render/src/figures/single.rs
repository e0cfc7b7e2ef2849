//! 주간 가격 프로파일 차트.
//!
//! 주별로 샘플링한 지수 값을 한 곡선으로 그리고, 버튼으로 선형
//! 스케일과 log2 스케일을 전환합니다.

use msciviz_core::PriceSeries;
use serde_json::{json, Value};

use crate::html::{default_config, Chart};

const LINE_COLOR: &str = "#000000";
const LINE_WIDTH: u32 = 4;

const Y_MIN: f64 = 0.0;
const Y_MAX: f64 = 4400.0;

fn price_trace(weekly: &PriceSeries, name: &str, visible: bool) -> Value {
    let dates: Vec<String> = weekly.dates.iter().map(|d| d.to_string()).collect();
    json!({
        "type": "scatter",
        "x": dates,
        "y": weekly.values,
        "mode": "lines",
        "line": {"color": LINE_COLOR, "width": LINE_WIDTH},
        "opacity": 1,
        "visible": visible,
        "name": name,
        "hoverinfo": "text",
        "showlegend": false,
    })
}

/// 주간 시계열에서 단일 곡선 차트를 만듭니다.
pub fn build(weekly: &PriceSeries) -> Chart {
    let data = vec![
        price_trace(weekly, "Additive Change", true),
        price_trace(weekly, "Multiplicative Change", false),
    ];

    let axis_common = json!({
        "tickprefix": "$",
        "showline": true,
        "linewidth": 0.5,
        "linecolor": "black",
        "zeroline": false,
        "showgrid": true,
        "gridcolor": "lightgrey",
        "fixedrange": true,
    });

    let mut linear_axis = axis_common.clone();
    linear_axis["title"] = json!({"text": "Absolute Return in USD"});
    linear_axis["range"] = json!([Y_MIN, Y_MAX]);

    let mut log_axis = axis_common;
    log_axis["title"] = json!({"text": "Absolute Return in USD (log\u{2082} scale)"});
    log_axis["type"] = json!("log");
    log_axis["base"] = json!(2);
    log_axis["minor"] = json!({"showgrid": true, "dtick": 0.5});

    let buttons = json!([
        {
            "label": "Additive Change",
            "method": "update",
            "args": [{"visible": [true, false]}, {"yaxis": linear_axis}],
        },
        {
            "label": "Multiplicative Change",
            "method": "update",
            "args": [{"visible": [false, true]}, {"yaxis": log_axis}],
        },
    ]);

    let layout = json!({
        "title": "MSCI World Index: Weekly Profile",
        "updatemenus": [{
            "type": "buttons",
            "showactive": true,
            "buttons": buttons,
            "direction": "right",
            "pad": {"r": 10, "b": 10},
            "x": 1,
            "xanchor": "right",
            "y": 1,
            "yanchor": "bottom",
        }],
        "xaxis": {
            "showline": true,
            "zeroline": false,
            "showgrid": false,
            "linewidth": 0.5,
            "linecolor": "black",
            "fixedrange": true,
        },
        "yaxis": {
            "title": "Absolute Return in USD",
            "tickprefix": "$",
            "showline": true,
            "linewidth": 0.5,
            "linecolor": "black",
            "zeroline": false,
            "showgrid": true,
            "gridcolor": "lightgrey",
            "range": [Y_MIN, Y_MAX],
            "fixedrange": true,
        },
        "plot_bgcolor": "rgba(0,0,0,0)",
        "paper_bgcolor": "rgba(0,0,0,0)",
        "annotations": [{
            "xref": "paper",
            "yref": "paper",
            "x": 1,
            "y": 1,
            "xanchor": "right",
            "yanchor": "top",
            "text": "Weekly closing values of the MSCI World Index, sampled weekly.<br>\
                     Additive trace shows raw index values; Multiplicative uses log\u{2082} transformation. \
                     Switch modes with the buttons above.<br>\
                     Data source: Yahoo Finance (^990100-USD-STRD).",
            "showarrow": false,
            "font": {"size": 8, "color": "black"},
            "align": "right",
        }],
    });

    Chart {
        slug: "single",
        title: "MSCI World Index: Weekly Profile",
        div_id: "chart",
        data,
        layout,
        config: default_config(),
        post_script: None,
    }
}
