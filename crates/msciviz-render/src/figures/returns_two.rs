//! 연간 수익률 막대 차트.
//!
//! 연도별 수익률을 막대로 그리고, 버튼으로 단순 수익률 (%) 뷰와
//! log2 수익률 뷰를 전환합니다.

use msciviz_core::AnnualReturns;
use serde_json::{json, Value};

use crate::html::{default_config, Chart};

const POSITIVE_COLOR: &str = "#124C4C";
const NEGATIVE_COLOR: &str = "#581845";

const Y_MIN: f64 = -0.85;
const Y_MAX: f64 = 0.60;

fn bar_colors(values: &[f64]) -> Vec<&'static str> {
    values
        .iter()
        .map(|v| if *v >= 0.0 { POSITIVE_COLOR } else { NEGATIVE_COLOR })
        .collect()
}

fn yaxis(title: &str, tickformat: &str) -> Value {
    json!({
        "title": {"text": title},
        "tickformat": tickformat,
        "showline": true,
        "linewidth": 0.5,
        "linecolor": "black",
        "zeroline": false,
        "showgrid": true,
        "gridcolor": "lightgrey",
        "range": [Y_MIN, Y_MAX],
        "fixedrange": true,
    })
}

/// 연간 수익률에서 막대 차트를 만듭니다.
pub fn build(returns: &AnnualReturns) -> Chart {
    let years: Vec<String> = returns.years.iter().map(|y| y.to_string()).collect();
    let pct = &returns.values;
    let log2: Vec<f64> = pct.iter().map(|v| (1.0 + v).log2()).collect();

    let data = vec![
        json!({
            "type": "bar",
            "x": years,
            "y": pct,
            "marker": {"color": bar_colors(pct)},
            "visible": true,
            "name": "Additive Change",
            "hovertemplate": "Year: %{x}<br>Return: %{y:.2%}<extra></extra>",
        }),
        json!({
            "type": "bar",
            "x": years,
            "y": log2,
            "marker": {"color": bar_colors(&log2)},
            "visible": false,
            "name": "Multiplicative Change",
            "hovertemplate": "Year: %{x}<br>Log\u{2082} Return: %{y:.2f}<extra></extra>",
        }),
    ];

    let buttons = json!([
        {
            "label": "Additive Change (Linear Scale)",
            "method": "update",
            "args": [
                {"visible": [true, false]},
                {"yaxis": yaxis("Annual Return (%)", ".0%")},
            ],
        },
        {
            "label": "Multiplicative Change (Log\u{2082} Scale)",
            "method": "update",
            "args": [
                {"visible": [false, true]},
                {"yaxis": yaxis("Annual Log\u{2082} Return", ".2f")},
            ],
        },
    ]);

    let layout = json!({
        "title": "Annual Returns of the MSCI World Index",
        // 0% 기준선을 막대 아래에 깔아 둠
        "shapes": [{
            "type": "line",
            "xref": "paper",
            "x0": 0,
            "x1": 1,
            "yref": "y",
            "y0": 0,
            "y1": 0,
            "line": {"color": "black", "width": 1},
            "layer": "below",
        }],
        "updatemenus": [{
            "type": "buttons",
            "direction": "right",
            "showactive": true,
            "buttons": buttons,
            "pad": {"r": 10, "b": 10},
            "x": 1,
            "xanchor": "right",
            "y": 1,
            "yanchor": "bottom",
        }],
        "xaxis": {
            "title": "Year",
            "tickangle": -90,
            "tickmode": "array",
            "showline": true,
            "linewidth": 0.5,
            "linecolor": "black",
            "zeroline": false,
            "fixedrange": true,
        },
        "yaxis": yaxis("Annual Return (%)", ".0%"),
        "plot_bgcolor": "rgba(0,0,0,0)",
        "paper_bgcolor": "rgba(0,0,0,0)",
        "annotations": [{
            "x": 1,
            "y": 1,
            "xref": "paper",
            "yref": "paper",
            "text": "Annual returns of the MSCI World Index per calendar year.<br>\
                     Data source: MSCI World Index via Yahoo Finance (Ticker: ^990100-USD-STRD)",
            "showarrow": false,
            "font": {"size": 8, "color": "black"},
            "xanchor": "right",
            "yanchor": "top",
            "align": "right",
        }],
    });

    Chart {
        slug: "returns-two",
        title: "Annual Returns of the MSCI World Index",
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

    fn returns() -> AnnualReturns {
        AnnualReturns {
            years: vec![2021, 2022, 2023],
            values: vec![0.20, -0.18, 0.22],
        }
    }

    #[test]
    fn test_bar_colors_by_sign() {
        let chart = build(&returns());
        assert_eq!(
            chart.data[0]["marker"]["color"],
            json!([POSITIVE_COLOR, NEGATIVE_COLOR, POSITIVE_COLOR])
        );
    }

    #[test]
    fn test_log2_trace_hidden_by_default() {
        let chart = build(&returns());
        assert_eq!(chart.data[1]["visible"], json!(false));

        // log2(1.2) ≈ 0.263
        let v = chart.data[1]["y"][0].as_f64().unwrap();
        assert!((v - 1.2f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn test_years_as_category_labels() {
        let chart = build(&returns());
        assert_eq!(chart.data[0]["x"], json!(["2021", "2022", "2023"]));
    }

    #[test]
    fn test_zero_line_shape_below_bars() {
        let chart = build(&returns());
        let shape = &chart.layout["shapes"][0];
        assert_eq!(shape["layer"], json!("below"));
        assert_eq!(shape["y0"], json!(0));
    }
}
