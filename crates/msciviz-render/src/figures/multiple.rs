//! 연도별 일간 프로파일 차트.
//!
//! 모든 연도의 프로파일을 겹쳐 그리고, 슬라이더로 한 해를 강조하며,
//! 버튼으로 가산 (%) 뷰와 log2 배율 뷰를 전환합니다. 호버한 곡선을
//! 즉시 강조하는 스크립트가 페이지에 삽입됩니다.

use msciviz_analytics::YearProfile;
use serde_json::{json, Value};

use crate::html::Chart;

const HIGHLIGHT_WIDTH: u32 = 4;
const HIGHLIGHT_COLOR: &str = "#000000";
const HIGHLIGHT_OPACITY: f64 = 1.0;

const LINE_COLOR: &str = "#000000";
const LINE_WIDTH: u32 = 10;
const LINE_OPACITY: f64 = 0.15;

const Y_MIN: f64 = -110.0;
const Y_MAX: f64 = 60.0;

const DIV_ID: &str = "myPlot";

fn profile_trace(profile: &YearProfile, additive: bool, visible: bool) -> Value {
    let (values, mode_label): (&[f64], &str) = if additive {
        (&profile.additive, "Additive Change")
    } else {
        (&profile.log2, "Multiplicative Change")
    };

    let text: Vec<String> = profile
        .dates
        .iter()
        .zip(values.iter())
        .map(|(date, v)| {
            let when = date.format("%d %B %Y");
            if additive {
                format!("Date: {when}<br>{mode_label}: {v:.2}%")
            } else {
                format!("Date: {when}<br>{mode_label}: {v:.2}")
            }
        })
        .collect();

    json!({
        "type": "scatter",
        "x": profile.days,
        "y": values,
        "mode": "lines",
        "line": {"color": LINE_COLOR, "width": LINE_WIDTH},
        "opacity": LINE_OPACITY,
        "visible": visible,
        "name": profile.year.to_string(),
        "text": text,
        "hoverinfo": "text",
        "showlegend": false,
    })
}

fn mode_buttons(n_years: usize) -> Value {
    let additive_visible: Vec<bool> = (0..2 * n_years).map(|i| i < n_years).collect();
    let log_visible: Vec<bool> = (0..2 * n_years).map(|i| i >= n_years).collect();

    let axis_common = json!({
        "fixedrange": true,
        "showgrid": true,
        "gridcolor": "lightgrey",
        "zeroline": true,
        "zerolinecolor": "black",
        "showline": true,
        "linecolor": "black",
        "linewidth": 0.5,
    });

    let mut additive_axis = axis_common.clone();
    additive_axis["title"] = json!({"text": "Percent Change from January 1"});
    additive_axis["ticksuffix"] = json!("%");
    additive_axis["range"] = json!([Y_MIN, Y_MAX]);

    let mut log_axis = axis_common;
    log_axis["title"] = json!({"text": "Log\u{2082} Fold Change from January 1"});
    log_axis["range"] = json!([Y_MIN / 100.0, Y_MAX / 100.0]);

    json!([
        {
            "label": "Additive Change (Linear Scale)",
            "method": "update",
            "args": [{"visible": additive_visible}, {"yaxis": additive_axis}],
        },
        {
            "label": "Multiplicative Change (Log\u{2082} Scale)",
            "method": "update",
            "args": [{"visible": log_visible}, {"yaxis": log_axis}],
        },
    ])
}

/// 슬라이더 스텝. 각 스텝은 해당 연도의 가산/log2 트레이스 쌍만 강조합니다.
fn slider_steps(years: &[i32]) -> Value {
    let n_years = years.len();
    let total = 2 * n_years;

    let steps: Vec<Value> = years
        .iter()
        .enumerate()
        .map(|(i, year)| {
            let highlighted = |j: usize| j == i || j == i + n_years;
            let widths: Vec<u32> = (0..total)
                .map(|j| if highlighted(j) { HIGHLIGHT_WIDTH } else { LINE_WIDTH })
                .collect();
            let colors: Vec<&str> = (0..total)
                .map(|j| if highlighted(j) { HIGHLIGHT_COLOR } else { LINE_COLOR })
                .collect();
            let opacities: Vec<f64> = (0..total)
                .map(|j| if highlighted(j) { HIGHLIGHT_OPACITY } else { LINE_OPACITY })
                .collect();

            json!({
                "method": "restyle",
                "label": year.to_string(),
                "args": [
                    {"line.width": widths, "line.color": colors, "opacity": opacities},
                    (0..total).collect::<Vec<usize>>(),
                ],
            })
        })
        .collect();

    json!([{
        "active": 0,
        "currentvalue": {"prefix": "Highlighted year: "},
        "pad": {"t": 50},
        "steps": steps,
    }])
}

/// 호버 시 곡선을 강조하고, 슬라이더로 선택된 연도는 호버가 풀려도
/// 강조를 유지하는 스크립트.
fn hover_script() -> String {
    format!(
        r#"    <script>
    document.addEventListener('DOMContentLoaded', function() {{
        var plotDiv = document.getElementById('{div_id}');

        var slider = plotDiv.layout.sliders[0];
        var activeYear = slider.steps[slider.active].label;
        plotDiv.data.forEach(function(trace, idx) {{
            if (trace.name === activeYear) {{
                Plotly.restyle(plotDiv, {{
                    'line.width': {hl_width},
                    'line.color': '{hl_color}',
                    'opacity': {hl_opacity}
                }}, [idx]);
            }}
        }});

        plotDiv.on('plotly_hover', function(eventData) {{
            var i = eventData.points[0].curveNumber;
            Plotly.restyle(plotDiv, {{
                'line.width': {hl_width},
                'line.color': '{hl_color}',
                'opacity': {hl_opacity}
            }}, [i]);
        }});

        plotDiv.on('plotly_unhover', function(eventData) {{
            var i = eventData.points[0].curveNumber;
            var slider = plotDiv.layout.sliders[0];
            var activeYear = slider.steps[slider.active].label;
            if (plotDiv.data[i].name === activeYear) return;
            Plotly.restyle(plotDiv, {{
                'line.width': {width},
                'line.color': '{color}',
                'opacity': {opacity}
            }}, [i]);
        }});
    }});
    </script>"#,
        div_id = DIV_ID,
        hl_width = HIGHLIGHT_WIDTH,
        hl_color = HIGHLIGHT_COLOR,
        hl_opacity = HIGHLIGHT_OPACITY,
        width = LINE_WIDTH,
        color = LINE_COLOR,
        opacity = LINE_OPACITY,
    )
}

/// 연도별 프로파일에서 겹침 차트를 만듭니다.
pub fn build(profiles: &[YearProfile]) -> Chart {
    let years: Vec<i32> = profiles.iter().map(|p| p.year).collect();
    let n_years = years.len();

    let mut data = Vec::with_capacity(2 * n_years);
    for profile in profiles {
        data.push(profile_trace(profile, true, true));
    }
    for profile in profiles {
        data.push(profile_trace(profile, false, false));
    }

    let layout = json!({
        "title": "MSCI World Daily Yearly Profiles",
        "updatemenus": [{
            "type": "buttons",
            "showactive": true,
            "buttons": mode_buttons(n_years),
            "direction": "right",
            "pad": {"r": 10, "b": 10},
            "x": 1,
            "xanchor": "right",
            "y": 1,
            "yanchor": "bottom",
        }],
        "sliders": slider_steps(&years),
        "xaxis": {
            "range": [1, 366],
            "tick0": 0,
            "dtick": 30,
            "ticksuffix": " days",
            "fixedrange": true,
            "showline": true,
            "linewidth": 0.5,
            "linecolor": "black",
            "zeroline": true,
            "zerolinecolor": "black",
            "showgrid": false,
        },
        "yaxis": {
            "title": "Percent Change from January 1",
            "ticksuffix": "%",
            "tickformat": ".0f%",
            "fixedrange": true,
            "showgrid": true,
            "gridcolor": "lightgrey",
            "zeroline": true,
            "zerolinecolor": "black",
            "showline": true,
            "linecolor": "black",
            "linewidth": 0.5,
            "range": [Y_MIN, Y_MAX],
        },
        "plot_bgcolor": "rgba(0,0,0,0)",
        "paper_bgcolor": "rgba(0,0,0,0)",
        "annotations": [{
            "x": 1,
            "y": 1,
            "xref": "paper",
            "yref": "paper",
            "text": "Daily return profiles of the MSCI World Index by calendar year, \
                     showing both cumulative percent change and log\u{2082} fold change.<br>\
                     Toggle between linear and log\u{2082} scales with the buttons above, \
                     and use the slider to highlight a specific year's performance.<br>\
                     Data: MSCI World Index (^990100-USD-STRD) from Yahoo Finance.",
            "showarrow": false,
            "font": {"size": 8, "color": "black"},
            "xanchor": "right",
            "yanchor": "top",
            "align": "right",
        }],
    });

    Chart {
        slug: "multiple",
        title: "MSCI World Daily Yearly Profiles",
        div_id: DIV_ID,
        data,
        layout,
        config: json!({}),
        post_script: Some(hover_script()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use msciviz_analytics::year_profiles;
    use msciviz_core::PriceSeries;

    fn profiles() -> Vec<YearProfile> {
        let series = PriceSeries::new(
            vec![
                (NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(), 100.0),
                (NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(), 110.0),
                (NaiveDate::from_ymd_opt(2021, 1, 4).unwrap(), 120.0),
                (NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(), 90.0),
            ],
            "Close",
        )
        .unwrap();
        year_profiles(&series)
    }

    #[test]
    fn test_two_traces_per_year() {
        let chart = build(&profiles());
        assert_eq!(chart.data.len(), 4);
        // 앞 절반은 가산 뷰로 보이고 뒤 절반은 log2 뷰로 숨김
        assert_eq!(chart.data[0]["visible"], json!(true));
        assert_eq!(chart.data[2]["visible"], json!(false));
        assert_eq!(chart.data[0]["name"], chart.data[2]["name"]);
    }

    #[test]
    fn test_slider_highlights_year_pair() {
        let chart = build(&profiles());
        let steps = chart.layout["sliders"][0]["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 2);

        // 2021 스텝은 트레이스 1과 3을 강조
        let widths = steps[1]["args"][0]["line.width"].as_array().unwrap();
        assert_eq!(widths[1], json!(HIGHLIGHT_WIDTH));
        assert_eq!(widths[3], json!(HIGHLIGHT_WIDTH));
        assert_eq!(widths[0], json!(LINE_WIDTH));
    }

    #[test]
    fn test_hover_text_includes_full_date() {
        let chart = build(&profiles());
        let text = chart.data[0]["text"][0].as_str().unwrap();
        assert!(text.contains("02 January 2020"));
        assert!(text.contains("Additive Change: 0.00%"));
    }

    #[test]
    fn test_hover_script_targets_div() {
        let chart = build(&profiles());
        let script = chart.post_script.as_deref().unwrap();
        assert!(script.contains("getElementById('myPlot')"));
        assert!(script.contains("plotly_unhover"));
    }
}
