//! Plotly 차트의 HTML 페이지 생성.
//!
//! 피겨를 JSON으로 직렬화해 CDN의 Plotly 스크립트와 함께 독립
//! 실행 가능한 HTML 파일로 씁니다.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use tracing::info;

use crate::error::{RenderError, Result};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-latest.min.js";

/// 완성된 차트 하나.
///
/// `data`와 `layout`은 Plotly 피겨 JSON이며, `post_script`가 있으면
/// `</body>` 직전에 삽입됩니다 (호버 하이라이트 등 추가 동작용).
#[derive(Debug, Clone)]
pub struct Chart {
    /// 출력 파일명 (확장자 제외, 예: "heatmap")
    pub slug: &'static str,
    /// 페이지 제목
    pub title: &'static str,
    /// 차트 div의 id
    pub div_id: &'static str,
    /// 트레이스 배열
    pub data: Vec<Value>,
    /// 레이아웃 객체
    pub layout: Value,
    /// Plotly config 객체
    pub config: Value,
    /// 페이지에 추가로 삽입할 `<script>` 블록
    pub post_script: Option<String>,
}

/// 모드바를 유지하되 선택 도구와 스크롤 줌을 끈 기본 config.
pub fn default_config() -> Value {
    json!({
        "displayModeBar": true,
        "modeBarButtonsToRemove": ["select2d", "lasso2d"],
        "scrollZoom": false,
        "doubleClick": "reset",
        "displaylogo": false,
    })
}

/// 차트를 완전한 HTML 문서로 직렬화합니다.
pub fn render_page(chart: &Chart) -> Result<String> {
    let data = serde_json::to_string(&chart.data)?;
    let layout = serde_json::to_string(&chart.layout)?;
    let config = serde_json::to_string(&chart.config)?;
    let post_script = chart.post_script.as_deref().unwrap_or("");

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8" />
    <title>{title}</title>
    <script src="{cdn}"></script>
    <style>
        html, body {{ margin: 0; padding: 0; }}
        #{div_id} {{ width: 100%; height: 100vh; }}
    </style>
</head>
<body>
    <div id="{div_id}"></div>
    <script>
        var data = {data};
        var layout = {layout};
        var config = {config};

        Plotly.newPlot('{div_id}', data, layout, config);
    </script>
{post_script}
</body>
</html>
"#,
        title = chart.title,
        cdn = PLOTLY_CDN,
        div_id = chart.div_id,
        data = data,
        layout = layout,
        config = config,
        post_script = post_script,
    ))
}

/// 차트를 `<output_dir>/<slug>.html`로 씁니다.
pub fn write_chart(chart: &Chart, output_dir: &Path) -> Result<std::path::PathBuf> {
    fs::create_dir_all(output_dir)
        .map_err(|_| RenderError::OutputDir(output_dir.to_path_buf()))?;

    let path = output_dir.join(format!("{}.html", chart.slug));
    let page = render_page(chart)?;
    fs::write(&path, page)?;

    info!(path = %path.display(), traces = chart.data.len(), "chart written");
    Ok(path)
}
