//! MSCI World 일별 지수 CSV 로더.
//!
//! 입력 파일 형식 (Yahoo Finance 내보내기):
//! - 1행: 헤더 (`Date,Close,...` 또는 `Price,Close,...`)
//! - 2~3행: 메타데이터 (티커/빈 행), 건너뜀
//! - 이후: 날짜 인덱스 + 가격 컬럼들
//!
//! 값 컬럼은 "Close"를 우선 사용하고, 없으면 첫 번째로 숫자를
//! 파싱할 수 있는 컬럼을 사용합니다.

use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use msciviz_core::PriceSeries;
use tracing::{debug, info, warn};

use crate::error::{DataError, Result};

/// 헤더 뒤에서 건너뛰는 메타데이터 행 수.
const METADATA_ROWS: usize = 2;

/// 날짜 파싱에 시도하는 형식들. 일/월 순서가 모호한 형식은 받지 않음.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// CSV 파일에서 일별 가격 시계열을 로드합니다.
///
/// # 에러
///
/// 파일이 없거나, 사용할 수 있는 값 컬럼이 없거나, 유효한 행이
/// 하나도 없으면 에러를 반환합니다. 개별 행의 파싱 실패는 해당
/// 행만 건너뜁니다.
pub fn load_price_series<P: AsRef<Path>>(path: P) -> Result<PriceSeries> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records = reader.records();

    let header = records
        .next()
        .transpose()?
        .ok_or_else(|| DataError::InvalidData("input file has no header row".to_string()))?;

    // 메타데이터 행 건너뛰기
    for _ in 0..METADATA_ROWS {
        records.next().transpose()?;
    }

    let mut rows: Vec<csv::StringRecord> = Vec::new();
    for record in records {
        rows.push(record?);
    }

    let (col_idx, col_name) = select_value_column(&header, &rows)
        .ok_or_else(|| DataError::MissingColumn(path.to_path_buf()))?;
    debug!(column = %col_name, index = col_idx, "Selected value column");

    let mut points = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for row in &rows {
        let Some(date) = row.get(0).and_then(parse_date) else {
            skipped += 1;
            continue;
        };
        let Some(value) = row.get(col_idx).and_then(parse_value) else {
            skipped += 1;
            continue;
        };
        points.push((date, value));
    }

    if skipped > 0 {
        warn!(skipped, "Skipped unparseable rows");
    }

    let series = PriceSeries::new(points, col_name)
        .map_err(|e| DataError::InvalidData(e.to_string()))?;
    if let (Some(from), Some(to)) = (series.first_date(), series.last_date()) {
        info!(rows = series.len(), %from, %to, "Loaded price series");
    }

    Ok(series)
}

/// 값 컬럼을 선택합니다: "Close" 헤더 우선, 없으면 첫 번째 숫자 컬럼.
fn select_value_column(
    header: &csv::StringRecord,
    rows: &[csv::StringRecord],
) -> Option<(usize, String)> {
    for (idx, name) in header.iter().enumerate() {
        if idx > 0 && name.trim().eq_ignore_ascii_case("close") {
            return Some((idx, name.trim().to_string()));
        }
    }

    // 첫 데이터 행 기준으로 숫자가 파싱되는 첫 컬럼 탐색
    let first_row = rows.iter().find(|r| r.len() > 1)?;
    for idx in 1..first_row.len() {
        if first_row.get(idx).and_then(parse_value).is_some() {
            let name = header
                .get(idx)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| format!("column_{}", idx));
            return Some((idx, name));
        }
    }
    None
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    // Yahoo 내보내기에 시간대가 붙는 경우: 날짜 부분만 사용
    let date_part = trimmed.split_whitespace().next()?;
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
