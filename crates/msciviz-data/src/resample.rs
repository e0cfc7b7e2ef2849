//! 달력 기준 리샘플링.
//!
//! pandas의 `resample("YE").last()` / `resample("W").first()`에
//! 해당하는 연말 종가와 주별 첫 관측치를 계산합니다.

use chrono::{Datelike, NaiveDate, Weekday};
use msciviz_core::PriceSeries;

/// 연도별 마지막 관측치를 반환합니다.
///
/// 각 달력 연도에서 마지막으로 관측된 종가입니다. 연도 완결 여부는
/// 확인하지 않으며 (진행 중인 연도도 포함), 진행 중 연도의 제외는
/// 이후 cutoff 필터가 담당합니다.
pub fn year_end_closes(series: &PriceSeries) -> Vec<(i32, f64)> {
    let mut out: Vec<(i32, f64)> = Vec::new();
    for (date, value) in series.iter() {
        let year = date.year();
        match out.last_mut() {
            // 날짜가 오름차순이므로 마지막 항목만 갱신하면 됨
            Some((last_year, last_value)) if *last_year == year => *last_value = value,
            _ => out.push((year, value)),
        }
    }
    out
}

/// 주별 첫 관측치를 반환합니다.
///
/// ISO 주 단위로 묶어 각 주의 첫 관측치를 취하고, 해당 주의 일요일을
/// 라벨 날짜로 사용합니다. 기록 범위 안에서 관측치가 하나도 없는 주는
/// NaN 값으로 채워져, 차트에서 선이 끊긴 구간으로 그려집니다.
pub fn week_first(series: &PriceSeries) -> PriceSeries {
    let mut dates: Vec<NaiveDate> = Vec::new();
    let mut values: Vec<f64> = Vec::new();
    let mut last_week: Option<(i32, u32)> = None;

    for (date, value) in series.iter() {
        let iso = date.iso_week();
        let key = (iso.year(), iso.week());
        if last_week == Some(key) {
            continue;
        }
        last_week = Some(key);

        let label = NaiveDate::from_isoywd_opt(iso.year(), iso.week(), Weekday::Sun)
            .unwrap_or(date);

        // 직전 라벨과의 사이에 빈 주가 있으면 NaN으로 채움
        if let Some(&prev) = dates.last() {
            let mut gap = prev + chrono::Duration::days(7);
            while gap < label {
                dates.push(gap);
                values.push(f64::NAN);
                gap = gap + chrono::Duration::days(7);
            }
        }

        dates.push(label);
        values.push(value);
    }

    // 입력이 정렬돼 있으므로 주 라벨도 오름차순
    PriceSeries {
        dates,
        values,
        column: series.column.clone(),
    }
}
