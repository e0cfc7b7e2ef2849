//! 핵심 도메인 타입.
//!
//! 가격 시계열과 연간 수익률 시계열을 정의합니다.
//! 두 타입 모두 생성 후 변경되지 않습니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// 일별 가격 시계열.
///
/// 날짜가 엄격히 증가하는 (날짜, 종가) 쌍의 시퀀스입니다.
/// 생성 시 정렬되며, 같은 날짜가 중복되면 마지막 관측치를 유지합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    /// 관측 날짜 (오름차순)
    pub dates: Vec<NaiveDate>,
    /// 종가
    pub values: Vec<f64>,
    /// 값을 읽어온 원본 컬럼명 (예: "Close")
    pub column: String,
}

impl PriceSeries {
    /// (날짜, 가격) 쌍에서 시계열을 생성합니다.
    ///
    /// # 에러
    ///
    /// 입력이 비어 있으면 [`VizError::InvalidSeries`]를 반환합니다.
    pub fn new(
        mut points: Vec<(NaiveDate, f64)>,
        column: impl Into<String>,
    ) -> VizResult<Self> {
        if points.is_empty() {
            return Err(VizError::InvalidSeries("price series is empty".to_string()));
        }

        points.sort_by_key(|(date, _)| *date);

        let mut dates = Vec::with_capacity(points.len());
        let mut values = Vec::with_capacity(points.len());
        for (date, value) in points {
            if dates.last() == Some(&date) {
                // 같은 날짜 중복: 마지막 관측치 유지
                if let Some(last) = values.last_mut() {
                    *last = value;
                }
            } else {
                dates.push(date);
                values.push(value);
            }
        }

        Ok(Self {
            dates,
            values,
            column: column.into(),
        })
    }

    /// 관측치 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// 시계열이 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// 첫 관측 날짜를 반환합니다.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// 마지막 관측 날짜를 반환합니다.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// (날짜, 가격) 쌍을 순회합니다.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

/// 연간 단순 수익률 시계열.
///
/// 각 연도의 마지막 종가 대비 직전 연도 마지막 종가의 변화율입니다.
/// 연도 오름차순이며, 계산 후 변경되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualReturns {
    /// 수익률이 속한 연도 (오름차순)
    pub years: Vec<i32>,
    /// 단순 수익률 (0.1 = +10%)
    pub values: Vec<f64>,
}

impl AnnualReturns {
    /// 연도별 연말 종가에서 수익률을 계산합니다.
    ///
    /// 첫 연도는 기준점만 제공하므로 수익률이 없어 제외되며,
    /// `cutoff_year` 이상의 연도도 제외됩니다 (진행 중인 연도 필터).
    pub fn from_year_end_closes(closes: &[(i32, f64)], cutoff_year: i32) -> Self {
        let mut years = Vec::new();
        let mut values = Vec::new();

        for window in closes.windows(2) {
            let (_, prev_close) = window[0];
            let (year, close) = window[1];
            if year >= cutoff_year {
                continue;
            }
            years.push(year);
            values.push(close / prev_close - 1.0);
        }

        Self { years, values }
    }

    /// 수익률 개수를 반환합니다.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// 시계열이 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// (연도, 수익률) 쌍을 순회합니다.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.years.iter().copied().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_price_series_sorted_on_build() {
        let series = PriceSeries::new(
            vec![
                (date(2020, 1, 3), 103.0),
                (date(2020, 1, 1), 101.0),
                (date(2020, 1, 2), 102.0),
            ],
            "Close",
        )
        .unwrap();

        assert_eq!(series.dates, vec![date(2020, 1, 1), date(2020, 1, 2), date(2020, 1, 3)]);
        assert_eq!(series.values, vec![101.0, 102.0, 103.0]);
    }

    #[test]
    fn test_price_series_duplicate_date_keeps_last() {
        let series = PriceSeries::new(
            vec![(date(2020, 1, 1), 101.0), (date(2020, 1, 1), 105.0)],
            "Close",
        )
        .unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.values, vec![105.0]);
    }

    #[test]
    fn test_price_series_empty_rejected() {
        let err = PriceSeries::new(Vec::new(), "Close").unwrap_err();
        assert!(matches!(err, VizError::InvalidSeries(_)));
    }

    #[test]
    fn test_annual_returns_from_closes() {
        // 100 → 110 (+10%) → 99 (-10%)
        let closes = vec![(2020, 100.0), (2021, 110.0), (2022, 99.0)];
        let returns = AnnualReturns::from_year_end_closes(&closes, 2025);

        assert_eq!(returns.years, vec![2021, 2022]);
        assert!((returns.values[0] - 0.10).abs() < 1e-12);
        assert!((returns.values[1] + 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_annual_returns_cutoff_year() {
        let closes = vec![(2023, 100.0), (2024, 110.0), (2025, 120.0)];
        let returns = AnnualReturns::from_year_end_closes(&closes, 2025);

        // 2025년 수익률은 진행 중인 연도로 간주하여 제외
        assert_eq!(returns.years, vec![2024]);
    }
}
