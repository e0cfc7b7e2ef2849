//! 연도별 일간 수익률 프로파일.
//!
//! 일별 가격 시계열을 달력 연도로 묶고, 각 연도의 첫 거래일을
//! 기준으로 누적 변화율 (%)과 log2 배율 변화를 계산합니다.

use chrono::{Datelike, NaiveDate};
use msciviz_core::PriceSeries;

/// 한 해의 일간 프로파일.
///
/// `additive[i]`는 연초 대비 변화율 (%), `log2[i]`는 연초 대비
/// log2 배율 변화입니다. x축은 날짜가 아니라 연중 일수라서 연도끼리
/// 겹쳐 그릴 수 있습니다.
#[derive(Debug, Clone)]
pub struct YearProfile {
    pub year: i32,
    /// 관측 날짜
    pub dates: Vec<NaiveDate>,
    /// 연중 일수 (1월 1일 = 1)
    pub days: Vec<u32>,
    /// 연초 대비 변화율 (%)
    pub additive: Vec<f64>,
    /// 연초 대비 log2 배율 변화
    pub log2: Vec<f64>,
}

/// 시계열을 연도별 프로파일로 분해합니다 (연도 오름차순).
///
/// 각 연도의 첫 관측치가 기준점이므로 모든 프로파일은 0에서
/// 시작합니다. 기준 가격이 0 이하인 비정상 입력에서는 NaN이나
/// 무한대가 그대로 전파됩니다.
pub fn year_profiles(series: &PriceSeries) -> Vec<YearProfile> {
    let mut grouped: Vec<(i32, Vec<(NaiveDate, f64)>)> = Vec::new();

    for (date, value) in series.iter() {
        let year = date.year();
        match grouped.last_mut() {
            // 입력이 날짜 오름차순이므로 연도도 연속된 블록으로 나타남
            Some((last_year, points)) if *last_year == year => points.push((date, value)),
            _ => grouped.push((year, vec![(date, value)])),
        }
    }

    grouped
        .into_iter()
        .map(|(year, points)| {
            let base = points[0].1;
            let mut profile = YearProfile {
                year,
                dates: Vec::with_capacity(points.len()),
                days: Vec::with_capacity(points.len()),
                additive: Vec::with_capacity(points.len()),
                log2: Vec::with_capacity(points.len()),
            };
            for (date, value) in points {
                profile.dates.push(date);
                profile.days.push(date.ordinal());
                profile.additive.push((value - base) / base * 100.0);
                profile.log2.push((value / base).log2());
            }
            profile
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(points: Vec<(NaiveDate, f64)>) -> PriceSeries {
        PriceSeries::new(points, "Close").unwrap()
    }

    #[test]
    fn test_profiles_start_at_zero() {
        let s = series(vec![
            (date(2020, 1, 2), 100.0),
            (date(2020, 1, 3), 110.0),
            (date(2021, 1, 4), 200.0),
            (date(2021, 1, 5), 100.0),
        ]);

        let profiles = year_profiles(&s);
        assert_eq!(profiles.len(), 2);

        for p in &profiles {
            assert_eq!(p.additive[0], 0.0);
            assert_eq!(p.log2[0], 0.0);
        }

        // 2020: 100 → 110은 +10%
        assert!((profiles[0].additive[1] - 10.0).abs() < 1e-12);
        // 2021: 200 → 100은 log2 배율 -1 (반토막)
        assert!((profiles[1].log2[1] + 1.0).abs() < 1e-12);
        assert!((profiles[1].additive[1] + 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_day_of_year_axis() {
        let s = series(vec![
            (date(2020, 1, 1), 100.0),
            (date(2020, 2, 1), 101.0),
            (date(2020, 12, 31), 102.0),
        ]);

        let profiles = year_profiles(&s);
        // 2020년은 윤년이므로 12월 31일은 366일째
        assert_eq!(profiles[0].days, vec![1, 32, 366]);
    }

    #[test]
    fn test_years_ascending() {
        let s = series(vec![
            (date(2019, 6, 1), 100.0),
            (date(2020, 6, 1), 110.0),
            (date(2021, 6, 1), 120.0),
        ]);

        let years: Vec<i32> = year_profiles(&s).iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021]);
    }
}
