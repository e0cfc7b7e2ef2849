//! 보유 기간별 수익률 집계.
//!
//! 시작 연도 × 보유 기간 그리드에서 누적 수익률과 연환산 수익률을
//! 계산합니다. 히트맵과 장기 수익률 곡선의 공통 기반입니다.

use msciviz_core::AnnualReturns;
use tracing::debug;

/// 시작 연도 × 보유 기간 수익률 행렬.
///
/// 셀 `(i, h)`는 연도 `years[i]`에 진입해 `h`년간 보유했을 때의
/// 수익률입니다. 보유 기간이 기록 범위를 벗어나면 `None`입니다.
///
/// 누적 수익률이 -100% 아래로 내려간 구간은 연환산 시 음수의
/// 분수 거듭제곱이 되어 NaN이 됩니다. NaN은 에러 없이 그대로
/// 전파되며, 호출 측에서 결측처럼 다룹니다.
#[derive(Debug, Clone)]
pub struct ReturnMatrix {
    /// 시작 연도 (오름차순)
    years: Vec<i32>,
    /// 보유 기간 (1..=max_horizon)
    horizons: Vec<usize>,
    /// total[h-1][i] = 연도 i 진입, h년 보유 누적 수익률
    total: Vec<Vec<Option<f64>>>,
    /// annualized[h-1][i] = 같은 셀의 연환산 수익률
    annualized: Vec<Vec<Option<f64>>>,
}

impl ReturnMatrix {
    /// 연간 수익률 시계열에서 행렬을 계산합니다.
    ///
    /// 누적: `Π (1 + r[k]) - 1`, 연환산: `(Π (1 + r[k]))^(1/h) - 1`.
    pub fn compute(returns: &AnnualReturns, max_horizon: usize) -> Self {
        let years = returns.years.clone();
        let n = years.len();
        let horizons: Vec<usize> = (1..=max_horizon).collect();

        let mut total = Vec::with_capacity(max_horizon);
        let mut annualized = Vec::with_capacity(max_horizon);

        for &h in &horizons {
            let mut total_row = Vec::with_capacity(n);
            let mut ann_row = Vec::with_capacity(n);

            for i in 0..n {
                if i + h > n {
                    // 보유 기간이 기록 끝을 넘어감
                    total_row.push(None);
                    ann_row.push(None);
                    continue;
                }

                let growth: f64 = returns.values[i..i + h]
                    .iter()
                    .map(|r| 1.0 + r)
                    .product();
                total_row.push(Some(growth - 1.0));
                // growth < 0이면 분수 거듭제곱이 NaN이 되어 전파됨
                ann_row.push(Some(growth.powf(1.0 / h as f64) - 1.0));
            }

            total.push(total_row);
            annualized.push(ann_row);
        }

        debug!(years = n, max_horizon, "return matrix computed");

        Self {
            years,
            horizons,
            total,
            annualized,
        }
    }

    /// 시작 연도 목록을 반환합니다.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// 보유 기간 목록을 반환합니다.
    pub fn horizons(&self) -> &[usize] {
        &self.horizons
    }

    /// 누적 수익률 셀을 반환합니다.
    pub fn total(&self, year_idx: usize, horizon: usize) -> Option<f64> {
        self.total.get(horizon.checked_sub(1)?)?.get(year_idx).copied()?
    }

    /// 연환산 수익률 셀을 반환합니다.
    pub fn annualized(&self, year_idx: usize, horizon: usize) -> Option<f64> {
        self.annualized.get(horizon.checked_sub(1)?)?.get(year_idx).copied()?
    }

    /// 보유 기간 `horizon`의 누적 수익률 행을 반환합니다.
    pub fn total_row(&self, horizon: usize) -> &[Option<f64>] {
        &self.total[horizon - 1]
    }

    /// 보유 기간 `horizon`의 연환산 수익률 행을 반환합니다.
    pub fn annualized_row(&self, horizon: usize) -> &[Option<f64>] {
        &self.annualized[horizon - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn returns(pairs: &[(i32, f64)]) -> AnnualReturns {
        AnnualReturns {
            years: pairs.iter().map(|(y, _)| *y).collect(),
            values: pairs.iter().map(|(_, v)| *v).collect(),
        }
    }

    #[test]
    fn test_horizon_one_equals_annual_return() {
        let r = returns(&[(2020, 0.10), (2021, -0.05), (2022, 0.20)]);
        let m = ReturnMatrix::compute(&r, 3);

        // 1년 보유는 해당 연도 수익률 그대로
        for (i, &v) in r.values.iter().enumerate() {
            assert!((m.total(i, 1).unwrap() - v).abs() < 1e-12);
            assert!((m.annualized(i, 1).unwrap() - v).abs() < 1e-12);
        }
    }

    #[test]
    fn test_total_compounds() {
        let r = returns(&[(2020, 0.10), (2021, 0.10)]);
        let m = ReturnMatrix::compute(&r, 2);

        // 1.1 * 1.1 - 1 = 0.21
        assert!((m.total(0, 2).unwrap() - 0.21).abs() < 1e-12);
        assert!((m.annualized(0, 2).unwrap() - 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_beyond_history_is_none() {
        let r = returns(&[(2020, 0.10), (2021, 0.05)]);
        let m = ReturnMatrix::compute(&r, 3);

        assert!(m.total(1, 2).is_none());
        assert!(m.total(0, 3).is_none());
        assert!(m.annualized(0, 3).is_none());
    }

    #[test]
    fn test_half_loss_then_double_cancels_out() {
        // -50% 다음 +100%: 누적과 연환산 모두 정확히 0
        let r = returns(&[(2020, -0.5), (2021, 1.0)]);
        let m = ReturnMatrix::compute(&r, 2);

        assert_eq!(m.total(0, 2), Some(0.0));
        assert_eq!(m.annualized(0, 2), Some(0.0));
    }

    #[test]
    fn test_total_loss_propagates_through_window() {
        // -100% 수익률이 포함된 구간은 길이와 무관하게 누적 -100%
        let r = returns(&[(2020, 0.30), (2021, -1.0), (2022, 0.20)]);
        let m = ReturnMatrix::compute(&r, 3);

        assert_eq!(m.total(1, 1), Some(-1.0));
        assert_eq!(m.total(0, 2), Some(-1.0));
        assert_eq!(m.total(0, 3), Some(-1.0));
        assert_eq!(m.total(1, 2), Some(-1.0));
        // 연환산도 0^(1/h) - 1 = -1
        assert_eq!(m.annualized(0, 3), Some(-1.0));
    }

    #[test]
    fn test_negative_growth_propagates_nan() {
        // 누적 성장률이 음수가 되는 인위적 입력
        let r = returns(&[(2020, -1.5), (2021, 0.10)]);
        let m = ReturnMatrix::compute(&r, 2);

        // 누적 수익률 자체는 유한한 값
        assert!((m.total(0, 2).unwrap() - (-0.5 * 1.1 - 1.0)).abs() < 1e-12);
        // 연환산은 (-0.55)^(1/2)로 NaN, 패닉 없이 전파
        assert!(m.annualized(0, 2).unwrap().is_nan());
    }

    #[test]
    fn test_composition_of_adjacent_windows() {
        let r = returns(&[(2020, 0.10), (2021, -0.05), (2022, 0.20), (2023, 0.03)]);
        let m = ReturnMatrix::compute(&r, 4);

        // (1 + total(0, 2)) * (1 + total(2, 2)) = 1 + total(0, 4)
        let lhs = (1.0 + m.total(0, 2).unwrap()) * (1.0 + m.total(2, 2).unwrap());
        let rhs = 1.0 + m.total(0, 4).unwrap();
        assert!((lhs - rhs).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_annualized_consistent_with_total(
            values in proptest::collection::vec(-0.5f64..1.0, 1..20),
            horizon in 1usize..10,
        ) {
            let pairs: Vec<(i32, f64)> =
                values.iter().enumerate().map(|(i, &v)| (1970 + i as i32, v)).collect();
            let r = returns(&pairs);
            let m = ReturnMatrix::compute(&r, horizon);

            for i in 0..values.len() {
                match (m.total(i, horizon), m.annualized(i, horizon)) {
                    (Some(total), Some(ann)) => {
                        // (1 + annualized)^h = 1 + total
                        let rebuilt = (1.0 + ann).powi(horizon as i32) - 1.0;
                        prop_assert!((rebuilt - total).abs() < 1e-9);
                    }
                    (None, None) => {
                        // 기록 범위를 벗어난 셀은 양쪽 모두 결측
                        prop_assert!(i + horizon > values.len());
                    }
                    _ => prop_assert!(false, "total/annualized presence mismatch"),
                }
            }
        }
    }
}
