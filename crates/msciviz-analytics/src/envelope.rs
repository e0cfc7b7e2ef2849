//! 보유 기간별 수익률 범위.
//!
//! 수익률 행렬의 각 보유 기간에 대해 연환산 수익률의 최소/평균/최대를
//! 퍼센트 단위로 집계합니다. 장기 수익률 곡선의 데이터입니다.

use crate::aggregate::ReturnMatrix;

/// 보유 기간별 연환산 수익률의 범위 (퍼센트 단위).
#[derive(Debug, Clone)]
pub struct ReturnEnvelope {
    /// 보유 기간 (1..=max)
    pub horizons: Vec<usize>,
    /// 보유 기간별 최소 연환산 수익률 (%)
    pub lower: Vec<f64>,
    /// 보유 기간별 평균 연환산 수익률 (%)
    pub mean: Vec<f64>,
    /// 보유 기간별 최대 연환산 수익률 (%)
    pub upper: Vec<f64>,
}

impl ReturnEnvelope {
    /// 수익률 행렬에서 보유 기간별 범위를 계산합니다.
    ///
    /// 결측 셀과 NaN 셀은 집계에서 제외합니다. 어떤 보유 기간에
    /// 유효한 셀이 하나도 없으면 해당 값은 NaN이 됩니다.
    pub fn from_matrix(matrix: &ReturnMatrix) -> Self {
        let horizons = matrix.horizons().to_vec();
        let mut lower = Vec::with_capacity(horizons.len());
        let mut mean = Vec::with_capacity(horizons.len());
        let mut upper = Vec::with_capacity(horizons.len());

        for &h in &horizons {
            let cells: Vec<f64> = matrix
                .annualized_row(h)
                .iter()
                .filter_map(|cell| *cell)
                .filter(|v| v.is_finite())
                .collect();

            if cells.is_empty() {
                lower.push(f64::NAN);
                mean.push(f64::NAN);
                upper.push(f64::NAN);
                continue;
            }

            let min = cells.iter().copied().fold(f64::INFINITY, f64::min);
            let max = cells.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let avg = cells.iter().sum::<f64>() / cells.len() as f64;

            lower.push(min * 100.0);
            mean.push(avg * 100.0);
            upper.push(max * 100.0);
        }

        Self {
            horizons,
            lower,
            mean,
            upper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msciviz_core::AnnualReturns;

    fn returns(values: &[f64]) -> AnnualReturns {
        AnnualReturns {
            years: (0..values.len()).map(|i| 2000 + i as i32).collect(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn test_envelope_horizon_one() {
        let r = returns(&[0.10, -0.20, 0.30]);
        let m = ReturnMatrix::compute(&r, 3);
        let env = ReturnEnvelope::from_matrix(&m);

        // 1년 보유: 연간 수익률 그대로의 최소/평균/최대 (%)
        assert!((env.lower[0] - (-20.0)).abs() < 1e-9);
        assert!((env.upper[0] - 30.0).abs() < 1e-9);
        let expected_mean = (0.10 - 0.20 + 0.30) / 3.0 * 100.0;
        assert!((env.mean[0] - expected_mean).abs() < 1e-9);
    }

    #[test]
    fn test_envelope_longest_horizon_single_cell() {
        let r = returns(&[0.10, 0.10]);
        let m = ReturnMatrix::compute(&r, 2);
        let env = ReturnEnvelope::from_matrix(&m);

        // 최장 보유 기간은 셀이 하나뿐이므로 min == mean == max
        assert!((env.lower[1] - env.upper[1]).abs() < 1e-12);
        assert!((env.lower[1] - env.mean[1]).abs() < 1e-12);
        assert!((env.lower[1] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_envelope_skips_nan_cells() {
        // 첫 셀은 누적 성장률이 음수라 연환산이 NaN
        let r = returns(&[-1.5, 0.10, 0.20]);
        let m = ReturnMatrix::compute(&r, 2);
        let env = ReturnEnvelope::from_matrix(&m);

        // 2년 보유: NaN 셀 하나를 제외한 유효 셀 (1.1 * 1.2)^(1/2) - 1
        let valid = (1.1f64 * 1.2).sqrt() - 1.0;
        assert!((env.mean[1] - valid * 100.0).abs() < 1e-9);
    }
}
