//! # 自然三次样条
//!
//! 在严格递增的参数节点上拟合一维自然三次样条（两端二阶导数为 0），
//! 用于按弧长参数重新采样翼型轮廓。
//!
//! ## 依赖关系
//! - 被 `geometry/repanel.rs` 使用

use crate::error::{Result, StolfoilError};

/// 自然三次样条
#[derive(Debug, Clone)]
pub struct CubicSpline {
    knots: Vec<f64>,
    values: Vec<f64>,
    /// 各节点处的二阶导数
    second: Vec<f64>,
}

impl CubicSpline {
    /// 拟合样条，节点必须严格递增
    pub fn new(knots: &[f64], values: &[f64]) -> Result<Self> {
        let n = knots.len();
        if n != values.len() {
            return Err(StolfoilError::InvalidGeometry(format!(
                "spline needs matching knots and values, got {} and {}",
                n,
                values.len()
            )));
        }
        if n < 2 {
            return Err(StolfoilError::InvalidGeometry(
                "spline needs at least 2 knots".to_string(),
            ));
        }
        if knots.windows(2).any(|w| !(w[1] > w[0])) {
            return Err(StolfoilError::InvalidGeometry(
                "spline knots must be strictly increasing".to_string(),
            ));
        }

        let second = solve_second_derivatives(knots, values);

        Ok(CubicSpline {
            knots: knots.to_vec(),
            values: values.to_vec(),
            second,
        })
    }

    /// 在 t 处求值（超出范围时按端部区间外推）
    pub fn eval(&self, t: f64) -> f64 {
        let n = self.knots.len();
        let k = self
            .knots
            .partition_point(|&knot| knot <= t)
            .saturating_sub(1)
            .min(n - 2);

        let h = self.knots[k + 1] - self.knots[k];
        let a = (self.knots[k + 1] - t) / h;
        let b = (t - self.knots[k]) / h;

        a * self.values[k]
            + b * self.values[k + 1]
            + ((a.powi(3) - a) * self.second[k] + (b.powi(3) - b) * self.second[k + 1]) * h * h
                / 6.0
    }
}

/// 三对角方程组（Thomas 算法）求自然样条的二阶导数
fn solve_second_derivatives(t: &[f64], v: &[f64]) -> Vec<f64> {
    let n = t.len();
    let mut m = vec![0.0; n];
    if n < 3 {
        return m;
    }

    let inner = n - 2;
    let mut diag = vec![0.0; inner];
    let mut upper = vec![0.0; inner];
    let mut rhs = vec![0.0; inner];

    for i in 1..n - 1 {
        let h0 = t[i] - t[i - 1];
        let h1 = t[i + 1] - t[i];
        diag[i - 1] = 2.0 * (h0 + h1);
        upper[i - 1] = h1;
        rhs[i - 1] = 6.0 * ((v[i + 1] - v[i]) / h1 - (v[i] - v[i - 1]) / h0);
    }

    // 前向消元，下对角元素为 h_{i-1}
    for j in 1..inner {
        let lower = t[j + 1] - t[j];
        let w = lower / diag[j - 1];
        diag[j] -= w * upper[j - 1];
        rhs[j] -= w * rhs[j - 1];
    }

    // 回代
    m[inner] = rhs[inner - 1] / diag[inner - 1];
    for j in (0..inner - 1).rev() {
        m[j + 1] = (rhs[j] - upper[j] * m[j + 2]) / diag[j];
    }

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolates_knots() {
        let t = [0.0, 0.3, 0.5, 0.9, 1.0];
        let v = [1.0, -2.0, 0.5, 3.0, 0.0];
        let spline = CubicSpline::new(&t, &v).unwrap();
        for (ti, vi) in t.iter().zip(v.iter()) {
            assert!((spline.eval(*ti) - vi).abs() < 1e-12);
        }
    }

    #[test]
    fn test_reproduces_linear_data() {
        let t = [0.0, 0.1, 0.4, 0.7, 1.0];
        let v: Vec<f64> = t.iter().map(|x| 2.0 * x - 1.0).collect();
        let spline = CubicSpline::new(&t, &v).unwrap();
        for s in [0.05, 0.25, 0.55, 0.95] {
            assert!((spline.eval(s) - (2.0 * s - 1.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_approximates_smooth_function() {
        let t: Vec<f64> = (0..=20).map(|i| i as f64 / 20.0).collect();
        let v: Vec<f64> = t.iter().map(|x| (3.0 * x).sin()).collect();
        let spline = CubicSpline::new(&t, &v).unwrap();
        for s in [0.13, 0.42, 0.77] {
            assert!((spline.eval(s) - (3.0 * s).sin()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_two_knots_is_linear() {
        let spline = CubicSpline::new(&[0.0, 2.0], &[1.0, 5.0]).unwrap();
        assert!((spline.eval(0.5) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_increasing_knots() {
        assert!(CubicSpline::new(&[0.0, 0.0, 1.0], &[0.0, 1.0, 2.0]).is_err());
        assert!(CubicSpline::new(&[0.0], &[0.0]).is_err());
        assert!(CubicSpline::new(&[0.0, 1.0], &[0.0]).is_err());
    }
}
