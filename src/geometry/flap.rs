//! # 后缘襟翼几何变换
//!
//! 将铰链线之后的点绕 (hinge_x, 0) 刚性旋转，模拟简单襟翼偏转。
//! 正角度使后缘向下偏转（增加有效弯度）。
//!
//! 每个点独立判断是否属于襟翼（`x >= hinge_x`），上下表面在铰链处可能出现
//! 小的不连续，必须在调用求解器之前通过重新分布节点平滑。
//!
//! ## 依赖关系
//! - 被 `models/airfoil.rs`, `sweep/` 使用

use crate::error::{Result, StolfoilError};

use serde::{Deserialize, Serialize};

/// 襟翼配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlapConfig {
    /// 偏转角 (deg)，正值向下
    pub angle_deg: f64,
    /// 铰链位置（弦长分数，0-1）
    pub hinge_x: f64,
}

impl FlapConfig {
    pub fn new(angle_deg: f64, hinge_x: f64) -> Self {
        FlapConfig { angle_deg, hinge_x }
    }

    /// 检查参数合法性
    pub fn validate(&self) -> Result<()> {
        if !self.angle_deg.is_finite() {
            return Err(StolfoilError::InvalidGeometry(format!(
                "flap angle must be finite, got {}",
                self.angle_deg
            )));
        }
        if !(0.0..=1.0).contains(&self.hinge_x) {
            return Err(StolfoilError::InvalidGeometry(format!(
                "hinge fraction {} is outside [0, 1]",
                self.hinge_x
            )));
        }
        Ok(())
    }
}

/// 偏转襟翼，返回新的坐标数组
pub fn deflect_flap(x: &[f64], y: &[f64], angle_deg: f64, hinge_x: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    if x.len() != y.len() {
        return Err(StolfoilError::InvalidGeometry(format!(
            "coordinate arrays differ in length: {} x values, {} y values",
            x.len(),
            y.len()
        )));
    }
    FlapConfig::new(angle_deg, hinge_x).validate()?;

    // cos(0) = 1 时 h + (x - h) 仍可能有舍入误差
    if angle_deg == 0.0 {
        return Ok((x.to_vec(), y.to_vec()));
    }

    let (sin, cos) = angle_deg.to_radians().sin_cos();

    let (x_new, y_new) = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| {
            if xi >= hinge_x {
                let dx = xi - hinge_x;
                (hinge_x + dx * cos + yi * sin, -dx * sin + yi * cos)
            } else {
                (xi, yi)
            }
        })
        .unzip();

    Ok((x_new, y_new))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::naca;

    fn naca4412_xy() -> (Vec<f64>, Vec<f64>) {
        let foil = naca::naca4("naca4412", 4.0, 4.0, 12.0, 100).unwrap();
        (foil.x(), foil.y())
    }

    #[test]
    fn test_points_ahead_of_hinge_unchanged() {
        let (x, y) = naca4412_xy();
        let (xn, yn) = deflect_flap(&x, &y, 25.0, 0.7).unwrap();

        for i in 0..x.len() {
            if x[i] < 0.7 {
                assert_eq!(xn[i], x[i]);
                assert_eq!(yn[i], y[i]);
            }
        }
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let (x, y) = naca4412_xy();
        for hinge in [0.0, 0.3, 0.7, 0.77, 1.0] {
            let (xn, yn) = deflect_flap(&x, &y, 0.0, hinge).unwrap();
            assert_eq!(xn, x);
            assert_eq!(yn, y);
        }
    }

    #[test]
    fn test_rotation_preserves_distance_to_hinge() {
        let (x, y) = naca4412_xy();
        let hinge = 0.7;
        let (xn, yn) = deflect_flap(&x, &y, 30.0, hinge).unwrap();

        for i in 0..x.len() {
            if x[i] >= hinge {
                let before = ((x[i] - hinge).powi(2) + y[i].powi(2)).sqrt();
                let after = ((xn[i] - hinge).powi(2) + yn[i].powi(2)).sqrt();
                assert!((before - after).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_continuous_as_angle_goes_to_zero() {
        let (x, y) = naca4412_xy();
        let mut previous = f64::INFINITY;

        for angle in [1.0, 1e-2, 1e-4, 1e-6] {
            let (xn, yn) = deflect_flap(&x, &y, angle, 0.7).unwrap();
            let max_dev = x
                .iter()
                .zip(&xn)
                .chain(y.iter().zip(&yn))
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max);
            assert!(max_dev < previous);
            previous = max_dev;
        }
        assert!(previous < 1e-7);
    }

    #[test]
    fn test_positive_angle_deflects_trailing_edge_down() {
        let x = vec![1.0, 0.5, 0.0, 0.5, 1.0];
        let y = vec![0.0, 0.05, 0.0, -0.05, 0.0];
        let (xn, yn) = deflect_flap(&x, &y, 20.0, 0.7).unwrap();

        let expected_y = -(0.3_f64) * 20.0_f64.to_radians().sin();
        let expected_x = 0.7 + 0.3 * 20.0_f64.to_radians().cos();
        assert!((yn[0] - expected_y).abs() < 1e-12);
        assert!((xn[0] - expected_x).abs() < 1e-12);
        assert!(yn[4] < 0.0);
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        let err = deflect_flap(&[1.0, 0.0], &[0.0], 10.0, 0.7).unwrap_err();
        assert!(matches!(err, StolfoilError::InvalidGeometry(_)));
    }

    #[test]
    fn test_rejects_hinge_outside_unit_interval() {
        assert!(deflect_flap(&[1.0], &[0.0], 10.0, 1.2).is_err());
        assert!(deflect_flap(&[1.0], &[0.0], 10.0, -0.1).is_err());
        assert!(FlapConfig::new(f64::NAN, 0.7).validate().is_err());
    }
}
