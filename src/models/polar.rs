//! # 极曲线数据模型
//!
//! 存储一次 XFOIL 扫描的结果：请求的攻角列表与收敛的气动系数。
//!
//! 未收敛的攻角不会出现在 `points` 中，但可以通过 `missing_alphas()` 显式获取，
//! 统计（如 CL_max）只基于收敛点。
//!
//! ## 依赖关系
//! - 被 `parsers/polar.rs`, `solver/`, `sweep/`, `report/` 使用

use serde::{Deserialize, Serialize};

/// 判断两个攻角是否相同的容差（度），XFOIL 输出保留 3 位小数
pub const ALPHA_TOLERANCE: f64 = 1e-3;

/// 单个攻角下的气动系数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    /// 攻角 (deg)
    pub alpha: f64,
    /// 升力系数
    pub cl: f64,
    /// 阻力系数
    pub cd: f64,
    /// 压差阻力系数
    pub cdp: Option<f64>,
    /// 力矩系数 (c/4)
    pub cm: f64,
    /// 上表面转捩位置 (x/c)
    pub top_xtr: Option<f64>,
    /// 下表面转捩位置 (x/c)
    pub bot_xtr: Option<f64>,
}

impl PolarPoint {
    pub fn new(alpha: f64, cl: f64, cd: f64, cm: f64) -> Self {
        PolarPoint {
            alpha,
            cl,
            cd,
            cdp: None,
            cm,
            top_xtr: None,
            bot_xtr: None,
        }
    }
}

/// 一个工况的扫描结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    /// 工况标签（如 "Flap 20°"）
    pub label: String,

    /// 请求的攻角 (deg)
    pub requested: Vec<f64>,

    /// 收敛点，按 XFOIL 输出顺序
    pub points: Vec<PolarPoint>,
}

impl Polar {
    pub fn new(label: impl Into<String>, requested: Vec<f64>, points: Vec<PolarPoint>) -> Self {
        Polar {
            label: label.into(),
            requested,
            points,
        }
    }

    /// 空结果（没有请求任何攻角，或全部未收敛）
    pub fn empty(label: impl Into<String>, requested: Vec<f64>) -> Self {
        Polar::new(label, requested, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 请求了但未收敛的攻角
    pub fn missing_alphas(&self) -> Vec<f64> {
        self.requested
            .iter()
            .copied()
            .filter(|a| {
                !self
                    .points
                    .iter()
                    .any(|p| (p.alpha - a).abs() < ALPHA_TOLERANCE)
            })
            .collect()
    }

    /// CL 最大的点
    pub fn cl_max(&self) -> Option<&PolarPoint> {
        self.points.iter().max_by(|a, b| a.cl.total_cmp(&b.cl))
    }

    /// (alpha, CL) 曲线数据，按攻角排序
    pub fn lift_curve(&self) -> Vec<(f64, f64)> {
        let mut data: Vec<(f64, f64)> = self.points.iter().map(|p| (p.alpha, p.cl)).collect();
        data.sort_by(|a, b| a.0.total_cmp(&b.0));
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Polar {
        Polar::new(
            "baseline",
            vec![-5.0, 0.0, 5.0, 10.0, 15.0],
            vec![
                PolarPoint::new(-5.0, -0.08, 0.009, -0.10),
                PolarPoint::new(0.0, 0.48, 0.007, -0.10),
                PolarPoint::new(10.0, 1.52, 0.013, -0.09),
                PolarPoint::new(5.0, 1.02, 0.009, -0.10),
            ],
        )
    }

    #[test]
    fn test_cl_max_is_maximum_of_points() {
        let polar = sample();
        let best = polar.cl_max().unwrap();
        assert!((best.cl - 1.52).abs() < 1e-12);
        assert!((best.alpha - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_alphas() {
        let polar = sample();
        assert_eq!(polar.missing_alphas(), vec![15.0]);
        assert_eq!(polar.points.len(), 4);
    }

    #[test]
    fn test_missing_alphas_tolerates_rounding() {
        let polar = Polar::new(
            "rounded",
            vec![-4.0 + 1.0 / 3.0],
            vec![PolarPoint::new(-3.667, 0.1, 0.01, 0.0)],
        );
        assert!(polar.missing_alphas().is_empty());
    }

    #[test]
    fn test_empty_polar() {
        let polar = Polar::empty("nothing", vec![0.0, 1.0]);
        assert!(polar.is_empty());
        assert!(polar.cl_max().is_none());
        assert_eq!(polar.missing_alphas(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_lift_curve_sorted() {
        let curve = sample().lift_curve();
        let alphas: Vec<f64> = curve.iter().map(|(a, _)| *a).collect();
        assert_eq!(alphas, vec![-5.0, 0.0, 5.0, 10.0]);
    }
}
