//! # 翼型几何数据模型
//!
//! 翼型表示为闭合的二维轮廓点列（Selig 顺序）：
//! 上表面从后缘到前缘，再沿下表面回到后缘。x 为弦长分数，大致位于 [0, 1]。
//!
//! 翼型不可原地修改：襟翼偏转、重新分布节点都返回新的 `Airfoil`。
//!
//! ## 依赖关系
//! - 被 `geometry/`, `parsers/dat.rs`, `solver/`, `sweep/` 使用
//! - 使用 `geometry/flap.rs`, `geometry/repanel.rs` 实现几何编辑

use crate::error::{Result, StolfoilError};
use crate::geometry::flap::{self, FlapConfig};
use crate::geometry::repanel;

use serde::{Deserialize, Serialize};

/// 翼型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airfoil {
    /// 翼型名称（写入 .dat 文件首行）
    name: String,

    /// 轮廓点 [x, y]
    points: Vec<[f64; 2]>,
}

impl Airfoil {
    /// 从点列创建翼型
    pub fn new(name: impl Into<String>, points: Vec<[f64; 2]>) -> Result<Self> {
        let name = name.into();

        if points.len() < 3 {
            return Err(StolfoilError::InvalidGeometry(format!(
                "airfoil '{}' needs at least 3 points, got {}",
                name,
                points.len()
            )));
        }

        if let Some(i) = points
            .iter()
            .position(|p| !p[0].is_finite() || !p[1].is_finite())
        {
            return Err(StolfoilError::InvalidGeometry(format!(
                "airfoil '{}' has a non-finite coordinate at point {}",
                name, i
            )));
        }

        Ok(Airfoil { name, points })
    }

    /// 从分离的 x, y 数组创建翼型
    pub fn from_xy(name: impl Into<String>, x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(StolfoilError::InvalidGeometry(format!(
                "coordinate arrays differ in length: {} x values, {} y values",
                x.len(),
                y.len()
            )));
        }
        let points = x.iter().zip(y.iter()).map(|(&x, &y)| [x, y]).collect();
        Airfoil::new(name, points)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn x(&self) -> Vec<f64> {
        self.points.iter().map(|p| p[0]).collect()
    }

    pub fn y(&self) -> Vec<f64> {
        self.points.iter().map(|p| p[1]).collect()
    }

    /// 更换名称
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 前缘点索引（x 最小的点）
    pub fn leading_edge_index(&self) -> usize {
        self.points
            .iter()
            .enumerate()
            .min_by(|a, b| a.1[0].total_cmp(&b.1[0]))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// 上表面点（后缘 -> 前缘，含前缘）
    pub fn upper_points(&self) -> &[[f64; 2]] {
        &self.points[..=self.leading_edge_index()]
    }

    /// 下表面点（前缘 -> 后缘，含前缘）
    pub fn lower_points(&self) -> &[[f64; 2]] {
        &self.points[self.leading_edge_index()..]
    }

    /// 偏转后缘襟翼，返回新翼型（未重新分布节点）
    pub fn with_flap(&self, config: &FlapConfig) -> Result<Airfoil> {
        let (x, y) = flap::deflect_flap(&self.x(), &self.y(), config.angle_deg, config.hinge_x)?;
        Airfoil::from_xy(self.name.clone(), &x, &y)
    }

    /// 以余弦分布重新生成每侧 `n_points_per_side` 个节点
    pub fn repanel(&self, n_points_per_side: usize) -> Result<Airfoil> {
        repanel::repanel(self, n_points_per_side)
    }

    /// 最大厚度（同一 x 处上下表面的最大间距，按上表面点线性插值下表面）
    pub fn max_thickness(&self) -> f64 {
        let lower = self.lower_points();
        self.upper_points()
            .iter()
            .filter_map(|p| interpolate_y(lower, p[0]).map(|y_low| p[1] - y_low))
            .fold(0.0, f64::max)
    }
}

/// 在一侧表面上按 x 线性插值 y
fn interpolate_y(side: &[[f64; 2]], x: f64) -> Option<f64> {
    side.windows(2).find_map(|w| {
        let (a, b) = (w[0], w[1]);
        let (lo, hi) = if a[0] <= b[0] { (a, b) } else { (b, a) };
        if x < lo[0] || x > hi[0] {
            return None;
        }
        let dx = hi[0] - lo[0];
        if dx.abs() < 1e-14 {
            return Some(lo[1]);
        }
        Some(lo[1] + (x - lo[0]) / dx * (hi[1] - lo[1]))
    })
}
