//! # NACA 4 位数翼型生成
//!
//! 根据 NACA 4 位数编号解析生成翼型坐标（如 `naca4412`）。
//!
//! - 厚度分布使用开口后缘系数 0.1015
//! - 弦向余弦分布，前后缘加密
//! - 输出为 Selig 顺序（上表面 TE -> LE，下表面 LE -> TE）
//!
//! ## 依赖关系
//! - 被 `library/` 调用
//! - 使用 `regex` 解析编号

use crate::error::Result;
use crate::geometry::spacing::cosspace;
use crate::models::Airfoil;

use regex::Regex;
use std::sync::LazyLock;

/// 解析翼型生成时每侧的默认点数
pub const DEFAULT_POINTS_PER_SIDE: usize = 100;

/// NACA 4 位数编号，只编译一次
static DESIGNATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*naca\s*-?\s*(\d)(\d)(\d{2})\s*$").ok());

/// 解析 NACA 4 位数编号，返回 (最大弯度 %, 最大弯度位置 1/10, 相对厚度 %)
pub fn parse_designation(name: &str) -> Option<(f64, f64, f64)> {
    let caps = DESIGNATION.as_ref()?.captures(name)?;

    let m: f64 = caps[1].parse().ok()?;
    let p: f64 = caps[2].parse().ok()?;
    let t: f64 = caps[3].parse().ok()?;
    Some((m, p, t))
}

/// 由编号生成翼型；不是 NACA 4 位数编号时返回 `None`
pub fn from_designation(name: &str, n_points_per_side: usize) -> Option<Result<Airfoil>> {
    parse_designation(name).map(|(m, p, t)| naca4(name, m, p, t, n_points_per_side))
}

/// 生成 NACA 4 位数翼型
pub fn naca4(
    name: &str,
    max_camber: f64,
    camber_position: f64,
    thickness: f64,
    n_points_per_side: usize,
) -> Result<Airfoil> {
    let m = max_camber / 100.0;
    let p = camber_position / 10.0;
    let t = thickness / 100.0;

    let xs = cosspace(0.0, 1.0, n_points_per_side.max(2));

    let mut upper = Vec::with_capacity(xs.len());
    let mut lower = Vec::with_capacity(xs.len());

    for &x in &xs {
        let yt = 5.0
            * t
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1015 * x.powi(4));

        let (yc, dyc) = camber_line(x, m, p);
        let theta = dyc.atan();
        let (sin, cos) = theta.sin_cos();

        upper.push([x - yt * sin, yc + yt * cos]);
        lower.push([x + yt * sin, yc - yt * cos]);
    }

    // 上表面反向（TE -> LE），下表面跳过重复的前缘点
    let points: Vec<[f64; 2]> = upper
        .into_iter()
        .rev()
        .chain(lower.into_iter().skip(1))
        .collect();

    Airfoil::new(name.to_lowercase(), points)
}

/// 中弧线高度及其斜率
fn camber_line(x: f64, m: f64, p: f64) -> (f64, f64) {
    if m == 0.0 || p == 0.0 {
        return (0.0, 0.0);
    }

    if x < p {
        let yc = m / p.powi(2) * (2.0 * p * x - x.powi(2));
        let dyc = 2.0 * m / p.powi(2) * (p - x);
        (yc, dyc)
    } else {
        let yc = m / (1.0 - p).powi(2) * ((1.0 - 2.0 * p) + 2.0 * p * x - x.powi(2));
        let dyc = 2.0 * m / (1.0 - p).powi(2) * (p - x);
        (yc, dyc)
    }
}
