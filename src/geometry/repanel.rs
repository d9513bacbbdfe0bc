//! # 翼型节点重新分布（repanel）
//!
//! 在前缘处把轮廓拆成上下两侧，各自以归一化弧长为参数拟合三次样条，
//! 再按余弦分布重新采样。任何几何编辑之后、调用求解器之前都必须执行，
//! 以平滑铰链处的尖角，避免 XFOIL 发散。
//!
//! ## 依赖关系
//! - 被 `models/airfoil.rs`, `sweep/` 使用
//! - 使用 `geometry/spline.rs`, `geometry/spacing.rs`

use crate::error::{Result, StolfoilError};
use crate::geometry::spacing::cosspace;
use crate::geometry::spline::CubicSpline;
use crate::models::Airfoil;

/// 小于此距离的相邻点视为重合
const COINCIDENT_TOLERANCE: f64 = 1e-12;

/// 重新分布节点，输出 `2 * n_points_per_side - 1` 个点
pub fn repanel(airfoil: &Airfoil, n_points_per_side: usize) -> Result<Airfoil> {
    if n_points_per_side < 2 {
        return Err(StolfoilError::InvalidGeometry(format!(
            "repanel needs at least 2 points per side, got {}",
            n_points_per_side
        )));
    }

    let s_new = cosspace(0.0, 1.0, n_points_per_side);

    let upper = resample_side(airfoil.upper_points(), &s_new)
        .map_err(|e| side_error(airfoil, "upper", e))?;
    let lower = resample_side(airfoil.lower_points(), &s_new)
        .map_err(|e| side_error(airfoil, "lower", e))?;

    // 两侧在前缘共用一个点
    let points: Vec<[f64; 2]> = upper.into_iter().chain(lower.into_iter().skip(1)).collect();

    Airfoil::new(airfoil.name(), points)
}

/// 在一侧表面上按归一化弧长重新采样
fn resample_side(side: &[[f64; 2]], s_new: &[f64]) -> Result<Vec<[f64; 2]>> {
    let mut pts: Vec<[f64; 2]> = Vec::with_capacity(side.len());
    for p in side {
        match pts.last() {
            Some(last) if distance(last, p) < COINCIDENT_TOLERANCE => {}
            _ => pts.push(*p),
        }
    }

    if pts.len() < 2 {
        return Err(StolfoilError::InvalidGeometry(
            "fewer than 2 distinct points".to_string(),
        ));
    }

    let mut s = Vec::with_capacity(pts.len());
    s.push(0.0);
    for w in pts.windows(2) {
        let last = s.last().copied().unwrap_or(0.0);
        s.push(last + distance(&w[0], &w[1]));
    }

    let total = s.last().copied().unwrap_or(0.0);
    s.iter_mut().for_each(|si| *si /= total);

    let xs: Vec<f64> = pts.iter().map(|p| p[0]).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p[1]).collect();
    let x_spline = CubicSpline::new(&s, &xs)?;
    let y_spline = CubicSpline::new(&s, &ys)?;

    Ok(s_new
        .iter()
        .map(|&t| [x_spline.eval(t), y_spline.eval(t)])
        .collect())
}

fn distance(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}

fn side_error(airfoil: &Airfoil, side: &str, err: StolfoilError) -> StolfoilError {
    StolfoilError::InvalidGeometry(format!(
        "cannot repanel {} surface of '{}': {}",
        side,
        airfoil.name(),
        err
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::flap::FlapConfig;
    use crate::geometry::naca;

    fn naca(name: &str) -> Airfoil {
        naca::from_designation(name, 60).unwrap().unwrap()
    }

    #[test]
    fn test_point_count() {
        let foil = naca("naca4412");
        let paneled = repanel(&foil, 200).unwrap();
        assert_eq!(paneled.len(), 399);
        assert_eq!(paneled.name(), "naca4412");
    }

    #[test]
    fn test_endpoints_preserved() {
        let foil = naca("naca4412");
        let paneled = repanel(&foil, 120).unwrap();

        let le = foil.points()[foil.leading_edge_index()];
        let first = foil.points()[0];
        let last = foil.points()[foil.len() - 1];

        let p = paneled.points();
        assert!(distance(&p[0], &first) < 1e-12);
        assert!(distance(&p[p.len() - 1], &last) < 1e-12);
        assert!(distance(&p[119], &le) < 1e-12);
    }

    #[test]
    fn test_shape_preserved() {
        let foil = naca("naca0012");
        let paneled = repanel(&foil, 200).unwrap();
        assert!((paneled.max_thickness() - foil.max_thickness()).abs() < 2e-3);

        // 对称翼型重新分布后仍然对称
        let p = paneled.points();
        let n = p.len();
        for i in 0..n {
            assert!((p[i][1] + p[n - 1 - i][1]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_flapped_contour_repanels_cleanly() {
        let foil = naca("naca4412");
        let flapped = foil.with_flap(&FlapConfig::new(30.0, 0.7)).unwrap();
        let paneled = repanel(&flapped, 200).unwrap();

        assert_eq!(paneled.len(), 399);
        assert!(paneled
            .points()
            .iter()
            .all(|p| p[0].is_finite() && p[1].is_finite()));
        // 后缘随襟翼下偏
        assert!(paneled.points()[0][1] < -0.1);
    }

    #[test]
    fn test_duplicate_points_are_skipped() {
        let foil = Airfoil::new(
            "dup",
            vec![
                [1.0, 0.0],
                [1.0, 0.0],
                [0.5, 0.06],
                [0.0, 0.0],
                [0.5, -0.06],
                [1.0, 0.0],
            ],
        )
        .unwrap();
        let paneled = repanel(&foil, 10).unwrap();
        assert_eq!(paneled.len(), 19);
    }

    #[test]
    fn test_rejects_too_few_points_per_side() {
        let foil = naca("naca0012");
        assert!(repanel(&foil, 1).is_err());
    }
}
