//! # 升力曲线图
//!
//! 使用 `plotters` 绘制 alpha-CL 曲线。一次运行对应一个 `PlotSession`：
//! 依次加入各工况曲线，可选水平参考线（目标 CL），最后 `finish` 输出文件。
//!
//! ## 功能
//! - 固定调色板（蓝、绿、橙、红，之后循环）
//! - 图例与网格
//! - 根据扩展名输出 PNG 或 SVG
//!
//! ## 依赖关系
//! - 被 `commands/pipeline.rs`, `commands/flaps.rs` 调用
//! - 使用 `models/polar.rs` 的 Polar 结构
//! - 使用 `plotters` 渲染图表

use crate::error::{Result, StolfoilError};
use crate::models::Polar;
use crate::utils::output;

use plotters::prelude::*;
use std::path::Path;

/// 曲线调色板
pub const PALETTE: [RGBColor; 4] = [
    RGBColor(0, 0, 255),
    RGBColor(0, 128, 0),
    RGBColor(255, 165, 0),
    RGBColor(255, 0, 0),
];

/// 图片尺寸 (像素)
const IMAGE_SIZE: (u32, u32) = (1000, 600);

/// 单条曲线
#[derive(Debug, Clone)]
pub struct Curve {
    pub label: String,
    pub data: Vec<(f64, f64)>,
    pub color: RGBColor,
}

/// 水平参考线
#[derive(Debug, Clone)]
pub struct ReferenceLine {
    pub y: f64,
    pub label: String,
}

/// 一次运行的绘图会话
#[derive(Debug)]
pub struct PlotSession {
    title: String,
    x_label: String,
    y_label: String,
    curves: Vec<Curve>,
    reference: Option<ReferenceLine>,
}

impl PlotSession {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        PlotSession {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            curves: Vec::new(),
            reference: None,
        }
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// 加入一条升力曲线；极曲线为空时不加入，返回 false
    pub fn add_curve(&mut self, label: impl Into<String>, polar: &Polar) -> bool {
        let data = polar.lift_curve();
        if data.is_empty() {
            return false;
        }

        let color = PALETTE[self.curves.len() % PALETTE.len()];
        self.curves.push(Curve {
            label: label.into(),
            data,
            color,
        });
        true
    }

    /// 设置水平参考线（如目标 CL）
    pub fn set_reference_line(&mut self, y: f64, label: impl Into<String>) {
        self.reference = Some(ReferenceLine {
            y,
            label: label.into(),
        });
    }

    /// x 轴范围（攻角），两端留 1°
    pub fn x_range(&self) -> (f64, f64) {
        let (min, max) = bounds(self.curves.iter().flat_map(|c| c.data.iter().map(|(x, _)| *x)));
        match (min, max) {
            (Some(min), Some(max)) => (min - 1.0, max + 1.0),
            _ => (-5.0, 15.0),
        }
    }

    /// y 轴范围，包含参考线，留 10% 边距
    pub fn y_range(&self) -> (f64, f64) {
        let values = self
            .curves
            .iter()
            .flat_map(|c| c.data.iter().map(|(_, y)| *y))
            .chain(self.reference.iter().map(|r| r.y));

        match bounds(values) {
            (Some(min), Some(max)) => {
                let margin = ((max - min).abs() * 0.1).max(0.1);
                (min - margin, max + margin)
            }
            _ => (-0.5, 2.0),
        }
    }

    /// 输出图片并结束会话；没有任何曲线时跳过，返回 false
    pub fn finish(self, path: &Path) -> Result<bool> {
        if self.curves.is_empty() {
            output::print_warning(&format!(
                "No converged curves to plot; '{}' was not written",
                path.display()
            ));
            return Ok(false);
        }

        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);

        if is_svg {
            let root = SVGBackend::new(path, IMAGE_SIZE).into_drawing_area();
            self.draw(&root)?;
            root.present()
                .map_err(|e| StolfoilError::PlotError(e.to_string()))?;
        } else {
            let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
            self.draw(&root)?;
            root.present()
                .map_err(|e| StolfoilError::PlotError(e.to_string()))?;
        }

        Ok(true)
    }

    /// 绘制图表的核心逻辑
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, plotters::coord::Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)
            .map_err(|e| StolfoilError::PlotError(format!("{:?}", e)))?;

        let (x_min, x_max) = self.x_range();
        let (y_min, y_max) = self.y_range();

        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, ("sans-serif", 28).into_font())
            .margin(30)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| StolfoilError::PlotError(format!("{:?}", e)))?;

        chart
            .configure_mesh()
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .x_label_style(("sans-serif", 16))
            .y_label_style(("sans-serif", 16))
            .axis_desc_style(("sans-serif", 18))
            .draw()
            .map_err(|e| StolfoilError::PlotError(format!("{:?}", e)))?;

        for curve in &self.curves {
            let color = curve.color;
            chart
                .draw_series(
                    LineSeries::new(curve.data.iter().copied(), color.stroke_width(2))
                        .point_size(3),
                )
                .map_err(|e| StolfoilError::PlotError(format!("{:?}", e)))?
                .label(curve.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        if let Some(reference) = &self.reference {
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(x_min, reference.y), (x_max, reference.y)],
                    10,
                    6,
                    BLACK.stroke_width(2),
                ))
                .map_err(|e| StolfoilError::PlotError(format!("{:?}", e)))?
                .label(reference.label.as_str())
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| StolfoilError::PlotError(format!("{:?}", e)))?;

        Ok(())
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (Option<f64>, Option<f64>) {
    values.fold((None, None), |(min, max), v| {
        (
            Some(min.map_or(v, |m: f64| m.min(v))),
            Some(max.map_or(v, |m: f64| m.max(v))),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PolarPoint;
    use crate::utils::scratch::ScratchDir;

    fn polar(label: &str, offset: f64) -> Polar {
        let points = (-5..=10)
            .map(|a| {
                let a = a as f64;
                PolarPoint::new(a, 0.1 * a + offset, 0.01, -0.1)
            })
            .collect();
        Polar::new(label, Vec::new(), points)
    }

    fn flap_session() -> PlotSession {
        PlotSession::new(
            "STOL Performance: Lift Increase due to Flaps",
            "Angle of Attack (deg)",
            "Lift Coefficient (CL)",
        )
    }

    #[test]
    fn test_palette_cycles_in_insertion_order() {
        let mut session = flap_session();
        for i in 0..5 {
            assert!(session.add_curve(format!("Flap {}°", i * 10), &polar("p", i as f64)));
        }

        let colors: Vec<RGBColor> = session.curves().iter().map(|c| c.color).collect();
        assert_eq!(colors[0], RGBColor(0, 0, 255));
        assert_eq!(colors[2], RGBColor(255, 165, 0));
        assert_eq!(colors[3], RGBColor(255, 0, 0));
        assert_eq!(colors[4], colors[0]);
        assert_eq!(session.curves()[1].label, "Flap 10°");
    }

    #[test]
    fn test_empty_polar_is_not_added() {
        let mut session = flap_session();
        assert!(!session.add_curve("Flap 30°", &Polar::empty("Flap 30°", vec![0.0])));
        assert!(session.curves().is_empty());
    }

    #[test]
    fn test_y_range_includes_reference_line() {
        let mut session = flap_session();
        session.add_curve("Flap 0°", &polar("p", 0.0));
        let (_, y_max) = session.y_range();
        assert!(y_max < 2.0);

        session.set_reference_line(2.0, "STOL Target (CL=2.0)");
        let (y_min, y_max) = session.y_range();
        assert!(y_max > 2.0);
        assert!(y_min < -0.5);
        assert_eq!(session.reference.as_ref().unwrap().label, "STOL Target (CL=2.0)");
    }

    #[test]
    fn test_x_range_padded() {
        let mut session = flap_session();
        session.add_curve("Flap 0°", &polar("p", 0.0));
        assert_eq!(session.x_range(), (-6.0, 11.0));
    }

    #[test]
    fn test_finish_without_curves_is_skipped() {
        let dir = ScratchDir::new("plot").unwrap();
        let path = dir.path().join("empty.png");
        assert!(!flap_session().finish(&path).unwrap());
        assert!(!path.exists());
    }
}
