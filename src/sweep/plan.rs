//! # 扫描计划
//!
//! 一组按声明顺序执行的工况（基线或襟翼偏转）以及共用的来流条件与攻角列表。
//! 创建计划时检查全部参数，几何参数错误在任何求解器调用之前报告。
//!
//! ## 依赖关系
//! - 被 `sweep/runner.rs`, `commands/` 使用

use crate::error::{Result, StolfoilError};
use crate::geometry::FlapConfig;
use crate::solver::FlowConditions;

/// 单个工况
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// 标签（用于提示、图例与 CSV）
    pub label: String,
    /// 襟翼设置，基线工况为 `None`
    pub flap: Option<FlapConfig>,
}

impl Configuration {
    /// 基线工况（不偏转）
    pub fn baseline(label: impl Into<String>) -> Self {
        Configuration {
            label: label.into(),
            flap: None,
        }
    }

    /// 襟翼工况，标签形如 "Flap 20°"
    pub fn flapped(angle_deg: f64, hinge_x: f64) -> Self {
        Configuration {
            label: format!("Flap {}°", angle_deg),
            flap: Some(FlapConfig::new(angle_deg, hinge_x)),
        }
    }
}

/// 扫描计划
#[derive(Debug, Clone)]
pub struct SweepPlan {
    pub configurations: Vec<Configuration>,
    pub flow: FlowConditions,
    pub alphas: Vec<f64>,
    /// 重新分布节点时每侧点数
    pub n_points_per_side: usize,
}

impl SweepPlan {
    pub fn new(
        configurations: Vec<Configuration>,
        flow: FlowConditions,
        alphas: Vec<f64>,
        n_points_per_side: usize,
    ) -> Result<Self> {
        for config in &configurations {
            if let Some(flap) = &config.flap {
                flap.validate().map_err(|e| {
                    StolfoilError::InvalidGeometry(format!("{}: {}", config.label, e))
                })?;
            }
        }

        if n_points_per_side < 2 {
            return Err(StolfoilError::InvalidArgument(format!(
                "points per side must be at least 2, got {}",
                n_points_per_side
            )));
        }

        if let Some(a) = alphas.iter().find(|a| !a.is_finite()) {
            return Err(StolfoilError::InvalidArgument(format!(
                "angle of attack must be finite, got {}",
                a
            )));
        }

        flow.validate()?;

        Ok(SweepPlan {
            configurations,
            flow,
            alphas,
            n_points_per_side,
        })
    }
}
