//! # 求解器接口
//!
//! 外部求解器被视为黑盒，只有一个能力：
//! `solve(翼型, 来流条件, 攻角列表) -> 部分收敛的极曲线`。
//! 未收敛的攻角不出现在结果中，调用方必须容忍部分乃至空结果。
//!
//! ## 依赖关系
//! - 被 `sweep/`, `commands/` 使用
//! - 子模块: script（XFOIL 按键脚本）, xfoil（子进程调用）

pub mod script;
pub mod xfoil;

pub use xfoil::{XfoilConfig, XfoilRunner};

use crate::error::{Result, StolfoilError};
use crate::models::{Airfoil, Polar};

/// 来流与求解设置
#[derive(Debug, Clone, PartialEq)]
pub struct FlowConditions {
    /// 雷诺数，0 表示无粘计算
    pub reynolds: f64,
    /// 马赫数
    pub mach: Option<f64>,
    /// e^n 转捩准则
    pub ncrit: f64,
    /// 上表面强制转捩位置 (x/c)
    pub xtr_top: f64,
    /// 下表面强制转捩位置 (x/c)
    pub xtr_bottom: f64,
    /// 粘性迭代上限
    pub max_iter: u32,
}

impl Default for FlowConditions {
    fn default() -> Self {
        FlowConditions {
            reynolds: 1e6,
            mach: None,
            ncrit: 9.0,
            xtr_top: 1.0,
            xtr_bottom: 1.0,
            max_iter: 100,
        }
    }
}

impl FlowConditions {
    pub fn new(reynolds: f64, mach: Option<f64>) -> Self {
        FlowConditions {
            reynolds,
            mach,
            ..Default::default()
        }
    }

    pub fn is_viscous(&self) -> bool {
        self.reynolds > 0.0
    }

    /// 检查参数合法性
    pub fn validate(&self) -> Result<()> {
        if !self.reynolds.is_finite() || self.reynolds < 0.0 {
            return Err(StolfoilError::InvalidArgument(format!(
                "Reynolds number must be >= 0, got {}",
                self.reynolds
            )));
        }
        if let Some(m) = self.mach {
            if !(0.0..1.0).contains(&m) {
                return Err(StolfoilError::InvalidArgument(format!(
                    "Mach number must be in [0, 1), got {}",
                    m
                )));
            }
        }
        if !(self.ncrit > 0.0) {
            return Err(StolfoilError::InvalidArgument(format!(
                "ncrit must be positive, got {}",
                self.ncrit
            )));
        }
        for (name, x) in [("xtr-top", self.xtr_top), ("xtr-bottom", self.xtr_bottom)] {
            if !(0.0..=1.0).contains(&x) {
                return Err(StolfoilError::InvalidArgument(format!(
                    "{} must be in [0, 1], got {}",
                    name, x
                )));
            }
        }
        Ok(())
    }
}

/// 气动求解器
pub trait AeroSolver {
    /// 求解器名称（用于提示信息）
    fn name(&self) -> &str;

    /// 对给定翼型扫描攻角，返回收敛点组成的极曲线
    fn solve(
        &self,
        airfoil: &Airfoil,
        flow: &FlowConditions,
        alphas: &[f64],
        label: &str,
    ) -> Result<Polar>;
}
