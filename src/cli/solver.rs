//! # 求解器公共参数
//!
//! `pipeline` 与 `flaps` 共用的 XFOIL 与来流参数，通过 `#[command(flatten)]` 引入。
//! Mach 与超时的默认值因子命令而异，由子命令在解析后补全。
//!
//! ## 依赖关系
//! - 被 `cli/pipeline.rs`, `cli/flaps.rs` 使用
//! - 生成 `solver/` 的 FlowConditions 与 XfoilConfig

use crate::error::{Result, StolfoilError};
use crate::geometry::spacing::linspace;
use crate::solver::script::DEFAULT_XFOIL_PANELS;
use crate::solver::{FlowConditions, XfoilConfig};

use clap::Args;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// 攻角扫描范围 `start:end:count`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaSweep {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl AlphaSweep {
    /// 展开为攻角列表（含端点，等间距）
    pub fn values(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.count)
    }
}

impl FromStr for AlphaSweep {
    type Err = StolfoilError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| StolfoilError::InvalidRange(reason);

        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(invalid(format!("expected 'start:end:count', got '{}'", s)));
        }

        let start: f64 = parts[0]
            .parse()
            .map_err(|_| invalid(format!("invalid start angle '{}'", parts[0])))?;
        let end: f64 = parts[1]
            .parse()
            .map_err(|_| invalid(format!("invalid end angle '{}'", parts[1])))?;
        let count: usize = parts[2]
            .parse()
            .map_err(|_| invalid(format!("invalid count '{}'", parts[2])))?;

        if !start.is_finite() || !end.is_finite() {
            return Err(invalid(format!("angles must be finite, got '{}'", s)));
        }

        Ok(AlphaSweep { start, end, count })
    }
}

impl fmt::Display for AlphaSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.end, self.count)
    }
}

/// 求解器公共参数
#[derive(Args, Debug, Clone)]
pub struct SolverArgs {
    // ─────────────────────────────────────────────────────────────
    // XFOIL process
    // ─────────────────────────────────────────────────────────────
    /// XFOIL executable name or path
    #[arg(long, env = "XFOIL_PATH", default_value = "xfoil")]
    pub xfoil: String,

    /// Wall-clock timeout per sweep in seconds [default: 30 for pipeline, 60 for flaps]
    #[arg(long)]
    pub timeout: Option<f64>,

    /// Node count for XFOIL's internal repaneling (PPAR) after loading the geometry
    #[arg(long, default_value_t = DEFAULT_XFOIL_PANELS)]
    pub xfoil_panels: usize,

    /// Hand the loaded geometry to XFOIL as is, without its internal repaneling
    #[arg(long, default_value_t = false)]
    pub no_xfoil_repanel: bool,

    /// Keep the scratch directory with the XFOIL input and output files
    #[arg(long, default_value_t = false)]
    pub keep_files: bool,

    /// Print the XFOIL keystroke script and XFOIL output on failure
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    // ─────────────────────────────────────────────────────────────
    // Flow conditions
    // ─────────────────────────────────────────────────────────────
    /// Reynolds number (0 = inviscid)
    #[arg(long, default_value_t = 1e6)]
    pub re: f64,

    /// Mach number [default: 0.1 for pipeline, none for flaps]
    #[arg(long)]
    pub mach: Option<f64>,

    /// Angle of attack sweep in degrees as 'start:end:count'
    #[arg(long, default_value = "-5:15:21", allow_hyphen_values = true)]
    pub alpha: AlphaSweep,

    /// e^n transition criterion
    #[arg(long, default_value_t = 9.0)]
    pub ncrit: f64,

    /// Forced transition location on the upper surface (x/c)
    #[arg(long, default_value_t = 1.0)]
    pub xtr_top: f64,

    /// Forced transition location on the lower surface (x/c)
    #[arg(long, default_value_t = 1.0)]
    pub xtr_bottom: f64,

    /// Maximum viscous iterations per angle
    #[arg(long, default_value_t = 100)]
    pub max_iter: u32,
}

impl SolverArgs {
    /// 来流条件；`--mach 0` 表示不设置马赫数
    pub fn flow(&self, default_mach: Option<f64>) -> FlowConditions {
        let mach = self.mach.or(default_mach).filter(|m| *m > 0.0);
        FlowConditions {
            ncrit: self.ncrit,
            xtr_top: self.xtr_top,
            xtr_bottom: self.xtr_bottom,
            max_iter: self.max_iter,
            ..FlowConditions::new(self.re, mach)
        }
    }

    /// XFOIL 调用配置
    pub fn xfoil_config(&self, default_timeout: f64) -> Result<XfoilConfig> {
        let seconds = self.timeout.unwrap_or(default_timeout);
        let invalid = || {
            StolfoilError::InvalidArgument(format!(
                "timeout must be a positive number of seconds, got {}",
                seconds
            ))
        };
        if seconds <= 0.0 {
            return Err(invalid());
        }
        let timeout = Duration::try_from_secs_f64(seconds).map_err(|_| invalid())?;

        if self.xfoil_panels < 2 && !self.no_xfoil_repanel {
            return Err(StolfoilError::InvalidArgument(format!(
                "XFOIL panel count must be at least 2, got {}",
                self.xfoil_panels
            )));
        }

        Ok(XfoilConfig {
            command: self.xfoil.clone(),
            args: Vec::new(),
            timeout,
            panel_nodes: (!self.no_xfoil_repanel).then_some(self.xfoil_panels),
            keep_files: self.keep_files,
            verbose: self.verbose,
        })
    }
}
