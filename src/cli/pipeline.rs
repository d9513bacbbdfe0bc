//! # pipeline 子命令 CLI 定义
//!
//! 单翼型基线扫描：加载 -> 重新分布节点 -> XFOIL -> CL_max 与升力曲线图
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/pipeline.rs`

use super::solver::SolverArgs;

use clap::Args;
use std::path::PathBuf;

/// pipeline 子命令参数
#[derive(Args, Debug)]
pub struct PipelineArgs {
    /// Airfoil name: NACA 4-digit designation or a .dat file name in the airfoil library
    #[arg(short, long, default_value = "naca4412")]
    pub airfoil: String,

    /// Directory searched for <name>.dat airfoil files
    #[arg(long, env = "STOLFOIL_AIRFOIL_DIR")]
    pub airfoil_dir: Option<PathBuf>,

    /// Points per surface after repaneling
    #[arg(long, default_value_t = 200)]
    pub points: usize,

    #[command(flatten)]
    pub solver: SolverArgs,

    // ─────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────
    /// Output plot file (.png or .svg)
    #[arg(long, default_value = "lift_curve.png")]
    pub output_plot: PathBuf,

    /// Also write all converged points to this CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    /// Skip plot generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}
