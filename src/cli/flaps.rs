//! # flaps 子命令 CLI 定义
//!
//! 襟翼偏转扫描：每个偏转角一条升力曲线，叠加目标 CL 参考线
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/flaps.rs`

use super::solver::SolverArgs;

use clap::Args;
use std::path::PathBuf;

/// flaps 子命令参数
#[derive(Args, Debug)]
pub struct FlapsArgs {
    /// Base airfoil name: NACA 4-digit designation or a .dat file name in the airfoil library
    #[arg(short, long, default_value = "naca4412")]
    pub airfoil: String,

    /// Directory searched for <name>.dat airfoil files
    #[arg(long, env = "STOLFOIL_AIRFOIL_DIR")]
    pub airfoil_dir: Option<PathBuf>,

    /// Points per surface after repaneling
    #[arg(long, default_value_t = 200)]
    pub points: usize,

    // ─────────────────────────────────────────────────────────────
    // Flap configurations
    // ─────────────────────────────────────────────────────────────
    /// Flap deflection angles in degrees, positive down (comma-separated)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "0,10,20,30",
        allow_hyphen_values = true
    )]
    pub flap_angles: Vec<f64>,

    /// Hinge location as a fraction of chord
    #[arg(long, default_value_t = 0.7)]
    pub hinge: f64,

    /// Horizontal reference line on the plot (target lift coefficient)
    #[arg(long, default_value_t = 2.0)]
    pub target_cl: f64,

    /// Do not draw the target lift coefficient line
    #[arg(long, default_value_t = false)]
    pub no_target: bool,

    #[command(flatten)]
    pub solver: SolverArgs,

    // ─────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────
    /// Output plot file (.png or .svg)
    #[arg(long, default_value = "flap_sweep.png")]
    pub output_plot: PathBuf,

    /// Also write all converged points to this CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    /// Skip plot generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}
