//! # export 子命令 CLI 定义
//!
//! 导出发送给 XFOIL 的几何（可选襟翼偏转，始终重新分布节点）为 Selig .dat
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use clap::Args;
use std::path::PathBuf;

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Airfoil name: NACA 4-digit designation or a .dat file name in the airfoil library
    #[arg(short, long, default_value = "naca4412")]
    pub airfoil: String,

    /// Directory searched for <name>.dat airfoil files
    #[arg(long, env = "STOLFOIL_AIRFOIL_DIR")]
    pub airfoil_dir: Option<PathBuf>,

    /// Flap deflection angle in degrees, positive down
    #[arg(long, allow_hyphen_values = true)]
    pub flap_angle: Option<f64>,

    /// Hinge location as a fraction of chord
    #[arg(long, default_value_t = 0.7)]
    pub hinge: f64,

    /// Points per surface after repaneling
    #[arg(long, default_value_t = 200)]
    pub points: usize,

    /// Output .dat file [default: <airfoil>[_flap_<angle>].dat]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
