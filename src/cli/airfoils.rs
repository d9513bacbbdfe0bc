//! # airfoils 子命令 CLI 定义
//!
//! 列出可用的翼型名称
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/airfoils.rs`

use clap::Args;
use std::path::PathBuf;

/// airfoils 子命令参数
#[derive(Args, Debug)]
pub struct AirfoilsArgs {
    /// Directory searched for .dat airfoil files
    #[arg(long, env = "STOLFOIL_AIRFOIL_DIR")]
    pub airfoil_dir: Option<PathBuf>,

    /// Glob pattern for airfoil files (comma-separated for several)
    #[arg(short, long, default_value = "*.dat")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = true, action = clap::ArgAction::Set)]
    pub recursive: bool,
}
