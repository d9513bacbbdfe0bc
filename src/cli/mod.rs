//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `pipeline`: 单翼型基线扫描
//! - `flaps`: 襟翼偏转扫描
//! - `export`: 导出求解用几何
//! - `airfoils`: 列出可用翼型
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: pipeline, flaps, export, airfoils, solver（公共参数）

pub mod airfoils;
pub mod export;
pub mod flaps;
pub mod pipeline;
pub mod solver;

use clap::{Parser, Subcommand};

/// stolfoil - XFOIL 扫描自动化
#[derive(Parser)]
#[command(name = "stolfoil")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "XFOIL sweep automation for STOL airfoil and flap studies", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Run a baseline lift sweep on one airfoil and plot CL vs alpha
    Pipeline(pipeline::PipelineArgs),

    /// Sweep flap deflection angles and compare lift curves against a target CL
    Flaps(flaps::FlapsArgs),

    /// Write the repaneled (optionally flapped) geometry as a Selig .dat file
    Export(export::ExportArgs),

    /// List airfoils available by name
    Airfoils(airfoils::AirfoilsArgs),
}
