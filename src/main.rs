//! # stolfoil - XFOIL 扫描自动化
//!
//! 把 STOL 翼型研究中的 XFOIL 手工操作整合成单一可执行文件：
//! 加载翼型、偏转襟翼、重新分布节点、驱动 XFOIL 扫描攻角、汇总并绘制升力曲线。
//!
//! ## 子命令
//! - `pipeline` - 单翼型基线升力扫描
//! - `flaps`    - 襟翼偏转角扫描，对比目标 CL
//! - `export`   - 导出求解用几何 (.dat)
//! - `airfoils` - 列出可用翼型
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── library/   (按名称加载翼型)
//!   │     ├── sweep/     (工况编排)
//!   │     │     ├── geometry/ (襟翼偏转、重新分布节点)
//!   │     │     └── solver/   (XFOIL 子进程)
//!   │     └── report/    (汇总、绘图、CSV)
//!   ├── parsers/    (.dat 与极曲线解析)
//!   ├── models/     (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod geometry;
mod library;
mod models;
mod parsers;
mod report;
mod solver;
mod sweep;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
