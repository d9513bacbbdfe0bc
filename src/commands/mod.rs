//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `library/`, `sweep/`, `report/`, `utils/`
//! - 子模块: pipeline, flaps, export, airfoils

pub mod airfoils;
pub mod export;
pub mod flaps;
pub mod pipeline;

use crate::cli::Commands;
use crate::error::{Result, StolfoilError};
use crate::geometry::naca;
use crate::models::Polar;
use crate::report::{self, PlotSession};
use crate::utils::output;

use std::path::Path;

/// x 轴标题
pub const ALPHA_LABEL: &str = "Angle of Attack (deg)";
/// y 轴标题
pub const CL_LABEL: &str = "Lift Coefficient (CL)";

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Pipeline(args) => pipeline::execute(args),
        Commands::Flaps(args) => flaps::execute(args),
        Commands::Export(args) => export::execute(args),
        Commands::Airfoils(args) => airfoils::execute(args),
    }
}

/// 环境错误时打印处理建议，原样返回错误
fn with_guidance(err: StolfoilError) -> StolfoilError {
    if err.is_setup_failure() {
        output::print_warning("Is XFOIL installed and on your PATH? Set --xfoil or XFOIL_PATH.");
    }
    err
}

/// 用于标题与图例的翼型名称（"naca4412" -> "NACA 4412"）
fn display_name(name: &str) -> String {
    match naca::parse_designation(name) {
        Some((m, p, t)) => format!("NACA {}{}{:02}", m, p, t),
        None => name.to_string(),
    }
}

/// 写出 CSV 与图片
fn write_outputs<'a>(
    polars: impl IntoIterator<Item = &'a Polar>,
    session: PlotSession,
    output_plot: Option<&Path>,
    output_csv: Option<&Path>,
) -> Result<()> {
    if let Some(path) = output_csv {
        let rows = report::polars_to_csv(polars, path)?;
        output::print_success(&format!(
            "{} converged points saved to '{}'",
            rows,
            path.display()
        ));
    }

    if let Some(path) = output_plot {
        let labels: Vec<&str> = session.curves().iter().map(|c| c.label.as_str()).collect();
        if !labels.is_empty() {
            output::print_detail(&format!("Curves: {}", labels.join(", ")));
        }
        if session.finish(path)? {
            output::print_success(&format!("Plot saved to '{}'", path.display()));
        }
    }

    Ok(())
}
