//! # 控制台结果汇总
//!
//! 单个工况完成后打印 CL_max 与未收敛攻角数；扫描结束后打印 `tabled` 汇总表。
//!
//! ## 依赖关系
//! - 被 `commands/pipeline.rs`, `commands/flaps.rs` 调用
//! - 使用 `sweep/runner.rs` 的 SweepReport
//! - 使用 `tabled` 渲染表格

use crate::models::Polar;
use crate::sweep::{SweepOutcome, SweepReport};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 汇总表行
#[derive(Debug, Clone, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Configuration")]
    pub configuration: String,
    #[tabled(rename = "Converged")]
    pub converged: String,
    #[tabled(rename = "CL_max")]
    pub cl_max: String,
    #[tabled(rename = "α @ CL_max (°)")]
    pub alpha_at_cl_max: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

/// 打印单个工况的结果
pub fn print_polar_result(polar: &Polar) {
    match polar.cl_max() {
        Some(best) => {
            output::print_result(
                "Max Lift (CL_max)",
                &format!("{:.4} at {:.2}°", best.cl, best.alpha),
            );
            let missing = polar.missing_alphas();
            if !missing.is_empty() {
                output::print_result(
                    "Not converged",
                    &format!("{} of {} angles", missing.len(), polar.requested.len()),
                );
            }
        }
        None => output::print_warning(&format!(
            "{}: no angle of attack converged ({} requested)",
            polar.label,
            polar.requested.len()
        )),
    }
}

/// 生成汇总表行
pub fn summary_rows(report: &SweepReport) -> Vec<SummaryRow> {
    report
        .outcomes
        .iter()
        .map(|outcome| {
            let configuration = outcome.label().to_string();
            match outcome {
                SweepOutcome::Solved(polar) => {
                    let best = polar.cl_max();
                    SummaryRow {
                        configuration,
                        converged: format!("{}/{}", polar.points.len(), polar.requested.len()),
                        cl_max: best.map_or("-".to_string(), |p| format!("{:.4}", p.cl)),
                        alpha_at_cl_max: best.map_or("-".to_string(), |p| format!("{:.2}", p.alpha)),
                        status: if polar.is_empty() {
                            "no convergence".to_string()
                        } else {
                            "ok".to_string()
                        },
                    }
                }
                SweepOutcome::Failed { reason, .. } => SummaryRow {
                    configuration,
                    converged: "-".to_string(),
                    cl_max: "-".to_string(),
                    alpha_at_cl_max: "-".to_string(),
                    status: format!("failed: {}", reason.lines().next().unwrap_or("")),
                },
            }
        })
        .collect()
}

/// 打印扫描汇总表
pub fn print_summary(report: &SweepReport) {
    let rows = summary_rows(report);
    if rows.is_empty() {
        return;
    }

    output::print_header(&format!("Sweep Summary ({} configurations)", rows.len()));
    let table = Table::new(&rows);
    println!("{}", table);
}
