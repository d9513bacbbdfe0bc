//! # flaps 命令实现
//!
//! 对每个襟翼偏转角：偏转后缘 -> 重新分布节点 -> XFOIL，
//! 所有升力曲线叠加在同一张图上，并画出目标 CL 参考线。
//!
//! 任何工况失败（几何不合法除外，创建计划时即报错）只打印警告，不影响其他工况。
//!
//! ## 依赖关系
//! - 使用 `cli/flaps.rs` 定义的参数
//! - 使用 `library/`, `sweep/`, `solver/`, `report/`
//! - 使用 `utils/output.rs`

use super::pipeline::print_conditions;
use super::{display_name, with_guidance, write_outputs, ALPHA_LABEL, CL_LABEL};
use crate::cli::flaps::FlapsArgs;
use crate::error::Result;
use crate::library::AirfoilLibrary;
use crate::report::{self, summary, PlotSession};
use crate::solver::XfoilRunner;
use crate::sweep::{Configuration, SweepPlan, SweepRunner};
use crate::utils::output;

/// 默认超时 (s)；大偏转角时 XFOIL 收敛明显变慢
const DEFAULT_TIMEOUT: f64 = 60.0;

const PLOT_TITLE: &str = "STOL Performance: Lift Increase due to Flaps";

/// 执行 flaps 命令
pub fn execute(args: FlapsArgs) -> Result<()> {
    let name = display_name(&args.airfoil);
    output::print_header(&format!("Flap sweep: {}", name));

    let configurations: Vec<Configuration> = args
        .flap_angles
        .iter()
        .map(|&angle| Configuration::flapped(angle, args.hinge))
        .collect();

    let plan = SweepPlan::new(
        configurations,
        args.solver.flow(None),
        args.solver.alpha.values(),
        args.points,
    )?;

    let library = AirfoilLibrary::new(args.airfoil_dir.clone());
    let airfoil = library.load(&args.airfoil)?;
    output::print_info(&format!(
        "Loaded '{}' ({} points), hinge at {}c",
        airfoil.name(),
        airfoil.len(),
        args.hinge
    ));
    print_conditions(&plan);

    let runner = XfoilRunner::new(args.solver.xfoil_config(DEFAULT_TIMEOUT)?);
    let mut session = PlotSession::new(PLOT_TITLE, ALPHA_LABEL, CL_LABEL);
    if !args.no_target {
        session.set_reference_line(
            args.target_cl,
            format!("STOL Target (CL={:.1})", args.target_cl),
        );
    }

    let report = SweepRunner::new(&runner)
        .run(&airfoil, &plan, |config, polar| {
            summary::print_polar_result(polar);
            session.add_curve(config.label.as_str(), polar);
        })
        .map_err(with_guidance)?;

    report::print_summary(&report);

    if !args.no_target {
        match report
            .polars()
            .find(|p| p.cl_max().map_or(false, |b| b.cl >= args.target_cl))
        {
            Some(polar) => output::print_result(
                "Target reached",
                &format!("{} (CL >= {:.2})", polar.label, args.target_cl),
            ),
            None => output::print_warning(&format!(
                "No configuration reached the target CL of {:.2}",
                args.target_cl
            )),
        }
    }

    let output_plot = (!args.no_plot).then_some(args.output_plot.as_path());
    write_outputs(
        report.polars(),
        session,
        output_plot,
        args.output_csv.as_deref(),
    )?;

    output::print_done(&format!(
        "{}/{} configurations converged, {} failed",
        report.converged(),
        report.total(),
        report.failed()
    ));

    Ok(())
}
