//! # pipeline 命令实现
//!
//! 单翼型基线扫描：按名称加载翼型，重新分布节点，调用一次 XFOIL，
//! 打印 CL_max 并绘制升力曲线。
//!
//! ## 依赖关系
//! - 使用 `cli/pipeline.rs` 定义的参数
//! - 使用 `library/`, `sweep/`, `solver/`, `report/`
//! - 使用 `utils/output.rs`

use super::{display_name, with_guidance, write_outputs, ALPHA_LABEL, CL_LABEL};
use crate::cli::pipeline::PipelineArgs;
use crate::error::Result;
use crate::library::AirfoilLibrary;
use crate::report::{summary, PlotSession};
use crate::solver::XfoilRunner;
use crate::sweep::{Configuration, SweepPlan, SweepRunner};
use crate::utils::output;

/// 默认马赫数
const DEFAULT_MACH: f64 = 0.1;
/// 默认超时 (s)
const DEFAULT_TIMEOUT: f64 = 30.0;

/// 执行 pipeline 命令
pub fn execute(args: PipelineArgs) -> Result<()> {
    let name = display_name(&args.airfoil);
    output::print_header(&format!("Lift sweep: {}", name));

    let library = AirfoilLibrary::new(args.airfoil_dir.clone());
    let airfoil = library.load(&args.airfoil)?;
    output::print_info(&format!(
        "Loaded '{}' ({} points)",
        airfoil.name(),
        airfoil.len()
    ));

    let flow = args.solver.flow(Some(DEFAULT_MACH));
    let plan = SweepPlan::new(
        vec![Configuration::baseline(name.as_str())],
        flow,
        args.solver.alpha.values(),
        args.points,
    )?;
    print_conditions(&plan);

    let runner = XfoilRunner::new(args.solver.xfoil_config(DEFAULT_TIMEOUT)?);
    let mut session = PlotSession::new(format!("{} Lift Curve", name), ALPHA_LABEL, CL_LABEL);

    let report = SweepRunner::new(&runner)
        .run(&airfoil, &plan, |config, polar| {
            summary::print_polar_result(polar);
            session.add_curve(config.label.as_str(), polar);
        })
        .map_err(with_guidance)?;

    let output_plot = (!args.no_plot).then_some(args.output_plot.as_path());
    write_outputs(
        report.polars(),
        session,
        output_plot,
        args.output_csv.as_deref(),
    )?;

    if report.converged() == 0 {
        output::print_warning(&format!("No converged results for {}", name));
    } else {
        output::print_done(&format!("Lift sweep of {} complete", name));
    }

    Ok(())
}

/// 打印来流条件
pub(super) fn print_conditions(plan: &SweepPlan) {
    let flow = &plan.flow;
    let mut conditions = format!("Re = {:.3e}", flow.reynolds);
    if let Some(mach) = flow.mach {
        conditions.push_str(&format!(", M = {}", mach));
    }
    output::print_result("Conditions", &conditions);

    match (plan.alphas.first(), plan.alphas.last()) {
        (Some(first), Some(last)) => output::print_result(
            "Alpha",
            &format!("{}° to {}° ({} angles)", first, last, plan.alphas.len()),
        ),
        _ => output::print_warning("Empty angle of attack list; nothing will be solved"),
    }
}
