//! # 扫描执行器
//!
//! 按声明顺序逐个执行工况：构建几何（襟翼偏转）-> 重新分布节点 -> 调用求解器。
//!
//! ## 失败策略
//! - 单个工况失败（几何、崩溃、超时）：打印警告后继续下一个工况
//! - 环境错误（求解器不存在）：立即返回错误，终止整个运行
//!
//! ## 依赖关系
//! - 被 `commands/pipeline.rs`, `commands/flaps.rs` 调用
//! - 使用 `solver/` 的 `AeroSolver`
//! - 使用 `utils/progress.rs` 显示 spinner

use super::plan::{Configuration, SweepPlan};
use crate::error::Result;
use crate::models::{Airfoil, Polar};
use crate::solver::AeroSolver;
use crate::utils::{output, progress};

/// 单个工况的结果
#[derive(Debug, Clone)]
pub enum SweepOutcome {
    /// 求解器正常返回（可能为空）
    Solved(Polar),
    /// 工况失败
    Failed { label: String, reason: String },
}

impl SweepOutcome {
    pub fn label(&self) -> &str {
        match self {
            SweepOutcome::Solved(polar) => &polar.label,
            SweepOutcome::Failed { label, .. } => label,
        }
    }

    pub fn polar(&self) -> Option<&Polar> {
        match self {
            SweepOutcome::Solved(polar) => Some(polar),
            SweepOutcome::Failed { .. } => None,
        }
    }
}

/// 扫描结果统计
#[derive(Debug, Default)]
pub struct SweepReport {
    /// 各工况结果，顺序与计划一致
    pub outcomes: Vec<SweepOutcome>,
}

impl SweepReport {
    /// 记录一个工况结果
    pub fn merge(&mut self, outcome: SweepOutcome) {
        self.outcomes.push(outcome);
    }

    /// 至少有一个收敛点的工况数
    pub fn converged(&self) -> usize {
        self.polars().filter(|p| !p.is_empty()).count()
    }

    /// 失败的工况数
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SweepOutcome::Failed { .. }))
            .count()
    }

    /// 总工况数
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// 所有求解成功的极曲线
    pub fn polars(&self) -> impl Iterator<Item = &Polar> {
        self.outcomes.iter().filter_map(|o| o.polar())
    }
}

/// 扫描执行器
pub struct SweepRunner<'a, S: AeroSolver> {
    solver: &'a S,
}

impl<'a, S: AeroSolver> SweepRunner<'a, S> {
    pub fn new(solver: &'a S) -> Self {
        Self { solver }
    }

    /// 依次执行所有工况；每个工况求解成功后立即调用 `on_solved`
    pub fn run<F>(&self, base: &Airfoil, plan: &SweepPlan, mut on_solved: F) -> Result<SweepReport>
    where
        F: FnMut(&Configuration, &Polar),
    {
        let mut report = SweepReport::default();

        for config in &plan.configurations {
            output::print_info(&format!("Testing {}...", config.label));

            let geometry = match build_geometry(base, config, plan.n_points_per_side) {
                Ok(geometry) => geometry,
                Err(e) => {
                    output::print_warning(&format!(
                        "{}: geometry could not be prepared: {}",
                        config.label, e
                    ));
                    report.merge(SweepOutcome::Failed {
                        label: config.label.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let spinner = progress::create_spinner(&format!(
                "{}: running {} on {} alphas",
                config.label,
                self.solver.name(),
                plan.alphas.len()
            ));
            let result = self
                .solver
                .solve(&geometry, &plan.flow, &plan.alphas, &config.label);
            spinner.finish_and_clear();

            match result {
                Ok(polar) => {
                    on_solved(config, &polar);
                    report.merge(SweepOutcome::Solved(polar));
                }
                Err(e) if e.is_setup_failure() => return Err(e),
                Err(e) => {
                    output::print_warning(&format!(
                        "{} struggled with {}: {}",
                        self.solver.name(),
                        config.label,
                        e
                    ));
                    report.merge(SweepOutcome::Failed {
                        label: config.label.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}

/// 构建求解用几何：先偏转襟翼，再重新分布节点
pub fn build_geometry(
    base: &Airfoil,
    config: &Configuration,
    n_points_per_side: usize,
) -> Result<Airfoil> {
    let edited = match &config.flap {
        Some(flap) => base
            .with_flap(flap)?
            .with_name(format!("{}_flap_{}", base.name(), flap.angle_deg)),
        None => base.clone(),
    };
    edited.repanel(n_points_per_side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StolfoilError;
    use crate::geometry::{naca, spacing};
    use crate::models::PolarPoint;
    use crate::solver::FlowConditions;
    use std::cell::RefCell;

    /// 薄翼理论近似的假求解器，可按标签注入失败
    struct MockSolver {
        fail_label: Option<String>,
        empty_label: Option<String>,
        missing_command: bool,
        calls: RefCell<Vec<(String, usize)>>,
    }

    impl MockSolver {
        fn new() -> Self {
            MockSolver {
                fail_label: None,
                empty_label: None,
                missing_command: false,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl AeroSolver for MockSolver {
        fn name(&self) -> &str {
            "mock"
        }

        fn solve(
            &self,
            airfoil: &Airfoil,
            _flow: &FlowConditions,
            alphas: &[f64],
            label: &str,
        ) -> Result<Polar> {
            self.calls
                .borrow_mut()
                .push((label.to_string(), airfoil.len()));

            if self.missing_command {
                return Err(StolfoilError::CommandNotFound {
                    command: "mock".to_string(),
                });
            }
            if self.fail_label.as_deref() == Some(label) {
                return Err(StolfoilError::SolverTimeout {
                    command: "mock".to_string(),
                    seconds: 60.0,
                });
            }
            if self.empty_label.as_deref() == Some(label) {
                return Ok(Polar::empty(label, alphas.to_vec()));
            }

            // 后缘下偏越多，零升攻角越负
            let te_drop = -airfoil.points()[0][1];
            let points = alphas
                .iter()
                .filter(|a| **a <= 12.0)
                .map(|&a| {
                    let cl = 2.0 * std::f64::consts::PI * (a.to_radians() + 0.07 + te_drop);
                    PolarPoint::new(a, cl, 0.01, -0.1)
                })
                .collect();
            Ok(Polar::new(label, alphas.to_vec(), points))
        }
    }

    fn flap_plan() -> SweepPlan {
        let configs = [0.0, 10.0, 20.0, 30.0]
            .iter()
            .map(|&a| Configuration::flapped(a, 0.7))
            .collect();
        SweepPlan::new(
            configs,
            FlowConditions::new(1e6, None),
            spacing::linspace(-5.0, 15.0, 21),
            50,
        )
        .unwrap()
    }

    fn base() -> Airfoil {
        naca::from_designation("naca4412", 60).unwrap().unwrap()
    }

    #[test]
    fn test_high_deflection_failure_does_not_stop_sweep() {
        let solver = MockSolver {
            fail_label: Some("Flap 30°".to_string()),
            ..MockSolver::new()
        };
        let mut plotted = Vec::new();
        let report = SweepRunner::new(&solver)
            .run(&base(), &flap_plan(), |config, _| plotted.push(config.label.clone()))
            .unwrap();

        assert_eq!(report.total(), 4);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.converged(), 3);
        assert_eq!(plotted, vec!["Flap 0°", "Flap 10°", "Flap 20°"]);

        let labels: Vec<&str> = report.outcomes.iter().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["Flap 0°", "Flap 10°", "Flap 20°", "Flap 30°"]);
        assert!(report.outcomes[3].polar().is_none());
    }

    #[test]
    fn test_geometry_is_repaneled_before_solving() {
        let solver = MockSolver::new();
        SweepRunner::new(&solver)
            .run(&base(), &flap_plan(), |_, _| {})
            .unwrap();

        let calls = solver.calls.borrow();
        assert_eq!(calls.len(), 4);
        assert!(calls.iter().all(|(_, n)| *n == 99));
    }

    #[test]
    fn test_flap_increases_lift() {
        let solver = MockSolver::new();
        let report = SweepRunner::new(&solver)
            .run(&base(), &flap_plan(), |_, _| {})
            .unwrap();

        let cl_max: Vec<f64> = report
            .polars()
            .map(|p| p.cl_max().map(|b| b.cl).unwrap_or(f64::NAN))
            .collect();
        assert!(cl_max.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_all_angles_failing_gives_empty_result_and_continues() {
        let solver = MockSolver {
            empty_label: Some("Flap 10°".to_string()),
            ..MockSolver::new()
        };
        let report = SweepRunner::new(&solver)
            .run(&base(), &flap_plan(), |_, _| {})
            .unwrap();

        assert_eq!(report.failed(), 0);
        assert_eq!(report.converged(), 3);
        let empty = report.outcomes[1].polar().unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.missing_alphas().len(), 21);
        assert_eq!(solver.calls.borrow().len(), 4);
    }

    #[test]
    fn test_empty_alpha_list() {
        let solver = MockSolver::new();
        let plan = SweepPlan::new(
            vec![Configuration::baseline("baseline")],
            FlowConditions::new(1e6, Some(0.1)),
            Vec::new(),
            50,
        )
        .unwrap();
        let report = SweepRunner::new(&solver).run(&base(), &plan, |_, _| {}).unwrap();

        assert_eq!(report.total(), 1);
        assert!(report.outcomes[0].polar().unwrap().is_empty());
    }

    #[test]
    fn test_missing_solver_aborts_run() {
        let solver = MockSolver {
            missing_command: true,
            ..MockSolver::new()
        };
        let err = SweepRunner::new(&solver)
            .run(&base(), &flap_plan(), |_, _| {})
            .unwrap_err();

        assert!(err.is_setup_failure());
        assert_eq!(solver.calls.borrow().len(), 1);
    }

    #[test]
    fn test_baseline_cl_max_is_max_of_entries() {
        let solver = MockSolver::new();
        let plan = SweepPlan::new(
            vec![Configuration::baseline("NACA 4412")],
            FlowConditions::new(1e6, Some(0.1)),
            spacing::linspace(-5.0, 15.0, 21),
            200,
        )
        .unwrap();
        let report = SweepRunner::new(&solver).run(&base(), &plan, |_, _| {}).unwrap();
        let polar = report.polars().next().unwrap();

        assert!(polar.points.len() <= 21);
        assert!(polar.points.iter().all(|p| p.cl.is_finite()));
        let max = polar
            .points
            .iter()
            .map(|p| p.cl)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(polar.cl_max().unwrap().cl, max);
    }

    #[test]
    fn test_build_geometry_names_flapped_shape() {
        let geometry = build_geometry(&base(), &Configuration::flapped(20.0, 0.7), 40).unwrap();
        assert_eq!(geometry.name(), "naca4412_flap_20");
        assert_eq!(geometry.len(), 79);

        let baseline = build_geometry(&base(), &Configuration::baseline("b"), 40).unwrap();
        assert_eq!(baseline.name(), "naca4412");
    }
}
