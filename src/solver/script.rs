//! # XFOIL 按键脚本
//!
//! XFOIL 是交互式程序，通过 stdin 输入命令驱动。这里生成一次攻角扫描的完整脚本：
//!
//! ```text
//! plop / g / <空行>       关闭图形窗口
//! load airfoil.dat        读入翼型
//! ppar / n 279 / <空行>x3 XFOIL 内部重新分布节点（默认开启）
//! oper
//! iter 100
//! visc 1000000            (Re > 0 时)
//! mach 0.1                (可选)
//! vpar / xtr / n / <空行> (粘性时) 转捩设置
//! pacc / polar.txt / <空行>
//! a -5 ... a 15           每个攻角一条
//! pacc / <空行>
//! quit
//! ```
//!
//! XFOIL 的节点上限约为 370，`load` 读入更密的轮廓后必须在内部重新分布，
//! 否则 OPER 中没有可用翼型。
//!
//! ## 依赖关系
//! - 被 `solver/xfoil.rs` 调用

use super::FlowConditions;

/// XFOIL 内部重新分布的默认节点数
pub const DEFAULT_XFOIL_PANELS: usize = 279;

/// 生成扫描脚本
pub fn build_script(
    flow: &FlowConditions,
    alphas: &[f64],
    airfoil_file: &str,
    polar_file: &str,
    panel_nodes: Option<usize>,
) -> String {
    let mut lines: Vec<String> = vec!["plop".into(), "g".into(), String::new()];

    lines.push(format!("load {}", airfoil_file));
    if let Some(n) = panel_nodes {
        lines.push("ppar".into());
        lines.push(format!("n {}", n));
        lines.extend(std::iter::repeat(String::new()).take(3));
    }

    lines.push("oper".into());
    lines.push(format!("iter {}", flow.max_iter));

    if flow.is_viscous() {
        lines.push(format!("visc {}", flow.reynolds));
    }
    if let Some(mach) = flow.mach {
        lines.push(format!("mach {}", mach));
    }
    if flow.is_viscous() {
        lines.push("vpar".into());
        lines.push(format!("xtr {} {}", flow.xtr_top, flow.xtr_bottom));
        lines.push(format!("n {}", flow.ncrit));
        lines.push(String::new());
    }

    lines.push("pacc".into());
    lines.push(polar_file.into());
    lines.push(String::new());

    for alpha in alphas {
        lines.push(format!("a {:.4}", alpha));
    }

    lines.push("pacc".into());
    lines.push(String::new());
    lines.push("quit".into());

    let mut script = lines.join("\n");
    script.push('\n');
    script
}
