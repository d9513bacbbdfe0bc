//! # export 命令实现
//!
//! 写出与扫描时完全相同的求解用几何（可选襟翼偏转 + 重新分布节点），
//! 便于检查 XFOIL 难以收敛的外形。
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `library/`, `sweep/runner.rs` 的 build_geometry, `parsers/dat.rs`
//! - 使用 `utils/output.rs`

use crate::cli::export::ExportArgs;
use crate::error::{Result, StolfoilError};
use crate::library::AirfoilLibrary;
use crate::parsers;
use crate::sweep::runner::build_geometry;
use crate::sweep::Configuration;
use crate::utils::output;

use std::path::PathBuf;

/// 执行 export 命令
pub fn execute(args: ExportArgs) -> Result<()> {
    output::print_header("Exporting solver geometry");

    let config = match args.flap_angle {
        Some(angle) => {
            let config = Configuration::flapped(angle, args.hinge);
            if let Some(flap) = &config.flap {
                flap.validate()?;
            }
            config
        }
        None => Configuration::baseline(args.airfoil.as_str()),
    };

    let library = AirfoilLibrary::new(args.airfoil_dir.clone());
    let base = library.load(&args.airfoil)?;
    let geometry = build_geometry(&base, &config, args.points)?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.dat", geometry.name())));

    if output_path.exists() && !args.overwrite {
        return Err(StolfoilError::InvalidArgument(format!(
            "'{}' already exists (use --overwrite to replace it)",
            output_path.display()
        )));
    }

    parsers::write_dat_file(&geometry, &output_path)?;

    output::print_result("Configuration", &config.label);
    output::print_result("Points", &geometry.len().to_string());
    output::print_result("Max thickness", &format!("{:.4}c", geometry.max_thickness()));
    output::print_success(&format!("Geometry saved to '{}'", output_path.display()));

    Ok(())
}
