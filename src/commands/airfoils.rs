//! # airfoils 命令实现
//!
//! 列出可按名称使用的翼型：内置 NACA 4 位数系列与翼型库目录中的 .dat 文件。
//!
//! ## 依赖关系
//! - 使用 `cli/airfoils.rs` 定义的参数
//! - 使用 `library/collector.rs`, `parsers/dat.rs`
//! - 使用 `tabled` 显示列表

use crate::cli::airfoils::AirfoilsArgs;
use crate::error::Result;
use crate::library::DatCollector;
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 列表行
#[derive(Debug, Clone, Tabled)]
struct AirfoilRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Points")]
    points: String,
    #[tabled(rename = "File")]
    file: String,
}

/// 执行 airfoils 命令
pub fn execute(args: AirfoilsArgs) -> Result<()> {
    output::print_header("Available airfoils");
    output::print_result("Built-in", "NACA 4-digit family (e.g. naca0012, naca2412, naca4412)");

    let dir = match &args.airfoil_dir {
        Some(dir) => dir,
        None => {
            output::print_info("No airfoil library set (use --airfoil-dir or STOLFOIL_AIRFOIL_DIR)");
            return Ok(());
        }
    };

    let files = DatCollector::new(dir)
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            dir.display()
        ));
        return Ok(());
    }

    let mut skipped = 0;
    let rows: Vec<AirfoilRow> = files
        .iter()
        .filter_map(|path| match parsers::parse_dat_file(path) {
            Ok(foil) => Some(AirfoilRow {
                name: path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default(),
                title: foil.name().to_string(),
                points: foil.len().to_string(),
                file: path
                    .strip_prefix(dir)
                    .unwrap_or(path)
                    .display()
                    .to_string(),
            }),
            Err(e) => {
                skipped += 1;
                output::print_warning(&format!("Skipping {}: {}", path.display(), e));
                None
            }
        })
        .collect();

    println!("{}", Table::new(&rows));
    output::print_done(&format!(
        "{} airfoils found in {} ({} unreadable)",
        rows.len(),
        dir.display(),
        skipped
    ));

    Ok(())
}
