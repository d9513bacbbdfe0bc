//! # XFOIL 极曲线累积文件 (PACC) 解析器
//!
//! ## 文件格式
//! ```text
//!        XFOIL         Version 6.99
//!
//!  Calculated polar for: NACA 4412
//!
//!  1 1 Reynolds number fixed          Mach number fixed
//!
//!  xtrf =   1.000 (top)        1.000 (bottom)
//!  Mach =   0.100     Re =     1.000 e 6     Ncrit =   9.000
//!
//!   alpha    CL        CD       CDp       CM     Top_Xtr  Bot_Xtr
//!  ------ -------- --------- --------- -------- -------- --------
//!  -5.000  -0.0523   0.00923   0.00401  -0.1007   0.9402   0.0452
//! ```
//!
//! 按表头列名取值，兼容不同版本多出的列（Cpmin, Chinge, XCp 等）。
//! 数值溢出（`******`）或非有限值的行直接跳过，视为未收敛。
//!
//! ## 依赖关系
//! - 被 `solver/xfoil.rs` 调用
//! - 使用 `models/polar.rs`

use crate::error::{Result, StolfoilError};
use crate::models::PolarPoint;
use std::fs;
use std::path::Path;

/// 解析极曲线文件
pub fn parse_polar_file(path: &Path) -> Result<Vec<PolarPoint>> {
    let content = fs::read_to_string(path).map_err(|e| StolfoilError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_polar_content(&content, &path.display().to_string())
}

/// 表头中各列的位置
struct Columns {
    alpha: usize,
    cl: usize,
    cd: usize,
    cdp: Option<usize>,
    cm: usize,
    top_xtr: Option<usize>,
    bot_xtr: Option<usize>,
    count: usize,
}

impl Columns {
    fn from_header(line: &str) -> Option<Self> {
        let names: Vec<String> = line
            .split_whitespace()
            .map(|s| s.to_lowercase())
            .collect();

        if names.first().map(|s| s.as_str()) != Some("alpha") {
            return None;
        }

        let find = |key: &str| names.iter().position(|n| n == key);

        Some(Columns {
            alpha: 0,
            cl: find("cl")?,
            cd: find("cd")?,
            cdp: find("cdp"),
            cm: find("cm")?,
            top_xtr: find("top_xtr"),
            bot_xtr: find("bot_xtr"),
            count: names.len(),
        })
    }

    fn parse_row(&self, line: &str) -> Option<PolarPoint> {
        let values: Vec<&str> = line.split_whitespace().collect();
        if values.len() < self.count {
            return None;
        }

        let get = |i: usize| -> Option<f64> {
            let v: f64 = values.get(i)?.parse().ok()?;
            v.is_finite().then_some(v)
        };
        let optional = |i: Option<usize>| -> Option<Option<f64>> {
            match i {
                Some(i) => get(i).map(Some),
                None => Some(None),
            }
        };

        Some(PolarPoint {
            alpha: get(self.alpha)?,
            cl: get(self.cl)?,
            cd: get(self.cd)?,
            cdp: optional(self.cdp)?,
            cm: get(self.cm)?,
            top_xtr: optional(self.top_xtr)?,
            bot_xtr: optional(self.bot_xtr)?,
        })
    }
}

/// 从字符串内容解析极曲线
pub fn parse_polar_content(content: &str, source: &str) -> Result<Vec<PolarPoint>> {
    let mut lines = content.lines();

    let columns = lines
        .by_ref()
        .find_map(Columns::from_header)
        .ok_or_else(|| StolfoilError::ParseError {
            format: "XFOIL polar".to_string(),
            path: source.to_string(),
            reason: "missing 'alpha CL CD ... CM' header".to_string(),
        })?;

    // 分隔线和坏行都会在 parse_row 中被过滤
    Ok(lines.filter_map(|l| columns.parse_row(l)).collect())
}
