//! # 极曲线数据导出
//!
//! 将所有工况的收敛点导出为一个 CSV 文件，每行一个 (工况, 攻角)。
//!
//! ## 依赖关系
//! - 被 `commands/pipeline.rs`, `commands/flaps.rs` 调用
//! - 使用 `csv` + `serde` 写入

use crate::error::{Result, StolfoilError};
use crate::models::Polar;

use serde::Serialize;
use std::path::Path;

/// CSV 行
#[derive(Debug, Serialize)]
struct PolarRow<'a> {
    configuration: &'a str,
    alpha: f64,
    #[serde(rename = "CL")]
    cl: f64,
    #[serde(rename = "CD")]
    cd: f64,
    #[serde(rename = "CDp")]
    cdp: Option<f64>,
    #[serde(rename = "CM")]
    cm: f64,
    #[serde(rename = "Top_Xtr")]
    top_xtr: Option<f64>,
    #[serde(rename = "Bot_Xtr")]
    bot_xtr: Option<f64>,
}

/// 导出多个极曲线到 CSV，返回写入的行数
pub fn polars_to_csv<'a>(
    polars: impl IntoIterator<Item = &'a Polar>,
    output_path: &Path,
) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    let mut rows = 0;

    for polar in polars {
        for point in &polar.points {
            wtr.serialize(PolarRow {
                configuration: &polar.label,
                alpha: point.alpha,
                cl: point.cl,
                cd: point.cd,
                cdp: point.cdp,
                cm: point.cm,
                top_xtr: point.top_xtr,
                bot_xtr: point.bot_xtr,
            })?;
            rows += 1;
        }
    }

    wtr.flush().map_err(|e| StolfoilError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(rows)
}
