//! # 翼型 .dat 坐标文件解析器
//!
//! 支持两种常见格式：
//!
//! ## Selig 格式
//! ```text
//! NACA 4412
//! 1.0000  0.0013
//! ...            (上表面 TE -> LE，再下表面 LE -> TE)
//! ```
//!
//! ## Lednicer 格式
//! ```text
//! NACA 4412
//! 61.  61.       (上下表面点数)
//!
//! 0.0000 0.0000  (上表面 LE -> TE)
//! ...
//!
//! 0.0000 0.0000  (下表面 LE -> TE)
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `library/`, `solver/xfoil.rs`, `commands/export.rs` 使用
//! - 使用 `models/airfoil.rs`

use crate::error::{Result, StolfoilError};
use crate::models::Airfoil;
use std::fs;
use std::path::Path;

/// 解析 .dat 文件
pub fn parse_dat_file(path: &Path) -> Result<Airfoil> {
    if !path.exists() {
        return Err(StolfoilError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| StolfoilError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");

    parse_dat_content(&content, stem).map_err(|e| match e {
        StolfoilError::ParseError { format, reason, .. } => StolfoilError::ParseError {
            format,
            path: path.display().to_string(),
            reason,
        },
        other => other,
    })
}

/// 从字符串内容解析 .dat 格式
pub fn parse_dat_content(content: &str, default_name: &str) -> Result<Airfoil> {
    let mut name = default_name.to_string();
    let mut blocks: Vec<Vec<[f64; 2]>> = vec![Vec::new()];
    let mut seen_data = false;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            // 空行分隔 Lednicer 的数据块
            if blocks.last().map(|b| !b.is_empty()).unwrap_or(false) {
                blocks.push(Vec::new());
            }
            continue;
        }

        match parse_pair(trimmed) {
            Some(p) => {
                seen_data = true;
                if let Some(block) = blocks.last_mut() {
                    block.push(p);
                }
            }
            None if !seen_data => name = trimmed.to_string(),
            None => {
                return Err(parse_error(format!("unexpected line '{}'", trimmed)));
            }
        }
    }

    blocks.retain(|b| !b.is_empty());

    let points = if is_lednicer(&blocks) {
        lednicer_to_selig(&blocks)?
    } else {
        blocks.into_iter().flatten().collect()
    };

    if points.len() < 3 {
        return Err(parse_error(format!(
            "need at least 3 coordinate pairs, found {}",
            points.len()
        )));
    }

    Airfoil::new(name, points)
}

/// 生成 Selig 格式字符串（XFOIL 可直接 LOAD）
pub fn to_dat_string(airfoil: &Airfoil) -> String {
    let mut out = String::with_capacity(airfoil.len() * 26 + 64);
    out.push_str(airfoil.name());
    out.push('\n');
    for p in airfoil.points() {
        out.push_str(&format!("{:12.8} {:12.8}\n", p[0], p[1]));
    }
    out
}

/// 写入 .dat 文件
pub fn write_dat_file(airfoil: &Airfoil, path: &Path) -> Result<()> {
    fs::write(path, to_dat_string(airfoil)).map_err(|e| StolfoilError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

fn parse_pair(line: &str) -> Option<[f64; 2]> {
    let mut it = line.split_whitespace();
    let x: f64 = it.next()?.parse().ok()?;
    let y: f64 = it.next()?.parse().ok()?;
    if it.next().is_some() {
        return None;
    }
    Some([x, y])
}

/// 第一个数值行为点数（均 > 1）时即为 Lednicer 格式
fn is_lednicer(blocks: &[Vec<[f64; 2]>]) -> bool {
    blocks
        .first()
        .and_then(|b| b.first())
        .map(|p| p[0] > 1.5 && p[1] > 1.5)
        .unwrap_or(false)
}

fn lednicer_to_selig(blocks: &[Vec<[f64; 2]>]) -> Result<Vec<[f64; 2]>> {
    // 计数行可能与上表面数据之间没有空行
    let flat: Vec<[f64; 2]> = blocks.iter().flatten().copied().collect();
    let counts = flat[0];
    let available = flat.len() - 1;

    // 先与实际点数比较再转换，避免超大计数溢出
    if counts.iter().any(|c| c.fract() != 0.0 || *c > available as f64) {
        return Err(parse_error(format!(
            "Lednicer header declares {} + {} points, found {}",
            counts[0], counts[1], available
        )));
    }

    let n_upper = counts[0] as usize;
    let n_lower = counts[1] as usize;

    if available != n_upper + n_lower {
        return Err(parse_error(format!(
            "Lednicer header declares {} + {} points, found {}",
            n_upper, n_lower, available
        )));
    }

    let upper = &flat[1..1 + n_upper];
    let lower = &flat[1 + n_upper..];

    let mut points: Vec<[f64; 2]> = upper.iter().rev().copied().collect();
    let skip = match (upper.first(), lower.first()) {
        (Some(a), Some(b)) if a == b => 1,
        _ => 0,
    };
    points.extend(lower.iter().skip(skip).copied());
    Ok(points)
}

fn parse_error(reason: String) -> StolfoilError {
    StolfoilError::ParseError {
        format: "dat".to_string(),
        path: "<content>".to_string(),
        reason,
    }
}
