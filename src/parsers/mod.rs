//! # 解析器模块
//!
//! 翼型坐标文件与 XFOIL 输出文件的解析器。
//!
//! ## 依赖关系
//! - 被 `library/`, `solver/`, `commands/` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: dat, polar

pub mod dat;
pub mod polar;

pub use dat::{parse_dat_file, write_dat_file};
pub use polar::parse_polar_file;
