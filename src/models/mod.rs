//! # 数据模型模块
//!
//! 定义翼型几何与扫描结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `geometry/`, `parsers/`, `solver/`, `sweep/`, `report/` 使用
//! - 子模块: airfoil, polar

pub mod airfoil;
pub mod polar;

pub use airfoil::Airfoil;
pub use polar::{Polar, PolarPoint};
