//! # 几何模块
//!
//! 翼型坐标的生成与编辑。
//!
//! ## 子模块
//! - `flap`: 后缘襟翼刚性旋转
//! - `naca`: NACA 4 位数翼型生成
//! - `repanel`: 按弧长重新分布节点
//! - `spline`: 自然三次样条
//! - `spacing`: 线性/余弦采样
//!
//! ## 依赖关系
//! - 被 `models/airfoil.rs`, `library/`, `sweep/` 使用

pub mod flap;
pub mod naca;
pub mod repanel;
pub mod spacing;
pub mod spline;

pub use flap::FlapConfig;
