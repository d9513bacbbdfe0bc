//! # 扫描编排模块
//!
//! 定义扫描计划（工况 + 来流 + 攻角）并按顺序执行。
//!
//! ## 子模块
//! - `plan`: 工况与扫描计划
//! - `runner`: 逐工况执行与失败隔离
//!
//! ## 依赖关系
//! - 被 `commands/pipeline.rs`, `commands/flaps.rs` 使用
//! - 使用 `geometry/`, `solver/`

pub mod plan;
pub mod runner;

pub use plan::{Configuration, SweepPlan};
pub use runner::{SweepOutcome, SweepReport, SweepRunner};
