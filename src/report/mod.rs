//! # 结果报告模块
//!
//! 控制台汇总、升力曲线图与 CSV 导出。
//!
//! ## 子模块
//! - `plot`: 绘图会话（PNG / SVG）
//! - `export`: CSV 导出
//! - `summary`: CL_max 输出与汇总表
//!
//! ## 依赖关系
//! - 被 `commands/pipeline.rs`, `commands/flaps.rs` 使用
//! - 使用 `models/polar.rs`, `sweep/`

pub mod export;
pub mod plot;
pub mod summary;

pub use export::polars_to_csv;
pub use plot::PlotSession;
pub use summary::print_summary;
