//! # 工具函数模块
//!
//! 提供美化输出、进度条、临时目录等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`, `sweep/`, `solver/` 模块使用
//! - 子模块: output, progress, scratch

pub mod output;
pub mod progress;
pub mod scratch;
