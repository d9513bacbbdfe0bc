//! # 统一错误处理模块
//!
//! 定义 stolfoil 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 环境错误（XFOIL 不存在/不可执行）：终止整个运行
//! - 求解失败（崩溃、超时、无输出）：只影响当前工况
//! - 几何错误（坐标长度不匹配、铰链位置越界）：在调用求解器之前报错
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// stolfoil 统一错误类型
#[derive(Error, Debug)]
pub enum StolfoilError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 几何错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Unknown airfoil '{name}': not a NACA 4-digit designation and no matching .dat file found")]
    UnknownAirfoil { name: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH or not executable")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("External command '{command}' timed out after {seconds:.1} s")]
    SolverTimeout { command: String, seconds: f64 },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot error: {0}")]
    PlotError(String),
}

impl StolfoilError {
    /// 是否为环境错误（任何工况都不可能成功）
    pub fn is_setup_failure(&self) -> bool {
        matches!(self, StolfoilError::CommandNotFound { .. })
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, StolfoilError>;
