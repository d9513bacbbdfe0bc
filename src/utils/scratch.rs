//! # 临时工作目录
//!
//! 每次调用 XFOIL 使用独立的临时目录存放翼型文件、极曲线文件与日志，
//! 离开作用域时自动删除（`--keep-files` 时保留）。
//!
//! ## 依赖关系
//! - 被 `solver/xfoil.rs` 使用

use crate::error::{Result, StolfoilError};

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// 名称冲突时的重试次数
const MAX_ATTEMPTS: usize = 16;

/// 临时目录（RAII）
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
    keep: bool,
}

impl ScratchDir {
    /// 在系统临时目录下创建唯一子目录
    pub fn new(prefix: &str) -> Result<Self> {
        Self::new_in(&std::env::temp_dir(), prefix)
    }

    /// 在指定目录下创建唯一子目录；不会复用已存在的目录
    pub fn new_in(parent: &Path, prefix: &str) -> Result<Self> {
        let mut attempts = 0;
        loop {
            let path = parent.join(unique_name(prefix));
            match claim(&path) {
                Ok(()) => return Ok(ScratchDir { path, keep: false }),
                Err(e) if e.kind() == ErrorKind::AlreadyExists && attempts < MAX_ATTEMPTS => {
                    attempts += 1;
                }
                Err(e) => {
                    return Err(StolfoilError::FileWriteError {
                        path: path.display().to_string(),
                        source: e,
                    })
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 设置离开作用域时是否保留目录
    pub fn keep(&mut self, keep: bool) {
        self.keep = keep;
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if !self.keep {
            fs::remove_dir_all(&self.path).ok();
        }
    }
}

fn unique_name(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    format!(
        "stolfoil-{}-{}-{}-{}",
        prefix,
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed),
        nanos
    )
}

/// 创建目录；已存在时返回 `AlreadyExists`
fn claim(path: &Path) -> io::Result<()> {
    fs::create_dir(path)
}
