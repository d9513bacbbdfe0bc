//! # 翼型库
//!
//! 按名称查找翼型：
//! - NACA 4 位数编号（如 `naca4412`）直接解析生成
//! - 其余名称在翼型库目录中查找 `<name>.dat`（大小写不敏感、递归）
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `geometry/naca.rs`, `parsers/dat.rs`
//! - 子模块: collector

pub mod collector;

pub use collector::DatCollector;

use crate::error::{Result, StolfoilError};
use crate::geometry::naca;
use crate::models::Airfoil;
use crate::parsers;

use std::path::PathBuf;

/// 翼型库
#[derive(Debug, Clone, Default)]
pub struct AirfoilLibrary {
    /// .dat 文件目录
    dir: Option<PathBuf>,
}

impl AirfoilLibrary {
    pub fn new(dir: Option<PathBuf>) -> Self {
        AirfoilLibrary { dir }
    }

    /// 按名称加载翼型
    pub fn load(&self, name: &str) -> Result<Airfoil> {
        if let Some(generated) = naca::from_designation(name, naca::DEFAULT_POINTS_PER_SIDE) {
            return generated;
        }

        let dir = self.dir.as_ref().ok_or_else(|| StolfoilError::UnknownAirfoil {
            name: name.to_string(),
        })?;

        let files = DatCollector::new(dir).for_name(name).collect()?;
        match files.first() {
            Some(path) => parsers::parse_dat_file(path),
            None => Err(StolfoilError::UnknownAirfoil {
                name: name.to_string(),
            }),
        }
    }
}
