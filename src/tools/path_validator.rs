use anyhow::{Result, bail};
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("來源資料夾 '{}' 不存在", path.display());
    }
    if !path.is_dir() {
        bail!("'{}' 不是資料夾", path.display());
    }
    Ok(())
}

/// 確保資料夾存在，必要時建立所有中間層級；已存在不視為錯誤
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
