use crate::tools::{ensure_directory_exists, extension_bucket};
use anyhow::{Context, Result, anyhow};
use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};

/// 單一檔案複製工作的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// 複製成功，附目標檔案路徑
    Copied(PathBuf),
    /// 來源檔案在掃描後已消失，跳過
    SourceMissing,
}

/// 將單一檔案複製到目標資料夾下對應的分類子資料夾
///
/// 子資料夾名稱由副檔名決定（見 `tools::extension_bucket`），不存在時
/// 自動建立。複製為完整位元組複製並保留來源的存取與修改時間；目標
/// 已存在同名檔案時直接覆寫。任何失敗都以 `Err` 回傳，由呼叫端記錄，
/// 不影響其他檔案的複製。
pub fn copy_file_to_bucket(source: &Path, destination_root: &Path) -> Result<CopyOutcome> {
    // 掃描到執行之間來源可能已被移除，視為跳過而非錯誤
    if !source.is_file() {
        return Ok(CopyOutcome::SourceMissing);
    }

    let bucket = extension_bucket(source);
    let target_dir = destination_root.join(&bucket);
    ensure_directory_exists(&target_dir)
        .with_context(|| format!("無法建立分類資料夾: {}", target_dir.display()))?;

    let file_name = source
        .file_name()
        .ok_or_else(|| anyhow!("無法取得檔案名稱: {}", source.display()))?;
    let target = target_dir.join(file_name);

    fs::copy(source, &target).with_context(|| {
        format!("複製失敗: {} -> {}", source.display(), target.display())
    })?;

    apply_file_times(source, &target)
        .with_context(|| format!("無法保留檔案時間: {}", target.display()))?;

    Ok(CopyOutcome::Copied(target))
}

/// 將來源檔案的存取與修改時間套用到目標檔案
fn apply_file_times(source: &Path, target: &Path) -> std::io::Result<()> {
    let metadata = fs::metadata(source)?;
    let accessed = FileTime::from_last_access_time(&metadata);
    let modified = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(target, accessed, modified)
}
