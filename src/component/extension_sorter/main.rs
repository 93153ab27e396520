use super::file_copier::{CopyOutcome, copy_file_to_bucket};
use crate::config::SortConfig;
use crate::tools::scan_all_files;
use anyhow::{Context, Result};
use log::{error, info, warn};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

/// 副檔名分類複製元件
pub struct ExtensionSorter {
    config: SortConfig,
}

impl ExtensionSorter {
    #[must_use]
    pub const fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// 掃描來源資料夾並同時複製所有檔案，全部複製嘗試結束後才返回
    ///
    /// 個別檔案的失敗只記錄在日誌中，不會中斷其他複製工作，也不會
    /// 反映在回傳值上；回傳 `Err` 僅代表執行緒池建立失敗。
    pub fn run(&self) -> Result<()> {
        let files = scan_all_files(&self.config.source);
        info!("掃描到 {} 個檔案", files.len());

        // workers 為 0 時由 rayon 依 CPU 核心數決定
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .build()
            .context("無法建立複製執行緒池")?;

        pool.install(|| {
            files.par_iter().for_each(|file| {
                match copy_file_to_bucket(file, &self.config.destination) {
                    Ok(CopyOutcome::Copied(target)) => {
                        info!("檔案 {} 已複製到 {}", file.display(), target.display());
                    }
                    Ok(CopyOutcome::SourceMissing) => {
                        warn!("檔案已不存在，跳過: {}", file.display());
                    }
                    Err(e) => {
                        error!("複製 {} 失敗: {e:#}", file.display());
                    }
                }
            });
        });

        Ok(())
    }
}
