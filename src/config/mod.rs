use crate::tools::{ensure_directory_exists, validate_directory_exists};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::{self, PathBuf};

/// 命令列參數
#[derive(Parser, Debug, Clone)]
#[command(name = "auto_file_sort", about = "依副檔名將檔案分類複製到目標資料夾")]
pub struct CliArgs {
    /// 來源資料夾路徑
    pub source_folder: PathBuf,

    /// 目標資料夾路徑
    pub output_folder: PathBuf,

    /// 複製工作執行緒數量（0 表示依 CPU 核心數自動決定）
    #[arg(long, default_value_t = 0)]
    pub workers: usize,
}

/// 驗證後的執行設定，路徑已解析為絕對路徑
#[derive(Debug, Clone)]
pub struct SortConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub workers: usize,
}

impl SortConfig {
    /// 從命令列參數建立設定，並執行前置檢查：
    /// 來源資料夾必須存在且為資料夾，目標資料夾不存在時自動建立。
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let source = path::absolute(&args.source_folder)
            .with_context(|| format!("無法解析路徑: {}", args.source_folder.display()))?;
        validate_directory_exists(&source)?;

        let destination = path::absolute(&args.output_folder)
            .with_context(|| format!("無法解析路徑: {}", args.output_folder.display()))?;
        ensure_directory_exists(&destination)
            .with_context(|| format!("無法建立目標資料夾: {}", destination.display()))?;

        Ok(Self {
            source,
            destination,
            workers: args.workers,
        })
    }
}
