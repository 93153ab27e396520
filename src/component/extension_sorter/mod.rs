//! 副檔名分類複製元件
//!
//! 遞迴掃描來源資料夾，依副檔名將每個檔案複製到目標資料夾
//! 對應的子資料夾，複製工作同時進行

mod file_copier;
mod main;

pub use file_copier::{CopyOutcome, copy_file_to_bucket};
pub use main::ExtensionSorter;
