use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 遞迴掃描目錄下所有一般檔案，不限深度，不保留目錄結構
///
/// 讀取失敗的項目（如權限不足的子目錄）記錄警告後跳過，不中斷掃描。
pub fn scan_all_files(directory: &Path) -> Vec<PathBuf> {
    WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("無法讀取項目: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_all_files_recursive() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir_all(temp_dir.path().join("sub/deep")).unwrap();
        fs::write(temp_dir.path().join("sub/b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("sub/deep/c"), "c").unwrap();

        let mut files = scan_all_files(temp_dir.path());
        files.sort();

        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_scan_skips_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("only_dirs")).unwrap();

        let files = scan_all_files(temp_dir.path());
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let files = scan_all_files(temp_dir.path());
        assert!(files.is_empty());
    }
}
