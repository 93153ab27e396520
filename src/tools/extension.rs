use std::path::Path;

/// 沒有副檔名的檔案歸入的分類資料夾名稱
pub const UNKNOWN_BUCKET: &str = "unknown";

/// 取得檔案的分類資料夾名稱：小寫副檔名（不含點），無副檔名則為 `unknown`
///
/// 對任何路徑都有唯一結果。隱藏檔（如 `.bashrc`）視為無副檔名。
pub fn extension_bucket(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| UNKNOWN_BUCKET.to_string())
}
