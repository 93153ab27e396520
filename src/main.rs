use anyhow::Result;
use auto_file_sort::component::ExtensionSorter;
use auto_file_sort::config::{CliArgs, SortConfig};
use auto_file_sort::init;
use clap::Parser;
use log::{error, info};

fn main() -> Result<()> {
    init::init();

    let args = CliArgs::parse();

    // 前置檢查失敗只記錄錯誤，不做任何處理直接結束
    let config = match SortConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("{e:#}");
            return Ok(());
        }
    };

    info!(
        "開始排序檔案：{} -> {}",
        config.source.display(),
        config.destination.display()
    );

    let sorter = ExtensionSorter::new(config);
    sorter.run()?;

    info!("排序完成");
    Ok(())
}
