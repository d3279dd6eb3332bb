use std::path::PathBuf;

use thiserror::Error;
use viseme_scheduler_core::ConvertError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("转换失败: {0}")]
    Convert(#[from] ConvertError),

    #[error("读取输入文件 {path:?} 失败: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("写入输出文件 {path:?} 失败: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("加载配置文件 {path:?} 失败: {source}")]
    Settings { path: PathBuf, source: ini::Error },
}

pub type AppResult<T> = std::result::Result<T, AppError>;
