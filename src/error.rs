use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("无法解析配置文件 {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("无法获取用户目录: {0}")]
    MissingDir(&'static str),
}

pub type Result<T> = std::result::Result<T, AppError>;
