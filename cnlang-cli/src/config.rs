//! CLI 配置加载
//!
//! 从 JSON 文件读取 `RuntimeConfig`，文件不存在时使用默认配置。

use cnlang_config::{LogLevel, RuntimeConfig};
use cnlang_core::ConsoleError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// CLI 错误类型
#[derive(Error, Debug)]
pub enum CliError {
    #[error("无法读取 '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("解析 '{path}' 失败: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("未知运算符 '{0}'")]
    UnknownOperator(String),

    #[error("用法: cnlang eval <LEFT> <OP> <RIGHT> 或 cnlang eval <OP> <OPERAND>")]
    EvalUsage,

    #[error(transparent)]
    Console(#[from] ConsoleError),
}

/// 读取配置文件
pub fn load(path: &Path) -> Result<RuntimeConfig, CliError> {
    if !path.exists() {
        return Ok(RuntimeConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// `--log-level` 参数解析
pub fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| {
        format!("unknown log level '{s}' (expected silent, error, warn, info, debug or trace)")
    })
}
