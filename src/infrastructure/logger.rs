//! 日志基础设施

use anyhow::{Context, Result};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

/// 日志文件名前缀
const FILE_PREFIX: &str = "record_service";

pub struct Logger;

impl Logger {
    /// 初始化全局日志
    ///
    /// 优先使用 `RUST_LOG`，否则使用配置中的级别。设置了日志目录时按天滚动写入文件，
    /// 返回的 guard 需要保持存活直到进程退出。
    pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))
            .with_context(|| format!("invalid log level: {}", config.level))?;

        let (file_layer, guard) = match &config.log_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create log dir {}", dir.display()))?;
                let (writer, guard) = non_blocking(rolling::daily(dir, FILE_PREFIX));
                let layer = fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_thread_ids(true);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .with(file_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;

        Ok(guard)
    }
}
