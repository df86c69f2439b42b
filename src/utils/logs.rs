use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// 默认过滤规则：本 crate 使用指定级别，依赖库只输出警告
    pub fn default_filter(self) -> String {
        format!(
            "warn,mafs_league_lib={lvl},mafs_league={lvl},tower_http={lvl}",
            lvl = self.directive()
        )
    }
}

/// 初始化全局日志
///
/// `log` 宏的记录经由 tracing-subscriber 的 log 桥接统一输出；
/// 设置了 `RUST_LOG` 时以其为准。
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.default_filter()));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_err()
    {
        log::warn!("日志系统已初始化，忽略重复初始化");
    }
}
