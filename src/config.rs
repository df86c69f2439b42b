//! 运行配置
//!
//! 所有选项均可通过命令行或环境变量设置，命令行优先。

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::utils::logs::LogLevel;

/// MAFS 联赛后端
#[derive(Debug, Clone, Parser)]
#[command(name = "mafs-league", version, about)]
pub struct AppConfig {
    /// 监听地址
    #[arg(long, env = "MAFS_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// 监听端口
    #[arg(long, short, env = "MAFS_PORT", default_value_t = 5000)]
    pub port: u16,

    /// SQLite 数据库文件路径（默认位于应用数据目录）
    #[arg(long, env = "MAFS_DATABASE")]
    pub database: Option<PathBuf>,

    /// 首页 HTML 文件
    #[arg(long, env = "MAFS_INDEX", default_value = "static/index.html")]
    pub index: PathBuf,

    /// 仅允许 localhost 跨域访问
    #[arg(long, env = "MAFS_STRICT_CORS")]
    pub strict_cors: bool,

    /// 仅执行迁移与种子数据后退出，不启动 HTTP 服务
    #[arg(long)]
    pub seed_only: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, env = "MAFS_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl AppConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// 解析数据库路径：相对路径以当前工作目录为基准
    pub fn resolve_db_path(&self) -> Result<PathBuf, String> {
        let path = match &self.database {
            Some(path) => path.clone(),
            None => league_path::get_db_path()?,
        };
        absolutize(&path)
    }
}

fn absolutize(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| format!("无法获取当前工作目录: {}", e))?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_override_defaults() {
        let config = AppConfig::try_parse_from([
            "mafs-league",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--database",
            "/tmp/league/mafs.db",
            "--strict-cors",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(
            config.resolve_db_path().unwrap(),
            PathBuf::from("/tmp/league/mafs.db")
        );
        assert!(config.strict_cors);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn relative_database_path_is_made_absolute() {
        let config =
            AppConfig::try_parse_from(["mafs-league", "--database", "data/mafs.db"]).unwrap();
        let resolved = config.resolve_db_path().unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("data/mafs.db"));
    }

    #[test]
    fn seed_only_defaults_to_off() {
        let config = AppConfig::try_parse_from(["mafs-league"]).unwrap();
        assert!(!config.seed_only);

        let config = AppConfig::try_parse_from(["mafs-league", "--seed-only"]).unwrap();
        assert!(config.seed_only);
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        assert!(AppConfig::try_parse_from(["mafs-league", "--log-level", "loud"]).is_err());
    }
}
