use std::process::ExitCode;

use clap::Parser;
use mafs_league_lib::config::AppConfig;
use mafs_league_lib::utils::logs::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let config = AppConfig::parse();
    init_logging(config.log_level);

    match mafs_league_lib::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("服务启动失败: {}", e);
            eprintln!("mafs-league: {}", e);
            ExitCode::FAILURE
        }
    }
}
