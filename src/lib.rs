//! MAFS 联赛后端
//!
//! 玩家各自选择两对情侣组成阵容，并对每个问题押注一对情侣。
//! 数据存储于 SQLite，通过 SeaORM 访问，HTTP 接口由 axum 提供。

pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod http;
pub mod utils;

use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, DbErr};

use config::AppConfig;
use database::{connection, seed};
use http::{AppState, ServerError};

/// 执行迁移并写入种子数据
///
/// 返回是否本次写入了种子数据
pub async fn prepare_database(db: &DatabaseConnection) -> Result<bool, DbErr> {
    log::info!("开始执行数据库迁移...");
    migration::Migrator::up(db, None).await?;
    log::info!("数据库迁移完成");

    seed::seed_database(db).await
}

/// 启动服务：连接数据库 → 迁移 → 种子数据 → HTTP 服务
///
/// 数据库连接由此处创建并显式传给各个服务，退出前关闭。
/// `--seed-only` 时在种子数据写入后直接返回。
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    let db_path = config.resolve_db_path().map_err(ServerError::Config)?;

    let conn = connection::establish_connection(&db_path).await?;
    log::info!("数据库连接建立成功");

    let seeded = prepare_database(&conn).await?;

    if config.seed_only {
        if !seeded {
            log::info!("数据库已有数据，未重复写入种子数据");
        }
        connection::close_connection(conn).await?;
        return Ok(());
    }

    let state = AppState {
        db: conn.clone(),
        index_path: config.index.clone(),
    };
    let served = http::run_server(state, config.bind_addr(), config.strict_cors).await;

    match connection::close_connection(conn).await {
        Ok(_) => log::info!("数据库连接已成功关闭"),
        Err(e) => log::error!("关闭数据库连接时出错: {}", e),
    }

    served
}
