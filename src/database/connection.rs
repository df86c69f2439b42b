use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, RuntimeErr};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// 确保数据库所在目录存在
pub fn ensure_db_dir_exists(db_path: &Path) -> Result<(), String> {
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("无法创建数据库目录: {}", e))?;
    }
    Ok(())
}

/// 将文件路径转换为 sqlite 连接串
pub fn sqlite_url(db_path: &Path) -> Result<String, DbErr> {
    let db_url = Url::from_file_path(db_path).map_err(|_| {
        DbErr::Conn(RuntimeErr::Internal(format!(
            "Invalid database path: {}",
            db_path.display()
        )))
    })?;

    Ok(format!("sqlite:{}?mode=rwc", db_url.path()))
}

/// Establish a SeaORM database connection.
///
/// `db_path` 必须是绝对路径；文件不存在时会自动创建。
pub async fn establish_connection(db_path: &Path) -> Result<DatabaseConnection, DbErr> {
    if db_path.exists() {
        log::info!("使用数据库: {}", db_path.display());
    } else {
        ensure_db_dir_exists(db_path).map_err(|e| DbErr::Conn(RuntimeErr::Internal(e)))?;
        log::info!("首次启动，创建数据库: {}", db_path.display());
    }

    connect(sqlite_url(db_path)?).await
}

/// 等待空闲连接的上限，同时也是建立连接的超时
pub const POOL_WAIT_TIMEOUT: Duration = Duration::from_secs(8);

/// 连接池配置
///
/// 连接池固定为 1：所有事务在同一连接上串行执行，
/// 并发写同一玩家时以最后提交者为准。
/// `connect_timeout` 同时是等待空闲连接的上限：排在长事务之后超过
/// [`POOL_WAIT_TIMEOUT`] 的请求会以存储错误（HTTP 500）失败。
fn connect_options(connection_string: String) -> ConnectOptions {
    let mut options = ConnectOptions::new(connection_string);
    options
        .max_connections(1)
        .min_connections(1)
        .connect_timeout(POOL_WAIT_TIMEOUT)
        .sqlx_logging(false);
    options
}

/// 按连接串建立连接
pub async fn connect(connection_string: String) -> Result<DatabaseConnection, DbErr> {
    Database::connect(connect_options(connection_string)).await
}

/// 关闭数据库连接
pub async fn close_connection(conn: DatabaseConnection) -> Result<(), DbErr> {
    conn.close().await?;
    Ok(())
}
