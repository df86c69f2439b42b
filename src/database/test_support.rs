//! 测试辅助：每个测试使用独立的临时 SQLite 文件

use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use super::connection::establish_connection;
use super::seed::seed_database;

/// 已迁移、未写入种子数据的数据库
///
/// 返回的 `TempDir` 需要在测试期间保持存活
pub async fn migrated_db() -> (TempDir, DatabaseConnection) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = establish_connection(&dir.path().join("mafs.db"))
        .await
        .expect("connect to temp database");
    Migrator::up(&db, None).await.expect("run migrations");
    (dir, db)
}

/// 已迁移并写入种子数据的数据库
pub async fn seeded_db() -> (TempDir, DatabaseConnection) {
    let (dir, db) = migrated_db().await;
    seed_database(&db).await.expect("seed database");
    (dir, db)
}
