//! Axum 服务器
//!
//! - 默认允许任意来源跨域（前端页面可直接调用 API）
//! - `--strict-cors` 时仅允许 localhost
//! - 收到 Ctrl+C / SIGTERM 后优雅关闭

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;

/// 处理函数共享的状态
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// 首页 HTML 文件路径
    pub index_path: PathBuf,
}

/// 服务器错误
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("configuration error: {0}")]
    Config(String),
}

fn cors_layer(strict: bool, port: u16) -> CorsLayer {
    if !strict {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = ["localhost", "127.0.0.1"]
        .iter()
        .filter_map(|host| format!("http://{}:{}", host, port).parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// 构建路由（测试中直接使用，无需监听端口）
pub fn build_router(state: AppState, strict_cors: bool, port: u16) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(cors_layer(strict_cors, port))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// 运行 HTTP 服务器，直到收到关闭信号
pub async fn run_server(
    state: AppState,
    bind_addr: SocketAddr,
    strict_cors: bool,
) -> Result<(), ServerError> {
    if strict_cors {
        log::info!("CORS: 仅允许 localhost 来源");
    }

    let app = build_router(state, strict_cors, bind_addr.port());

    let listener = TcpListener::bind(bind_addr).await?;
    log::info!("服务器监听于 {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("服务器已关闭");
    Ok(())
}

/// 等待关闭信号（Ctrl+C 或 SIGTERM）
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => log::info!("收到 Ctrl+C，开始关闭"),
        _ = terminate => log::info!("收到 SIGTERM，开始关闭"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::database::test_support::seeded_db;

    #[tokio::test]
    async fn permissive_cors_echoes_any_origin() {
        let (dir, db) = seeded_db().await;
        let state = AppState {
            db,
            index_path: dir.path().join("index.html"),
        };
        let app = build_router(state, false, 5000);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/questions")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn strict_cors_ignores_foreign_origin() {
        let (dir, db) = seeded_db().await;
        let state = AppState {
            db,
            index_path: dir.path().join("index.html"),
        };
        let app = build_router(state, true, 5000);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/questions")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            !response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }
}
