//! API 错误与响应映射
//!
//! 客户端错误统一返回 400 `{"error": "Invalid request", "code": ...}`，
//! 不区分校验失败与引用不存在；数据库错误只记录日志，返回通用 500。

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::ServiceError;

/// API 错误
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// 请求体不是合法 JSON 或结构不匹配
    #[error("malformed request body: {0}")]
    Malformed(String),

    /// 首页文档不存在
    #[error("{0} not found")]
    PageNotFound(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Malformed(_) => StatusCode::BAD_REQUEST,
            Self::PageNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Service(e) => e.code(),
            Self::Malformed(_) => "validation_error",
            Self::PageNotFound(_) => "not_found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error = if status.is_server_error() {
            log::error!("请求处理失败: {}", self);
            "Internal server error"
        } else if status == StatusCode::NOT_FOUND {
            log::warn!("{}", self);
            "Not found"
        } else {
            log::debug!("拒绝请求: {}", self);
            "Invalid request"
        };

        let body = json!({
            "error": error,
            "code": self.code(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::from(ServiceError::validation("coupleIds must contain exactly 2 ids"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid request");
        assert_eq!(body["code"], "validation_error");
    }

    #[tokio::test]
    async fn not_found_reference_is_also_400() {
        let err = ApiError::from(ServiceError::NotFound {
            resource: "player",
            id: 9,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "not_found");
    }

    #[tokio::test]
    async fn storage_error_hides_details() {
        let err = ApiError::from(ServiceError::from(sea_orm::DbErr::Custom(
            "disk I/O error".into(),
        )));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert!(!body.to_string().contains("disk"));
    }
}
