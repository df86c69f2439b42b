//! 业务错误类型
//!
//! 服务层只返回 `ServiceError`，由 HTTP 层映射为响应。

use sea_orm::DbErr;

/// 服务层错误
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// 请求字段缺失或格式不正确
    #[error("invalid request: {0}")]
    Validation(String),

    /// 引用的记录不存在
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i32 },

    /// 数据库读写或事务提交失败
    #[error("database error: {0}")]
    Storage(#[from] DbErr),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// 稳定的错误码，随响应返回给客户端
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::Storage(_) => "internal_error",
        }
    }

    /// 是否属于调用方的错误（对应 4xx）
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ServiceError::validation("x").code(), "validation_error");
        assert_eq!(
            ServiceError::NotFound {
                resource: "player",
                id: 7
            }
            .code(),
            "not_found"
        );
        assert_eq!(
            ServiceError::Storage(DbErr::Custom("boom".into())).code(),
            "internal_error"
        );
    }

    #[test]
    fn not_found_display() {
        let err = ServiceError::NotFound {
            resource: "couple",
            id: 42,
        };
        assert_eq!(err.to_string(), "couple 42 not found");
        assert!(err.is_client_error());
    }
}
