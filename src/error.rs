use thiserror::Error;

/// 客户端错误分类
///
/// - `Http` / `Network` / `Decode`: 网络与协议层错误
/// - `Validation`: 提交前的本地校验，不会发出请求
/// - `Unauthorized`: 会话已失效（本地令牌已清除）
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Session expired: {message}")]
    Unauthorized { message: String },

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// 对应的 HTTP 状态码（本地错误没有状态码）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Unauthorized { .. } | ApiError::InvalidCredentials => Some(401),
            ApiError::Network(_) | ApiError::Decode(_) | ApiError::Validation(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// 面向用户的消息（服务端提供的文本优先）
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } | ApiError::Unauthorized { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Canonical reason phrase, used when the server sends an empty error body.
pub(crate) fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Request failed",
    }
}
