use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::error::{ApiError, ApiResult};
pub use assetdesk_shared::protocol::HttpMethod;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 通用 HTTP 请求结构
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 解析 JSON 响应体；204 与空响应体按 `null` 处理
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        let body = if self.status == 204 || self.body.trim().is_empty() {
            "null"
        } else {
            self.body.as_str()
        };
        serde_json::from_str(body).map_err(ApiError::from)
    }
}

/// HTTP 客户端特性 (Trait)
/// 使用 async_trait 以支持异步调用，(?Send) 是因为浏览器 fetch 的 Future 不是 Send 的
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    /// 只有传输失败才返回错误；非 2xx 状态码由调用方解释
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse>;
}

// =========================================================
// 实现层: Mock 客户端 (Tests)
// =========================================================

#[cfg(test)]
pub use mock::MockHttpClient;
