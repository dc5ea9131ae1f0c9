//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 `HttpClient`，替代 `gloo-net`。
//! 不设置超时，也不支持取消。

use assetdesk::error::{ApiError, ApiResult};
use assetdesk::request::{HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn network(context: &str, e: JsValue) -> ApiError {
    ApiError::Network(format!("{}: {:?}", context, e))
}

/// 读取响应体文本
async fn read_text(response: &Response) -> ApiResult<String> {
    let promise = response
        .text()
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

    let text = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

    text.as_string()
        .ok_or_else(|| ApiError::Decode("response body is not a string".to_string()))
}

/// 基于浏览器 fetch 的客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let headers = Headers::new().map_err(|e| network("create headers", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| network("set header", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| network("build request", e))?;

        let window = web_sys::window()
            .ok_or_else(|| ApiError::Network("no window object".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| network("fetch", e))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ApiError::Decode(format!("not a Response: {:?}", e)))?;

        Ok(HttpResponse {
            status: response.status(),
            body: read_text(&response).await?,
        })
    }
}
