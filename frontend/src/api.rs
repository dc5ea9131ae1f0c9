//! 后端网关的浏览器装配
//!
//! 核心库的 `ApiClient` 与浏览器实现（fetch、LocalStorage、整页跳转）在这里组合，
//! 再通过 Context 共享给所有页面。

use std::sync::Arc;

use assetdesk::{ApiClient, AppConfig};
use leptos::prelude::*;

use crate::web::{BrowserNavigator, FetchHttpClient, LocalStorage};

pub type BrowserApi = ApiClient<FetchHttpClient>;

#[derive(Clone)]
pub struct ApiContext(Arc<BrowserApi>);

/// 创建网关并放入 Context
pub fn provide_api(config: &AppConfig) -> Arc<BrowserApi> {
    let client = ApiClient::new(
        &config.api_base_url,
        FetchHttpClient,
        Arc::new(LocalStorage),
        Arc::new(BrowserNavigator),
    );
    let api = Arc::new(client);
    provide_context(ApiContext(api.clone()));
    api
}

pub fn use_api() -> Arc<BrowserApi> {
    use_context::<ApiContext>()
        .expect("ApiContext should be provided")
        .0
}
