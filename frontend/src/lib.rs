//! AssetDesk 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth` / `i18n` / `theme` / `data`: 共享状态
//! - `components`: UI 组件层
//!
//! 业务规则（校验、删除检查、统计）都在 `assetdesk` 核心库中，这里只负责渲染和接线。

mod api;
mod auth;
mod components {
    pub mod asset_detail;
    mod asset_dialog;
    mod asset_history;
    pub mod assets;
    mod avatar;
    pub mod dashboard;
    mod department_dialog;
    pub mod departments;
    mod icons;
    pub mod layout;
    pub mod login;
    mod modal;
    pub mod not_found;
    pub mod settings;
    mod user_dialog;
    pub mod users;
}
mod data;
mod i18n;
mod theme;

use assetdesk::AppConfig;
use leptos::prelude::*;

use crate::auth::AuthContext;
use crate::components::asset_detail::AssetDetailPage;
use crate::components::assets::AssetsPage;
use crate::components::dashboard::DashboardPage;
use crate::components::departments::DepartmentsPage;
use crate::components::layout::Layout;
use crate::components::login::LoginPage;
use crate::components::not_found::NotFoundPage;
use crate::components::settings::SettingsPage;
use crate::components::users::UsersPage;
use crate::i18n::I18nContext;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod console;
    mod host;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use console::init as init_logging;
    pub use host::{BrowserNavigator, BrowserPrompter, apply_theme, now, system_prefers_dark};
    pub use http::FetchHttpClient;
    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件；除登录页外都包在侧边栏布局中。
fn route_matcher(route: AppRoute) -> AnyView {
    let page = match route {
        AppRoute::Login => return view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Assets => view! { <AssetsPage /> }.into_any(),
        AppRoute::AssetDetail(id) => view! { <AssetDetailPage id=id /> }.into_any(),
        AppRoute::Users => view! { <UsersPage /> }.into_any(),
        AppRoute::Departments => view! { <DepartmentsPage /> }.into_any(),
        AppRoute::Settings => view! { <SettingsPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    };
    view! { <Layout>{page}</Layout> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 编译期配置与日志
    let config = AppConfig::from_build_env();
    web::init_logging(&config.log_level);
    tracing::info!(api = %config.api_base_url, "starting asset desk");

    // 2. 网关、语言与主题
    let api = api::provide_api(&config);
    provide_context(I18nContext::new(config.default_locale));
    theme::provide_theme();

    // 3. 认证上下文：从 LocalStorage 同步恢复
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 4. 数据快照：认证后自动加载
    data::provide_inventory(auth_ctx, api);

    // 5. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 6. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
