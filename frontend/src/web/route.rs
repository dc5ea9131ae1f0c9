//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    Dashboard,
    Assets,
    /// 资产详情，携带资产编号
    AssetDetail(String),
    Users,
    Departments,
    Settings,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/assets" => Self::Assets,
            "/users" => Self::Users,
            "/departments" => Self::Departments,
            "/settings" => Self::Settings,
            _ => match trimmed.strip_prefix("/assets/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::AssetDetail(decode_segment(id)),
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Assets => "/assets".to_string(),
            Self::AssetDetail(id) => format!("/assets/{}", urlencoding::encode(id)),
            Self::Users => "/users".to_string(),
            Self::Departments => "/departments".to_string(),
            Self::Settings => "/settings".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：除登录页外的所有页面都需要认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login)
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// 侧边栏中高亮的入口（详情页归属资产列表）
    pub fn section(&self) -> Self {
        match self {
            Self::AssetDetail(_) => Self::Assets,
            other => other.clone(),
        }
    }
}

fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/assets/"), AppRoute::Assets);
        assert_eq!(AppRoute::from_path("/settings"), AppRoute::Settings);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/assets/a/b"), AppRoute::NotFound);
    }

    #[test]
    fn asset_detail_round_trips_encoded_ids() {
        let route = AppRoute::AssetDetail("IT 12".into());
        assert_eq!(route.to_path(), "/assets/IT%2012");
        assert_eq!(AppRoute::from_path(&route.to_path()), route);
        assert_eq!(route.section(), AppRoute::Assets);
    }

    #[test]
    fn only_login_is_public() {
        assert!(!AppRoute::Login.requires_auth());
        assert!(AppRoute::NotFound.requires_auth());
        assert!(AppRoute::AssetDetail("IT-1".into()).requires_auth());
    }
}
