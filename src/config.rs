// =========================================================
// 编译期配置 (Build-time Configuration)
// =========================================================

use crate::i18n::Locale;

/// 这些是默认值，如果构建时没有设置对应的环境变量，则使用这些值
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_LOG_LEVEL: &str = "info";

/// 应用配置
/// 浏览器里没有进程环境变量，覆盖值只能在构建时通过 `option_env!` 注入
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
    pub default_locale: Locale,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("ASSETDESK_API_BASE_URL"),
            option_env!("ASSETDESK_LOG"),
            option_env!("ASSETDESK_LOCALE"),
        )
    }

    fn resolve(api_base_url: Option<&str>, log_level: Option<&str>, locale: Option<&str>) -> Self {
        Self {
            // 读不到或为空就用默认地址；去掉末尾的 '/'
            api_base_url: api_base_url
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),

            log_level: log_level
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_LOG_LEVEL)
                .to_string(),

            // 未知语言代码同样回退到默认语言
            default_locale: locale
                .and_then(|code| Locale::from_code(code.trim()))
                .unwrap_or_default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}
