//! 宿主能力的浏览器实现：整页跳转、阻塞对话框、时钟与主题

use assetdesk::host::{Navigator, Prompter};
use assetdesk::preferences::Theme;
use assetdesk::shared::Timestamp;

/// 通过 `window.location` 跳转（会重新加载页面）
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

/// `window.confirm` / `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

pub fn now() -> Timestamp {
    Timestamp::new(js_sys::Date::now() as i64)
}

/// 系统是否偏好暗色
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// 在 `<html>` 上切换 `dark` 类并同步 `data-theme`
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    let _ = root.set_attribute("data-theme", theme.as_str());
}
