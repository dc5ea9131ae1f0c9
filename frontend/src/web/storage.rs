//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 `Storage`，替代 `gloo-storage`。

use assetdesk::storage::Storage;

/// 浏览器 LocalStorage
///
/// 存储不可用（隐私模式、无 window）时读取返回 `None`，写入返回 `false`。
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let ok = Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some();
        if !ok {
            tracing::warn!(key, "localStorage write failed");
        }
        ok
    }

    fn delete(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
