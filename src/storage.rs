//! 持久化键值存储抽象
//!
//! 浏览器端由 `localStorage` 实现，测试与非浏览器环境使用 `MemoryStorage`。
//! 每个键相互独立，没有交叉失效。

use std::collections::HashMap;
use std::sync::Mutex;

pub const KEY_AUTH_TOKEN: &str = "authToken";
pub const KEY_SESSION_USER: &str = "user";
pub const KEY_LOCALE: &str = "locale";
pub const KEY_THEME: &str = "theme";

/// 本地存储操作
///
/// 与 `localStorage` 一致：读取失败视为不存在，写入/删除返回是否成功。
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn delete(&self, key: &str) -> bool;
}

/// 内存实现
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        for (key, value) in items {
            storage.set(key, value);
        }
        storage
    }

    fn items(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.items().insert(key.to_string(), value.to_string());
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.items().remove(key);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_independent() {
        let storage = MemoryStorage::with_items([(KEY_AUTH_TOKEN, "t"), (KEY_LOCALE, "fr")]);
        storage.delete(KEY_AUTH_TOKEN);
        assert_eq!(storage.get(KEY_AUTH_TOKEN), None);
        assert_eq!(storage.get(KEY_LOCALE).as_deref(), Some("fr"));
    }
}
