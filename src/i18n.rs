//! 本地化
//!
//! 每种语言一张嵌套的 JSON 字符串表，编译期内嵌并在首次使用时解析。
//! 键是以点分隔的路径；找不到时原样返回键本身。

use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::Value;
use tracing::{debug, error};

use crate::storage::{KEY_LOCALE, Storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// 语言切换器中显示的名称
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// 读取持久化的语言；缺失或未知时回退到 `fallback`
    pub fn load(storage: &dyn Storage, fallback: Locale) -> Self {
        storage
            .get(KEY_LOCALE)
            .and_then(|code| Self::from_code(&code))
            .unwrap_or(fallback)
    }

    pub fn persist(&self, storage: &dyn Storage) {
        debug!(locale = self.code(), "locale changed");
        storage.set(KEY_LOCALE, self.code());
    }
}

/// 所有语言的字符串表
#[derive(Debug, Default)]
pub struct Catalog {
    tables: HashMap<Locale, Value>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, locale: Locale, table: Value) -> Self {
        self.tables.insert(locale, table);
        self
    }

    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        let mut node = self.tables.get(&locale)?;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        node.as_str()
    }

    pub fn translate<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.lookup(locale, key).unwrap_or(key)
    }

    /// 翻译并替换所有 `{name}` 占位符
    pub fn translate_with(&self, locale: Locale, key: &str, params: &[(&str, &str)]) -> String {
        substitute(self.translate(locale, key), params)
    }
}

fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{}}}", name), value)
    })
}

fn parse_table(locale: Locale, raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        error!(locale = locale.code(), error = %e, "locale table is not valid JSON");
        Value::Null
    })
}

/// 内置的 en/fr 字符串表
pub fn builtin() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        Catalog::new()
            .with_table(Locale::En, parse_table(Locale::En, include_str!("../locales/en.json")))
            .with_table(Locale::Fr, parse_table(Locale::Fr, include_str!("../locales/fr.json")))
    })
}

pub fn translate(locale: Locale, key: &str) -> String {
    builtin().translate(locale, key).to_string()
}

pub fn translate_with(locale: Locale, key: &str, params: &[(&str, &str)]) -> String {
    builtin().translate_with(locale, key, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde_json::json;

    #[test]
    fn resolves_nested_keys_per_locale() {
        assert_eq!(translate(Locale::En, "dashboard.totalAssets"), "Total Assets");
        assert_eq!(translate(Locale::Fr, "nav.settings"), "Paramètres");
    }

    #[test]
    fn missing_or_partial_keys_return_the_key() {
        assert_eq!(translate(Locale::En, "dashboard.nope"), "dashboard.nope");
        assert_eq!(translate(Locale::En, "no.such.path"), "no.such.path");
        // a key naming a subtree is not a string
        assert_eq!(translate(Locale::En, "assets.modal"), "assets.modal");
        assert_eq!(translate(Locale::En, ""), "");
    }

    #[test]
    fn replaces_every_placeholder_occurrence() {
        let catalog = Catalog::new().with_table(Locale::En, json!({ "echo": "{x} and {x}, {y}" }));
        assert_eq!(
            catalog.translate_with(Locale::En, "echo", &[("x", "v"), ("y", "w")]),
            "v and v, w"
        );
        assert_eq!(catalog.translate_with(Locale::En, "echo", &[]), "{x} and {x}, {y}");
    }

    #[test]
    fn builtin_templates_take_params() {
        assert_eq!(
            translate_with(Locale::En, "departments.hasEmployees", &[("name", "Sales"), ("count", "3")]),
            "Cannot delete Sales. Please reassign 3 employee(s) first."
        );
        assert_eq!(
            translate_with(Locale::Fr, "assets.history.title", &[("name", "MacBook"), ("id", "IT-1")]),
            "Historique de MacBook (IT-1)"
        );
    }

    #[test]
    fn locale_persists_and_falls_back() {
        let storage = MemoryStorage::new();
        assert_eq!(Locale::load(&storage, Locale::En), Locale::En);

        Locale::Fr.persist(&storage);
        assert_eq!(Locale::load(&storage, Locale::En), Locale::Fr);

        storage.set(KEY_LOCALE, "de");
        assert_eq!(Locale::load(&storage, Locale::En), Locale::En);
    }
}
