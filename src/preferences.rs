use crate::storage::{KEY_THEME, Storage};

/// 明暗主题偏好
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// 读取保存的主题；未保存时跟随系统偏好
    pub fn load(storage: &dyn Storage, system_prefers_dark: bool) -> Self {
        storage
            .get(KEY_THEME)
            .and_then(|raw| Self::parse(&raw))
            .unwrap_or(if system_prefers_dark { Theme::Dark } else { Theme::Light })
    }

    pub fn persist(&self, storage: &dyn Storage) {
        storage.set(KEY_THEME, self.as_str());
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn stored_theme_wins_over_system_preference() {
        let storage = MemoryStorage::new();
        assert_eq!(Theme::load(&storage, true), Theme::Dark);
        assert_eq!(Theme::load(&storage, false), Theme::Light);

        Theme::Light.persist(&storage);
        assert_eq!(Theme::load(&storage, true), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
