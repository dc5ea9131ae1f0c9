//! 明暗主题
//!
//! 首次访问跟随系统偏好，切换后持久化。

use assetdesk::preferences::Theme;
use leptos::prelude::*;

use crate::web::{LocalStorage, apply_theme, system_prefers_dark};

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        next.persist(&LocalStorage);
        self.theme.set(next);
    }
}

pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext {
        theme: RwSignal::new(Theme::load(&LocalStorage, system_prefers_dark())),
    };
    provide_context(ctx);

    Effect::new(move |_| apply_theme(ctx.theme.get()));

    ctx
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
