//! 界面语言
//!
//! 语言保存在信号中，`t` 在响应式作用域内调用时会随语言切换自动重新渲染。

use assetdesk::Locale;
use assetdesk::i18n::{translate, translate_with};
use leptos::prelude::*;

use crate::web::LocalStorage;

#[derive(Clone, Copy)]
pub struct I18nContext {
    locale: RwSignal<Locale>,
}

impl I18nContext {
    pub fn new(fallback: Locale) -> Self {
        Self {
            locale: RwSignal::new(Locale::load(&LocalStorage, fallback)),
        }
    }

    /// 当前语言（订阅变化）
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// 当前语言（不订阅），用于事件处理函数
    pub fn locale_untracked(&self) -> Locale {
        self.locale.get_untracked()
    }

    pub fn set_locale(&self, locale: Locale) {
        locale.persist(&LocalStorage);
        self.locale.set(locale);
    }

    pub fn t(&self, key: &str) -> String {
        translate(self.locale(), key)
    }

    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        translate_with(self.locale(), key, params)
    }
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext should be provided")
}
