//! 宿主环境能力：页面跳转与阻塞式对话框
//!
//! 浏览器端分别对应 `window.location` 与 `window.confirm` / `window.alert`。

/// 整页跳转
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

/// 阻塞式确认与提示
pub trait Prompter {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingNavigator {
        pub redirects: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn redirects(&self) -> Vec<String> {
            self.redirects.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn redirect(&self, path: &str) {
            self.redirects.lock().unwrap().push(path.to_string());
        }
    }

    /// 按脚本回答 confirm，记录所有对话框
    #[derive(Default)]
    pub struct ScriptedPrompter {
        answers: RefCell<VecDeque<bool>>,
        pub confirms: RefCell<Vec<String>>,
        pub alerts: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
            Self {
                answers: RefCell::new(answers.into_iter().collect()),
                ..Default::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&self, message: &str) -> bool {
            self.confirms.borrow_mut().push(message.to_string());
            self.answers.borrow_mut().pop_front().unwrap_or(false)
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }
}
