//! 列表页的状态与操作流程
//!
//! 每个页面的保存和删除流程都是：（本地校验）→ 一次写请求 → 整体重新加载三个集合。
//! 这里的引用完整性检查只是提示性的，服务端必须再次校验。

pub mod assets;
pub mod departments;
pub mod settings;
pub mod users;

use tracing::warn;

use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::host::Prompter;
use crate::i18n::{Locale, translate};
use crate::inventory::Inventory;
use crate::request::HttpClient;

// =========================================================
// 编辑弹窗状态
// =========================================================

/// 创建/编辑弹窗状态：`editing` 为空表示新建
#[derive(Debug, Clone, PartialEq)]
pub struct Editor<T> {
    open: bool,
    editing: Option<T>,
}

impl<T> Default for Editor<T> {
    fn default() -> Self {
        Self {
            open: false,
            editing: None,
        }
    }
}

impl<T> Editor<T> {
    pub fn open_new(&mut self) {
        self.editing = None;
        self.open = true;
    }

    pub fn open_edit(&mut self, record: T) {
        self.editing = Some(record);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.editing = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn editing(&self) -> Option<&T> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

/// 处理保存结果：成功时关闭弹窗并返回新快照；失败时提示并保持弹窗打开
///
/// 本地校验错误显示校验消息，其他错误显示 `failure_message`。
pub fn settle_save<T>(
    editor: &mut Editor<T>,
    result: ApiResult<Option<Inventory>>,
    prompter: &dyn Prompter,
    failure_message: &str,
) -> Option<Inventory> {
    match result {
        Ok(inventory) => {
            editor.close();
            inventory
        }
        Err(ApiError::Validation(message)) => {
            prompter.alert(&message);
            None
        }
        Err(e) => {
            warn!(error = %e, "save failed");
            prompter.alert(failure_message);
            None
        }
    }
}

// =========================================================
// 删除流程
// =========================================================

/// 本地引用完整性检查阻止的删除
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteBlocked {
    UserHasAssets { count: usize },
    DepartmentHasEmployees { name: String, count: u32 },
}

impl DeleteBlocked {
    pub fn message(&self, locale: Locale) -> String {
        match self {
            DeleteBlocked::UserHasAssets { .. } => translate(locale, "users.hasAssets"),
            DeleteBlocked::DepartmentHasEmployees { name, count } => crate::i18n::translate_with(
                locale,
                "departments.hasEmployees",
                &[("name", name), ("count", &count.to_string())],
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// 检查未通过，未发出任何请求
    Blocked(DeleteBlocked),
    /// 用户取消确认
    Cancelled,
    /// 删除成功；重新加载失败时为 `None`
    Deleted(Option<Inventory>),
    /// 删除请求失败，已提示
    Failed(ApiError),
}

/// 写请求成功后的整体重新加载
///
/// 重新加载失败只记录日志，不视为写操作失败。
pub(crate) async fn reload<C: HttpClient>(api: &ApiClient<C>) -> Option<Inventory> {
    Inventory::load(api).await.ok()
}

/// 确认 → 删除 → 重新加载；检查与确认都在任何网络请求之前
pub(crate) async fn confirm_and_delete<C, F, Fut>(
    api: &ApiClient<C>,
    prompter: &dyn Prompter,
    guard: Option<DeleteBlocked>,
    locale: Locale,
    confirm_message: &str,
    failure_key: &str,
    delete: F,
) -> DeleteOutcome
where
    C: HttpClient,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ApiResult<()>>,
{
    if let Some(blocked) = guard {
        prompter.alert(&blocked.message(locale));
        return DeleteOutcome::Blocked(blocked);
    }
    if !prompter.confirm(confirm_message) {
        return DeleteOutcome::Cancelled;
    }
    match delete().await {
        Ok(()) => DeleteOutcome::Deleted(reload(api).await),
        Err(e) => {
            warn!(error = %e, "delete failed");
            prompter.alert(&translate(locale, failure_key));
            DeleteOutcome::Failed(e)
        }
    }
}

/// 必填字段为空时返回本地校验错误
pub(crate) fn require_filled(locale: Locale, fields: &[&str]) -> ApiResult<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ApiError::validation(translate(locale, "common.requiredFields")));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
