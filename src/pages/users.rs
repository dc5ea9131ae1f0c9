use assetdesk_shared::{Department, User, UserId};

use super::{DeleteBlocked, DeleteOutcome, confirm_and_delete, reload, require_filled};
use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::host::Prompter;
use crate::i18n::{Locale, translate};
use crate::inventory::Inventory;
use crate::request::HttpClient;

/// 新建用户的默认值：预选第一个部门（没有部门时为 0）
pub fn new_user_draft(departments: &[Department]) -> User {
    User {
        id: None,
        name: String::new(),
        email: String::new(),
        department_id: departments.first().map(|d| d.id).unwrap_or(0),
        department_name: None,
    }
}

pub async fn save_user<C: HttpClient>(
    api: &ApiClient<C>,
    locale: Locale,
    editing: Option<&User>,
    draft: User,
) -> ApiResult<Option<Inventory>> {
    require_filled(locale, &[draft.name.as_str(), draft.email.as_str()])?;
    if draft.department_id <= 0 {
        return Err(ApiError::validation(translate(locale, "common.requiredFields")));
    }

    match editing.and_then(|u| u.id) {
        Some(id) => api.users().update(id, draft).await?,
        None => api.users().create(draft).await?,
    };
    Ok(reload(api).await)
}

/// 仍有资产分配给该用户时阻止删除
pub fn delete_guard(inventory: &Inventory, user_id: UserId) -> Option<DeleteBlocked> {
    match inventory.assets_assigned_to(user_id) {
        0 => None,
        count => Some(DeleteBlocked::UserHasAssets { count }),
    }
}

pub async fn delete_user<C: HttpClient>(
    api: &ApiClient<C>,
    prompter: &dyn Prompter,
    locale: Locale,
    inventory: &Inventory,
    user_id: UserId,
) -> DeleteOutcome {
    let confirm = translate(locale, "users.confirmDelete");
    confirm_and_delete(
        api,
        prompter,
        delete_guard(inventory, user_id),
        locale,
        &confirm,
        "users.deleteFailed",
        || api.users().delete(user_id),
    )
    .await
}
