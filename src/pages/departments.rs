use assetdesk_shared::{Department, DepartmentDraft, DepartmentId};

use super::{DeleteBlocked, DeleteOutcome, confirm_and_delete, reload, require_filled};
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::host::Prompter;
use crate::i18n::{Locale, translate_with};
use crate::inventory::Inventory;
use crate::request::HttpClient;

/// 只发送名称；员工数由服务端计算
pub async fn save_department<C: HttpClient>(
    api: &ApiClient<C>,
    locale: Locale,
    editing: Option<&Department>,
    name: &str,
) -> ApiResult<Option<Inventory>> {
    require_filled(locale, &[name])?;
    let draft = DepartmentDraft {
        name: name.trim().to_string(),
    };

    match editing {
        Some(original) => api.departments().update(original.id, draft).await?,
        None => api.departments().create(draft).await?,
    };
    Ok(reload(api).await)
}

pub fn delete_guard(department: &Department) -> Option<DeleteBlocked> {
    (department.employee_count > 0).then(|| DeleteBlocked::DepartmentHasEmployees {
        name: department.name.clone(),
        count: department.employee_count,
    })
}

pub async fn delete_department<C: HttpClient>(
    api: &ApiClient<C>,
    prompter: &dyn Prompter,
    locale: Locale,
    inventory: &Inventory,
    id: DepartmentId,
) -> DeleteOutcome {
    let department = inventory.department(id);
    let name = department.map(|d| d.name.as_str()).unwrap_or_default();
    let confirm = translate_with(locale, "departments.confirmDelete", &[("name", name)]);
    confirm_and_delete(
        api,
        prompter,
        department.and_then(delete_guard),
        locale,
        &confirm,
        "departments.deleteFailed",
        || api.departments().delete(id),
    )
    .await
}
