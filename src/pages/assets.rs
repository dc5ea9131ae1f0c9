use assetdesk_shared::date::years_after;
use assetdesk_shared::{Asset, AssetCategory, AssetHistory, AssetStatus, Timestamp};
use chrono::NaiveDate;

use super::{DeleteOutcome, confirm_and_delete, reload, require_filled};
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::host::Prompter;
use crate::i18n::{Locale, translate, translate_with};
use crate::inventory::Inventory;
use crate::request::HttpClient;

/// 默认保修年限
pub const DEFAULT_WARRANTY_YEARS: u32 = 2;

/// 没有对应用户时显示的占位符
pub const MISSING_USER: &str = "-";

/// 新建资产的默认值：编号取时钟末四位，购买日期为当天，保修两年
pub fn new_asset_draft(now: Timestamp) -> Asset {
    let today = now.utc_date();
    Asset {
        id: now.suggested_asset_id(),
        name: String::new(),
        category: AssetCategory::default(),
        status: AssetStatus::default(),
        purchase_date: today,
        assigned_to: None,
        notes: None,
        vendor: String::new(),
        warranty_expiry: Some(years_after(today, DEFAULT_WARRANTY_YEARS)),
        specs: None,
        history: Vec::new(),
    }
}

/// 保存资产：有 `editing` 时更新（编号以原记录为准），否则创建
pub async fn save_asset<C: HttpClient>(
    api: &ApiClient<C>,
    locale: Locale,
    editing: Option<&Asset>,
    draft: Asset,
) -> ApiResult<Option<Inventory>> {
    require_filled(locale, &[draft.id.as_str(), draft.name.as_str(), draft.vendor.as_str()])?;

    match editing {
        Some(original) => api.assets().update(&original.id, draft).await?,
        None => api.assets().create(draft).await?,
    };
    Ok(reload(api).await)
}

pub async fn delete_asset<C: HttpClient>(
    api: &ApiClient<C>,
    prompter: &dyn Prompter,
    locale: Locale,
    id: &str,
) -> DeleteOutcome {
    let confirm = translate(locale, "assets.confirmDelete");
    confirm_and_delete(api, prompter, None, locale, &confirm, "assets.deleteFailed", || {
        api.assets().delete(id)
    })
    .await
}

/// 详情页使用完整记录（含历史）
pub async fn load_asset_detail<C: HttpClient>(api: &ApiClient<C>, id: &str) -> ApiResult<Asset> {
    api.assets().get(id).await
}

// =========================================================
// 历史记录展示
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub date: NaiveDate,
    pub status: AssetStatus,
    /// 用户名；没有用户或找不到时为 `None`
    pub user: Option<String>,
    pub notes: Option<String>,
}

impl HistoryRow {
    pub fn user_label(&self) -> &str {
        self.user.as_deref().unwrap_or(MISSING_USER)
    }
}

/// 按日期倒序的历史行，用户名从当前用户列表解析
pub fn history_rows(asset: &Asset, inventory: &Inventory) -> Vec<HistoryRow> {
    asset
        .history_newest_first()
        .into_iter()
        .map(|entry: &AssetHistory| HistoryRow {
            date: entry.date,
            status: entry.status,
            user: inventory.user_name(entry.user_id).map(str::to_string),
            notes: entry.notes.clone().filter(|n| !n.is_empty()),
        })
        .collect()
}

pub fn history_title(locale: Locale, asset: &Asset) -> String {
    translate_with(
        locale,
        "assets.history.title",
        &[("name", &asset.name), ("id", &asset.id)],
    )
}
