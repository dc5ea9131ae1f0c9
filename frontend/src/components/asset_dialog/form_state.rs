//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `AssetFormState` 结构体，负责：
//! - 数据的持有
//! - 从已有记录（或新建默认值）载入
//! - 数据到请求对象的转换

use assetdesk::shared::date::NaiveDate;
use assetdesk::shared::{Asset, AssetCategory, AssetHistory, AssetStatus, UserId};
use leptos::prelude::*;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct AssetFormState {
    pub id: RwSignal<String>,
    pub name: RwSignal<String>,
    pub category: RwSignal<AssetCategory>,
    pub status: RwSignal<AssetStatus>,
    pub purchase_date: RwSignal<NaiveDate>,
    pub warranty_expiry: RwSignal<Option<NaiveDate>>,
    pub vendor: RwSignal<String>,
    pub assigned_to: RwSignal<Option<UserId>>,
    pub specs: RwSignal<String>,
    pub notes: RwSignal<String>,
    // 表单不编辑历史，原样带回
    history: RwSignal<Vec<AssetHistory>>,
}

fn blank_to_none(text: String) -> Option<String> {
    (!text.trim().is_empty()).then_some(text)
}

impl AssetFormState {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            category: RwSignal::new(AssetCategory::default()),
            status: RwSignal::new(AssetStatus::default()),
            purchase_date: RwSignal::new(NaiveDate::default()),
            warranty_expiry: RwSignal::new(None),
            vendor: RwSignal::new(String::new()),
            assigned_to: RwSignal::new(None),
            specs: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
            history: RwSignal::new(Vec::new()),
        }
    }

    /// 用一条记录填充全部字段
    pub fn load(&self, asset: &Asset) {
        self.id.set(asset.id.clone());
        self.name.set(asset.name.clone());
        self.category.set(asset.category);
        self.status.set(asset.status);
        self.purchase_date.set(asset.purchase_date);
        self.warranty_expiry.set(asset.warranty_expiry);
        self.vendor.set(asset.vendor.clone());
        self.assigned_to.set(asset.assigned_to);
        self.specs.set(asset.specs.clone().unwrap_or_default());
        self.notes.set(asset.notes.clone().unwrap_or_default());
        self.history.set(asset.history.clone());
    }

    /// 将表单状态转换为请求对象；空白文本视为未填写
    pub fn to_asset(&self) -> Asset {
        Asset {
            id: self.id.get_untracked().trim().to_string(),
            name: self.name.get_untracked(),
            category: self.category.get_untracked(),
            status: self.status.get_untracked(),
            purchase_date: self.purchase_date.get_untracked(),
            assigned_to: self.assigned_to.get_untracked(),
            notes: blank_to_none(self.notes.get_untracked()),
            vendor: self.vendor.get_untracked(),
            warranty_expiry: self.warranty_expiry.get_untracked(),
            specs: blank_to_none(self.specs.get_untracked()),
            history: self.history.get_untracked(),
        }
        .normalized()
    }
}

impl Default for AssetFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_fields_become_none() {
        let asset = Asset {
            id: " IT-0042 ".into(),
            name: "ThinkPad X1".into(),
            category: AssetCategory::Laptop,
            status: AssetStatus::InUse,
            purchase_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            assigned_to: Some(7),
            notes: Some("   ".into()),
            vendor: "Lenovo".into(),
            warranty_expiry: None,
            specs: Some("32GB".into()),
            history: Vec::new(),
        };

        let form = AssetFormState::new();
        form.load(&asset);
        form.assigned_to.set(Some(0));
        let out = form.to_asset();

        assert_eq!(out.id, "IT-0042");
        assert_eq!(out.notes, None);
        assert_eq!(out.specs.as_deref(), Some("32GB"));
        // 0 是"未分配"选项
        assert_eq!(out.assigned_to, None);
    }
}
