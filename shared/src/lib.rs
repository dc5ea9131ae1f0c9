use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub mod date;
pub mod protocol;

pub use date::Timestamp;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// 新资产编号前缀
pub const ASSET_ID_PREFIX: &str = "IT-";

pub type UserId = i64;
pub type DepartmentId = i64;
pub type HistoryId = i64;

// =========================================================
// 枚举类型 (Wire Enums)
// =========================================================

/// 未知枚举值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

/// Lowercases and strips separators so that "In Use", "IN_USE" and "InUse" compare equal.
fn normalize_variant(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

// 线上以显示名传输（"In Use"、"Network Device"），解析时大小写和分隔符不敏感
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $display:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// 线上显示名
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $display),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_variant(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize_variant(v.as_str()) == wanted)
                    .ok_or_else(|| UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

wire_enum! {
    /// 资产状态
    AssetStatus, "asset status" {
        InUse => "In Use",
        InStorage => "In Storage",
        InRepair => "In Repair",
        Decommissioned => "Decommissioned",
    }
}

wire_enum! {
    /// 资产类别
    AssetCategory, "asset category" {
        Laptop => "Laptop",
        Desktop => "Desktop",
        Monitor => "Monitor",
        Phone => "Phone",
        Tablet => "Tablet",
        Keyboard => "Keyboard",
        Mouse => "Mouse",
        Printer => "Printer",
        Server => "Server",
        NetworkDevice => "Network Device",
        Other => "Other",
    }
}

impl Default for AssetStatus {
    fn default() -> Self {
        AssetStatus::InStorage
    }
}

impl Default for AssetCategory {
    fn default() -> Self {
        AssetCategory::Laptop
    }
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 资产历史记录（客户端只追加，不修改）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetHistory {
    #[serde(default)]
    pub id: Option<HistoryId>,
    pub date: NaiveDate,
    pub status: AssetStatus,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// 用户指定的编号，创建后不可修改
    pub id: String,
    pub name: String,
    pub category: AssetCategory,
    pub status: AssetStatus,
    pub purchase_date: NaiveDate,
    // 始终序列化（包括 null），服务端据此区分“未分配”和“未提供”
    #[serde(default)]
    pub assigned_to: Option<UserId>,
    #[serde(default)]
    pub notes: Option<String>,
    pub vendor: String,
    #[serde(default)]
    pub warranty_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub specs: Option<String>,
    #[serde(default)]
    pub history: Vec<AssetHistory>,
}

impl Asset {
    /// 将空的分配选择（0）归一化为显式的未分配
    pub fn normalized(mut self) -> Self {
        if matches!(self.assigned_to, Some(id) if id <= 0) {
            self.assigned_to = None;
        }
        self
    }

    pub fn is_assigned_to(&self, user_id: UserId) -> bool {
        self.assigned_to == Some(user_id)
    }

    /// 按日期倒序返回历史记录（显示时排序，不改变存储顺序）
    pub fn history_newest_first(&self) -> Vec<&AssetHistory> {
        let mut entries: Vec<&AssetHistory> = self.history.iter().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 创建前为空
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub department_id: DepartmentId,
    /// 服务端提供的冗余字段
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    /// 服务端计算，只读
    #[serde(default)]
    pub employee_count: u32,
}

/// 创建/更新部门时发送的字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDraft {
    pub name: String,
}

// =========================================================
// 认证模型 (Auth Models)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 登录响应，同时作为本地会话快照持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub token: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
}

/// 管理员资料更新请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfileUpdate {
    pub full_name: String,
    pub email: String,
    pub current_password: String,
    /// 仅在修改密码时发送
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    #[serde(default)]
    pub username: String,
    pub email: String,
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn laptop() -> Asset {
        Asset {
            id: "IT-0001".into(),
            name: "ThinkPad".into(),
            category: AssetCategory::Laptop,
            status: AssetStatus::InUse,
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            assigned_to: Some(0),
            notes: None,
            vendor: "Lenovo".into(),
            warranty_expiry: None,
            specs: None,
            history: vec![],
        }
    }

    #[test]
    fn status_uses_display_names_on_the_wire() {
        assert_eq!(json!(AssetStatus::InUse), json!("In Use"));
        assert_eq!(json!(AssetCategory::NetworkDevice), json!("Network Device"));
    }

    #[test]
    fn status_parsing_is_lenient() {
        assert_eq!("in use".parse::<AssetStatus>(), Ok(AssetStatus::InUse));
        assert_eq!("IN_REPAIR".parse::<AssetStatus>(), Ok(AssetStatus::InRepair));
        assert_eq!("NetworkDevice".parse::<AssetCategory>(), Ok(AssetCategory::NetworkDevice));
        assert!("Broken".parse::<AssetStatus>().is_err());
    }

    #[test]
    fn normalized_asset_sends_explicit_null_assignee() {
        let body = serde_json::to_value(laptop().normalized()).unwrap();
        assert_eq!(body["assignedTo"], serde_json::Value::Null);
        assert_eq!(body["purchaseDate"], json!("2024-01-15"));
    }

    #[test]
    fn history_is_sorted_newest_first_without_reordering_storage() {
        let mut asset = laptop();
        for (day, status) in [(1, AssetStatus::InStorage), (20, AssetStatus::InRepair), (5, AssetStatus::InUse)] {
            asset.history.push(AssetHistory {
                id: None,
                date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
                status,
                user_id: None,
                notes: None,
            });
        }

        let statuses: Vec<_> = asset.history_newest_first().iter().map(|h| h.status).collect();
        assert_eq!(
            statuses,
            vec![AssetStatus::InRepair, AssetStatus::InUse, AssetStatus::InStorage]
        );
        assert_eq!(asset.history[0].status, AssetStatus::InStorage);
    }

    #[test]
    fn user_without_id_omits_it() {
        let user = User {
            id: None,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            department_id: 2,
            department_name: None,
        };
        let body = serde_json::to_value(&user).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["departmentId"], json!(2));
    }
}
