//! 仪表盘统计
//!
//! 全部由内存快照计算，不访问网络。

use assetdesk_shared::{Asset, AssetStatus};

use crate::inventory::Inventory;

/// 最近资产表的行数
pub const RECENT_ASSET_LIMIT: usize = 5;

/// 状态图配色
pub fn status_color(status: AssetStatus) -> &'static str {
    match status {
        AssetStatus::InUse => "#10b981",
        AssetStatus::InStorage => "#3b82f6",
        AssetStatus::InRepair => "#f59e0b",
        AssetStatus::Decommissioned => "#ef4444",
    }
}

/// 部门图配色，按序循环使用
pub const DEPARTMENT_COLORS: [&str; 7] = [
    "#3b82f6", "#10b981", "#ef4444", "#f59e0b", "#8b5cf6", "#ec4899", "#64748b",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_assets: usize,
    pub assets_in_use: usize,
    pub assets_in_repair: usize,
    pub total_users: usize,
}

impl DashboardStats {
    pub fn compute(inventory: &Inventory) -> Self {
        let count = |status| inventory.assets.iter().filter(|a| a.status == status).count();
        Self {
            total_assets: inventory.assets.len(),
            assets_in_use: count(AssetStatus::InUse),
            assets_in_repair: count(AssetStatus::InRepair),
            total_users: inventory.users.len(),
        }
    }
}

/// 每个状态的资产数，按首次出现的顺序
pub fn status_breakdown(assets: &[Asset]) -> Vec<(AssetStatus, usize)> {
    let mut counts: Vec<(AssetStatus, usize)> = Vec::new();
    for asset in assets {
        match counts.iter_mut().find(|(status, _)| *status == asset.status) {
            Some((_, n)) => *n += 1,
            None => counts.push((asset.status, 1)),
        }
    }
    counts
}

/// 部门图中的分组
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentBucket {
    Named(String),
    /// 未分配，或分配给了不在列表中的用户
    Unassigned,
    /// 用户没有部门名
    Unknown,
}

/// 按持有人所在部门统计资产，数量降序（并列时保持首次出现顺序）
pub fn department_breakdown(inventory: &Inventory) -> Vec<(DepartmentBucket, usize)> {
    let mut counts: Vec<(DepartmentBucket, usize)> = Vec::new();
    for asset in &inventory.assets {
        let bucket = match asset.assigned_to.and_then(|id| inventory.user(id)) {
            None => DepartmentBucket::Unassigned,
            Some(user) => match user.department_name.as_deref().filter(|n| !n.is_empty()) {
                Some(name) => DepartmentBucket::Named(name.to_string()),
                None => DepartmentBucket::Unknown,
            },
        };
        match counts.iter_mut().find(|(b, _)| *b == bucket) {
            Some((_, n)) => *n += 1,
            None => counts.push((bucket, 1)),
        }
    }
    // sort_by 是稳定排序
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// 最近购买的资产
pub fn recent_assets(assets: &[Asset], limit: usize) -> Vec<&Asset> {
    let mut sorted: Vec<&Asset> = assets.iter().collect();
    sorted.sort_by(|a, b| b.purchase_date.cmp(&a.purchase_date));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::{asset, user};
    use chrono::NaiveDate;

    #[test]
    fn stats_count_statuses_and_users() {
        let inventory = Inventory {
            assets: vec![
                asset("1", "a", AssetStatus::InUse),
                asset("2", "b", AssetStatus::InRepair),
                asset("3", "c", AssetStatus::InUse),
                asset("4", "d", AssetStatus::Decommissioned),
            ],
            users: vec![user(1, "Ada", "a@x.io", 1)],
            departments: vec![],
        };
        assert_eq!(
            DashboardStats::compute(&inventory),
            DashboardStats {
                total_assets: 4,
                assets_in_use: 2,
                assets_in_repair: 1,
                total_users: 1,
            }
        );
    }

    #[test]
    fn status_breakdown_keeps_first_seen_order() {
        let assets = vec![
            asset("1", "a", AssetStatus::InRepair),
            asset("2", "b", AssetStatus::InUse),
            asset("3", "c", AssetStatus::InRepair),
        ];
        assert_eq!(
            status_breakdown(&assets),
            vec![(AssetStatus::InRepair, 2), (AssetStatus::InUse, 1)]
        );
    }

    #[test]
    fn department_breakdown_buckets() {
        let mut eng = user(1, "Ada", "a@x.io", 1);
        eng.department_name = Some("Engineering".into());
        let nameless = user(2, "Bob", "b@x.io", 2);

        let assign = |id: &str, to: Option<i64>| {
            let mut a = asset(id, id, AssetStatus::InUse);
            a.assigned_to = to;
            a
        };
        let inventory = Inventory {
            assets: vec![
                assign("1", Some(2)),
                assign("2", Some(1)),
                assign("3", None),
                assign("4", Some(1)),
                assign("5", Some(42)),
                assign("6", Some(1)),
            ],
            users: vec![eng, nameless],
            departments: vec![],
        };

        assert_eq!(
            department_breakdown(&inventory),
            vec![
                (DepartmentBucket::Named("Engineering".into()), 3),
                (DepartmentBucket::Unassigned, 2),
                (DepartmentBucket::Unknown, 1),
            ]
        );
    }

    #[test]
    fn recent_assets_newest_purchase_first() {
        let mut assets: Vec<Asset> = (1..=7)
            .map(|day| {
                let mut a = asset(&format!("IT-{}", day), "x", AssetStatus::InUse);
                a.purchase_date = NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
                a
            })
            .collect();
        assets.swap(0, 6);

        let ids: Vec<_> = recent_assets(&assets, RECENT_ASSET_LIMIT)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["IT-7", "IT-6", "IT-5", "IT-4", "IT-3"]);
    }
}
