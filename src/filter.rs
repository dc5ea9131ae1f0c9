//! 列表页的内存过滤
//!
//! 文本搜索为大小写不敏感的子串匹配，与分类过滤条件做逻辑与；结果保持原有顺序。

use assetdesk_shared::{Asset, AssetStatus, Department, DepartmentId, User};

pub trait ListFilter<T> {
    fn matches(&self, item: &T) -> bool;

    fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// 资产：按名称搜索，按状态过滤（`None` 表示全部）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetFilter {
    pub search: String,
    pub status: Option<AssetStatus>,
}

impl ListFilter<Asset> for AssetFilter {
    fn matches(&self, asset: &Asset) -> bool {
        contains_ignore_case(&asset.name, &self.search)
            && self.status.is_none_or(|status| asset.status == status)
    }
}

/// 用户：按姓名或邮箱搜索，按部门过滤
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub search: String,
    pub department: Option<DepartmentId>,
}

impl ListFilter<User> for UserFilter {
    fn matches(&self, user: &User) -> bool {
        (contains_ignore_case(&user.name, &self.search) || contains_ignore_case(&user.email, &self.search))
            && self.department.is_none_or(|id| user.department_id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentFilter {
    pub search: String,
}

impl ListFilter<Department> for DepartmentFilter {
    fn matches(&self, department: &Department) -> bool {
        contains_ignore_case(&department.name, &self.search)
    }
}
