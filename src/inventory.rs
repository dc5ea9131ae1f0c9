//! 三个主集合的内存快照
//!
//! 登录后加载一次；之后每次增删改都整体重新加载，不做本地合并。

use assetdesk_shared::{Asset, Department, DepartmentId, User, UserId};
use tracing::{debug, error};

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    pub assets: Vec<Asset>,
    pub users: Vec<User>,
    pub departments: Vec<Department>,
}

impl Inventory {
    /// 并发拉取资产、用户、部门；任何一个失败则整体失败
    pub async fn load<C: HttpClient>(api: &ApiClient<C>) -> ApiResult<Self> {
        let assets = api.assets();
        let users = api.users();
        let departments = api.departments();

        let result = futures::try_join!(assets.list(None, None), users.list(), departments.list());
        match result {
            Ok((assets, users, departments)) => {
                debug!(
                    assets = assets.len(),
                    users = users.len(),
                    departments = departments.len(),
                    "inventory loaded"
                );
                Ok(Self {
                    assets,
                    users,
                    departments,
                })
            }
            Err(e) => {
                error!(error = %e, "failed to load data");
                Err(e)
            }
        }
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == Some(id))
    }

    pub fn department(&self, id: DepartmentId) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// 用户名；未找到时为 `None`
    pub fn user_name(&self, id: Option<UserId>) -> Option<&str> {
        id.and_then(|id| self.user(id)).map(|u| u.name.as_str())
    }

    pub fn assets_assigned_to(&self, user_id: UserId) -> usize {
        self.assets.iter().filter(|a| a.is_assigned_to(user_id)).count()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::tests::{client_with_token, url};
    use crate::error::ApiError;
    use crate::request::{HttpMethod, MockHttpClient};
    use serde_json::{Value, json};

    pub fn mock_lists(client: &MockHttpClient, assets: Value, users: Value, departments: Value) {
        client.mock_response(HttpMethod::Get, &url("/assets"), 200, assets);
        client.mock_response(HttpMethod::Get, &url("/users"), 200, users);
        client.mock_response(HttpMethod::Get, &url("/departments"), 200, departments);
    }

    #[tokio::test]
    async fn loads_all_three_collections() {
        let (client, _, _) = client_with_token(Some("t"));
        mock_lists(
            client.http(),
            json!([{ "id": "IT-1", "name": "Dell", "category": "Laptop", "status": "In Use",
                     "purchaseDate": "2024-01-01", "assignedTo": 7, "vendor": "Dell", "history": [] }]),
            json!([{ "id": 7, "name": "Ada", "email": "ada@corp.io", "departmentId": 1, "departmentName": "Eng" }]),
            json!([{ "id": 1, "name": "Eng", "employeeCount": 1 }]),
        );

        let inventory = Inventory::load(&client).await.unwrap();
        assert_eq!(inventory.assets.len(), 1);
        assert_eq!(inventory.user_name(inventory.assets[0].assigned_to), Some("Ada"));
        assert_eq!(inventory.assets_assigned_to(7), 1);
        assert_eq!(inventory.department(1).map(|d| d.employee_count), Some(1));
        assert_eq!(client.http().requests.borrow().len(), 3);
    }

    #[tokio::test]
    async fn any_failure_fails_the_load() {
        let (client, _, _) = client_with_token(Some("t"));
        client.http().mock_response(HttpMethod::Get, &url("/assets"), 200, json!([]));
        client.http().mock_raw(HttpMethod::Get, &url("/users"), 500, "boom");
        client.http().mock_response(HttpMethod::Get, &url("/departments"), 200, json!([]));

        let err = Inventory::load(&client).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: "boom".into()
            }
        );
    }
}
