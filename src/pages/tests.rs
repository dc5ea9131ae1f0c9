use super::assets::{delete_asset, history_rows, history_title, new_asset_draft, save_asset};
use super::departments::{delete_department, save_department};
use super::settings::{ProfileForm, ProfileInvalid, ProfileOutcome, submit_profile};
use super::users::{delete_user, new_user_draft, save_user};
use super::*;
use crate::api::tests::{client_with_token, url};
use crate::filter::tests::{asset, user};
use crate::host::testing::ScriptedPrompter;
use crate::inventory::tests::mock_lists;
use crate::request::HttpMethod;
use crate::session::Session;
use crate::storage::{KEY_AUTH_TOKEN, KEY_SESSION_USER, Storage};
use assetdesk_shared::{AssetHistory, AssetStatus, Department, SessionUser, Timestamp};
use chrono::NaiveDate;
use serde_json::json;

// =========================================================
// 辅助函数
// =========================================================

fn department(id: i64, name: &str, employee_count: u32) -> Department {
    Department {
        id,
        name: name.into(),
        employee_count,
    }
}

fn empty_lists(client: &crate::request::MockHttpClient) {
    mock_lists(client, json!([]), json!([]), json!([]));
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =========================================================
// Editor / settle_save
// =========================================================

#[test]
fn test_editor_new_and_edit() {
    let mut editor: Editor<i32> = Editor::default();
    assert!(!editor.is_open());

    editor.open_edit(7);
    assert!(editor.is_open());
    assert_eq!(editor.editing(), Some(&7));

    editor.open_new();
    assert!(editor.is_open());
    assert!(!editor.is_editing());

    editor.close();
    assert!(!editor.is_open());
}

#[test]
fn test_failed_save_alerts_and_keeps_editor_open() {
    let prompter = ScriptedPrompter::default();
    let mut editor = Editor::default();
    editor.open_edit("IT-1");

    let result = Err(ApiError::Http {
        status: 500,
        message: "boom".into(),
    });
    assert_eq!(settle_save(&mut editor, result, &prompter, "Failed to save asset. Please try again."), None);
    assert!(editor.is_open());
    assert_eq!(editor.editing(), Some(&"IT-1"));
    assert_eq!(*prompter.alerts.borrow(), vec!["Failed to save asset. Please try again.".to_string()]);

    let inventory = Inventory::default();
    assert_eq!(settle_save(&mut editor, Ok(Some(inventory.clone())), &prompter, "x"), Some(inventory));
    assert!(!editor.is_open());
}

#[test]
fn test_validation_error_shows_its_own_message() {
    let prompter = ScriptedPrompter::default();
    let mut editor: Editor<()> = Editor::default();
    editor.open_new();

    settle_save(&mut editor, Err(ApiError::validation("Please fill")), &prompter, "generic");
    assert_eq!(*prompter.alerts.borrow(), vec!["Please fill".to_string()]);
    assert!(editor.is_open());
}

// =========================================================
// Assets
// =========================================================

#[test]
fn test_new_asset_draft_defaults() {
    // 2024-03-10T23:59:59.999Z
    let draft = new_asset_draft(Timestamp::new(1_710_115_199_999));
    assert_eq!(draft.id, "IT-9999");
    assert_eq!(draft.purchase_date, date(2024, 3, 10));
    assert_eq!(draft.warranty_expiry, Some(date(2026, 3, 10)));
    assert_eq!(draft.status, AssetStatus::InStorage);
    assert_eq!(draft.category, assetdesk_shared::AssetCategory::Laptop);
    assert_eq!(draft.assigned_to, None);
    assert!(draft.name.is_empty());
}

#[tokio::test]
async fn test_create_asset_then_reload_shows_it() {
    let (client, _, _) = client_with_token(Some("t"));
    client
        .http()
        .mock_response(HttpMethod::Post, &url("/assets"), 201, json!({
            "id": "IT-0042", "name": "XPS", "category": "Laptop", "status": "In Storage",
            "purchaseDate": "2024-03-10", "vendor": "Dell"
        }));
    mock_lists(
        client.http(),
        json!([{ "id": "IT-0042", "name": "XPS", "category": "Laptop", "status": "In Storage",
                 "purchaseDate": "2024-03-10", "vendor": "Dell" }]),
        json!([]),
        json!([]),
    );

    let mut draft = new_asset_draft(Timestamp::new(1_710_115_190_042));
    draft.name = "XPS".into();
    draft.vendor = "Dell".into();
    draft.assigned_to = Some(0);

    let inventory = save_asset(&client, Locale::En, None, draft).await.unwrap().unwrap();
    assert!(inventory.asset("IT-0042").is_some());

    let reqs = client.http().requests.borrow();
    let body: serde_json::Value = serde_json::from_str(reqs[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["assignedTo"], serde_json::Value::Null);
    assert_eq!(reqs.len(), 4);
}

#[tokio::test]
async fn test_update_asset_uses_original_id() {
    let (client, _, _) = client_with_token(Some("t"));
    let original = asset("IT-1", "Old", AssetStatus::InUse);
    client
        .http()
        .mock_response(HttpMethod::Put, &url("/assets/IT-1"), 200, json!(original.clone()));
    empty_lists(client.http());

    let mut draft = original.clone();
    draft.name = "New".into();
    save_asset(&client, Locale::En, Some(&original), draft).await.unwrap();
    assert_eq!(client.http().count(HttpMethod::Put, &url("/assets/IT-1")), 1);
}

#[tokio::test]
async fn test_no_content_update_counts_as_saved_and_reloads() {
    let (client, _, _) = client_with_token(Some("t"));
    let original = asset("IT-1", "Old", AssetStatus::InUse);
    client.http().mock_raw(HttpMethod::Put, &url("/assets/IT-1"), 204, "");
    let mut renamed = original.clone();
    renamed.name = "New".into();
    mock_lists(client.http(), json!([renamed.clone()]), json!([]), json!([]));

    let inventory = save_asset(&client, Locale::En, Some(&original), renamed)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(inventory.asset("IT-1").map(|a| a.name.as_str()), Some("New"));
    assert_eq!(client.http().count(HttpMethod::Get, &url("/assets")), 1);

    let prompter = ScriptedPrompter::default();
    let mut editor = Editor::default();
    editor.open_edit(original);
    let snapshot = settle_save(&mut editor, Ok(Some(inventory)), &prompter, "failed");
    assert!(snapshot.is_some());
    assert!(!editor.is_open());
    assert!(prompter.alerts.borrow().is_empty());
}

#[tokio::test]
async fn test_missing_required_fields_never_reach_network() {
    let (client, _, _) = client_with_token(Some("t"));
    let draft = new_asset_draft(Timestamp::new(0));

    let err = save_asset(&client, Locale::En, None, draft).await.unwrap_err();
    assert_eq!(err, ApiError::Validation("Please fill in all required fields.".into()));

    let err = save_department(&client, Locale::Fr, None, "   ").await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let err = save_user(&client, Locale::En, None, new_user_draft(&[])).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    assert!(client.http().requests.borrow().is_empty());
}

#[tokio::test]
async fn test_delete_asset_requires_confirmation() {
    let (client, _, _) = client_with_token(Some("t"));
    let prompter = ScriptedPrompter::answering([false]);

    let outcome = delete_asset(&client, &prompter, Locale::En, "IT-1").await;
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(
        *prompter.confirms.borrow(),
        vec!["Are you sure you want to delete this asset?".to_string()]
    );
    assert!(client.http().requests.borrow().is_empty());
}

#[tokio::test]
async fn test_delete_failure_is_alerted() {
    let (client, _, _) = client_with_token(Some("t"));
    client.http().mock_raw(HttpMethod::Delete, &url("/assets/IT-1"), 500, "");
    let prompter = ScriptedPrompter::answering([true]);

    let outcome = delete_asset(&client, &prompter, Locale::En, "IT-1").await;
    assert!(matches!(outcome, DeleteOutcome::Failed(ApiError::Http { status: 500, .. })));
    assert_eq!(
        *prompter.alerts.borrow(),
        vec!["Failed to delete asset. Please try again.".to_string()]
    );
}

#[test]
fn test_history_rows_newest_first_with_names() {
    let mut item = asset("IT-7", "MacBook", AssetStatus::InUse);
    item.history = vec![
        AssetHistory {
            id: Some(1),
            date: date(2023, 1, 5),
            status: AssetStatus::InStorage,
            user_id: None,
            notes: Some(String::new()),
        },
        AssetHistory {
            id: Some(2),
            date: date(2023, 6, 1),
            status: AssetStatus::InUse,
            user_id: Some(3),
            notes: Some("Issued".into()),
        },
        AssetHistory {
            id: Some(3),
            date: date(2023, 3, 1),
            status: AssetStatus::InRepair,
            user_id: Some(99),
            notes: None,
        },
    ];
    let inventory = Inventory {
        users: vec![user(3, "Ada Lovelace", "ada@corp.io", 1)],
        ..Inventory::default()
    };

    let rows = history_rows(&item, &inventory);
    assert_eq!(rows[0].user_label(), "Ada Lovelace");
    assert_eq!(rows[0].notes.as_deref(), Some("Issued"));
    assert_eq!(rows[1].status, AssetStatus::InRepair);
    assert_eq!(rows[1].user_label(), "-");
    assert_eq!(rows[2].notes, None);

    assert_eq!(history_title(Locale::En, &item), "History for MacBook (IT-7)");
}

// =========================================================
// Users
// =========================================================

#[test]
fn test_new_user_draft_preselects_first_department() {
    let departments = vec![department(4, "Ops", 0), department(2, "Eng", 1)];
    assert_eq!(new_user_draft(&departments).department_id, 4);
    assert_eq!(new_user_draft(&[]).department_id, 0);
}

#[tokio::test]
async fn test_user_with_assets_cannot_be_deleted() {
    let (client, _, _) = client_with_token(Some("t"));
    let prompter = ScriptedPrompter::answering([true]);
    let mut laptop = asset("IT-1", "Laptop", AssetStatus::InUse);
    laptop.assigned_to = Some(5);
    let inventory = Inventory {
        assets: vec![laptop],
        users: vec![user(5, "Ada", "ada@corp.io", 1)],
        departments: vec![],
    };

    let outcome = delete_user(&client, &prompter, Locale::En, &inventory, 5).await;
    assert_eq!(outcome, DeleteOutcome::Blocked(DeleteBlocked::UserHasAssets { count: 1 }));
    assert_eq!(
        *prompter.alerts.borrow(),
        vec!["Cannot delete user. Please reassign their assets first.".to_string()]
    );
    assert!(prompter.confirms.borrow().is_empty());
    assert!(client.http().requests.borrow().is_empty());
}

#[tokio::test]
async fn test_update_user_sends_put_and_reloads() {
    let (client, _, _) = client_with_token(Some("t"));
    let ada = user(5, "Ada", "ada@corp.io", 1);
    client.http().mock_response(HttpMethod::Put, &url("/users/5"), 200, json!(ada.clone()));
    empty_lists(client.http());

    let mut draft = ada.clone();
    draft.email = "ada@new.io".into();
    let reloaded = save_user(&client, Locale::En, Some(&ada), draft).await.unwrap();
    assert_eq!(reloaded, Some(Inventory::default()));
    assert_eq!(client.http().count(HttpMethod::Put, &url("/users/5")), 1);
    assert_eq!(client.http().count(HttpMethod::Get, &url("/users")), 1);
}

// =========================================================
// Departments
// =========================================================

#[tokio::test]
async fn test_department_with_employees_is_blocked_without_network() {
    let (client, _, _) = client_with_token(Some("t"));
    let prompter = ScriptedPrompter::answering([true]);
    let inventory = Inventory {
        departments: vec![department(1, "Sales", 3)],
        ..Inventory::default()
    };

    let outcome = delete_department(&client, &prompter, Locale::En, &inventory, 1).await;
    assert_eq!(
        outcome,
        DeleteOutcome::Blocked(DeleteBlocked::DepartmentHasEmployees {
            name: "Sales".into(),
            count: 3
        })
    );
    assert_eq!(
        *prompter.alerts.borrow(),
        vec!["Cannot delete Sales. Please reassign 3 employee(s) first.".to_string()]
    );
    assert!(client.http().requests.borrow().is_empty());
}

#[tokio::test]
async fn test_empty_department_is_deleted_and_reloaded() {
    let (client, _, _) = client_with_token(Some("t"));
    client.http().mock_raw(HttpMethod::Delete, &url("/departments/2"), 204, "");
    mock_lists(client.http(), json!([]), json!([]), json!([{ "id": 1, "name": "Sales", "employeeCount": 3 }]));
    let prompter = ScriptedPrompter::answering([true]);
    let inventory = Inventory {
        departments: vec![department(1, "Sales", 3), department(2, "Legal", 0)],
        ..Inventory::default()
    };

    let outcome = delete_department(&client, &prompter, Locale::En, &inventory, 2).await;
    let DeleteOutcome::Deleted(Some(reloaded)) = outcome else {
        panic!("expected a reloaded inventory");
    };
    assert_eq!(reloaded.departments.len(), 1);
    assert_eq!(
        *prompter.confirms.borrow(),
        vec!["Are you sure you want to delete Legal?".to_string()]
    );
    assert_eq!(client.http().count(HttpMethod::Delete, &url("/departments/2")), 1);
}

#[tokio::test]
async fn test_delete_succeeds_even_if_reload_fails() {
    let (client, _, _) = client_with_token(Some("t"));
    client.http().mock_raw(HttpMethod::Delete, &url("/departments/2"), 204, "");
    let prompter = ScriptedPrompter::answering([true]);
    let inventory = Inventory {
        departments: vec![department(2, "Legal", 0)],
        ..Inventory::default()
    };

    let outcome = delete_department(&client, &prompter, Locale::En, &inventory, 2).await;
    assert_eq!(outcome, DeleteOutcome::Deleted(None));
    assert!(prompter.alerts.borrow().is_empty());
}

// =========================================================
// Settings
// =========================================================

fn admin() -> SessionUser {
    SessionUser {
        token: "t".into(),
        username: "admin".into(),
        email: "admin@corp.io".into(),
        full_name: "Admin".into(),
    }
}

#[test]
fn test_profile_validation() {
    let mut form = ProfileForm::from_user(&admin());
    assert_eq!(form.validate(), Err(ProfileInvalid::MissingCurrentPassword));

    form.current_password = "old".into();
    form.new_password = "new-secret".into();
    form.confirm_password = "typo".into();
    assert_eq!(form.validate(), Err(ProfileInvalid::PasswordMismatch));

    form.confirm_password = "new-secret".into();
    let update = form.validate().unwrap();
    assert_eq!(update.password.as_deref(), Some("new-secret"));
    assert_eq!(update.full_name, "Admin");
}

#[tokio::test]
async fn test_invalid_profile_is_rejected_locally() {
    let (client, _, _) = client_with_token(Some("t"));
    let session = Session::Authenticated(admin());
    let form = ProfileForm {
        new_password: "a".into(),
        confirm_password: "b".into(),
        ..ProfileForm::from_user(&admin())
    };

    let err = submit_profile(&client, &session, Locale::En, &form).await.unwrap_err();
    assert_eq!(err, ApiError::Validation("Passwords do not match".into()));
    assert!(client.http().requests.borrow().is_empty());
}

#[tokio::test]
async fn test_profile_update_merges_into_session() {
    let (client, storage, _) = client_with_token(Some("t"));
    storage.set(KEY_SESSION_USER, &serde_json::to_string(&admin()).unwrap());
    client.http().mock_response(
        HttpMethod::Put,
        &url("/admin/profile"),
        200,
        json!({ "username": "admin", "email": "boss@corp.io", "fullName": "The Boss" }),
    );

    let session = Session::rehydrate(storage.as_ref());
    let form = ProfileForm {
        full_name: "The Boss".into(),
        email: "boss@corp.io".into(),
        current_password: "secret".into(),
        ..ProfileForm::default()
    };
    let outcome = submit_profile(&client, &session, Locale::En, &form).await.unwrap();
    let ProfileOutcome::Updated(updated) = outcome else {
        panic!("expected Updated");
    };
    assert_eq!(updated.user().map(|u| u.full_name.as_str()), Some("The Boss"));
    assert_eq!(Session::rehydrate(storage.as_ref()), updated);

    let reqs = client.http().requests.borrow();
    assert!(!reqs[0].body.as_deref().unwrap().contains("\"password\""));
}

#[tokio::test]
async fn test_profile_update_without_body_keeps_submitted_values() {
    let (client, storage, _) = client_with_token(Some("t"));
    storage.set(KEY_SESSION_USER, &serde_json::to_string(&admin()).unwrap());
    client.http().mock_raw(HttpMethod::Put, &url("/admin/profile"), 204, "");

    let session = Session::rehydrate(storage.as_ref());
    let form = ProfileForm {
        full_name: "Night Shift".into(),
        email: "night@corp.io".into(),
        current_password: "secret".into(),
        ..ProfileForm::default()
    };
    let outcome = submit_profile(&client, &session, Locale::En, &form).await.unwrap();
    let ProfileOutcome::Updated(updated) = outcome else {
        panic!("expected Updated");
    };
    assert_eq!(updated.user().map(|u| u.email.as_str()), Some("night@corp.io"));
    assert_eq!(updated.user().map(|u| u.full_name.as_str()), Some("Night Shift"));
}

#[tokio::test]
async fn test_password_change_forces_logout() {
    let (client, storage, _) = client_with_token(Some("t"));
    storage.set(KEY_SESSION_USER, &serde_json::to_string(&admin()).unwrap());
    client.http().mock_response(
        HttpMethod::Put,
        &url("/admin/profile"),
        200,
        json!({ "username": "admin", "email": "admin@corp.io", "fullName": "Admin" }),
    );

    let session = Session::rehydrate(storage.as_ref());
    let form = ProfileForm {
        current_password: "old".into(),
        new_password: "new".into(),
        confirm_password: "new".into(),
        ..ProfileForm::from_user(&admin())
    };
    let outcome = submit_profile(&client, &session, Locale::En, &form).await.unwrap();
    assert_eq!(outcome, ProfileOutcome::PasswordChanged);
    assert_eq!(storage.get(KEY_AUTH_TOKEN), None);
    assert_eq!(storage.get(KEY_SESSION_USER), None);
}
