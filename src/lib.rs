//! IT 资产管理后台的客户端核心
//!
//! 与平台无关：网络、存储、跳转和对话框都通过 trait 注入，
//! 浏览器实现位于 `frontend` crate，测试使用内存实现。

pub mod api;
pub mod avatar;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod host;
pub mod i18n;
pub mod inventory;
pub mod pages;
pub mod preferences;
pub mod request;
pub mod session;
pub mod storage;

pub use api::ApiClient;
pub use config::AppConfig;
pub use error::{ApiError, ApiResult};
pub use i18n::Locale;
pub use inventory::Inventory;
pub use session::Session;

pub use assetdesk_shared as shared;
