//! 共享数据快照
//!
//! 资产、用户、部门三个集合在登录后加载一次，之后每次写操作成功都整体替换。

use std::sync::Arc;

use assetdesk::{Inventory, Session};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BrowserApi;
use crate::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct InventoryContext {
    pub inventory: RwSignal<Inventory>,
    pub loading: RwSignal<bool>,
}

impl InventoryContext {
    fn new() -> Self {
        Self {
            inventory: RwSignal::new(Inventory::default()),
            loading: RwSignal::new(false),
        }
    }

    /// 重新拉取全部集合；失败时保留旧快照（错误已由核心库记录）
    pub fn reload(&self, api: Arc<BrowserApi>) {
        let ctx = *self;
        ctx.loading.set(true);
        spawn_local(async move {
            if let Ok(inventory) = Inventory::load(&api).await {
                ctx.inventory.set(inventory);
            }
            ctx.loading.set(false);
        });
    }

    /// 写操作返回的新快照；`None` 表示重新加载失败，保留旧快照
    pub fn apply(&self, snapshot: Option<Inventory>) {
        if let Some(inventory) = snapshot {
            self.inventory.set(inventory);
        }
    }
}

/// 创建数据上下文：认证后加载，注销后清空
pub fn provide_inventory(auth: AuthContext, api: Arc<BrowserApi>) -> InventoryContext {
    let ctx = InventoryContext::new();
    provide_context(ctx);

    // 资料更新也会改写会话，只在登录状态切换时重新加载
    let is_authenticated = Memo::new(move |_| auth.session.with(Session::is_authenticated));
    Effect::new(move |_| {
        if is_authenticated.get() {
            ctx.reload(api.clone());
        } else {
            ctx.inventory.set(Inventory::default());
        }
    });

    ctx
}

pub fn use_inventory() -> InventoryContext {
    use_context::<InventoryContext>().expect("InventoryContext should be provided")
}
