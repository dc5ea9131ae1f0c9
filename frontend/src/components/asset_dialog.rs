//! 资产新建/编辑弹窗
//!
//! 同一个弹窗服务两种情况：`Editor` 中有记录时为编辑，否则为新建。

mod form_state;

use assetdesk::i18n::translate;
use assetdesk::pages::assets::{new_asset_draft, save_asset};
use assetdesk::pages::{Editor, settle_save};
use assetdesk::shared::{Asset, AssetCategory, AssetStatus, UserId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::form_state::AssetFormState;
use crate::api::use_api;
use crate::components::modal::Modal;
use crate::data::use_inventory;
use crate::i18n::use_i18n;
use crate::web::{BrowserPrompter, now};

#[component]
pub fn AssetDialog(editor: RwSignal<Editor<Asset>>) -> impl IntoView {
    let i18n = use_i18n();
    let data = use_inventory();
    let api = use_api();

    let form = AssetFormState::new();
    let (saving, set_saving) = signal(false);

    // 只在打开的那一刻载入；保存失败时保留用户的输入
    let is_open = Memo::new(move |_| editor.with(Editor::is_open));
    Effect::new(move |_| {
        if is_open.get() {
            editor.with_untracked(|e| match e.editing() {
                Some(asset) => form.load(asset),
                None => form.load(&new_asset_draft(now())),
            });
        }
    });

    let title = Signal::derive(move || {
        if editor.with(Editor::is_editing) {
            i18n.t("assets.modal.edit")
        } else {
            i18n.t("assets.modal.add")
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);

        let api = api.clone();
        let locale = i18n.locale_untracked();
        let draft = form.to_asset();
        spawn_local(async move {
            let editing = editor.with_untracked(|e| e.editing().cloned());
            let result = save_asset(&api, locale, editing.as_ref(), draft).await;
            let failure = translate(locale, "assets.saveFailed");
            let snapshot = editor
                .try_update(|e| settle_save(e, result, &BrowserPrompter, &failure))
                .flatten();
            data.apply(snapshot);
            set_saving.set(false);
        });
    };

    view! {
        <Modal
            open=is_open
            title=title
            on_close=move |_| editor.update(Editor::close)
            wide=true
        >
            <form on:submit=on_submit class="space-y-4">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="form-control">
                        <label for="asset_id" class="label">
                            <span class="label-text">{move || i18n.t("assets.modal.id")}</span>
                        </label>
                        <input id="asset_id" required
                            type="text"
                            // 编号创建后不可修改
                            disabled=move || editor.with(Editor::is_editing)
                            on:input=move |ev| form.id.set(event_target_value(&ev))
                            prop:value=move || form.id.get()
                            class="input input-bordered w-full font-mono"
                        />
                    </div>
                    <div class="form-control">
                        <label for="asset_name" class="label">
                            <span class="label-text">{move || i18n.t("assets.modal.name")}</span>
                        </label>
                        <input id="asset_name" required
                            type="text"
                            on:input=move |ev| form.name.set(event_target_value(&ev))
                            prop:value=move || form.name.get()
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{move || i18n.t("assets.modal.category")}</span>
                        </label>
                        <select
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                if let Ok(category) = event_target_value(&ev).parse::<AssetCategory>() {
                                    form.category.set(category);
                                }
                            }
                        >
                            {AssetCategory::ALL
                                .iter()
                                .copied()
                                .map(|category| view! {
                                    <option
                                        value=category.as_str()
                                        selected=move || form.category.get() == category
                                    >
                                        {category.as_str()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{move || i18n.t("assets.modal.status")}</span>
                        </label>
                        <select
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                if let Ok(status) = event_target_value(&ev).parse::<AssetStatus>() {
                                    form.status.set(status);
                                }
                            }
                        >
                            {AssetStatus::ALL
                                .iter()
                                .copied()
                                .map(|status| view! {
                                    <option
                                        value=status.as_str()
                                        selected=move || form.status.get() == status
                                    >
                                        {status.as_str()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-control">
                        <label for="purchase_date" class="label">
                            <span class="label-text">{move || i18n.t("assets.modal.purchaseDate")}</span>
                        </label>
                        <input id="purchase_date" required
                            type="date"
                            on:input=move |ev| {
                                if let Ok(date) = event_target_value(&ev).parse() {
                                    form.purchase_date.set(date);
                                }
                            }
                            prop:value=move || form.purchase_date.get().to_string()
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control">
                        <label for="warranty_expiry" class="label">
                            <span class="label-text">{move || i18n.t("assets.modal.warrantyExpiry")}</span>
                        </label>
                        <input id="warranty_expiry"
                            type="date"
                            on:input=move |ev| form.warranty_expiry.set(event_target_value(&ev).parse().ok())
                            prop:value=move || form.warranty_expiry.get().map(|d| d.to_string()).unwrap_or_default()
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label for="vendor" class="label">
                            <span class="label-text">{move || i18n.t("assets.modal.vendor")}</span>
                        </label>
                        <input id="vendor" required
                            type="text"
                            on:input=move |ev| form.vendor.set(event_target_value(&ev))
                            prop:value=move || form.vendor.get()
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{move || i18n.t("assets.modal.assignedTo")}</span>
                        </label>
                        <select
                            class="select select-bordered w-full"
                            on:change=move |ev| form.assigned_to.set(event_target_value(&ev).parse::<UserId>().ok())
                        >
                            <option value="" selected=move || form.assigned_to.get().is_none()>
                                {move || i18n.t("common.unassigned")}
                            </option>
                            <For
                                each=move || data.inventory.with(|inv| inv.users.clone())
                                key=|user| user.id
                                children=move |user| {
                                    let id = user.id;
                                    view! {
                                        <option
                                            value=id.map(|id| id.to_string()).unwrap_or_default()
                                            selected=move || id.is_some() && form.assigned_to.get() == id
                                        >
                                            {user.name}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                </div>

                <div class="form-control">
                    <label for="specs" class="label">
                        <span class="label-text">{move || i18n.t("assets.modal.specs")}</span>
                    </label>
                    <textarea id="specs"
                        rows="2"
                        on:input=move |ev| form.specs.set(event_target_value(&ev))
                        prop:value=move || form.specs.get()
                        class="textarea textarea-bordered w-full"
                    ></textarea>
                </div>
                <div class="form-control">
                    <label for="notes" class="label">
                        <span class="label-text">{move || i18n.t("assets.modal.notes")}</span>
                    </label>
                    <textarea id="notes"
                        rows="2"
                        on:input=move |ev| form.notes.set(event_target_value(&ev))
                        prop:value=move || form.notes.get()
                        class="textarea textarea-bordered w-full"
                    ></textarea>
                </div>

                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| editor.update(Editor::close)>
                        {move || i18n.t("common.cancel")}
                    </button>
                    <button type="submit" disabled=move || saving.get() class="btn btn-primary">
                        {move || if saving.get() {
                            view! { <span class="loading loading-spinner"></span> {i18n.t("assets.modal.saving")} }.into_any()
                        } else if editor.with(Editor::is_editing) {
                            i18n.t("assets.modal.save").into_any()
                        } else {
                            i18n.t("assets.modal.create").into_any()
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
