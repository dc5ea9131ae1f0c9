//! 用户新建/编辑弹窗

use assetdesk::i18n::translate;
use assetdesk::pages::users::{new_user_draft, save_user};
use assetdesk::pages::{Editor, settle_save};
use assetdesk::shared::{DepartmentId, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::modal::Modal;
use crate::data::use_inventory;
use crate::i18n::use_i18n;
use crate::web::BrowserPrompter;

#[component]
pub fn UserDialog(editor: RwSignal<Editor<User>>) -> impl IntoView {
    let i18n = use_i18n();
    let data = use_inventory();
    let api = use_api();

    // 整条记录作为草稿，提交时原样发送
    let draft = RwSignal::new(new_user_draft(&[]));
    let (saving, set_saving) = signal(false);

    let is_open = Memo::new(move |_| editor.with(Editor::is_open));
    Effect::new(move |_| {
        if is_open.get() {
            let next = editor.with_untracked(|e| e.editing().cloned()).unwrap_or_else(|| {
                data.inventory.with_untracked(|inv| new_user_draft(&inv.departments))
            });
            draft.set(next);
        }
    });

    let title = Signal::derive(move || {
        if editor.with(Editor::is_editing) {
            i18n.t("users.modal.edit")
        } else {
            i18n.t("users.modal.add")
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);

        let api = api.clone();
        let locale = i18n.locale_untracked();
        let user = draft.get_untracked();
        spawn_local(async move {
            let editing = editor.with_untracked(|e| e.editing().cloned());
            let result = save_user(&api, locale, editing.as_ref(), user).await;
            let failure = translate(locale, "users.saveFailed");
            let snapshot = editor
                .try_update(|e| settle_save(e, result, &BrowserPrompter, &failure))
                .flatten();
            data.apply(snapshot);
            set_saving.set(false);
        });
    };

    view! {
        <Modal open=is_open title=title on_close=move |_| editor.update(Editor::close)>
            <form on:submit=on_submit class="space-y-4">
                <div class="form-control">
                    <label for="user_name" class="label">
                        <span class="label-text">{move || i18n.t("users.modal.name")}</span>
                    </label>
                    <input id="user_name" required
                        type="text"
                        on:input=move |ev| draft.update(|u| u.name = event_target_value(&ev))
                        prop:value=move || draft.with(|u| u.name.clone())
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="form-control">
                    <label for="user_email" class="label">
                        <span class="label-text">{move || i18n.t("users.modal.email")}</span>
                    </label>
                    <input id="user_email" required
                        type="email"
                        on:input=move |ev| draft.update(|u| u.email = event_target_value(&ev))
                        prop:value=move || draft.with(|u| u.email.clone())
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="form-control">
                    <label class="label">
                        <span class="label-text">{move || i18n.t("users.modal.department")}</span>
                    </label>
                    <select
                        class="select select-bordered w-full"
                        required
                        on:change=move |ev| {
                            if let Ok(id) = event_target_value(&ev).parse::<DepartmentId>() {
                                draft.update(|u| u.department_id = id);
                            }
                        }
                    >
                        {move || data.inventory.with(|inv| {
                            inv.departments
                                .iter()
                                .map(|d| {
                                    let id = d.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || draft.with(|u| u.department_id == id)
                                        >
                                            {d.name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        })}
                    </select>
                </div>

                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| editor.update(Editor::close)>
                        {move || i18n.t("common.cancel")}
                    </button>
                    <button type="submit" disabled=move || saving.get() class="btn btn-primary">
                        {move || if saving.get() {
                            view! { <span class="loading loading-spinner"></span> {i18n.t("users.modal.saving")} }.into_any()
                        } else if editor.with(Editor::is_editing) {
                            i18n.t("users.modal.save").into_any()
                        } else {
                            i18n.t("users.modal.create").into_any()
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
