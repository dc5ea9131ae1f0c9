//! 部门新建/编辑弹窗：只有名称一个字段

use assetdesk::i18n::translate;
use assetdesk::pages::departments::save_department;
use assetdesk::pages::{Editor, settle_save};
use assetdesk::shared::Department;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::modal::Modal;
use crate::data::use_inventory;
use crate::i18n::use_i18n;
use crate::web::BrowserPrompter;

#[component]
pub fn DepartmentDialog(editor: RwSignal<Editor<Department>>) -> impl IntoView {
    let i18n = use_i18n();
    let data = use_inventory();
    let api = use_api();

    let name = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);

    let is_open = Memo::new(move |_| editor.with(Editor::is_open));
    Effect::new(move |_| {
        if is_open.get() {
            name.set(editor.with_untracked(|e| e.editing().map(|d| d.name.clone()).unwrap_or_default()));
        }
    });

    let title = Signal::derive(move || {
        if editor.with(Editor::is_editing) {
            i18n.t("departments.modal.edit")
        } else {
            i18n.t("departments.modal.add")
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);

        let api = api.clone();
        let locale = i18n.locale_untracked();
        let value = name.get_untracked();
        spawn_local(async move {
            let editing = editor.with_untracked(|e| e.editing().cloned());
            let result = save_department(&api, locale, editing.as_ref(), &value).await;
            let failure = translate(locale, "departments.saveFailed");
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
                    <label for="department_name" class="label">
                        <span class="label-text">{move || i18n.t("departments.modal.name")}</span>
                    </label>
                    <input id="department_name" required
                        type="text"
                        on:input=move |ev| name.set(event_target_value(&ev))
                        prop:value=move || name.get()
                        class="input input-bordered w-full"
                    />
                </div>

                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| editor.update(Editor::close)>
                        {move || i18n.t("common.cancel")}
                    </button>
                    <button type="submit" disabled=move || saving.get() class="btn btn-primary">
                        {move || if saving.get() {
                            view! { <span class="loading loading-spinner"></span> {i18n.t("departments.modal.saving")} }.into_any()
                        } else if editor.with(Editor::is_editing) {
                            i18n.t("departments.modal.save").into_any()
                        } else {
                            i18n.t("departments.modal.create").into_any()
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
