use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="flex items-center justify-center py-24">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">{move || i18n.t("common.notFound")}</p>
                <Link to=AppRoute::Dashboard class="btn btn-primary">
                    {move || i18n.t("common.backToDashboard")}
                </Link>
            </div>
        </div>
    }
}
