use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top bar with the sidebar toggle and the app title
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| ctx.toggle_left()
                title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
            >
                {icon("menu")}
            </button>
            <div class="top-header__brand">
                {icon("file-text")}
                <span class="top-header__title">"BizManager"</span>
            </div>
            <div class="top-header__section">
                {move || ctx.active_section.get().title()}
            </div>
        </div>
    }
}
