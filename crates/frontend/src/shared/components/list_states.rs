//! Placeholders shown instead of a table while loading, after a failed
//! fetch, and for an empty list

use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Skeleton rows while a fetch is in flight
#[component]
pub fn LoadingState(#[prop(optional, default = 5)] rows: usize) -> impl IntoView {
    view! {
        <div class="list-state list-state--loading" aria-busy="true">
            {(0..rows)
                .map(|_| view! { <div class="list-state__skeleton-row"></div> })
                .collect_view()}
        </div>
    }
}

/// Failure message with a retry button
#[component]
pub fn ErrorState(
    #[prop(into)]
    message: String,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="list-state list-state--error" role="alert">
            <div class="list-state__icon">{icon("alert-triangle")}</div>
            <h3 class="list-state__title">"Something went wrong"</h3>
            <p class="list-state__message">{message}</p>
            <Button
                icon_name="refresh"
                on_click=Callback::new(move |_| on_retry.run(()))
            >
                "Try Again"
            </Button>
        </div>
    }
}

/// No records, with a call to create the first one
#[component]
pub fn EmptyState(
    #[prop(into)]
    title: String,
    #[prop(into)]
    description: String,
    icon_name: &'static str,
    #[prop(into)]
    action_label: String,
    on_action: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="list-state list-state--empty">
            <div class="list-state__icon">{icon(icon_name)}</div>
            <h3 class="list-state__title">{title}</h3>
            <p class="list-state__message">{description}</p>
            <Button
                icon_name="plus"
                on_click=Callback::new(move |_| on_action.run(()))
            >
                {action_label}
            </Button>
        </div>
    }
}
