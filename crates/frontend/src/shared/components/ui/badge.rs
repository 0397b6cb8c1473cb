use contracts::shared::StatusCategory;
use leptos::prelude::*;

fn category_class(category: StatusCategory) -> &'static str {
    match category {
        StatusCategory::Neutral => "badge--neutral",
        StatusCategory::Informational => "badge--primary",
        StatusCategory::Success => "badge--success",
        StatusCategory::Warning => "badge--warning",
        StatusCategory::Danger => "badge--error",
    }
}

/// Badge styled by status category
#[component]
pub fn StatusBadge(
    category: StatusCategory,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!("badge {}", category_class(category))>
            {children()}
        </span>
    }
}
