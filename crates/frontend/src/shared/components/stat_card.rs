use crate::shared::icons::icon;
use crate::shared::summary::SummaryStat;
use contracts::shared::StatusCategory;
use leptos::prelude::*;

fn tone_class(tone: StatusCategory) -> &'static str {
    match tone {
        StatusCategory::Success => "stat-card stat-card--success",
        StatusCategory::Danger => "stat-card stat-card--error",
        StatusCategory::Warning => "stat-card stat-card--warning",
        StatusCategory::Informational => "stat-card stat-card--info",
        StatusCategory::Neutral => "stat-card",
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    tone: Option<StatusCategory>,
    /// Small print under the value
    #[prop(default = None)]
    note: Option<String>,
) -> impl IntoView {
    view! {
        <div class=tone_class(tone.unwrap_or(StatusCategory::Neutral))>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {note.map(|note| view! { <div class="stat-card__note">{note}</div> })}
            </div>
        </div>
    }
}

/// Row of stat cards, one per summary aggregate
#[component]
pub fn SummaryCards(#[prop(into)] stats: Signal<Vec<SummaryStat>>) -> impl IntoView {
    view! {
        <div class="stat-cards">
            {move || {
                stats
                    .get()
                    .into_iter()
                    .map(|stat| {
                        let value = stat.value.display();
                        view! {
                            <StatCard
                                label=stat.label
                                icon_name=stat.icon
                                value=Signal::stored(value)
                                tone=stat.tone
                                note=stat.note
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
