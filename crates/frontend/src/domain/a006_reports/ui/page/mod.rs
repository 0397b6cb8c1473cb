//! Reports and analytics: date range, period totals and the report catalog

use crate::domain::a006_reports::catalog::{export_message, ReportCategory, CATEGORIES};
use crate::domain::a006_reports::loader::{ReportLoader, ReportState};
use crate::shared::components::list_states::{ErrorState, LoadingState};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::SummaryCards;
use crate::shared::components::ui::Button;
use crate::shared::data::MockRepository;
use crate::shared::date_utils::{to_iso, today};
use crate::shared::icons::icon;
use crate::shared::list_loader::RequestToken;
use crate::shared::page_frame::PageFrame;
use crate::shared::summary::report_stats;
use contracts::enums::Section;
use contracts::shared::{parse_iso_date, DateRange};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
fn CategoryCard(category: ReportCategory) -> impl IntoView {
    let reports = category
        .reports
        .into_iter()
        .map(|report| {
            view! {
                <div class="report-list__item">
                    <div>
                        <p class="report-list__name">{report.name}</p>
                        <p class="report-list__description">{report.description}</p>
                    </div>
                    <div class="report-list__actions">
                        <Button
                            variant="ghost"
                            size="sm"
                            icon_name="eye"
                            on_click=Callback::new(move |_| log::info!("view report: {}", report.name))
                        >
                            "View"
                        </Button>
                        <Button
                            variant="ghost"
                            size="sm"
                            icon_name="download"
                            on_click=Callback::new(move |_| {
                                log::info!("download report: {}", report.name)
                            })
                        >
                            "Download"
                        </Button>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card report-category">
            <div class="report-category__header">
                <div class="report-category__icon">{icon(category.icon)}</div>
                <div class="report-category__text">
                    <h3 class="card__title">{category.title}</h3>
                    <p class="report-category__description">{category.description}</p>
                </div>
                <Button
                    variant="secondary"
                    size="sm"
                    icon_name="download"
                    on_click=Callback::new(move |_| log::info!("{}", export_message(&category)))
                >
                    "Export"
                </Button>
            </div>
            <div class="report-list">{reports}</div>
        </div>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let repo = StoredValue::new(expect_context::<MockRepository>());
    let loader = RwSignal::new(ReportLoader::new(DateRange::last_30_days(today())));

    let fetch = move |range: DateRange, token: RequestToken| {
        let repo = repo.get_value();
        spawn_local(async move {
            let result = repo.period_report(range).await;
            loader.try_update(|loader| loader.resolve(token, result));
        });
    };

    let select_range = move |range: DateRange| {
        if let Some(token) = loader.try_update(|loader| loader.set_range(range)).flatten() {
            fetch(range, token);
        }
    };

    if let Some(token) = loader.try_update(ReportLoader::begin).flatten() {
        fetch(loader.with_untracked(ReportLoader::range), token);
    }

    let retry = Callback::new(move |_: ()| {
        if let Some((range, token)) = loader.try_update(ReportLoader::retry).flatten() {
            fetch(range, token);
        }
    });

    let range = Memo::new(move |_| loader.with(ReportLoader::range));
    let state = Memo::new(move |_| loader.with(|loader| loader.state().clone()));

    // unparsable input, e.g. a half-typed date, keeps the current range
    let on_start = move |ev: leptos::ev::Event| {
        if let Some(day) = parse_iso_date(&event_target_value(&ev)) {
            select_range(range.get_untracked().with_start(day));
        }
    };
    let on_end = move |ev: leptos::ev::Event| {
        if let Some(day) = parse_iso_date(&event_target_value(&ev)) {
            select_range(range.get_untracked().with_end(day));
        }
    };

    let categories = CATEGORIES
        .into_iter()
        .map(|category| view! { <CategoryCard category=category /> })
        .collect_view();

    view! {
        <PageFrame page_id="a006_reports--page">
            <PageHeader title=Section::Reports.title() subtitle=Section::Reports.subtitle()>
                <Button
                    icon_name="download"
                    on_click=Callback::new(move |_| log::info!("exporting all reports"))
                >
                    "Export All Reports"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="card date-range">
                    <label class="date-range__field">
                        <span class="date-range__label">"Start Date"</span>
                        <input
                            type="date"
                            class="date-range__input"
                            prop:value=move || to_iso(range.get().start_date)
                            on:change=on_start
                        />
                    </label>
                    <label class="date-range__field">
                        <span class="date-range__label">"End Date"</span>
                        <input
                            type="date"
                            class="date-range__input"
                            prop:value=move || to_iso(range.get().end_date)
                            on:change=on_end
                        />
                    </label>
                    <div class="date-range__presets">
                        <Button
                            variant="secondary"
                            on_click=Callback::new(move |_| select_range(DateRange::last_30_days(today())))
                        >
                            "Last 30 Days"
                        </Button>
                        <Button
                            variant="secondary"
                            on_click=Callback::new(move |_| select_range(DateRange::this_month(today())))
                        >
                            "This Month"
                        </Button>
                    </div>
                </div>

                {move || match state.get() {
                    ReportState::Loading => view! { <LoadingState rows=2 /> }.into_any(),
                    ReportState::Error(err) => {
                        view! { <ErrorState message=err.to_string() on_retry=retry /> }.into_any()
                    }
                    ReportState::InvalidRange => view! {
                        <div class="list-state list-state--error" role="alert">
                            <p class="list-state__message">
                                "Start date must be on or before the end date."
                            </p>
                        </div>
                    }
                    .into_any(),
                    ReportState::Ready(report) => {
                        view! { <SummaryCards stats=report_stats(&report) /> }.into_any()
                    }
                }}

                <div class="report-categories">{categories}</div>
            </div>
        </PageFrame>
    }
}
