//! Business overview: stat grid, quick actions and the latest transactions

use crate::domain::a005_dashboard::columns::transaction_columns;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::list_page::{phase_of, Phase};
use crate::shared::components::list_states::{EmptyState, ErrorState, LoadingState};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::SummaryCards;
use crate::shared::components::table::DataTable;
use crate::shared::components::ui::Button;
use crate::shared::data::{MockRepository, RecordSource};
use crate::shared::list_loader::{ListLoader, RequestToken};
use crate::shared::page_frame::PageFrame;
use crate::shared::summary::DashboardTotals;
use contracts::enums::{ResourceKind, Section};
use contracts::shared::{FetchError, Record};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const KIND: ResourceKind = ResourceKind::RecentTransactions;

/// Shortcut button leading to a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub section: Section,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "New Invoice",
        icon: "file-text",
        section: Section::Sales,
    },
    QuickAction {
        label: "Create Quote",
        icon: "calculator",
        section: Section::Sales,
    },
    QuickAction {
        label: "Add Purchase",
        icon: "shopping-cart",
        section: Section::Purchases,
    },
    QuickAction {
        label: "Check Inventory",
        icon: "package",
        section: Section::Inventory,
    },
];

/// Both dashboard fetches fail as one
fn combine(
    totals: Result<DashboardTotals, FetchError>,
    records: Result<Vec<Record>, FetchError>,
) -> Result<(DashboardTotals, Vec<Record>), FetchError> {
    match (totals, records) {
        (Ok(totals), Ok(records)) => Ok((totals, records)),
        (Err(err), _) | (_, Err(err)) => {
            log::warn!("dashboard fetch failed: {}", err);
            Err(FetchError::failed("dashboard data"))
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let repo = StoredValue::new(expect_context::<MockRepository>());
    let loader = RwSignal::new(ListLoader::new());
    let totals = RwSignal::new(None::<DashboardTotals>);

    let columns = match transaction_columns() {
        Ok(columns) => Some(columns),
        Err(err) => {
            log::error!("no table layout for {}: {}", KIND.key(), err);
            None
        }
    };

    let fetch = move |token: RequestToken| {
        let repo = repo.get_value();
        spawn_local(async move {
            let result = combine(repo.dashboard_totals().await, repo.fetch(KIND).await);
            if !loader.with_untracked(|loader| loader.is_current(token)) {
                log::debug!("dashboard response superseded");
                return;
            }
            let result = result.map(|(stats, records)| {
                totals.set(Some(stats));
                records
            });
            loader.try_update(|loader| loader.resolve(token, result));
        });
    };

    if let Some(token) = loader.try_update(|loader| loader.begin(KIND)) {
        fetch(token);
    }

    let retry = Callback::new(move |_: ()| {
        if let Some((_, token)) = loader.try_update(ListLoader::retry).flatten() {
            fetch(token);
        }
    });

    let rows = Signal::derive(move || loader.with(|loader| loader.records().to_vec()));
    let phase = Memo::new(move |_| {
        let nothing_shown = rows.with(Vec::is_empty);
        loader.with(|loader| phase_of(loader, KIND, nothing_shown))
    });
    let stats = Signal::derive(move || {
        totals
            .get()
            .map(|totals| totals.stats())
            .unwrap_or_default()
    });

    let open_sales = Callback::new(move |_: ()| ctx.open_section(Section::Sales));

    let quick_actions = QUICK_ACTIONS
        .into_iter()
        .map(|action| {
            view! {
                <Button
                    variant="secondary"
                    icon_name=action.icon
                    on_click=Callback::new(move |_| {
                        log::info!("quick action: {}", action.label);
                        ctx.open_section(action.section);
                    })
                >
                    {action.label}
                </Button>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="a005_dashboard--list">
            <PageHeader title=Section::Dashboard.title() subtitle=Section::Dashboard.subtitle() />

            <div class="page__content">
                <Show when=move || matches!(phase.get(), Phase::Rows | Phase::Empty)>
                    <SummaryCards stats=stats />
                </Show>

                <div class="card">
                    <h3 class="card__title">"Quick Actions"</h3>
                    <div class="quick-actions">{quick_actions}</div>
                </div>

                <div class="card">
                    <h3 class="card__title">{KIND.label()}</h3>
                    {move || match phase.get() {
                        Phase::Loading => view! { <LoadingState /> }.into_any(),
                        Phase::Failed(message) => {
                            view! { <ErrorState message=message on_retry=retry /> }.into_any()
                        }
                        Phase::Empty => view! {
                            <EmptyState
                                title="No recent transactions"
                                description="Your recent transactions will appear here once you start creating invoices and orders."
                                icon_name=KIND.icon()
                                action_label=KIND.create_label()
                                on_action=open_sales
                            />
                        }
                        .into_any(),
                        Phase::Rows => columns
                            .clone()
                            .map(|columns| view! { <DataTable columns=columns rows=rows /> })
                            .into_any(),
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::RecordId;

    #[test]
    fn test_quick_actions_lead_to_list_sections() {
        for action in QUICK_ACTIONS {
            assert!(!action.section.tabs().is_empty(), "{}", action.label);
        }
        assert_eq!(QUICK_ACTIONS[0].section, Section::Sales);
        assert_eq!(QUICK_ACTIONS[3].section, Section::Inventory);
    }

    #[test]
    fn test_combine_fails_when_either_fetch_fails() {
        let rows = vec![Record::new(RecordId::new(1).unwrap())];
        let ok = combine(Ok(DashboardTotals::default()), Ok(rows.clone())).unwrap();
        assert_eq!(ok.1, rows);

        let err = combine(Err(FetchError::failed("x")), Ok(rows.clone())).unwrap_err();
        assert_eq!(err.to_string(), "Failed to load dashboard data. Please try again.");
        assert!(combine(Ok(DashboardTotals::default()), Err(FetchError::failed("y"))).is_err());
    }
}
