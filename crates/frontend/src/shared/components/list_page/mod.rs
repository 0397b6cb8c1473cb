//! Tabbed list page shared by every section
//!
//! Wires the active resource to the record source, the loader and the table:
//! tab or search change starts a fetch, the loader drops late responses, and
//! row actions act on the loaded list.

pub mod details;
pub mod state;

use self::details::{record_title, RecordDetails};
use self::state::create_state;
use crate::shared::components::list_states::{EmptyState, ErrorState, LoadingState};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::SummaryCards;
use crate::shared::components::table::{DataTable, RowActions};
use crate::shared::components::ui::Button;
use crate::shared::data::{MockRepository, RecordSource};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::list_loader::{ListLoader, LoadState, RequestToken};
use crate::shared::list_utils::{filter_records, SearchInput, SortState};
use crate::shared::resources::{prepare_records, view_spec};
use crate::shared::summary::summarize;
use contracts::enums::{ResourceKind, Section};
use contracts::shared::Record;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// What the table card shows
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Failed(String),
    Empty,
    Rows,
}

/// Phase of the table card for `kind`. The loader still describes the
/// previous tab until the new fetch begins, which counts as loading.
pub fn phase_of(loader: &ListLoader, kind: ResourceKind, nothing_shown: bool) -> Phase {
    if !loader.shows(kind) {
        return Phase::Loading;
    }
    match loader.state() {
        LoadState::Loading => Phase::Loading,
        LoadState::Error(err) => Phase::Failed(err.to_string()),
        LoadState::Empty => Phase::Empty,
        LoadState::Content(_) if nothing_shown => Phase::Empty,
        LoadState::Content(_) => Phase::Rows,
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn ResourceListPage(section: Section) -> impl IntoView {
    match section.default_tab() {
        Some(default_kind) => view! { <SectionLists section=section default_kind=default_kind /> }.into_any(),
        None => {
            log::error!("section {} has no list tabs", section.code());
            ().into_any()
        }
    }
}

#[component]
fn SectionLists(section: Section, default_kind: ResourceKind) -> impl IntoView {
    let repo = StoredValue::new(expect_context::<MockRepository>());
    let state = create_state(section, default_kind);
    let active_kind = Memo::new(move |_| state.active_kind());
    let layout = Signal::derive(move || view_spec(active_kind.get()));

    let fetch = move |kind: ResourceKind, token: RequestToken| {
        let repo = repo.get_value();
        spawn_local(async move {
            let result = repo
                .fetch(kind)
                .await
                .map(|records| prepare_records(kind, records));
            if let Ok(records) = &result {
                log::debug!("{} returned {} records", kind.key(), records.len());
            }
            state.loader.try_update(|loader| loader.resolve(token, result));
        });
    };

    let load = move |kind: ResourceKind| {
        if let Some(token) = state.loader.try_update(|loader| loader.begin(kind)) {
            fetch(kind, token);
        }
    };

    let retry = Callback::new(move |_: ()| {
        if let Some((kind, token)) = state.loader.try_update(ListLoader::retry).flatten() {
            fetch(kind, token);
        }
    });

    // first load, tab change and search change all refetch
    Effect::new(move |_| {
        let kind = active_kind.get();
        state.filter.track();
        untrack(move || load(kind));
    });

    Effect::new(move |prev: Option<ResourceKind>| {
        let kind = active_kind.get();
        if prev.is_some_and(|p| p != kind) {
            state.sort.set(SortState::default());
            state.selected.set(None);
        }
        kind
    });

    let layout_error = Memo::new(move |_| {
        layout.with(|layout| layout.as_ref().err().map(ToString::to_string))
    });
    Effect::new(move |_| {
        if let Some(err) = layout_error.get() {
            log::error!("no table layout for {}: {}", active_kind.get_untracked().key(), err);
        }
    });

    // rows of another tab are never shown under this tab's columns
    let rows = Signal::derive(move || {
        let kind = active_kind.get();
        let term = state.filter.get();
        let searchable = layout.with(|layout| {
            layout.as_ref().map(|layout| layout.searchable).unwrap_or_default()
        });
        state.loader.with(|loader| {
            if loader.shows(kind) {
                filter_records(loader.records(), &term, searchable)
            } else {
                Vec::new()
            }
        })
    });

    // a search that matches nothing shows the empty state too
    let phase = Memo::new(move |_| {
        if let Some(err) = layout_error.get() {
            return Phase::Failed(err);
        }
        let kind = active_kind.get();
        let nothing_shown = rows.with(Vec::is_empty);
        state.loader.with(|loader| phase_of(loader, kind, nothing_shown))
    });

    let stats = Signal::derive(move || rows.with(|r| summarize(active_kind.get(), r, today())));

    let request_create = Callback::new(move |_: ()| {
        log::info!("create requested: {}", active_kind.get_untracked().noun());
    });

    let delete_record = move |kind: ResourceKind, record: &Record| {
        let prompt = format!(
            "Are you sure you want to delete {} {}?",
            kind.noun(),
            record_title(record)
        );
        if !confirm(&prompt) {
            return;
        }
        let id = record.id;
        match repo.with_value(|repo| repo.delete(kind, id)) {
            Ok(()) => {
                state.loader.update(|loader| {
                    loader.remove(id);
                });
                if state.selected.with_untracked(|s| s.as_ref().is_some_and(|r| r.id == id)) {
                    state.selected.set(None);
                }
            }
            Err(err) => log::warn!("delete failed: {}", err),
        }
    };

    let actions_for = move |kind: ResourceKind| {
        RowActions::new()
            .on_view(move |record| {
                log::info!("viewing {} {}", kind.noun(), record.id);
                state.selected.set(Some(record.clone()));
            })
            .on_edit(move |record| {
                log::info!("edit requested: {} {}", kind.noun(), record.id);
            })
            .on_delete(move |record| delete_record(kind, record))
    };

    let tabs = section
        .tabs()
        .into_iter()
        .map(|kind| {
            view! {
                <Tab value=kind.tab_id()>
                    <span class="section-tabs__icon">{icon(kind.icon())}</span>
                    {kind.label()}
                </Tab>
            }
        })
        .collect_view();

    view! {
        <PageHeader title=section.title() subtitle=section.subtitle()>
            {move || {
                let kind = active_kind.get();
                view! {
                    <Button
                        icon_name=kind.icon()
                        on_click=Callback::new(move |_| request_create.run(()))
                    >
                        {kind.create_label()}
                    </Button>
                }
            }}
        </PageHeader>

        <div class="page__content">
            <div class="section-tabs">
                <TabList selected_value=state.selected_tab>
                    {tabs}
                </TabList>
            </div>

            <div class="page__toolbar">
                <SearchInput
                    value=state.filter
                    on_change=Callback::new(move |term: String| state.filter.set(term))
                    placeholder=format!("Search {}...", section.code())
                />
            </div>

            <div class="card">
                {move || {
                    let kind = active_kind.get();
                    match phase.get() {
                        Phase::Loading => view! { <LoadingState /> }.into_any(),
                        Phase::Failed(message) => {
                            view! { <ErrorState message=message on_retry=retry /> }.into_any()
                        }
                        Phase::Empty => view! {
                            <EmptyState
                                title=format!("No {} found", kind.label().to_lowercase())
                                description=format!("Start by creating your first {}.", kind.noun())
                                icon_name=kind.icon()
                                action_label=kind.create_label()
                                on_action=request_create
                            />
                        }
                        .into_any(),
                        Phase::Rows => {
                            let columns = layout.with(|layout| {
                                layout.as_ref().ok().map(|layout| layout.columns.clone())
                            });
                            columns
                                .map(|columns| {
                                    view! {
                                        <DataTable
                                            columns=columns
                                            rows=rows
                                            actions=actions_for(kind)
                                            sort=state.sort
                                        />
                                    }
                                })
                                .into_any()
                        }
                    }
                }}
            </div>

            <Show when=move || matches!(phase.get(), Phase::Rows | Phase::Empty)>
                <SummaryCards stats=stats />
            </Show>

            {move || {
                let record = state.selected.get()?;
                let columns = layout.with_untracked(|layout| {
                    layout.as_ref().ok().map(|layout| layout.columns.clone())
                })?;
                Some(view! {
                    <RecordDetails
                        kind=active_kind.get_untracked()
                        columns=columns
                        record=record
                        on_close=Callback::new(move |_| state.selected.set(None))
                    />
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::{FetchError, RecordId};

    const INVOICES: ResourceKind = ResourceKind::SalesInvoices;
    const ORDERS: ResourceKind = ResourceKind::SalesOrders;

    fn loaded(kind: ResourceKind) -> ListLoader {
        let mut loader = ListLoader::new();
        let token = loader.begin(kind);
        loader.resolve(token, Ok(vec![Record::new(RecordId::new(1).unwrap())]));
        loader
    }

    #[test]
    fn test_rows_of_previous_tab_show_as_loading() {
        let loader = loaded(INVOICES);
        assert_eq!(phase_of(&loader, INVOICES, false), Phase::Rows);
        assert_eq!(phase_of(&loader, ORDERS, false), Phase::Loading);
    }

    #[test]
    fn test_error_of_previous_tab_is_not_shown() {
        let mut loader = ListLoader::new();
        let token = loader.begin(INVOICES);
        loader.resolve(token, Err(FetchError::failed("invoices")));
        assert!(matches!(phase_of(&loader, INVOICES, true), Phase::Failed(_)));
        assert_eq!(phase_of(&loader, ORDERS, true), Phase::Loading);
    }

    #[test]
    fn test_filtered_out_rows_read_as_empty() {
        let loader = loaded(INVOICES);
        assert_eq!(phase_of(&loader, INVOICES, true), Phase::Empty);
        assert_eq!(phase_of(&ListLoader::new(), INVOICES, true), Phase::Loading);
    }
}
