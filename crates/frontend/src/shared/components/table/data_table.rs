//! Generic sortable table over [`Record`]s
//!
//! Sort state lives inside the table unless the owner passes its own signal.
//! Owners reset it when the column spec changes (tab switch).

use super::cell_format::{render_cell, CellContent};
use super::column::ColumnSpec;
use super::row_actions::{RowAction, RowActions};
use super::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_records, SortState};
use contracts::shared::{Record, RecordId};
use leptos::prelude::*;
use thaw::*;

fn cell_view(content: CellContent) -> AnyView {
    match content {
        CellContent::Text(text) => view! { <span class="table__cell-text">{text}</span> }.into_any(),
        CellContent::Money(text) => {
            view! { <span class="table__cell-money">{text}</span> }.into_any()
        }
        CellContent::Badge { label, category } => {
            view! { <StatusBadge category=category>{label}</StatusBadge> }.into_any()
        }
    }
}

/// Row identity for keyed rendering. An edited record gets a new key so its
/// row is rebuilt instead of keeping the old cells.
pub fn row_key(record: &Record) -> (RecordId, u64) {
    (record.id, record.fingerprint())
}

#[component]
pub fn DataTable(
    columns: ColumnSpec,
    /// Rows in source order; the table sorts a copy
    #[prop(into)]
    rows: Signal<Vec<Record>>,
    #[prop(optional)]
    actions: RowActions,
    #[prop(optional)]
    sort: Option<RwSignal<SortState>>,
) -> impl IntoView {
    let sort = sort.unwrap_or_else(|| RwSignal::new(SortState::default()));
    let has_actions = !actions.bound().is_empty();
    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);

    let on_sort = Callback::new(move |key: String| {
        columns.with_value(|spec| sort.update(|s| s.set_sort(spec, &key)));
    });

    let sorted_rows = Memo::new(move |_| sort.with(|s| rows.with(|r| sort_records(r, s))));

    let header_cells = columns.with_value(|spec| {
        spec.iter()
            .map(|column| {
                view! {
                    <SortableHeaderCell
                        label=column.label.clone()
                        sort_field=column.key.clone()
                        sort=sort
                        sortable=column.sortable
                        on_sort=on_sort
                        align=if column.is_numeric() { "right" } else { "left" }
                    />
                }
            })
            .collect_view()
    });

    view! {
        <div class="table-container">
            <Table class="table__data">
                <TableHeader>
                    <TableRow>
                        {header_cells}
                        {has_actions.then(|| view! {
                            <TableHeaderCell min_width=120.0>
                                <div class="table__header-label table__header-label--right">"Actions"</div>
                            </TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || sorted_rows.get()
                        key=row_key
                        children=move |record| view! {
                            <DataTableRow record=record columns=columns actions=actions />
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
fn DataTableRow(
    record: Record,
    columns: StoredValue<ColumnSpec>,
    actions: StoredValue<RowActions>,
) -> impl IntoView {
    let cells = columns.with_value(|spec| {
        spec.iter()
            .map(|column| {
                let class = if column.is_numeric() { "text-right" } else { "" };
                let content = render_cell(column, &record);
                view! { <TableCell class=class>{cell_view(content)}</TableCell> }
            })
            .collect_view()
    });

    let bound = actions.with_value(RowActions::bound);
    let action_cell = (!bound.is_empty()).then(move || {
        let record = StoredValue::new(record);
        let buttons = bound
            .into_iter()
            .map(|action: RowAction| {
                view! {
                    <button
                        class="button button--ghost button--small"
                        title=action.title()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            let handlers = actions.get_value();
                            handlers.dispatch(action, &record.get_value());
                        }
                    >
                        {icon(action.icon())}
                    </button>
                }
            })
            .collect_view();
        view! {
            <TableCell class="text-right">
                <div class="table__actions">{buttons}</div>
            </TableCell>
        }
    });

    view! {
        <TableRow>
            {cells}
            {action_cell}
        </TableRow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key_changes_with_content() {
        let record = Record::new(RecordId::new(4).unwrap()).field("status", "draft");
        let edited = record.with_field("status", "sent");

        assert_eq!(row_key(&record), row_key(&record.clone()));
        assert_eq!(row_key(&record).0, row_key(&edited).0);
        assert_ne!(row_key(&record), row_key(&edited));
    }
}
