/// List utilities shared by every tabbed page: sorting, searching, search input
use crate::shared::components::table::ColumnSpec;
use contracts::shared::{FieldValue, Record};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Debounce before a search term is committed
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Types that can be searched by a free-text term over named fields
pub trait Searchable {
    /// Text of the field, `None` when missing or not textual
    fn field_text(&self, field: &str) -> Option<&str>;

    /// Case-insensitive substring match of an already lower-cased term
    fn matches_filter(&self, filter_lower: &str, fields: &[&str]) -> bool {
        fields.iter().any(|field| {
            self.field_text(field)
                .map(|text| text.to_lowercase().contains(filter_lower))
                .unwrap_or(false)
        })
    }
}

/// Types that can be compared by a named field
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

impl Searchable for Record {
    fn field_text(&self, field: &str) -> Option<&str> {
        self.text(field)
    }
}

impl Sortable for Record {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        compare_values(self.get(field).as_deref(), other.get(field).as_deref())
    }
}

/// Total order over field values: missing/null < bool < number < text.
/// Numbers use `total_cmp`, text compares by code point.
pub fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    fn rank(value: Option<&FieldValue>) -> u8 {
        match value {
            None | Some(FieldValue::Null) => 0,
            Some(FieldValue::Bool(_)) => 1,
            Some(FieldValue::Number(_)) => 2,
            Some(FieldValue::Text(_)) => 3,
        }
    }

    match (a, b) {
        (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => x.total_cmp(y),
        (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => x.cmp(y),
        (Some(FieldValue::Bool(x)), Some(FieldValue::Bool(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// At most one active sort column plus a direction.
///
/// A fresh state is unsorted. Once a column has been chosen the state never
/// returns to unsorted; switching tabs replaces the whole state instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Select `key` for sorting. Unknown and non-sortable columns are ignored,
    /// the active column flips direction, any other column starts ascending.
    pub fn set_sort(&mut self, columns: &ColumnSpec, key: &str) {
        if !columns.is_sortable(key) {
            return;
        }
        if self.column.as_deref() == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.column.as_deref() == Some(key)
    }
}

/// Stable sort by a field. Ties keep their input order in both directions.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, direction: SortDirection) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Rows in display order for the given sort state. Identity order when no
/// column is active. The input is never reordered in place.
pub fn sort_records(records: &[Record], sort: &SortState) -> Vec<Record> {
    let mut rows = records.to_vec();
    if let Some(column) = sort.column.as_deref() {
        sort_list(&mut rows, column, sort.direction);
    }
    rows
}

/// Subsequence of `items` where any of `fields` contains `filter`,
/// case-insensitively. An empty filter keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str, fields: &[&str]) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }
    let filter_lower = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower, fields))
        .cloned()
        .collect()
}

pub fn filter_records(records: &[Record], term: &str, searchable: &[&str]) -> Vec<Record> {
    filter_list(records, term, searchable)
}

/// Sort indicator for a header cell
pub fn get_sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if sort.is_active(field) {
        if sort.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for the sort indicator
pub fn get_sort_class(sort: &SortState, field: &str) -> &'static str {
    if sort.is_active(field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current committed term
    #[prop(into)]
    value: Signal<String>,
    /// Called with the term once typing settles
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // replacing the handle drops the previous timer, which cancels it
        pending.set_value(Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        })));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=move || placeholder.get().unwrap_or_else(|| "Search...".to_string())
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear_filter>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
