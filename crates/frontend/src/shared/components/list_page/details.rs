use crate::shared::components::table::{render_cell, CellContent, ColumnSpec};
use crate::shared::components::ui::{Button, StatusBadge};
use contracts::enums::ResourceKind;
use contracts::shared::Record;
use leptos::prelude::*;

/// Short human name of a record: its document number, else its name, else
/// its id
pub fn record_title(record: &Record) -> String {
    record
        .text("number")
        .or_else(|| record.text("name"))
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", record.id))
}

/// Read-only panel with every column of the selected record
#[component]
pub fn RecordDetails(
    kind: ResourceKind,
    columns: ColumnSpec,
    record: Record,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = format!("{} {}", kind.noun(), record_title(&record));
    let rows = columns
        .iter()
        .map(|column| {
            let value = match render_cell(column, &record) {
                CellContent::Badge { label, category } => {
                    view! { <StatusBadge category=category>{label}</StatusBadge> }.into_any()
                }
                other => view! { <span>{other.as_text().to_string()}</span> }.into_any(),
            };
            view! {
                <div class="details__row">
                    <dt class="details__label">{column.label.clone()}</dt>
                    <dd class="details__value">{value}</dd>
                </div>
            }
        })
        .collect_view();

    view! {
        <aside class="details">
            <div class="details__header">
                <h2 class="details__title">{title}</h2>
                <Button
                    variant="ghost"
                    size="sm"
                    icon_name="x"
                    title="Close"
                    on_click=Callback::new(move |_| on_close.run(()))
                />
            </div>
            <dl class="details__body">{rows}</dl>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::RecordId;

    #[test]
    fn test_record_title_prefers_number_then_name() {
        let base = Record::new(RecordId::new(3).unwrap());
        assert_eq!(record_title(&base), "#3");
        assert_eq!(record_title(&base.with_field("name", "Acme")), "Acme");
        assert_eq!(
            record_title(&base.with_field("name", "Acme").with_field("number", "INV-1")),
            "INV-1"
        );
    }
}
