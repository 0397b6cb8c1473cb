use crate::shared::components::list_page::ResourceListPage;
use crate::shared::page_frame::PageFrame;
use contracts::enums::Section;
use leptos::prelude::*;

#[component]
pub fn PurchasesList() -> impl IntoView {
    view! {
        <PageFrame page_id="a002_purchases--list">
            <ResourceListPage section=Section::Purchases />
        </PageFrame>
    }
}
