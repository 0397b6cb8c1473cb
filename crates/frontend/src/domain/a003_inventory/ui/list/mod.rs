use crate::shared::components::list_page::ResourceListPage;
use crate::shared::page_frame::PageFrame;
use contracts::enums::Section;
use leptos::prelude::*;

#[component]
pub fn InventoryList() -> impl IntoView {
    view! {
        <PageFrame page_id="a003_inventory--list">
            <ResourceListPage section=Section::Inventory />
        </PageFrame>
    }
}
