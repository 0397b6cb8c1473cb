use crate::shared::components::list_page::ResourceListPage;
use crate::shared::page_frame::PageFrame;
use contracts::enums::Section;
use leptos::prelude::*;

#[component]
pub fn SalesList() -> impl IntoView {
    view! {
        <PageFrame page_id="a001_sales--list">
            <ResourceListPage section=Section::Sales />
        </PageFrame>
    }
}
