use crate::shared::components::list_page::ResourceListPage;
use crate::shared::page_frame::PageFrame;
use contracts::enums::Section;
use leptos::prelude::*;

#[component]
pub fn ContactsList() -> impl IntoView {
    view! {
        <PageFrame page_id="a004_contacts--list">
            <ResourceListPage section=Section::Contacts />
        </PageFrame>
    }
}
