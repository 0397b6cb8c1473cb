pub mod global_context;
pub mod left;
pub mod top_header;

use crate::domain::a001_sales::ui::list::SalesList;
use crate::domain::a002_purchases::ui::list::PurchasesList;
use crate::domain::a003_inventory::ui::list::InventoryList;
use crate::domain::a004_contacts::ui::list::ContactsList;
use crate::domain::a005_dashboard::ui::list::DashboardPage;
use crate::domain::a006_reports::ui::page::ReportsPage;
use contracts::enums::Section;
use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell
///
/// ```text
/// +------------------------------------+
/// |             TopHeader              |
/// +------------------------------------+
/// |  Sidebar  |    active section      |
/// +------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Sidebar />
                <main class="app-main">
                    // switching sections mounts a fresh page
                    {move || match ctx.active_section.get() {
                        Section::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Section::Sales => view! { <SalesList /> }.into_any(),
                        Section::Purchases => view! { <PurchasesList /> }.into_any(),
                        Section::Inventory => view! { <InventoryList /> }.into_any(),
                        Section::Contacts => view! { <ContactsList /> }.into_any(),
                        Section::Reports => view! { <ReportsPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
