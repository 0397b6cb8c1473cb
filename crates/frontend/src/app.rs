use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::SourceConfig;
use crate::shared::data::MockRepository;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    // one repository for the whole session, shared by every page
    let config = SourceConfig::load();
    let repository = MockRepository::seeded(config.clone()).unwrap_or_else(|err| {
        log::error!("{}", err);
        MockRepository::empty(config)
    });
    provide_context(repository);

    view! {
        <ConfigProvider>
            <Shell />
        </ConfigProvider>
    }
}
