//! Section navigation

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::enums::Section;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <nav data-zone="left" class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
            <div class="app-sidebar__content">
                {Section::all()
                    .into_iter()
                    .map(|section| {
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || ctx.active_section.get() == section
                                on:click=move |_| ctx.open_section(section)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(section.icon())}
                                    <span>{section.label()}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
