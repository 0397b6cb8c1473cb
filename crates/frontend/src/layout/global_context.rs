use contracts::enums::Section;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Query string of the app URL, e.g. `?section=inventory`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl AppQuery {
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn for_section(section: Section) -> Self {
        Self {
            section: Some(section.code().to_string()),
        }
    }

    /// Known section named by the query, if any
    pub fn section(&self) -> Option<Section> {
        self.section.as_deref().and_then(Section::from_code)
    }

    pub fn to_search(&self) -> String {
        match serde_qs::to_string(self) {
            Ok(qs) if !qs.is_empty() => format!("?{}", qs),
            _ => String::new(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_section: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_section: RwSignal::new(Section::Dashboard),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the section from the URL and keep the URL in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(section) = AppQuery::parse(&search).section() {
            log::debug!("restoring section `{}` from url", section.code());
            self.active_section.set(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = AppQuery::for_section(this.active_section.get()).to_search();
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_section(&self, section: Section) {
        log::info!("open section: {}", section.code());
        self.active_section.set(section);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
