use crate::shared::list_loader::ListLoader;
use crate::shared::list_utils::SortState;
use contracts::enums::{ResourceKind, Section};
use contracts::shared::Record;
use leptos::prelude::*;

/// Reactive state of one section page
#[derive(Clone, Copy)]
pub struct ListPageState {
    pub section: Section,
    /// Resource of an unknown tab id
    pub default_kind: ResourceKind,
    /// Tab id of the active resource within the section
    pub selected_tab: RwSignal<String>,
    /// Committed search term
    pub filter: RwSignal<String>,
    pub sort: RwSignal<SortState>,
    pub loader: RwSignal<ListLoader>,
    /// Record shown in the details panel
    pub selected: RwSignal<Option<Record>>,
}

impl ListPageState {
    pub fn active_kind(&self) -> ResourceKind {
        let section = self.section;
        self.selected_tab
            .with(|tab| ResourceKind::from_tab(section, tab))
            .unwrap_or(self.default_kind)
    }
}

pub fn create_state(section: Section, default_kind: ResourceKind) -> ListPageState {
    ListPageState {
        section,
        default_kind,
        selected_tab: RwSignal::new(default_kind.tab_id().to_string()),
        filter: RwSignal::new(String::new()),
        sort: RwSignal::new(SortState::default()),
        loader: RwSignal::new(ListLoader::new()),
        selected: RwSignal::new(None),
    }
}
