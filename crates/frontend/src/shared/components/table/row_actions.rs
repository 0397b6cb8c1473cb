use contracts::shared::Record;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub fn all() -> [RowAction; 3] {
        [RowAction::View, RowAction::Edit, RowAction::Delete]
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RowAction::View => "eye",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

type ActionFn = Arc<dyn Fn(&Record) + Send + Sync>;

/// Optional view/edit/delete handlers of a table.
///
/// The table only forwards the intent with the full record. Whatever happens
/// next (removing the row, opening a form) is up to the owner of the list.
#[derive(Clone, Default)]
pub struct RowActions {
    view: Option<ActionFn>,
    edit: Option<ActionFn>,
    delete: Option<ActionFn>,
}

impl RowActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_view(mut self, f: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.view = Some(Arc::new(f));
        self
    }

    pub fn on_edit(mut self, f: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.edit = Some(Arc::new(f));
        self
    }

    pub fn on_delete(mut self, f: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.delete = Some(Arc::new(f));
        self
    }

    fn slot(&self, action: RowAction) -> Option<&ActionFn> {
        match action {
            RowAction::View => self.view.as_ref(),
            RowAction::Edit => self.edit.as_ref(),
            RowAction::Delete => self.delete.as_ref(),
        }
    }

    pub fn is_bound(&self, action: RowAction) -> bool {
        self.slot(action).is_some()
    }

    /// Bound actions in display order
    pub fn bound(&self) -> Vec<RowAction> {
        RowAction::all()
            .into_iter()
            .filter(|a| self.is_bound(*a))
            .collect()
    }

    /// Invokes the handler of `action`. Returns false when the slot is empty.
    pub fn dispatch(&self, action: RowAction, record: &Record) -> bool {
        match self.slot(action) {
            Some(handler) => {
                handler(record);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for RowActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowActions")
            .field("view", &self.view.is_some())
            .field("edit", &self.edit.is_some())
            .field("delete", &self.delete.is_some())
            .finish()
    }
}
