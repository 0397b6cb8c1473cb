//! Presentation state of a list page and the stale-response guard
//!
//! ```text
//! loading --ok(non-empty)--> content
//! loading --ok(empty)------> empty
//! loading --err------------> error --retry--> loading
//! content/empty --tab or filter change--> loading
//! ```
//!
//! Every [`ListLoader::begin`] bumps a generation counter and hands out a
//! token. Only the response carrying the latest token is applied, so a slow
//! earlier fetch cannot overwrite the result of a newer one.

use contracts::enums::ResourceKind;
use contracts::shared::{FetchError, Record, RecordId};

/// Identifies one fetch started through a [`RequestGuard`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Generation counter shared by every loader with a stale-response guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestGuard {
    generation: u64,
}

impl RequestGuard {
    /// Token of a new request. Every earlier token becomes stale.
    pub fn next(&mut self) -> RequestToken {
        self.generation += 1;
        RequestToken(self.generation)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.generation
    }

    /// Logs and returns false for a stale token
    pub fn accept(&self, token: RequestToken) -> bool {
        if self.is_current(token) {
            return true;
        }
        log::warn!(
            "dropping stale response (request {}, current {})",
            token.0,
            self.generation
        );
        false
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Content(Vec<Record>),
    Empty,
    Error(FetchError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListLoader {
    guard: RequestGuard,
    /// Resource of the latest request. Rows and errors belong to it.
    kind: Option<ResourceKind>,
    state: LoadState,
}

impl Default for ListLoader {
    fn default() -> Self {
        Self {
            guard: RequestGuard::default(),
            kind: None,
            state: LoadState::Loading,
        }
    }
}

impl ListLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Loaded records, empty unless in `Content`
    pub fn records(&self) -> &[Record] {
        match &self.state {
            LoadState::Content(records) => records,
            _ => &[],
        }
    }

    /// Resource the current state belongs to
    pub fn kind(&self) -> Option<ResourceKind> {
        self.kind
    }

    /// Whether the state describes `kind`. False right after a tab switch,
    /// until the fetch of the new tab has begun.
    pub fn shows(&self, kind: ResourceKind) -> bool {
        self.kind == Some(kind)
    }

    /// Start a new fetch of `kind`, superseding any in flight
    pub fn begin(&mut self, kind: ResourceKind) -> RequestToken {
        self.kind = Some(kind);
        self.state = LoadState::Loading;
        self.guard.next()
    }

    /// Start a new fetch of the same resource after a failure. No-op in any
    /// other state.
    pub fn retry(&mut self) -> Option<(ResourceKind, RequestToken)> {
        match (&self.state, self.kind) {
            (LoadState::Error(_), Some(kind)) => Some((kind, self.begin(kind))),
            _ => None,
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.guard.is_current(token)
    }

    /// Apply a fetch result. Returns false when the result was ignored
    /// because a newer fetch has started or this one was already applied.
    pub fn resolve(&mut self, token: RequestToken, result: Result<Vec<Record>, FetchError>) -> bool {
        if !self.guard.accept(token) {
            return false;
        }
        if !self.is_loading() {
            return false;
        }

        self.state = match result {
            Ok(records) if records.is_empty() => LoadState::Empty,
            Ok(records) => LoadState::Content(records),
            Err(err) => {
                log::warn!("fetch failed: {}", err);
                LoadState::Error(err)
            }
        };
        true
    }

    /// Replace the loaded list with one that lacks `id`. Returns the removed
    /// record, if it was present.
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        let LoadState::Content(records) = &self.state else {
            return None;
        };
        let removed = records.iter().find(|r| r.id == id).cloned()?;
        let remaining: Vec<Record> = records.iter().filter(|r| r.id != id).cloned().collect();
        self.state = if remaining.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Content(remaining)
        };
        Some(removed)
    }

    /// Replace the record with the same id, or append it. Only applies once
    /// a list has been loaded.
    pub fn upsert(&mut self, record: Record) -> bool {
        let next = match &self.state {
            LoadState::Content(records) => {
                let mut next = records.clone();
                match next.iter().position(|r| r.id == record.id) {
                    Some(pos) => next[pos] = record,
                    None => next.push(record),
                }
                next
            }
            LoadState::Empty => vec![record],
            LoadState::Loading | LoadState::Error(_) => return false,
        };
        self.state = LoadState::Content(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ContactScope;

    const INVOICES: ResourceKind = ResourceKind::SalesInvoices;
    const ITEMS: ResourceKind = ResourceKind::InventoryItems;

    fn record(id: u32) -> Record {
        Record::new(RecordId::new(id).unwrap())
    }

    #[test]
    fn test_starts_loading() {
        let loader = ListLoader::new();
        assert!(loader.is_loading());
        assert!(loader.records().is_empty());
    }

    #[test]
    fn test_success_transitions() {
        let mut loader = ListLoader::new();
        let token = loader.begin(INVOICES);
        assert!(loader.resolve(token, Ok(vec![record(1)])));
        assert_eq!(loader.state(), &LoadState::Content(vec![record(1)]));

        let token = loader.begin(INVOICES);
        assert!(loader.is_loading());
        assert!(loader.resolve(token, Ok(vec![])));
        assert_eq!(loader.state(), &LoadState::Empty);
    }

    #[test]
    fn test_failure_and_retry() {
        let mut loader = ListLoader::new();
        let token = loader.begin(INVOICES);
        loader.resolve(token, Err(FetchError::failed("invoices")));
        assert_eq!(
            loader.state(),
            &LoadState::Error(FetchError::failed("invoices"))
        );

        let (kind, retry) = loader.retry().expect("retry from error");
        assert_eq!(kind, INVOICES);
        assert!(loader.is_loading());
        assert!(loader.resolve(retry, Ok(vec![record(2)])));
        assert_eq!(loader.records().len(), 1);
    }

    #[test]
    fn test_retry_only_from_error() {
        let mut loader = ListLoader::new();
        assert!(loader.retry().is_none());
        let token = loader.begin(INVOICES);
        loader.resolve(token, Ok(vec![record(1)]));
        assert!(loader.retry().is_none());
        assert_eq!(loader.records().len(), 1);
    }

    #[test]
    fn test_late_response_of_superseded_fetch_is_ignored() {
        let mut loader = ListLoader::new();
        let tab_x = loader.begin(INVOICES);
        let tab_y = loader.begin(ITEMS);

        // B resolves first, then A arrives late
        assert!(loader.resolve(tab_y, Ok(vec![record(20)])));
        assert!(!loader.resolve(tab_x, Ok(vec![record(10)])));

        assert_eq!(loader.records(), &[record(20)]);
        assert!(loader.shows(ITEMS));
    }

    #[test]
    fn test_stale_response_ignored_while_newer_in_flight() {
        let mut loader = ListLoader::new();
        let first = loader.begin(INVOICES);
        let second = loader.begin(INVOICES);

        assert!(!loader.resolve(first, Err(FetchError::failed("items"))));
        assert!(loader.is_loading());
        assert!(loader.resolve(second, Ok(vec![record(1)])));
    }

    #[test]
    fn test_duplicate_resolution_is_ignored() {
        let mut loader = ListLoader::new();
        let token = loader.begin(INVOICES);
        assert!(loader.resolve(token, Ok(vec![record(1)])));
        assert!(!loader.resolve(token, Ok(vec![])));
        assert_eq!(loader.records(), &[record(1)]);
    }

    #[test]
    fn test_remove_produces_new_list() {
        let mut loader = ListLoader::new();
        let token = loader.begin(INVOICES);
        loader.resolve(token, Ok(vec![record(1), record(2)]));

        assert_eq!(loader.remove(RecordId::new(1).unwrap()), Some(record(1)));
        assert_eq!(loader.records(), &[record(2)]);
        assert_eq!(loader.remove(RecordId::new(9).unwrap()), None);

        loader.remove(RecordId::new(2).unwrap());
        assert_eq!(loader.state(), &LoadState::Empty);
    }

    #[test]
    fn test_upsert_replaces_or_appends() {
        let mut loader = ListLoader::new();
        assert!(!loader.upsert(record(1)));

        let token = loader.begin(INVOICES);
        loader.resolve(token, Ok(vec![]));
        assert!(loader.upsert(record(1)));
        assert!(loader.upsert(record(1).field("name", "renamed")));
        assert!(loader.upsert(record(2)));

        let records = loader.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text("name"), Some("renamed"));
    }

    #[test]
    fn test_state_belongs_to_requested_kind() {
        let mut loader = ListLoader::new();
        assert_eq!(loader.kind(), None);

        let token = loader.begin(INVOICES);
        loader.resolve(token, Ok(vec![record(1)]));
        assert!(loader.shows(INVOICES));

        // the tab moved on but no fetch has begun yet: the rows are not ITEMS rows
        assert!(!loader.shows(ITEMS));
        let customers = ResourceKind::Contacts(ContactScope::Customers);
        assert!(!loader.shows(customers));

        loader.begin(customers);
        assert!(loader.shows(customers));
        assert!(loader.records().is_empty());
    }

    #[test]
    fn test_guard_tokens_supersede_each_other() {
        let mut guard = RequestGuard::default();
        let first = guard.next();
        assert!(guard.accept(first));
        let second = guard.next();
        assert!(!guard.accept(first));
        assert!(guard.is_current(second));
    }
}
