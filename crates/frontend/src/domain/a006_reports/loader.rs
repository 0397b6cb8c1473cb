//! Period report state of the reports page
//!
//! The selected date range drives the fetch: every accepted range change
//! starts a new request and only the response to the latest one is applied.

use crate::shared::list_loader::{RequestGuard, RequestToken};
use contracts::shared::{DateRange, FetchError, PeriodReport};

#[derive(Debug, Clone, PartialEq)]
pub enum ReportState {
    Loading,
    Ready(PeriodReport),
    Error(FetchError),
    /// Start date after end date; nothing is fetched
    InvalidRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLoader {
    guard: RequestGuard,
    range: DateRange,
    state: ReportState,
}

impl ReportLoader {
    pub fn new(range: DateRange) -> Self {
        Self {
            guard: RequestGuard::default(),
            range,
            state: ReportState::Loading,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn state(&self) -> &ReportState {
        &self.state
    }

    /// Fetch the current range, superseding any request in flight
    pub fn begin(&mut self) -> Option<RequestToken> {
        let token = self.guard.next();
        if self.range.is_empty() {
            self.state = ReportState::InvalidRange;
            return None;
        }
        self.state = ReportState::Loading;
        Some(token)
    }

    /// Select `range`. Returns the token of the fetch it starts, none when
    /// the range is unchanged or inverted.
    pub fn set_range(&mut self, range: DateRange) -> Option<RequestToken> {
        if range == self.range && !matches!(self.state, ReportState::InvalidRange) {
            return None;
        }
        log::debug!("report range {} .. {}", range.start_date, range.end_date);
        self.range = range;
        self.begin()
    }

    /// Refetch after a failure. No-op in any other state.
    pub fn retry(&mut self) -> Option<(DateRange, RequestToken)> {
        match self.state {
            ReportState::Error(_) => self.begin().map(|token| (self.range, token)),
            _ => None,
        }
    }

    /// Apply a fetch result. Returns false for a superseded request.
    pub fn resolve(&mut self, token: RequestToken, result: Result<PeriodReport, FetchError>) -> bool {
        if !self.guard.accept(token) || self.state != ReportState::Loading {
            return false;
        }
        self.state = match result {
            Ok(report) => ReportState::Ready(report),
            Err(err) => {
                log::warn!("report fetch failed: {}", err);
                ReportState::Error(err)
            }
        };
        true
    }
}
