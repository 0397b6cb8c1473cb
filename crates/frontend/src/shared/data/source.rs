use contracts::enums::ResourceKind;
use contracts::shared::{FetchError, Record};
use std::future::Future;

/// Asynchronous producer of the records of one resource.
///
/// A fetch resolves with the full list or fails with the generic
/// [`FetchError`]. Callers must not assume a bound on how long it takes.
pub trait RecordSource {
    fn fetch(&self, kind: ResourceKind) -> impl Future<Output = Result<Vec<Record>, FetchError>>;
}
