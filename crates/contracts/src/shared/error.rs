use crate::shared::record::RecordId;
use thiserror::Error;

/// Failure of a record source fetch. The source reports no structured code,
/// so there is a single kind carrying the resource it was fetching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to load {resource}. Please try again.")]
    FetchFailed { resource: String },
}

impl FetchError {
    pub fn failed(resource: impl Into<String>) -> Self {
        FetchError::FetchFailed {
            resource: resource.into(),
        }
    }
}

/// Errors of the in-memory repository behind the record source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{resource} {id} not found")]
    NotFound { resource: String, id: RecordId },

    #[error("invalid seed data for {resource}: {message}")]
    Seed { resource: String, message: String },
}

impl RepositoryError {
    pub fn resource(&self) -> &str {
        match self {
            RepositoryError::NotFound { resource, .. } | RepositoryError::Seed { resource, .. } => {
                resource
            }
        }
    }
}

impl From<RepositoryError> for FetchError {
    fn from(err: RepositoryError) -> Self {
        FetchError::failed(err.resource())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message() {
        let err = FetchError::failed("invoices");
        assert_eq!(err.to_string(), "Failed to load invoices. Please try again.");
    }

    #[test]
    fn test_repository_error_collapses_to_fetch_failed() {
        let err = RepositoryError::NotFound {
            resource: "items".to_string(),
            id: RecordId::new(9).unwrap(),
        };
        assert_eq!(err.to_string(), "items 9 not found");
        assert_eq!(FetchError::from(err), FetchError::failed("items"));
    }
}
