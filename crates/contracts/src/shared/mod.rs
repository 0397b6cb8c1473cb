pub mod date_range;
pub mod error;
pub mod record;
pub mod report;
pub mod status;

pub use date_range::{parse_iso_date, DateRange};
pub use error::{FetchError, RepositoryError};
pub use record::{FieldValue, Record, RecordId};
pub use report::PeriodReport;
pub use status::{StatusCategory, StockStatus};
