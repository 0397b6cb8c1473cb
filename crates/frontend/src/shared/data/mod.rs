pub mod repository;
pub mod source;

pub use repository::{FieldMap, MockRepository};
pub use source::RecordSource;
