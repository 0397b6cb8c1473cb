pub mod resource_kind;

pub use resource_kind::{ContactScope, ResourceKind, Section};
