//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod base_aggregate;
pub mod entity_metadata;
pub mod record;
pub mod resource;

// Re-exports
pub use aggregate_id::{AggregateId, RecordId};
pub use aggregate_root::AggregateRoot;
pub use base_aggregate::BaseAggregate;
pub use entity_metadata::EntityMetadata;
pub use record::{Record, RecordDto};
pub use resource::{
    FieldDescriptor, FieldKind, FieldValue, ResourceDescriptor, ResourceFields, ResourceKind,
};
