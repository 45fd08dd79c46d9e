//! Общая часть справочников: хранилище, выделение кодов, сервис

pub mod allocator;
pub mod error;
pub mod record_store;
pub mod repository;
pub mod service;

#[cfg(test)]
pub mod memory_store;

pub use error::{AllocationError, ServiceError, StoreError};
pub use record_store::RecordStore;
pub use repository::SqlRecordStore;
pub use service::{ResourceService, SeedData, ServiceOptions};
