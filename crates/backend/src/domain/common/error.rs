use contracts::domain::common::ResourceKind;
use thiserror::Error;

/// Ошибки хранилища записей
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(String),

    /// Код уже занят (гонка двух сессий при создании)
    #[error("duplicate identifier {code} for {kind}")]
    DuplicateIdentifier { kind: ResourceKind, code: String },

    #[error("corrupt {kind} record {id}: {reason}")]
    Corrupt {
        kind: ResourceKind,
        id: String,
        reason: String,
    },

    #[error("payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Ошибки выделения отображаемого кода
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Не удалось прочитать последнюю запись: код не выдумываем
    #[error("failed to read last {kind} record: {source}")]
    Store {
        kind: ResourceKind,
        #[source]
        source: StoreError,
    },

    #[error("could not allocate a unique {kind} identifier after {attempts} attempts")]
    Exhausted { kind: ResourceKind, attempts: usize },

    /// Номер после `after` не помещается в u64
    #[error("{kind} identifier sequence is exhausted after {after}")]
    SequenceOverflow { kind: ResourceKind, after: String },
}

/// Ошибки сервисного слоя
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}
