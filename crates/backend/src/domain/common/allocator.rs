//! Выделение отображаемых кодов вида "<префикс><N>".
//!
//! Схема "прочитать последнюю запись -> +1" не атомарна: две сессии могут
//! получить один и тот же номер. Защита от гонки - уникальный индекс в
//! хранилище и повтор в `ResourceService::create`.

use contracts::domain::common::ResourceFields;

use super::{AllocationError, RecordStore};

/// Следующий номер для справочника `F`.
///
/// Пустой справочник -> 1. Ошибка чтения пробрасывается как есть,
/// подставлять "1" нельзя: это маскирует сбой и ведет к дублям.
pub async fn next_number<F, S>(store: &S) -> Result<u64, AllocationError>
where
    F: ResourceFields,
    S: RecordStore<F> + ?Sized,
{
    let descriptor = F::descriptor();
    let last = store
        .find_most_recently_created()
        .await
        .map_err(|source| AllocationError::Store {
            kind: descriptor.kind,
            source,
        })?;

    match last {
        Some(record) => descriptor
            .code_number(&record.base.code)
            .checked_add(1)
            .ok_or(AllocationError::SequenceOverflow {
                kind: descriptor.kind,
                after: record.base.code,
            }),
        None => Ok(1),
    }
}

/// Следующий код для справочника `F` (например, "DES7")
pub async fn allocate_next<F, S>(store: &S) -> Result<String, AllocationError>
where
    F: ResourceFields,
    S: RecordStore<F> + ?Sized,
{
    let number = next_number::<F, S>(store).await?;
    Ok(F::descriptor().format_code(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::memory_store::{dto, MemoryStore};
    use crate::domain::common::StoreError;
    use contracts::domain::a001_discount::aggregate::DiscountFields;
    use contracts::domain::a006_week::aggregate::WeekFields;

    #[tokio::test]
    async fn test_empty_store_starts_at_one() {
        let store = MemoryStore::<DiscountFields>::new();
        assert_eq!(allocate_next(&store).await.unwrap(), "DES1");

        let weeks = MemoryStore::<WeekFields>::new();
        assert_eq!(allocate_next(&weeks).await.unwrap(), "SEM1");
    }

    #[tokio::test]
    async fn test_next_after_existing_code() {
        let store = MemoryStore::<DiscountFields>::new();
        store.create("DES1", dto("a")).await.unwrap();
        assert_eq!(allocate_next(&store).await.unwrap(), "DES2");

        store.create("DES9", dto("b")).await.unwrap();
        assert_eq!(allocate_next(&store).await.unwrap(), "DES10");
    }

    #[tokio::test]
    async fn test_uses_most_recent_not_largest() {
        let store = MemoryStore::<DiscountFields>::new();
        store.create("DES20", dto("imported")).await.unwrap();
        store.create("DES3", dto("manual")).await.unwrap();
        assert_eq!(allocate_next(&store).await.unwrap(), "DES4");
    }

    #[tokio::test]
    async fn test_malformed_suffix_counts_as_zero() {
        let store = MemoryStore::<DiscountFields>::new();
        store.create("DES", dto("no number")).await.unwrap();
        assert_eq!(allocate_next(&store).await.unwrap(), "DES1");

        store.create("DESx7", dto("garbage")).await.unwrap();
        assert_eq!(allocate_next(&store).await.unwrap(), "DES1");
    }

    #[tokio::test]
    async fn test_allocation_is_a_pure_read() {
        let store = MemoryStore::<DiscountFields>::new();
        store.create("DES1", dto("a")).await.unwrap();
        assert_eq!(allocate_next(&store).await.unwrap(), "DES2");
        assert_eq!(allocate_next(&store).await.unwrap(), "DES2");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_largest_number_does_not_wrap() {
        let store = MemoryStore::<DiscountFields>::new();
        store.create("DES18446744073709551614", dto("almost")).await.unwrap();
        assert_eq!(
            allocate_next(&store).await.unwrap(),
            "DES18446744073709551615"
        );

        store.create("DES18446744073709551615", dto("last")).await.unwrap();
        let err = allocate_next(&store).await.unwrap_err();
        assert!(matches!(
            err,
            AllocationError::SequenceOverflow { ref after, .. } if after == "DES18446744073709551615"
        ));
    }

    #[tokio::test]
    async fn test_store_failure_is_propagated() {
        let store = MemoryStore::<DiscountFields>::new();
        store.set_unavailable(true);
        let err = allocate_next(&store).await.unwrap_err();
        assert!(matches!(
            err,
            AllocationError::Store {
                source: StoreError::Database(_),
                ..
            }
        ));
    }
}
