use async_trait::async_trait;
use contracts::domain::common::{Record, RecordDto, RecordId, ResourceFields};

use super::StoreError;

/// Хранилище записей одного справочника.
///
/// Все операции асинхронные; отмену и таймауты решает реализация.
#[async_trait]
pub trait RecordStore<F: ResourceFields>: Send + Sync {
    /// Вся коллекция (без удаленных) в порядке создания
    async fn list(&self) -> Result<Vec<Record<F>>, StoreError>;

    async fn get_by_id(&self, id: RecordId) -> Result<Option<Record<F>>, StoreError>;

    /// Вставка новой записи с выделенным кодом.
    /// ID и даты назначает хранилище; занятый код -> `DuplicateIdentifier`.
    async fn create(&self, code: &str, draft: RecordDto<F>) -> Result<Record<F>, StoreError>;

    /// Применить форму к существующей записи (код не меняется)
    async fn update(&self, id: RecordId, dto: &RecordDto<F>) -> Result<Record<F>, StoreError>;

    /// Мягкое удаление
    async fn delete(&self, id: RecordId) -> Result<(), StoreError>;

    /// Последняя созданная запись, включая удаленные: коды не переиспользуются
    async fn find_most_recently_created(&self) -> Result<Option<Record<F>>, StoreError>;
}
