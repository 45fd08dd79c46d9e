use std::sync::Arc;

use contracts::domain::common::{AggregateId, Record, RecordDto, RecordId, ResourceFields};
use contracts::shared::list::{ListState, ListView};
use contracts::shared::logger::EventLogger;

use super::allocator::{allocate_next, next_number};
use super::{AllocationError, RecordStore, ServiceError, StoreError};

/// Тестовые данные справочника
pub trait SeedData: ResourceFields {
    fn test_data() -> Vec<RecordDto<Self>>;
}

/// Параметры сервиса из конфигурации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Сколько раз пробовать вставку при конфликте кода
    pub max_attempts: usize,
    pub default_page_size: usize,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            default_page_size: 10,
        }
    }
}

/// Операции над записями одного справочника
pub struct ResourceService<F: ResourceFields> {
    store: Arc<dyn RecordStore<F>>,
    logger: Arc<dyn EventLogger>,
    options: ServiceOptions,
}

fn parse_id(id: &str) -> Result<RecordId, ServiceError> {
    RecordId::from_string(id).map_err(ServiceError::InvalidId)
}

impl<F: ResourceFields> ResourceService<F> {
    pub fn new(
        store: Arc<dyn RecordStore<F>>,
        logger: Arc<dyn EventLogger>,
        options: ServiceOptions,
    ) -> Self {
        Self {
            store,
            logger,
            options,
        }
    }

    pub fn options(&self) -> &ServiceOptions {
        &self.options
    }

    /// Пустое состояние списка с размером страницы из конфигурации
    pub fn new_list_state(&self) -> ListState {
        let mut state = ListState::for_resource(F::descriptor());
        state.set_items_per_page(self.options.default_page_size);
        state
    }

    /// Создание записи с новым кодом.
    ///
    /// Если код успела занять другая сессия, номер выделяется заново, но не
    /// меньше проигравшего + 1. После `max_attempts` неудач -> `Exhausted`.
    pub async fn create(&self, dto: RecordDto<F>) -> Result<Record<F>, ServiceError> {
        dto.validate().map_err(ServiceError::Validation)?;

        let descriptor = F::descriptor();
        let attempts = self.options.max_attempts.max(1);
        let mut floor = 0;

        for attempt in 1..=attempts {
            let number = next_number::<F, _>(self.store.as_ref()).await?.max(floor);
            let code = descriptor.format_code(number);

            match self.store.create(&code, dto.clone()).await {
                Ok(record) => {
                    self.logger.log(
                        descriptor.collection_name,
                        &format!("Создана запись {} \"{}\"", code, record.base.description),
                    );
                    return Ok(record);
                }
                Err(StoreError::DuplicateIdentifier { .. }) => {
                    tracing::warn!(
                        "{} is already taken (attempt {}/{}), allocating again",
                        code,
                        attempt,
                        attempts
                    );
                    floor = number.checked_add(1).ok_or_else(|| {
                        AllocationError::SequenceOverflow {
                            kind: descriptor.kind,
                            after: code.clone(),
                        }
                    })?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::error!(
            "Failed to allocate a unique {} code after {} attempts",
            descriptor.kind,
            attempts
        );
        Err(AllocationError::Exhausted {
            kind: descriptor.kind,
            attempts,
        }
        .into())
    }

    /// Обновление существующей записи (id берется из формы)
    pub async fn update(&self, dto: RecordDto<F>) -> Result<Record<F>, ServiceError> {
        let id = dto
            .id
            .as_deref()
            .ok_or_else(|| ServiceError::InvalidId("missing id".into()))
            .and_then(parse_id)?;

        dto.validate().map_err(ServiceError::Validation)?;

        let record = self.store.update(id, &dto).await?;
        self.logger.log(
            F::descriptor().collection_name,
            &format!("Изменена запись {}", record.base.code),
        );
        Ok(record)
    }

    /// Создание или обновление в зависимости от наличия id
    pub async fn upsert(&self, dto: RecordDto<F>) -> Result<Record<F>, ServiceError> {
        if dto.id.is_some() {
            self.update(dto).await
        } else {
            self.create(dto).await
        }
    }

    /// Мягкое удаление
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_id(id)?;
        self.store.delete(id).await?;
        self.logger.log(
            F::descriptor().collection_name,
            &format!("Удалена запись {}", id),
        );
        Ok(())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Record<F>>, ServiceError> {
        let id = parse_id(id)?;
        Ok(self.store.get_by_id(id).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Record<F>>, ServiceError> {
        Ok(self.store.list().await?)
    }

    /// Текущая страница списка для состояния экрана
    pub async fn list_view(&self, state: &ListState) -> Result<ListView<Record<F>>, ServiceError> {
        let records = self.store.list().await?;
        Ok(state.compute(&records))
    }

    /// Код, который получит следующая запись (для отображения в форме)
    pub async fn next_code(&self) -> Result<String, ServiceError> {
        Ok(allocate_next::<F, _>(self.store.as_ref()).await?)
    }
}

impl<F: SeedData> ResourceService<F> {
    /// Вставка тестовых данных
    pub async fn insert_test_data(&self) -> Result<Vec<Record<F>>, ServiceError> {
        let mut created = Vec::new();
        for dto in F::test_data() {
            created.push(self.create(dto).await?);
        }
        Ok(created)
    }
}
