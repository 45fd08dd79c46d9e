//! Хранилище в памяти и журнал событий для тестов сервисов

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use contracts::domain::a001_discount::aggregate::{DiscountDto, DiscountFields};
use contracts::domain::common::{
    AggregateId, EntityMetadata, Record, RecordDto, RecordId, ResourceFields,
};
use contracts::shared::logger::EventLogger;
use sea_orm::DbErr;

use super::{RecordStore, StoreError};

pub fn dto(description: &str) -> DiscountDto {
    DiscountDto {
        description: description.into(),
        fields: DiscountFields {
            percentage: 10.0,
            is_active: true,
        },
        ..Default::default()
    }
}

pub struct MemoryStore<F> {
    records: Mutex<Vec<Record<F>>>,
    unavailable: AtomicBool,
    race_next_create: AtomicBool,
}

impl<F: ResourceFields> MemoryStore<F> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            unavailable: AtomicBool::new(false),
            race_next_create: AtomicBool::new(false),
        }
    }

    /// Все операции падают, как при недоступной БД
    pub fn set_unavailable(&self, value: bool) {
        self.unavailable.store(value, Ordering::SeqCst);
    }

    /// Следующий create проиграет гонку: "другая сессия" успеет
    /// вставить запись с тем же кодом
    pub fn race_next_create(&self) {
        self.race_next_create.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn codes(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.base.code.clone())
            .collect()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Database(DbErr::Custom("connection refused".into())));
        }
        Ok(())
    }

    fn insert(records: &mut Vec<Record<F>>, code: &str, draft: RecordDto<F>) -> Record<F> {
        let mut record = Record::new_for_insert(code.to_string(), draft);
        // строго возрастающее время создания
        let offset = Duration::milliseconds(records.len() as i64);
        record.base.metadata = EntityMetadata::inserted_at(Utc::now() + offset);
        records.push(record.clone());
        record
    }
}

#[async_trait]
impl<F: ResourceFields> RecordStore<F> for MemoryStore<F> {
    async fn list(&self) -> Result<Vec<Record<F>>, StoreError> {
        self.check()?;
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| r.base.is_live())
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: RecordId) -> Result<Option<Record<F>>, StoreError> {
        self.check()?;
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|r| r.base.id == id && r.base.is_live())
            .cloned())
    }

    async fn create(&self, code: &str, draft: RecordDto<F>) -> Result<Record<F>, StoreError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        if self.race_next_create.swap(false, Ordering::SeqCst) {
            let mut rival = draft.clone();
            rival.description = format!("{} (other session)", rival.description);
            Self::insert(&mut records, code, rival);
        }
        if records.iter().any(|r| r.base.code == code) {
            return Err(StoreError::DuplicateIdentifier {
                kind: F::descriptor().kind,
                code: code.to_string(),
            });
        }
        Ok(Self::insert(&mut records, code, draft))
    }

    async fn update(&self, id: RecordId, dto: &RecordDto<F>) -> Result<Record<F>, StoreError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.base.id == id && r.base.is_live())
            .ok_or_else(|| StoreError::NotFound(id.as_string()))?;
        record.update(dto);
        record.before_write();
        record.base.metadata.increment_version();
        Ok(record.clone())
    }

    async fn delete(&self, id: RecordId) -> Result<(), StoreError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.base.id == id && r.base.is_live())
            .ok_or_else(|| StoreError::NotFound(id.as_string()))?;
        record.base.metadata.mark_deleted();
        Ok(())
    }

    async fn find_most_recently_created(&self) -> Result<Option<Record<F>>, StoreError> {
        self.check()?;
        let records = self.records.lock().unwrap();
        Ok(records.last().cloned())
    }
}

/// Журнал событий, запоминающий сообщения
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(String, String)>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries.lock().unwrap().clone()
    }
}

impl EventLogger for RecordingLogger {
    fn log(&self, category: &str, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((category.to_string(), message.to_string()));
    }
}
