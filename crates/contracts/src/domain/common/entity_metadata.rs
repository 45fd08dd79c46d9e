use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Жизненный цикл записи справочника.
///
/// `created_at` задает порядок записей: по нему хранилище отдает коллекцию
/// и ищет последнюю запись для выделения кода.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Удаленная запись скрыта из списков, но ее код остается занятым
    pub is_deleted: bool,
    pub version: i32,
}

impl EntityMetadata {
    /// Черновик до сохранения (версия 0)
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            is_deleted: false,
            version: 0,
        }
    }

    /// Метаданные сохраненной записи: время с точностью до микросекунд,
    /// как оно хранится в БД, версия 1
    pub fn inserted_at(now: DateTime<Utc>) -> Self {
        let now = now.trunc_subsecs(6);
        Self {
            created_at: now,
            updated_at: now,
            is_deleted: false,
            version: 1,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now().trunc_subsecs(6);
    }

    pub fn increment_version(&mut self) {
        self.version += 1;
    }

    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.touch();
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_inserted_at_truncates_to_micros() {
        let now = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let meta = EntityMetadata::inserted_at(now);
        assert_eq!(meta.created_at.timestamp_subsec_nanos(), 123_456_000);
        assert_eq!(meta.created_at, meta.updated_at);
        assert_eq!(meta.version, 1);
    }

    #[test]
    fn test_mark_deleted_keeps_creation_time() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let mut meta = EntityMetadata::inserted_at(now);
        meta.mark_deleted();
        assert!(meta.is_deleted);
        assert_eq!(meta.created_at, now);
        assert!(meta.updated_at >= now);
    }
}
