use serde::{Deserialize, Serialize};

use super::EntityMetadata;

/// Поля, общие для записей всех справочников.
///
/// `id` назначает хранилище и наружу не показывается; пользователь видит
/// `code` ("DES7"), который выдает аллокатор.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    pub id: Id,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self::restore(id, code, description, None, EntityMetadata::new())
    }

    /// Собрать запись из сохраненных полей
    pub fn restore(
        id: Id,
        code: String,
        description: String,
        comment: Option<String>,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            id,
            code,
            description,
            comment,
            metadata,
        }
    }

    /// Запись видна в списках
    pub fn is_live(&self) -> bool {
        !self.metadata.is_deleted
    }

    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
