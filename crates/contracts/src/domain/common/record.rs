use serde::{Deserialize, Serialize};

use super::{
    AggregateRoot, BaseAggregate, EntityMetadata, FieldValue, RecordId, ResourceDescriptor,
    ResourceFields,
};
use crate::shared::list::ListItem;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Запись справочника: общие поля + специфичные поля `F`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<F> {
    #[serde(flatten)]
    pub base: BaseAggregate<RecordId>,

    #[serde(flatten)]
    pub fields: F,
}

impl<F: ResourceFields> Record<F> {
    /// Создать новую запись для вставки в БД с уже выделенным кодом
    pub fn new_for_insert(code: String, dto: RecordDto<F>) -> Self {
        let mut base = BaseAggregate::new(RecordId::new_v4(), code, dto.description);
        base.comment = dto.comment;

        Self {
            base,
            fields: dto.fields,
        }
    }

    /// Описание справочника записи
    pub fn descriptor() -> &'static ResourceDescriptor {
        F::descriptor()
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.to_string()
    }

    /// Обновить данные из DTO (код не меняется)
    pub fn update(&mut self, dto: &RecordDto<F>) {
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.fields = dto.fields.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        validate_description(&self.base.description)?;
        let prefix = F::descriptor().prefix;
        if !self.base.code.starts_with(prefix) {
            return Err(format!("Код должен начинаться с {}", prefix));
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }

    /// Значение поля по имени: общие поля, затем специфичные
    pub fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "code" => FieldValue::text(self.base.code.as_str()),
            "description" => FieldValue::text(self.base.description.as_str()),
            "comment" => FieldValue::optional_text(self.base.comment.as_deref()),
            "created_at" => FieldValue::Date(self.base.metadata.created_at),
            "updated_at" => FieldValue::Date(self.base.metadata.updated_at),
            _ => self.fields.field_value(field),
        }
    }
}

impl<F: ResourceFields> AggregateRoot for Record<F> {
    type Id = RecordId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        F::descriptor().index
    }

    fn collection_name() -> &'static str {
        F::descriptor().collection_name
    }

    fn element_name() -> &'static str {
        F::descriptor().element_name
    }

    fn list_name() -> &'static str {
        F::descriptor().list_name
    }
}

impl<F: ResourceFields> ListItem for Record<F> {
    fn resource() -> &'static ResourceDescriptor {
        F::descriptor()
    }

    fn field_value(&self, field: &str) -> FieldValue {
        Record::field_value(self, field)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления записи справочника
///
/// При создании `code` игнорируется: код выделяет аллокатор.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecordDto<F> {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,

    #[serde(flatten)]
    pub fields: F,
}

impl<F> RecordDto<F> {
    /// Проверка формы до выделения кода
    pub fn validate(&self) -> Result<(), String> {
        validate_description(&self.description)
    }
}

fn validate_description(description: &str) -> Result<(), String> {
    if description.trim().is_empty() {
        return Err("Наименование не может быть пустым".into());
    }
    Ok(())
}
