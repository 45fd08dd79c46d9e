use serde::{Deserialize, Serialize};

use crate::domain::common::{
    FieldDescriptor, FieldKind, FieldValue, Record, RecordDto, ResourceDescriptor,
    ResourceFields, ResourceKind,
};

pub const FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("code", FieldKind::PrefixedId),
    FieldDescriptor::new("description", FieldKind::Text),
    FieldDescriptor::new("notes", FieldKind::Text),
    FieldDescriptor::new("is_active", FieldKind::Boolean),
    FieldDescriptor::new("created_at", FieldKind::Date),
    FieldDescriptor::new("updated_at", FieldKind::Date),
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::IngredientCategory,
    index: "a005",
    collection_name: "ingredient_category",
    element_name: "Ingredient category",
    list_name: "Ingredient categories",
    prefix: "CAT",
    fields: FIELDS,
    searchable: &["code", "description", "notes"],
};

/// Категория ингредиентов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IngredientCategoryFields {
    pub notes: Option<String>,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl ResourceFields for IngredientCategoryFields {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "notes" => FieldValue::optional_text(self.notes.as_deref()),
            "is_active" => FieldValue::Bool(self.is_active),
            _ => FieldValue::Null,
        }
    }
}

pub type IngredientCategory = Record<IngredientCategoryFields>;
pub type IngredientCategoryDto = RecordDto<IngredientCategoryFields>;
