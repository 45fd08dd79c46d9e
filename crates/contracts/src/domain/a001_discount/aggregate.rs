use serde::{Deserialize, Serialize};

use crate::domain::common::{
    FieldDescriptor, FieldKind, FieldValue, Record, RecordDto, ResourceDescriptor,
    ResourceFields, ResourceKind,
};

// ============================================================================
// Descriptor
// ============================================================================

pub const FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("code", FieldKind::PrefixedId),
    FieldDescriptor::new("description", FieldKind::Text),
    FieldDescriptor::new("percentage", FieldKind::Numeric),
    FieldDescriptor::new("is_active", FieldKind::Boolean),
    FieldDescriptor::new("created_at", FieldKind::Date),
    FieldDescriptor::new("updated_at", FieldKind::Date),
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Discount,
    index: "a001",
    collection_name: "discount",
    element_name: "Discount",
    list_name: "Discounts",
    prefix: "DES",
    fields: FIELDS,
    searchable: &["code", "description"],
};

// ============================================================================
// Aggregate
// ============================================================================

/// Скидка на заказ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DiscountFields {
    /// Размер скидки в процентах
    pub percentage: f64,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl ResourceFields for DiscountFields {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "percentage" => FieldValue::Number(self.percentage),
            "is_active" => FieldValue::Bool(self.is_active),
            _ => FieldValue::Null,
        }
    }
}

pub type Discount = Record<DiscountFields>;
pub type DiscountDto = RecordDto<DiscountFields>;
