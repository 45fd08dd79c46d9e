use serde::{Deserialize, Serialize};

use crate::domain::common::{
    FieldDescriptor, FieldKind, FieldValue, Record, RecordDto, ResourceDescriptor,
    ResourceFields, ResourceKind,
};

pub const FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("code", FieldKind::PrefixedId),
    FieldDescriptor::new("description", FieldKind::Text),
    FieldDescriptor::new("rate", FieldKind::Numeric),
    FieldDescriptor::new("is_active", FieldKind::Boolean),
    FieldDescriptor::new("created_at", FieldKind::Date),
    FieldDescriptor::new("updated_at", FieldKind::Date),
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Tax,
    index: "a002",
    collection_name: "tax",
    element_name: "Tax",
    list_name: "Taxes",
    prefix: "IMP",
    fields: FIELDS,
    searchable: &["code", "description"],
};

/// Налог, начисляемый на заказ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TaxFields {
    /// Ставка в процентах
    pub rate: f64,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl ResourceFields for TaxFields {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "rate" => FieldValue::Number(self.rate),
            "is_active" => FieldValue::Bool(self.is_active),
            _ => FieldValue::Null,
        }
    }
}

pub type Tax = Record<TaxFields>;
pub type TaxDto = RecordDto<TaxFields>;
