use serde::{Deserialize, Serialize};

use crate::domain::common::{
    FieldDescriptor, FieldKind, FieldValue, Record, RecordDto, ResourceDescriptor,
    ResourceFields, ResourceKind,
};

pub const FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("code", FieldKind::PrefixedId),
    FieldDescriptor::new("description", FieldKind::Text),
    FieldDescriptor::new("protein_grams", FieldKind::Numeric),
    FieldDescriptor::new("price", FieldKind::Numeric),
    FieldDescriptor::new("is_active", FieldKind::Boolean),
    FieldDescriptor::new("created_at", FieldKind::Date),
    FieldDescriptor::new("updated_at", FieldKind::Date),
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::ProteinPlan,
    index: "a003",
    collection_name: "protein_plan",
    element_name: "Protein plan",
    list_name: "Protein plans",
    prefix: "PLN",
    fields: FIELDS,
    searchable: &["code", "description"],
};

/// Протеиновый план питания
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProteinPlanFields {
    /// Белок на порцию, г
    #[serde(rename = "proteinGrams")]
    pub protein_grams: f64,

    pub price: f64,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl ResourceFields for ProteinPlanFields {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "protein_grams" => FieldValue::Number(self.protein_grams),
            "price" => FieldValue::Number(self.price),
            "is_active" => FieldValue::Bool(self.is_active),
            _ => FieldValue::Null,
        }
    }
}

pub type ProteinPlan = Record<ProteinPlanFields>;
pub type ProteinPlanDto = RecordDto<ProteinPlanFields>;
