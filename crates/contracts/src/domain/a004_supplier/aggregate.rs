use serde::{Deserialize, Serialize};

use crate::domain::common::{
    FieldDescriptor, FieldKind, FieldValue, Record, RecordDto, ResourceDescriptor,
    ResourceFields, ResourceKind,
};

pub const FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("code", FieldKind::PrefixedId),
    FieldDescriptor::new("description", FieldKind::Text),
    FieldDescriptor::new("contact_name", FieldKind::Text),
    FieldDescriptor::new("email", FieldKind::Text),
    FieldDescriptor::new("phone", FieldKind::Text),
    FieldDescriptor::new("is_active", FieldKind::Boolean),
    FieldDescriptor::new("created_at", FieldKind::Date),
    FieldDescriptor::new("updated_at", FieldKind::Date),
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Supplier,
    index: "a004",
    collection_name: "supplier",
    element_name: "Supplier",
    list_name: "Suppliers",
    prefix: "PRV",
    fields: FIELDS,
    searchable: &["code", "description", "contact_name", "email", "phone"],
};

/// Поставщик продуктов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SupplierFields {
    #[serde(rename = "contactName")]
    pub contact_name: String,

    pub email: String,
    pub phone: String,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl ResourceFields for SupplierFields {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "contact_name" => FieldValue::text(self.contact_name.as_str()),
            "email" => FieldValue::text(self.email.as_str()),
            "phone" => FieldValue::text(self.phone.as_str()),
            "is_active" => FieldValue::Bool(self.is_active),
            _ => FieldValue::Null,
        }
    }
}

pub type Supplier = Record<SupplierFields>;
pub type SupplierDto = RecordDto<SupplierFields>;
