use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{
    FieldDescriptor, FieldKind, FieldValue, Record, RecordDto, ResourceDescriptor,
    ResourceFields, ResourceKind,
};

pub const FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("code", FieldKind::PrefixedId),
    FieldDescriptor::new("description", FieldKind::Text),
    FieldDescriptor::new("start_date", FieldKind::Date),
    FieldDescriptor::new("end_date", FieldKind::Date),
    FieldDescriptor::new("is_active", FieldKind::Boolean),
    FieldDescriptor::new("created_at", FieldKind::Date),
    FieldDescriptor::new("updated_at", FieldKind::Date),
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Week,
    index: "a006",
    collection_name: "week",
    element_name: "Week",
    list_name: "Weeks",
    prefix: "SEM",
    fields: FIELDS,
    searchable: &["code", "description"],
};

/// Неделя меню
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekFields {
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,

    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Default for WeekFields {
    fn default() -> Self {
        let today = chrono::Utc::now().date_naive();
        Self {
            start_date: today,
            end_date: today + chrono::Duration::days(6),
            is_active: false,
        }
    }
}

impl ResourceFields for WeekFields {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "start_date" => FieldValue::date(self.start_date),
            "end_date" => FieldValue::date(self.end_date),
            "is_active" => FieldValue::Bool(self.is_active),
            _ => FieldValue::Null,
        }
    }
}

pub type Week = Record<WeekFields>;
pub type WeekDto = RecordDto<WeekFields>;
