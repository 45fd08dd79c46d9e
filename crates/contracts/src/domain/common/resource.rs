use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::domain::{
    a001_discount, a002_tax, a003_protein_plan, a004_supplier, a005_ingredient_category,
    a006_week,
};

// ============================================================================
// Resource kind
// ============================================================================

/// Тип справочника консоли
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Discount,
    Tax,
    ProteinPlan,
    Supplier,
    IngredientCategory,
    Week,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Discount,
        ResourceKind::Tax,
        ResourceKind::ProteinPlan,
        ResourceKind::Supplier,
        ResourceKind::IngredientCategory,
        ResourceKind::Week,
    ];

    /// Статическое описание справочника (префикс, поля, поиск)
    pub fn descriptor(&self) -> &'static ResourceDescriptor {
        match self {
            ResourceKind::Discount => &a001_discount::aggregate::DESCRIPTOR,
            ResourceKind::Tax => &a002_tax::aggregate::DESCRIPTOR,
            ResourceKind::ProteinPlan => &a003_protein_plan::aggregate::DESCRIPTOR,
            ResourceKind::Supplier => &a004_supplier::aggregate::DESCRIPTOR,
            ResourceKind::IngredientCategory => &a005_ingredient_category::aggregate::DESCRIPTOR,
            ResourceKind::Week => &a006_week::aggregate::DESCRIPTOR,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.descriptor().collection_name
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown resource type: {}", s))
    }
}

// ============================================================================
// Field descriptors
// ============================================================================

/// Способ сравнения значений поля при сортировке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Строка, без учета регистра
    Text,
    /// Число с плавающей точкой
    Numeric,
    /// Код вида "<префикс><N>", сравнивается по N
    PrefixedId,
    /// Дата / время
    Date,
    /// Флаг: true идет раньше false
    Boolean,
}

/// Описание сортируемого поля справочника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Статическое описание справочника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceDescriptor {
    pub kind: ResourceKind,
    /// Индекс агрегата (например, "a001")
    pub index: &'static str,
    /// Имя коллекции в БД и в маршрутах API
    pub collection_name: &'static str,
    pub element_name: &'static str,
    pub list_name: &'static str,
    /// Префикс отображаемого кода (например, "DES")
    pub prefix: &'static str,
    /// Сортируемые поля в порядке колонок списка
    pub fields: &'static [FieldDescriptor],
    /// Строковые поля, по которым работает поиск
    pub searchable: &'static [&'static str],
}

impl ResourceDescriptor {
    /// Найти поле по имени
    pub fn field(&self, name: &str) -> Option<FieldDescriptor> {
        self.fields.iter().copied().find(|f| f.name == name)
    }

    /// Сформировать код по номеру: `format_code(7)` -> "DES7"
    pub fn format_code(&self, number: u64) -> String {
        format!("{}{}", self.prefix, number)
    }

    /// Номер из кода записи этого справочника
    pub fn code_number(&self, code: &str) -> u64 {
        parse_code_number(code, self.prefix)
    }
}

/// Извлекает числовой суффикс кода.
///
/// Префикс отрезается, если он есть; дальше берутся ведущие цифры.
/// Пустой или нечисловой суффикс дает 0.
///
/// ```
/// use contracts::domain::common::resource::parse_code_number;
/// assert_eq!(parse_code_number("DES10", "DES"), 10);
/// assert_eq!(parse_code_number("DES", "DES"), 0);
/// assert_eq!(parse_code_number("DESabc", "DES"), 0);
/// ```
pub fn parse_code_number(code: &str, prefix: &str) -> u64 {
    let rest = code.strip_prefix(prefix).unwrap_or(code);
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<u64>().unwrap_or(0)
}

// ============================================================================
// Field values
// ============================================================================

/// Значение поля записи для сортировки и поиска
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(DateTime<Utc>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn optional_text(value: Option<&str>) -> Self {
        value.map(FieldValue::text).unwrap_or(FieldValue::Null)
    }

    /// Дата без времени трактуется как полночь UTC
    pub fn date(value: NaiveDate) -> Self {
        FieldValue::Date(value.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
    }

    /// Текстовое представление для поиска
    pub fn search_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Null | FieldValue::Bool(_) | FieldValue::Date(_) => None,
        }
    }
}

// ============================================================================
// Resource fields
// ============================================================================

/// Специфичные поля справочника поверх общих (код, наименование, даты)
pub trait ResourceFields:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + std::fmt::Debug + 'static
{
    /// Описание справочника
    fn descriptor() -> &'static ResourceDescriptor;

    /// Значение специфичного поля по имени; неизвестное поле -> Null
    fn field_value(&self, field: &str) -> FieldValue;
}
