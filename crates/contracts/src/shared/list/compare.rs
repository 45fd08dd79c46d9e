use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

use super::{ListItem, SortDirection, SortState};
use crate::domain::common::resource::parse_code_number;
use crate::domain::common::{FieldDescriptor, FieldKind, FieldValue};

/// Сравнивает два элемента по полю с учетом направления.
///
/// `SortDirection::None` всегда дает `Equal`: порядок не меняется.
pub fn compare<T: ListItem>(
    a: &T,
    b: &T,
    field: &FieldDescriptor,
    direction: SortDirection,
) -> Ordering {
    if direction == SortDirection::None {
        return Ordering::Equal;
    }

    let cmp = compare_values(
        &a.field_value(field.name),
        &b.field_value(field.name),
        field.kind,
        T::resource().prefix,
    );

    match direction {
        SortDirection::Descending => cmp.reverse(),
        _ => cmp,
    }
}

/// Сравнение значений по способу поля. Ошибки разбора не пробрасываются,
/// а сводятся к граничному значению (0 или "наименьшее").
pub fn compare_values(a: &FieldValue, b: &FieldValue, kind: FieldKind, prefix: &str) -> Ordering {
    match kind {
        FieldKind::Text => text_key(a).cmp(&text_key(b)),
        FieldKind::Numeric => numeric_key(a).total_cmp(&numeric_key(b)),
        FieldKind::PrefixedId => id_key(a, prefix).cmp(&id_key(b, prefix)),
        FieldKind::Date => date_key(a).cmp(&date_key(b)),
        FieldKind::Boolean => bool_rank(a).cmp(&bool_rank(b)),
    }
}

/// Стабильная сортировка по состоянию сортировки.
/// Без поля или с нейтральным направлением порядок сохраняется.
pub fn sort_records<T: ListItem>(items: &mut [T], sort: &SortState) {
    let Some(field) = sort.field else {
        return;
    };
    if sort.direction == SortDirection::None {
        return;
    }
    items.sort_by(|a, b| compare(a, b, &field, sort.direction));
}

fn text_key(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.to_lowercase(),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Date(d) => d.to_rfc3339(),
        FieldValue::Null => String::new(),
    }
}

fn numeric_key(value: &FieldValue) -> f64 {
    let n = match value {
        FieldValue::Number(n) => *n,
        FieldValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        FieldValue::Bool(b) => f64::from(u8::from(*b)),
        FieldValue::Date(d) => d.timestamp_millis() as f64,
        FieldValue::Null => 0.0,
    };
    // NaN/inf и -0.0 сводим к 0, иначе total_cmp разнесет их по краям
    if n.is_finite() && n != 0.0 {
        n
    } else {
        0.0
    }
}

fn id_key(value: &FieldValue, prefix: &str) -> u64 {
    match value {
        FieldValue::Text(s) => parse_code_number(s, prefix),
        FieldValue::Number(n) if n.is_finite() && *n >= 0.0 => *n as u64,
        _ => 0,
    }
}

fn date_key(value: &FieldValue) -> Option<i64> {
    match value {
        FieldValue::Date(d) => Some(d.timestamp_millis()),
        FieldValue::Text(s) => parse_timestamp_millis(s),
        FieldValue::Number(n) if n.is_finite() => Some(*n as i64),
        _ => None,
    }
}

fn bool_rank(value: &FieldValue) -> u8 {
    let truthy = match value {
        FieldValue::Bool(b) => *b,
        FieldValue::Text(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
        FieldValue::Number(n) => *n != 0.0,
        FieldValue::Date(_) | FieldValue::Null => false,
    };
    if truthy {
        0
    } else {
        1
    }
}

/// RFC 3339, "YYYY-MM-DD HH:MM:SS" или "YYYY-MM-DD" -> epoch ms
fn parse_timestamp_millis(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}
