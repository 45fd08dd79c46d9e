use super::ListItem;

/// Проверяет, содержит ли хотя бы одно поисковое поле элемента подстроку
/// `needle` (уже в нижнем регистре)
pub fn matches_filter<T: ListItem>(item: &T, needle: &str) -> bool {
    T::resource().searchable.iter().any(|field| {
        item.field_value(field)
            .search_text()
            .map(|text| text.to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}

/// Фильтрует список по поисковому запросу (без учета регистра, по подстроке).
///
/// Запрос обрезается по краям; пустой запрос пропускает все элементы.
/// Порядок элементов сохраняется.
pub fn filter_records<'a, T: ListItem>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| matches_filter(*item, &needle))
        .collect()
}
