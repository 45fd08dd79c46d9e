use serde::{Deserialize, Serialize};

use super::{filter_records, paginate, sort_records, total_pages, ListItem, PageState, SortState};

/// Результат конвейера: текущая страница и счетчики
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListView<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub items_per_page: usize,
}

impl<T> ListView<T> {
    /// Страница за концом непустого результата (после сужения поиска).
    /// Вызывающий код должен вернуться на первую страницу.
    pub fn is_past_end(&self) -> bool {
        self.items.is_empty() && self.total_items > 0
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListView<U> {
        ListView {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
            current_page: self.current_page,
            items_per_page: self.items_per_page,
        }
    }
}

/// Поиск -> сортировка -> пагинация над снимком коллекции.
///
/// Порядок шагов фиксирован. Клонируются только элементы текущей страницы.
pub fn compute_view<T: ListItem + Clone>(
    records: &[T],
    filter_term: &str,
    sort: &SortState,
    page: &PageState,
) -> ListView<T> {
    let mut filtered = filter_records(records, filter_term);
    sort_records(&mut filtered, sort);

    let total_items = filtered.len();
    let items = paginate(&filtered, page)
        .iter()
        .map(|item| (*item).clone())
        .collect();

    ListView {
        items,
        total_items,
        total_pages: total_pages(total_items, page.items_per_page),
        current_page: page.current_page,
        items_per_page: page.items_per_page,
    }
}
