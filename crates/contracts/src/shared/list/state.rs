use serde::{Deserialize, Serialize};

use super::{compute_view, ListItem, ListView};
use crate::domain::common::{FieldDescriptor, ResourceDescriptor};

// ============================================================================
// Sort
// ============================================================================

/// Направление сортировки (три состояния)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
    /// Исходный порядок
    #[default]
    None,
}

impl SortDirection {
    /// Следующее состояние при повторном клике по заголовку:
    /// по возрастанию -> по убыванию -> без сортировки -> по возрастанию
    pub fn next(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
            SortDirection::None => SortDirection::Ascending,
        }
    }

    /// Разбор параметра запроса ("asc" / "desc"); все прочее -> None
    pub fn from_query(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "asc" | "ascending" => SortDirection::Ascending,
            "desc" | "descending" => SortDirection::Descending,
            _ => SortDirection::None,
        }
    }
}

/// Текущая сортировка списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortState {
    pub field: Option<FieldDescriptor>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: FieldDescriptor, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// Сортировка реально применяется
    pub fn is_active(&self) -> bool {
        self.field.is_some() && self.direction != SortDirection::None
    }
}

// ============================================================================
// Page
// ============================================================================

/// Текущая страница (нумерация с 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl PageState {
    pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

    /// Номер страницы и размер не бывают меньше 1
    pub fn new(current_page: usize, items_per_page: usize) -> Self {
        Self {
            current_page: current_page.max(1),
            items_per_page: items_per_page.max(1),
        }
    }

    /// Индекс первого элемента страницы
    pub fn offset(&self) -> usize {
        (self.current_page.max(1) - 1).saturating_mul(self.items_per_page)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_ITEMS_PER_PAGE)
    }
}

// ============================================================================
// List state
// ============================================================================

/// Состояние списка на время жизни экрана: поиск, сортировка, страница.
///
/// Смена поиска, сортировки или размера страницы возвращает на первую
/// страницу.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListState {
    #[serde(skip)]
    resource: &'static ResourceDescriptor,
    pub filter_term: String,
    pub sort: SortState,
    pub page: PageState,
}

impl ListState {
    pub fn for_resource(resource: &'static ResourceDescriptor) -> Self {
        Self {
            resource,
            filter_term: String::new(),
            sort: SortState::default(),
            page: PageState::default(),
        }
    }

    pub fn resource(&self) -> &'static ResourceDescriptor {
        self.resource
    }

    pub fn set_filter_term(&mut self, term: impl Into<String>) {
        self.filter_term = term.into();
        self.page.current_page = 1;
    }

    /// Установить поле и направление; неизвестное поле сбрасывает сортировку
    pub fn set_sort(&mut self, field: &str, direction: SortDirection) {
        self.sort = match self.resource.field(field) {
            Some(descriptor) => SortState::new(descriptor, direction),
            None => SortState::default(),
        };
        self.page.current_page = 1;
    }

    /// Клик по заголовку колонки: то же поле крутит направление,
    /// новое поле начинает с возрастания
    pub fn toggle_sort(&mut self, field: &str) {
        let same_field = self.sort.field.map(|f| f.name == field).unwrap_or(false);
        let direction = if same_field {
            self.sort.direction.next()
        } else {
            SortDirection::Ascending
        };
        self.set_sort(field, direction);
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.page.current_page = page.max(1);
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.page = PageState::new(1, items_per_page);
    }

    /// Индикатор сортировки для заголовка колонки
    pub fn sort_indicator(&self, field: &str) -> &'static str {
        match self.sort.field {
            Some(f) if f.name == field => match self.sort.direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
                SortDirection::None => " ⇅",
            },
            _ => " ⇅",
        }
    }

    /// Пересчитать текущую страницу для снимка коллекции
    pub fn compute<T: ListItem + Clone>(&self, records: &[T]) -> ListView<T> {
        compute_view(records, &self.filter_term, &self.sort, &self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_discount::aggregate::DESCRIPTOR;

    #[test]
    fn test_defaults() {
        let state = ListState::for_resource(&DESCRIPTOR);
        assert_eq!(state.filter_term, "");
        assert!(!state.sort.is_active());
        assert_eq!(state.page, PageState::new(1, 10));
    }

    #[test]
    fn test_filter_and_sort_reset_page() {
        let mut state = ListState::for_resource(&DESCRIPTOR);
        state.set_current_page(3);
        state.set_filter_term("sale");
        assert_eq!(state.page.current_page, 1);

        state.set_current_page(2);
        state.set_sort("percentage", SortDirection::Descending);
        assert_eq!(state.page.current_page, 1);
        assert_eq!(state.sort.field.map(|f| f.name), Some("percentage"));

        state.set_current_page(2);
        state.set_items_per_page(25);
        assert_eq!(state.page, PageState::new(1, 25));
    }

    #[test]
    fn test_toggle_sort_cycles_three_states() {
        let mut state = ListState::for_resource(&DESCRIPTOR);
        state.toggle_sort("code");
        assert_eq!(state.sort.direction, SortDirection::Ascending);
        assert_eq!(state.sort_indicator("code"), " ▲");
        state.toggle_sort("code");
        assert_eq!(state.sort.direction, SortDirection::Descending);
        state.toggle_sort("code");
        assert_eq!(state.sort.direction, SortDirection::None);
        assert!(!state.sort.is_active());
        state.toggle_sort("description");
        assert_eq!(state.sort.direction, SortDirection::Ascending);
        assert_eq!(state.sort_indicator("code"), " ⇅");
    }

    #[test]
    fn test_unknown_sort_field_is_neutral() {
        let mut state = ListState::for_resource(&DESCRIPTOR);
        state.set_sort("rate", SortDirection::Ascending);
        assert_eq!(state.sort, SortState::default());
    }

    #[test]
    fn test_page_never_below_one() {
        let mut state = ListState::for_resource(&DESCRIPTOR);
        state.set_current_page(0);
        assert_eq!(state.page.current_page, 1);
        state.set_items_per_page(0);
        assert_eq!(state.page.items_per_page, 1);
    }

    #[test]
    fn test_sort_direction_from_query() {
        assert_eq!(SortDirection::from_query("ASC"), SortDirection::Ascending);
        assert_eq!(SortDirection::from_query("desc"), SortDirection::Descending);
        assert_eq!(SortDirection::from_query(""), SortDirection::None);
        assert_eq!(SortDirection::from_query("sideways"), SortDirection::None);
    }
}
