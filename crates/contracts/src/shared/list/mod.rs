//! Универсальный конвейер списков справочников: поиск -> сортировка -> пагинация.
//!
//! Все функции чистые и синхронные: на вход снимок коллекции и состояние
//! списка, на выходе текущая страница. Кеширования нет, пересчет на каждое
//! изменение состояния.

pub mod compare;
pub mod filter;
pub mod paginate;
pub mod pipeline;
pub mod state;

pub use compare::{compare, compare_values, sort_records};
pub use filter::{filter_records, matches_filter};
pub use paginate::{paginate, total_pages};
pub use pipeline::{compute_view, ListView};
pub use state::{ListState, PageState, SortDirection, SortState};

use crate::domain::common::{FieldValue, ResourceDescriptor};

/// Трейт для элементов списка, поддерживающих поиск и сортировку
pub trait ListItem {
    /// Справочник, к которому относится элемент
    fn resource() -> &'static ResourceDescriptor;

    /// Значение поля по имени
    fn field_value(&self, field: &str) -> FieldValue;
}

impl<T: ListItem> ListItem for &T {
    fn resource() -> &'static ResourceDescriptor {
        T::resource()
    }

    fn field_value(&self, field: &str) -> FieldValue {
        (**self).field_value(field)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::a001_discount::aggregate::{Discount, DiscountFields};
    use crate::domain::common::RecordDto;

    pub fn discount(code: &str, description: &str, percentage: f64, is_active: bool) -> Discount {
        Discount::new_for_insert(
            code.to_string(),
            RecordDto {
                description: description.to_string(),
                fields: DiscountFields {
                    percentage,
                    is_active,
                },
                ..Default::default()
            },
        )
    }

    pub fn codes<T: std::borrow::Borrow<Discount>>(items: &[T]) -> Vec<String> {
        items.iter().map(|d| d.borrow().base.code.clone()).collect()
    }
}
