//! Общие типы консоли: агрегаты справочников, дескрипторы ресурсов
//! и конвейер списков (поиск, сортировка, пагинация).

pub mod domain;
pub mod shared;
