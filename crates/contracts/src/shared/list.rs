/// Универсальные утилиты для работы со списками (поиск, сортировка)
use crate::enums::{SortColumn, SortOrder};
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанной колонке
    fn compare_by(&self, other: &Self, column: SortColumn) -> Ordering;
}

/// Фильтрует список по поисковому запросу.
///
/// Пустой запрос возвращает список как есть (в исходном порядке).
/// Запрос не обрезается и не нормализуется — текст сравнивается дословно.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Сортирует список по указанной колонке и направлению.
///
/// `sort_by` стабилен: равные ключи сохраняют исходный порядок.
pub fn sort_list<T: Sortable>(items: &mut [T], column: SortColumn, order: SortOrder) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by(b, column);
        match order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });
}
