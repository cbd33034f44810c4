//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     column=SortColumn::Weight
//!     current_column=Signal::derive(move || state.with(|s| s.sort_column))
//!     sort_order=Signal::derive(move || state.with(|s| s.sort_order))
//!     on_sort=Callback::new(move |column| state.update(|s| s.toggle_sort(column)))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::enums::{SortColumn, SortOrder};
use leptos::prelude::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Автоматически:
/// - Подписывает ячейку именем колонки
/// - Добавляет индикатор сортировки (▲▼⇅)
/// - Обрабатывает клики для изменения сортировки
#[component]
pub fn SortableHeaderCell(
    /// Колонка, за которую отвечает ячейка
    column: SortColumn,

    /// Текущая колонка сортировки из state
    #[prop(into)]
    current_column: Signal<SortColumn>,

    /// Направление сортировки из state
    #[prop(into)]
    sort_order: Signal<SortOrder>,

    /// Callback при клике на заголовок
    on_sort: Callback<SortColumn>,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let handle_click = move |_| {
        on_sort.run(column);
    };

    let header_style = if align == "right" {
        "border: 1px solid #ddd; padding: 10px; cursor: pointer; user-select: none; text-align: right;"
    } else {
        "border: 1px solid #ddd; padding: 10px; cursor: pointer; user-select: none; text-align: left;"
    };

    view! {
        <th
            class="table__sortable-header"
            style=header_style
            on:click=handle_click
            title="Сортировать"
        >
            {column.display_name()}
            <span class=move || get_sort_class(current_column.get(), column)>
                {move || get_sort_indicator(current_column.get(), column, sort_order.get())}
            </span>
        </th>
    }
}
