use contracts::domain::a001_pokemon::Pokemon;
use contracts::enums::{SortColumn, SortOrder};
use contracts::shared::list::{filter_list, sort_list};
use leptos::prelude::*;

/// Состояние списка покемонов.
///
/// Живёт в одном `RwSignal` на экземпляр списка; изменяется только
/// обработчиками ввода (`set_query`, `toggle_sort`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PokemonListState {
    // Поиск
    pub query: String,

    // Сортировка
    pub sort_column: SortColumn,
    pub sort_order: SortOrder,
}

impl PokemonListState {
    /// Обновляет поисковый запрос (текст берётся дословно)
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Переключение сортировки по клику на заголовок:
    /// та же колонка — смена направления, другая — выбор колонки и сброс в Asc.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_order = self.sort_order.toggle();
        } else {
            self.sort_column = column;
            self.sort_order = SortOrder::Asc;
        }
    }

    /// Отображаемая последовательность: фильтр, затем сортировка
    pub fn displayed_rows(&self, dataset: &[Pokemon]) -> Vec<Pokemon> {
        let mut rows = filter_list(dataset, &self.query);
        sort_list(&mut rows, self.sort_column, self.sort_order);
        rows
    }
}

pub fn create_state() -> RwSignal<PokemonListState> {
    RwSignal::new(PokemonListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<Pokemon> {
        vec![
            Pokemon {
                id: 1,
                name: "Bulbasaur".to_string(),
                weight: 69.0,
            },
            Pokemon {
                id: 2,
                name: "Ivysaur".to_string(),
                weight: 130.0,
            },
            Pokemon {
                id: 3,
                name: "Venusaur".to_string(),
                weight: 1000.0,
            },
        ]
    }

    #[test]
    fn test_default_state() {
        let state = PokemonListState::default();
        assert_eq!(state.query, "");
        assert_eq!(state.sort_column, SortColumn::Id);
        assert_eq!(state.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_toggle_sort_state_machine() {
        let mut state = PokemonListState::default();

        // Клик по текущей колонке переключает направление
        state.toggle_sort(SortColumn::Id);
        assert_eq!(
            (state.sort_column, state.sort_order),
            (SortColumn::Id, SortOrder::Desc)
        );

        state.toggle_sort(SortColumn::Id);
        assert_eq!(
            (state.sort_column, state.sort_order),
            (SortColumn::Id, SortOrder::Asc)
        );

        // Клик по другой колонке выбирает её и сбрасывает направление
        state.toggle_sort(SortColumn::Name);
        assert_eq!(
            (state.sort_column, state.sort_order),
            (SortColumn::Name, SortOrder::Asc)
        );

        state.toggle_sort(SortColumn::Name);
        state.toggle_sort(SortColumn::Weight);
        assert_eq!(
            (state.sort_column, state.sort_order),
            (SortColumn::Weight, SortOrder::Asc)
        );
    }

    #[test]
    fn test_displayed_rows_default_keeps_dataset_order() {
        let state = PokemonListState::default();
        let rows = state.displayed_rows(&dataset());
        let ids: Vec<u32> = rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_displayed_rows_filter_and_sort_scenario() {
        let mut state = PokemonListState::default();
        state.set_query("saur".to_string());
        state.toggle_sort(SortColumn::Weight);
        state.toggle_sort(SortColumn::Weight);

        let rows = state.displayed_rows(&dataset());
        let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Venusaur", "Ivysaur", "Bulbasaur"]);
    }

    #[test]
    fn test_displayed_rows_no_match_is_empty() {
        let mut state = PokemonListState::default();
        state.set_query("Xyz".to_string());
        assert!(state.displayed_rows(&dataset()).is_empty());
    }

    #[test]
    fn test_displayed_rows_is_subset_of_dataset() {
        let data = dataset();
        let mut state = PokemonListState::default();
        state.set_query("saur".to_string());
        state.toggle_sort(SortColumn::Name);

        let rows = state.displayed_rows(&data);
        assert!(rows.iter().all(|r| data.contains(r)));
        assert!(rows.len() <= data.len());
    }
}
