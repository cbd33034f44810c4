pub mod state;

use self::state::create_state;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_pokemon::POKEMONS;
use contracts::enums::SortColumn;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn PokemonList() -> impl IntoView {
    let state = create_state();

    log!("pokemon list: dataset of {} records", POKEMONS.len());

    // Отображаемая последовательность пересчитывается при любом изменении state
    let displayed = Memo::new(move |_| state.with(|s| s.displayed_rows(&POKEMONS)));

    let current_column = Signal::derive(move || state.with(|s| s.sort_column));
    let sort_order = Signal::derive(move || state.with(|s| s.sort_order));
    let query = Signal::derive(move || state.with(|s| s.query.clone()));

    let on_sort = Callback::new(move |column: SortColumn| {
        state.update(|s| s.toggle_sort(column));
    });
    let on_query_change = Callback::new(move |text: String| {
        state.update(|s| s.set_query(text));
    });

    view! {
        <div class="pokemon-list" style="display: flex; flex-direction: column; gap: 16px;">
            <SearchInput
                value=query
                on_change=on_query_change
                placeholder="Поиск покемона..."
            />

            // Summary
            {move || {
                let shown = displayed.get().len();
                let total = POKEMONS.len();
                view! {
                    <div style="font-size: 13px; color: #666;">
                        {format!("Показано {} из {}", shown, total)}
                    </div>
                }
            }}

            // Table
            <div class="table-container" style="overflow-x: auto;">
                <table class="data-table" style="width: 100%; border-collapse: collapse; font-size: 14px;">
                    <thead>
                        <tr style="background: #f5f5f5;">
                            <SortableHeaderCell
                                column=SortColumn::Id
                                current_column=current_column
                                sort_order=sort_order
                                on_sort=on_sort
                            />
                            <SortableHeaderCell
                                column=SortColumn::Name
                                current_column=current_column
                                sort_order=sort_order
                                on_sort=on_sort
                            />
                            <SortableHeaderCell
                                column=SortColumn::Weight
                                current_column=current_column
                                sort_order=sort_order
                                on_sort=on_sort
                                align="right"
                            />
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = displayed.get();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td
                                            colspan="3"
                                            style="border: 1px solid #ddd; padding: 16px; text-align: center; color: #999;"
                                        >
                                            "Ничего не найдено"
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                items.into_iter().map(|pokemon| {
                                    view! {
                                        <tr>
                                            <td style="border: 1px solid #ddd; padding: 8px; font-weight: 600; color: #1976d2;">
                                                {pokemon.id}
                                            </td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">
                                                {pokemon.name.clone()}
                                            </td>
                                            <td style="border: 1px solid #ddd; padding: 8px; text-align: right;">
                                                {pokemon.weight}
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
