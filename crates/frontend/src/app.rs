use crate::domain::a001_pokemon::ui::PokemonList;
use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app" style="max-width: 700px; margin: 0 auto; padding: 24px;">
            <PageHeader
                title="Покедекс"
                subtitle="Справочник покемонов (A001)"
            >
                {()}
            </PageHeader>
            <PokemonList />
        </div>
    }
}
