pub mod list;

pub use list::PokemonList;
