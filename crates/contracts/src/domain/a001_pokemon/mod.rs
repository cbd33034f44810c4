pub mod aggregate;
pub mod data;

pub use aggregate::Pokemon;
pub use data::{load_dataset, POKEMONS};
