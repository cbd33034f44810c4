//! Статический датасет покемонов, встроенный в бинарник.
//!
//! Данные читаются один раз при первом обращении. Некорректный датасет —
//! ошибка конфигурации сборки, приложение завершается сразу.

use super::aggregate::Pokemon;
use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;

const POKEMONS_JSON: &str = include_str!("pokemons.json");

/// Датасет, доступный для чтения на всём времени жизни приложения
pub static POKEMONS: Lazy<Vec<Pokemon>> = Lazy::new(|| match load_dataset() {
    Ok(items) => items,
    Err(e) => panic!("invalid pokemon dataset: {e:#}"),
});

/// Читает и валидирует встроенный датасет.
///
/// Порядок записей сохраняется как в исходном JSON.
pub fn load_dataset() -> Result<Vec<Pokemon>> {
    let items: Vec<Pokemon> =
        serde_json::from_str(POKEMONS_JSON).context("failed to parse pokemons.json")?;

    if items.is_empty() {
        bail!("pokemon dataset is empty");
    }

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.id) {
            bail!("duplicate pokemon id {} in dataset", item.id);
        }
    }

    Ok(items)
}
