use crate::enums::SortColumn;
use crate::shared::list::{Searchable, Sortable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Aggregate Root
// ============================================================================
/// Запись справочника покемонов.
///
/// `id` уникален и стабилен в пределах датасета, `weight` — в гектограммах
/// (как в исходных данных PokeAPI).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub weight: f64,
}

impl Searchable for Pokemon {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

impl Sortable for Pokemon {
    fn compare_by(&self, other: &Self, column: SortColumn) -> Ordering {
        match column {
            SortColumn::Id => self.id.cmp(&other.id),
            SortColumn::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            SortColumn::Weight => self
                .weight
                .partial_cmp(&other.weight)
                .unwrap_or(Ordering::Equal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_filter_ignores_case() {
        let p = Pokemon {
            id: 25,
            name: "Pikachu".to_string(),
            weight: 60.0,
        };
        assert!(p.matches_filter("pika"));
        assert!(p.matches_filter("PIKA"));
        assert!(p.matches_filter(""));
        assert!(!p.matches_filter("chuu"));
    }

    #[test]
    fn test_compare_by_name_is_case_insensitive() {
        let a = Pokemon {
            id: 1,
            name: "abra".to_string(),
            weight: 195.0,
        };
        let b = Pokemon {
            id: 2,
            name: "Bulbasaur".to_string(),
            weight: 69.0,
        };
        assert_eq!(a.compare_by(&b, SortColumn::Name), Ordering::Less);
        assert_eq!(b.compare_by(&a, SortColumn::Weight), Ordering::Less);
        assert_eq!(a.compare_by(&b, SortColumn::Id), Ordering::Less);
    }
}
