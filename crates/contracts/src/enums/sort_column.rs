use serde::{Deserialize, Serialize};

/// Колонки таблицы, по которым доступна сортировка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortColumn {
    #[default]
    Id,
    Name,
    Weight,
}

impl SortColumn {
    /// Получить код колонки
    pub fn code(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Name => "name",
            SortColumn::Weight => "weight",
        }
    }

    /// Получить заголовок колонки для отображения
    pub fn display_name(&self) -> &'static str {
        match self {
            SortColumn::Id => "Id",
            SortColumn::Name => "Name",
            SortColumn::Weight => "Weight",
        }
    }

    /// Получить все колонки в порядке отображения
    pub fn all() -> Vec<SortColumn> {
        vec![SortColumn::Id, SortColumn::Name, SortColumn::Weight]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "id" => Some(SortColumn::Id),
            "name" => Some(SortColumn::Name),
            "weight" => Some(SortColumn::Weight),
            _ => None,
        }
    }
}

impl ToString for SortColumn {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrip() {
        for column in SortColumn::all() {
            assert_eq!(SortColumn::from_code(column.code()), Some(column));
        }
        assert_eq!(SortColumn::from_code("height"), None);
    }

    #[test]
    fn test_default_is_id() {
        assert_eq!(SortColumn::default(), SortColumn::Id);
    }
}
