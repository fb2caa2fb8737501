use serde::{Deserialize, Serialize};

/// Словарный набор (язык), из которого сервис собирает поле.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    /// Ключ языка на сервисе.
    pub key: String,
    pub name: String,
    /// Сколько словарных пар в наборе. Ограничивает `possible_matches`.
    pub card_count: u32,
}

impl Language {
    pub fn new(key: impl Into<String>, name: impl Into<String>, card_count: u32) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            card_count,
        }
    }

    /// Хватит ли набора на `possible_matches` пар.
    pub fn supports_matches(&self, possible_matches: u32) -> bool {
        possible_matches <= self.card_count
    }
}

/// Отсортировать языки для меню выбора (по имени).
pub fn sort_languages(languages: &mut [Language]) {
    languages.sort_by(|a, b| a.name.cmp(&b.name));
}
