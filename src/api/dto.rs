//! Формы сервиса WordMatch в том виде, в каком они ходят по проводу.
//!
//! Особенности протокола:
//! - целые поля форм сервис может прислать строкой (`"4"`), поэтому
//!   принимаем оба варианта;
//! - `cards`, `match_attempts` и `selected_card` - это JSON внутри строки.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::domain::{CardPosition, PairId};

/// Карта внутри строки `cards` / `selected_card`.
///
/// Надпись лежит либо в `front`, либо в `back`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PairId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
    pub position: CardPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_face_up: Option<bool>,
}

/// Элемент истории попыток.
///
/// Сервис присылает либо пары позиций `[2, 5]`, либо пары карт
/// `[{"position": 2, ...}, {"position": 5, ...}]`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AttemptEntryDto {
    Positions([CardPosition; 2]),
    Cards([CardDto; 2]),
}

/// GameForm: снимок игры после CreateGame.
#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameFormDto {
    pub urlsafe_key: String,
    pub language: String,
    #[serde(default)]
    pub user_name: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub possible_matches: u32,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub successful_matches: Option<u32>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub num_match_attempts: Option<u32>,
    /// JSON-массив попыток.
    pub match_attempts: Option<String>,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub max_attempts: u32,
    #[serde(default)]
    pub game_over: bool,
    /// JSON-массив `CardDto`.
    pub cards: String,
    #[serde(default)]
    pub match_in_progress: bool,
    /// JSON одной `CardDto`.
    pub selected_card: Option<String>,
}

/// Ответ на MakeMove: та же форма игры, но все поля опциональны,
/// плюс поля ошибки (`code` / `message`).
#[serde_as]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MoveResponseDto {
    pub urlsafe_key: Option<String>,
    pub match_in_progress: Option<bool>,
    pub selected_card: Option<String>,
    pub match_attempts: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub num_match_attempts: Option<u32>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub successful_matches: Option<u32>,
    pub game_over: Option<bool>,
    /// Код ошибки (число или строка). Наличие означает неуспех.
    pub code: Option<serde_json::Value>,
    pub message: Option<String>,
}

/// Язык в списке ListLanguages.
#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageDto {
    pub urlsafe_key: String,
    pub name: String,
    /// Число словарных пар. Если его нет - считаем по `cards`.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub card_count: Option<u32>,
    /// JSON-массив карт набора.
    pub cards: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageFormsDto {
    #[serde(default)]
    pub items: Vec<LanguageDto>,
}
