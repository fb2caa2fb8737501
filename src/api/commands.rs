use serde::{Deserialize, Serialize};

use crate::domain::{CardPosition, SessionKey, UserKey};

/// Запрос к сервису верхнего уровня.
///
/// Клиент шлёт ровно эти три запроса; отмена игры сервис не трогает.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Получить список языков для меню.
    ListLanguages,

    /// Создать новую игру.
    CreateGame(NewGameRequest),

    /// Открыть карту в текущей игре.
    RevealCard(MakeMoveRequest),
}

impl Command {
    pub const LIST_LANGUAGES: &'static str = "get_languages";
    pub const CREATE_GAME: &'static str = "create_game";
    pub const MAKE_MOVE: &'static str = "make_move";

    /// Имя метода API сервиса.
    pub fn method_name(&self) -> &'static str {
        match self {
            Command::ListLanguages => Self::LIST_LANGUAGES,
            Command::CreateGame(_) => Self::CREATE_GAME,
            Command::RevealCard(_) => Self::MAKE_MOVE,
        }
    }
}

/// Создание игры (NewGameRequest на сервисе).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewGameRequest {
    /// Имя языка, а не ключ: так его ищет сервис.
    pub language: String,
    pub possible_matches: u32,
    pub max_attempts: u32,
    pub user_key: UserKey,
}

/// Ход: открыть карту на позиции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MakeMoveRequest {
    pub urlsafe_game_key: SessionKey,
    pub flipped_card_position: CardPosition,
}

impl MakeMoveRequest {
    pub fn new(urlsafe_game_key: SessionKey, flipped_card_position: CardPosition) -> Self {
        Self {
            urlsafe_game_key,
            flipped_card_position,
        }
    }
}
