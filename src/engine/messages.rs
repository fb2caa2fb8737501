use core::fmt;

use serde::{Deserialize, Serialize};

/// Статусное сообщение под игровым полем.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MoveMessage {
    /// Начало игры / ждём ход.
    MakeMove,
    PickSecondCard,
    Match,
    NoMatch,
    /// Ошибка сервиса или несогласованный ответ.
    Failure,
}

impl MoveMessage {
    pub fn default_text(&self) -> &'static str {
        match self {
            MoveMessage::MakeMove => "Make a move.",
            MoveMessage::PickSecondCard => "Pick a second card.",
            MoveMessage::Match => "It's a match!",
            MoveMessage::NoMatch => "It's not a match...",
            MoveMessage::Failure => "Something went wrong. Please try again.",
        }
    }

    /// Текст с учётом настроек клиента.
    pub fn text<'a>(&self, texts: &'a MessageTexts) -> &'a str {
        match self {
            MoveMessage::MakeMove => &texts.make_move,
            MoveMessage::PickSecondCard => &texts.pick_second_card,
            MoveMessage::Match => &texts.match_found,
            MoveMessage::NoMatch => &texts.no_match,
            MoveMessage::Failure => &texts.failure,
        }
    }
}

impl fmt::Display for MoveMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_text())
    }
}

/// Настраиваемые тексты статусных сообщений.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MessageTexts {
    pub make_move: String,
    pub pick_second_card: String,
    pub match_found: String,
    pub no_match: String,
    pub failure: String,
}

impl Default for MessageTexts {
    fn default() -> Self {
        Self {
            make_move: MoveMessage::MakeMove.default_text().to_string(),
            pick_second_card: MoveMessage::PickSecondCard.default_text().to_string(),
            match_found: MoveMessage::Match.default_text().to_string(),
            no_match: MoveMessage::NoMatch.default_text().to_string(),
            failure: MoveMessage::Failure.default_text().to_string(),
        }
    }
}
