use serde::{Deserialize, Serialize};

use crate::domain::{AttemptRecord, CardPosition, CardSide};

/// Карта, которую сервис раскрыл в ответе на ход.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevealedCard {
    pub position: CardPosition,
    pub side: Option<CardSide>,
    pub label: Option<String>,
    /// Открыта ли карта по данным сервиса; `None` - сервис не сказал.
    pub face_up: Option<bool>,
}

impl RevealedCard {
    pub fn at(position: CardPosition) -> Self {
        Self {
            position,
            side: None,
            label: None,
            face_up: None,
        }
    }

    pub fn with_label(mut self, side: CardSide, label: impl Into<String>) -> Self {
        self.side = Some(side);
        self.label = Some(label.into());
        self
    }

    pub fn face_up(mut self, face_up: bool) -> Self {
        self.face_up = Some(face_up);
        self
    }
}

/// Ответ сервиса на RevealCard в типизированном виде.
///
/// Поля опциональны, как и на проводе: какие из них обязательны,
/// решает реконсилер в зависимости от `match_in_progress`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveResponse {
    pub match_in_progress: Option<bool>,
    /// Выбранная карта (для первой карты попытки - обязательна).
    pub selected_card: Option<RevealedCard>,
    /// Полная история попыток по версии сервиса.
    pub attempt_history: Option<Vec<AttemptRecord>>,
    pub successful_matches: Option<u32>,
    pub is_over: Option<bool>,
    /// Наличие кода означает ошибку.
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

impl MoveResponse {
    /// Ответ на первую карту попытки.
    pub fn first_pick(position: CardPosition) -> Self {
        Self {
            match_in_progress: Some(true),
            selected_card: Some(RevealedCard::at(position)),
            ..Self::default()
        }
    }

    /// Ответ на вторую карту: попытка закрыта.
    pub fn resolved(history: Vec<AttemptRecord>, successful_matches: u32, is_over: bool) -> Self {
        Self {
            match_in_progress: Some(false),
            attempt_history: Some(history),
            successful_matches: Some(successful_matches),
            is_over: Some(is_over),
            ..Self::default()
        }
    }

    pub fn failed(code: impl Into<String>) -> Self {
        Self {
            error_code: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn with_selected(mut self, card: RevealedCard) -> Self {
        self.selected_card = Some(card);
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.error_code.is_some()
    }
}
