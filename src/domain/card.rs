use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{CardPosition, PairId};

/// Сторона словарной карточки: слово или его перевод.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardSide {
    Front,
    Back,
}

/// Карта на игровом поле.
///
/// Позиция и надпись неизменяемы: надпись может прийти позже (при открытии),
/// но однажды заданная уже не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub position: CardPosition,
    /// Id словарной пары от сервиса. Только для отображения.
    pub pair_id: Option<PairId>,
    pub side: Option<CardSide>,
    /// Текст карты; `None`, пока сервис его не раскрыл.
    pub face_label: Option<String>,
    pub is_face_up: bool,
    /// Карта входит в пару, которую сервис подтвердил как совпадение.
    pub is_matched: bool,
}

impl Card {
    /// Закрытая карта без раскрытой надписи.
    pub fn face_down(position: CardPosition) -> Self {
        Self {
            position,
            pair_id: None,
            side: None,
            face_label: None,
            is_face_up: false,
            is_matched: false,
        }
    }

    pub fn with_label(mut self, side: CardSide, label: impl Into<String>) -> Self {
        self.side = Some(side);
        self.face_label = Some(label.into());
        self
    }

    pub fn with_pair(mut self, pair_id: PairId) -> Self {
        self.pair_id = Some(pair_id);
        self
    }

    /// Надпись, которую можно показывать прямо сейчас.
    pub fn visible_label(&self) -> Option<&str> {
        if self.is_face_up {
            self.face_label.as_deref()
        } else {
            None
        }
    }

    pub fn is_front(&self) -> bool {
        self.side == Some(CardSide::Front)
    }
}

impl fmt::Display for Card {
    /// Формат вида `#3[Hund]` для открытой карты и `#3[??]` для закрытой.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.visible_label() {
            Some(label) => write!(f, "#{}[{}]", self.position, label),
            None if self.is_face_up => write!(f, "#{}[--]", self.position),
            None => write!(f, "#{}[??]", self.position),
        }
    }
}
