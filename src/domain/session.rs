use serde::{Deserialize, Serialize};

use crate::domain::attempt::AttemptRecord;
use crate::domain::card::Card;
use crate::domain::{CardPosition, SessionKey};

/// Фаза сессии с точки зрения клиента.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionPhase {
    /// Ждём первую карту попытки.
    AwaitingFirstPick,
    /// Одна карта открыта, ждём вторую.
    AwaitingSecondPick,
    /// Сервис сообщил, что игра окончена.
    Finished,
}

/// Клиентский кэш одной игровой сессии.
///
/// Единственный источник истины - сервис. Здесь хранится только то,
/// что он последним прислал, плюс чисто визуальные флаги карт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSession {
    pub key: SessionKey,
    pub language_name: String,
    pub owner_name: String,
    pub possible_matches: u32,
    pub max_attempts: u32,
    /// Не убывает.
    pub successful_matches: u32,
    /// Только дописывается в конец.
    pub attempt_history: Vec<AttemptRecord>,
    /// Переходит false -> true ровно один раз.
    pub is_over: bool,
    /// Открытая первая карта текущей попытки.
    pub pending_pick: Option<CardPosition>,
    /// Неудачные попытки, карты которых ещё не перевёрнуты обратно.
    pub awaiting_continue: Vec<AttemptRecord>,
    /// Открытые первые карты, которые сервис заменил другой попыткой.
    #[serde(default)]
    pub stale_picks: Vec<CardPosition>,
    pub cards: Vec<Card>,
}

impl GameSession {
    /// Новая сессия сразу после CreateGame: ни попыток, ни открытых карт.
    pub fn new(
        key: SessionKey,
        language_name: impl Into<String>,
        owner_name: impl Into<String>,
        possible_matches: u32,
        max_attempts: u32,
        cards: Vec<Card>,
    ) -> Self {
        Self {
            key,
            language_name: language_name.into(),
            owner_name: owner_name.into(),
            possible_matches,
            max_attempts,
            successful_matches: 0,
            attempt_history: Vec::new(),
            is_over: false,
            pending_pick: None,
            awaiting_continue: Vec::new(),
            stale_picks: Vec::new(),
            cards,
        }
    }

    /// Количество попыток. Считается только по длине истории.
    pub fn attempt_count(&self) -> u32 {
        self.attempt_history.len() as u32
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempt_count())
    }

    pub fn match_in_progress(&self) -> bool {
        self.pending_pick.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_over {
            SessionPhase::Finished
        } else if self.match_in_progress() {
            SessionPhase::AwaitingSecondPick
        } else {
            SessionPhase::AwaitingFirstPick
        }
    }

    pub fn card(&self, position: CardPosition) -> Option<&Card> {
        self.cards.iter().find(|c| c.position == position)
    }

    pub(crate) fn card_mut(&mut self, position: CardPosition) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.position == position)
    }

    pub fn has_card(&self, position: CardPosition) -> bool {
        self.card(position).is_some()
    }

    pub fn last_attempt(&self) -> Option<&AttemptRecord> {
        self.attempt_history.last()
    }

    pub fn face_up_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_face_up).count()
    }

    /// Действие "Continue" после неудачной попытки: перевернуть карты
    /// обратно рубашкой вверх. Карты из подтверждённых пар не трогаем.
    ///
    /// Возвращает попытки, карты которых были закрыты (пусто, если нечего).
    /// Законченная сессия не меняется.
    pub fn continue_after_mismatch(&mut self) -> Vec<AttemptRecord> {
        if self.is_over {
            return Vec::new();
        }

        let attempts = std::mem::take(&mut self.awaiting_continue);
        let stale = std::mem::take(&mut self.stale_picks);

        let positions = attempts
            .iter()
            .flat_map(|a| a.positions())
            .chain(stale);
        for pos in positions {
            // Первая карта новой попытки остаётся открытой.
            if self.pending_pick == Some(pos) {
                continue;
            }
            if let Some(card) = self.card_mut(pos) {
                if !card.is_matched {
                    card.is_face_up = false;
                }
            }
        }

        attempts
    }

    pub fn needs_continue(&self) -> bool {
        !self.awaiting_continue.is_empty() || !self.stale_picks.is_empty()
    }
}
