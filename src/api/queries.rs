use serde::{Deserialize, Serialize};

use crate::domain::{Card, CardPosition, GameSession, Language, SessionPhase};

/// Карта в том виде, в каком её рисует слой представления.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardViewDto {
    pub position: CardPosition,
    /// Надпись - только у открытой карты.
    pub label: Option<String>,
    pub is_front: bool,
    pub is_face_up: bool,
    pub is_matched: bool,
}

/// Всё, что нужно слою представления для отрисовки игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub session_key: String,
    pub language: String,
    pub owner_name: String,
    pub possible_matches: u32,
    pub successful_matches: u32,
    pub attempt_count: u32,
    pub max_attempts: u32,
    pub attempts_remaining: u32,
    pub match_in_progress: bool,
    pub phase: SessionPhase,
    pub is_over: bool,
    /// Показывать ли кнопку "Continue".
    pub can_continue: bool,
    pub last_move_message: String,
    pub cards: Vec<CardViewDto>,
}

/// Пункт меню выбора языка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageOptionDto {
    pub name: String,
    pub card_count: u32,
}

/// Сформировать DTO игры для отрисовки.
pub fn build_session_view(session: &GameSession, last_move_message: &str) -> SessionViewDto {
    SessionViewDto {
        session_key: session.key.0.clone(),
        language: session.language_name.clone(),
        owner_name: session.owner_name.clone(),
        possible_matches: session.possible_matches,
        successful_matches: session.successful_matches,
        attempt_count: session.attempt_count(),
        max_attempts: session.max_attempts,
        attempts_remaining: session.attempts_remaining(),
        match_in_progress: session.match_in_progress(),
        phase: session.phase(),
        is_over: session.is_over,
        can_continue: session.needs_continue() && !session.is_over,
        last_move_message: last_move_message.to_string(),
        cards: session.cards.iter().map(build_card_view).collect(),
    }
}

fn build_card_view(card: &Card) -> CardViewDto {
    CardViewDto {
        position: card.position,
        label: card.visible_label().map(str::to_string),
        is_front: card.is_front(),
        is_face_up: card.is_face_up,
        is_matched: card.is_matched,
    }
}

/// Языки для меню выбора.
pub fn build_language_options(languages: &[Language]) -> Vec<LanguageOptionDto> {
    languages
        .iter()
        .map(|l| LanguageOptionDto {
            name: l.name.clone(),
            card_count: l.card_count,
        })
        .collect()
}
