use std::collections::HashSet;

use serde::Deserialize;

use crate::api::dto::{
    AttemptEntryDto, CardDto, GameFormDto, LanguageDto, LanguageFormsDto, MoveResponseDto,
};
use crate::api::errors::ApiError;
use crate::domain::{
    sort_languages, AttemptRecord, Card, CardSide, GameSession, Language, PairId, SessionKey,
};
use crate::engine::response::{MoveResponse, RevealedCard};

/// Надпись карты и её сторона, если сервис их раскрыл.
fn dto_label(dto: &CardDto) -> Option<(CardSide, String)> {
    if let Some(front) = &dto.front {
        Some((CardSide::Front, front.clone()))
    } else {
        dto.back.as_ref().map(|back| (CardSide::Back, back.clone()))
    }
}

/// Маппинг карты сервиса в доменную карту.
pub fn card_from_dto(dto: &CardDto) -> Card {
    let mut card = Card::face_down(dto.position);
    card.pair_id = dto.id;
    if let Some((side, label)) = dto_label(dto) {
        card.side = Some(side);
        card.face_label = Some(label);
    }
    card.is_face_up = dto.is_face_up.unwrap_or(false);
    card
}

pub fn revealed_card_from_dto(dto: &CardDto) -> RevealedCard {
    let (side, label) = match dto_label(dto) {
        Some((side, label)) => (Some(side), Some(label)),
        None => (None, None),
    };

    RevealedCard {
        position: dto.position,
        side,
        label,
        face_up: dto.is_face_up,
    }
}

pub fn decode_cards(json: &str) -> Result<Vec<CardDto>, ApiError> {
    Ok(serde_json::from_str(json)?)
}

/// Разобрать строку `match_attempts`. Понимает оба формата элементов.
pub fn decode_attempts(json: &str) -> Result<Vec<AttemptRecord>, ApiError> {
    let entries: Vec<AttemptEntryDto> = serde_json::from_str(json)?;

    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            AttemptEntryDto::Positions([a, b]) => AttemptRecord::new(a, b),
            AttemptEntryDto::Cards([a, b]) => AttemptRecord::new(a.position, b.position),
        })
        .collect())
}

/// Разобрать строку `selected_card`. `null` и `{}` означают "карты нет".
pub fn decode_selected_card(json: &str) -> Result<Option<CardDto>, ApiError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    match &value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(map) if map.is_empty() => Ok(None),
        _ => Ok(Some(serde_json::from_value(value)?)),
    }
}

/// Собрать сессию из снимка CreateGame.
pub fn session_from_game_form(form: &GameFormDto) -> Result<GameSession, ApiError> {
    let card_dtos = decode_cards(&form.cards)?;

    let mut seen = HashSet::new();
    for dto in &card_dtos {
        if !seen.insert(dto.position) {
            return Err(ApiError::Decode(format!(
                "позиция карты {} встречается дважды",
                dto.position
            )));
        }
    }

    let cards = card_dtos.iter().map(card_from_dto).collect();
    let mut session = GameSession::new(
        SessionKey(form.urlsafe_key.clone()),
        form.language.clone(),
        form.user_name.clone(),
        form.possible_matches,
        form.max_attempts,
        cards,
    );

    if let Some(json) = &form.match_attempts {
        session.attempt_history = decode_attempts(json)?;
    }

    session.successful_matches = form.successful_matches.unwrap_or(0);
    if session.successful_matches > session.possible_matches {
        return Err(ApiError::Decode(format!(
            "successful_matches={} больше possible_matches={}",
            session.successful_matches, session.possible_matches
        )));
    }

    if let Some(reported) = form.num_match_attempts {
        if reported != session.attempt_count() {
            tracing::warn!(
                session = %session.key,
                reported,
                history = session.attempt_count(),
                "num_match_attempts differs from history length, using history"
            );
        }
    }

    if form.match_in_progress {
        let selected = form
            .selected_card
            .as_deref()
            .map(decode_selected_card)
            .transpose()?
            .flatten()
            .ok_or_else(|| ApiError::Decode("match_in_progress без selected_card".into()))?;

        let card = session
            .card_mut(selected.position)
            .ok_or(ApiError::UnknownCard(selected.position))?;
        card.is_face_up = true;
        session.pending_pick = Some(selected.position);
    }

    session.is_over = form.game_over;

    Ok(session)
}

/// Текст кода ошибки: строка как есть, остальное - через JSON.
pub fn error_code_to_string(code: &serde_json::Value) -> String {
    match code {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Маппинг ответа на ход в типизированный `MoveResponse`.
///
/// Ответ с кодом ошибки дальше не разбирается.
pub fn move_response_from_dto(dto: &MoveResponseDto) -> Result<MoveResponse, ApiError> {
    if let Some(code) = &dto.code {
        let mut response = MoveResponse::failed(error_code_to_string(code));
        response.error_message = dto.message.clone();
        return Ok(response);
    }

    let selected_card = match dto.selected_card.as_deref() {
        Some(json) => decode_selected_card(json)?.as_ref().map(revealed_card_from_dto),
        None => None,
    };

    let attempt_history = dto
        .match_attempts
        .as_deref()
        .map(decode_attempts)
        .transpose()?;

    Ok(MoveResponse {
        match_in_progress: dto.match_in_progress,
        selected_card,
        attempt_history,
        successful_matches: dto.successful_matches,
        is_over: dto.game_over,
        error_code: None,
        error_message: None,
    })
}

#[derive(Deserialize)]
struct LanguageCardDto {
    #[serde(default)]
    id: Option<PairId>,
}

/// Маппинг языка. `card_count` - число словарных пар.
pub fn language_from_dto(dto: &LanguageDto) -> Result<Language, ApiError> {
    let card_count = match (dto.card_count, dto.cards.as_deref()) {
        (Some(count), _) => count,
        (None, Some(json)) => {
            let cards: Vec<LanguageCardDto> = serde_json::from_str(json)?;
            let ids: HashSet<PairId> = cards.iter().filter_map(|c| c.id).collect();
            if ids.is_empty() {
                (cards.len() / 2) as u32
            } else {
                ids.len() as u32
            }
        }
        (None, None) => {
            return Err(ApiError::Decode(format!(
                "у языка {} нет ни card_count, ни cards",
                dto.name
            )))
        }
    };

    Ok(Language::new(dto.urlsafe_key.clone(), dto.name.clone(), card_count))
}

/// Все языки из ListLanguages, отсортированные по имени.
pub fn languages_from_forms(forms: &LanguageFormsDto) -> Result<Vec<Language>, ApiError> {
    let mut languages = forms
        .items
        .iter()
        .map(language_from_dto)
        .collect::<Result<Vec<_>, _>>()?;
    sort_languages(&mut languages);
    Ok(languages)
}
