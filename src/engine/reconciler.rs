use serde::{Deserialize, Serialize};

use crate::domain::{AttemptRecord, Card, CardPosition, GameSession};
use crate::engine::errors::ReconcileError;
use crate::engine::messages::MoveMessage;
use crate::engine::response::{MoveResponse, RevealedCard};
use crate::engine::validation::{validate_response, ValidatedMove};

/// Что произошло в результате применения ответа.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Открыта первая карта попытки.
    FirstCardRevealed { position: CardPosition },
    /// Сервис засчитал пару.
    Matched(AttemptRecord),
    /// Пара не совпала.
    NotMatched(AttemptRecord),
}

impl MoveOutcome {
    pub fn message(&self) -> MoveMessage {
        match self {
            MoveOutcome::FirstCardRevealed { .. } => MoveMessage::PickSecondCard,
            MoveOutcome::Matched(_) => MoveMessage::Match,
            MoveOutcome::NotMatched(_) => MoveMessage::NoMatch,
        }
    }
}

/// Результат успешного применения ответа.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciled {
    pub session: GameSession,
    pub message: MoveMessage,
    pub outcome: MoveOutcome,
}

/// Применить ответ сервиса на ход к сессии.
///
/// Входная сессия не меняется. При ошибке новой сессии нет вовсе,
/// поэтому частичных обновлений не бывает.
///
/// Если флаг `match_in_progress` противоречит локальной фазе,
/// прав сервис: состояние выводится заново из его ответа.
pub fn try_apply_move_response(
    session: &GameSession,
    response: &MoveResponse,
) -> Result<Reconciled, ReconcileError> {
    let validated = match validate_response(session, response) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(session = %session.key, error = %err, "move response rejected");
            return Err(err);
        }
    };

    let mut next = session.clone();

    let outcome = match validated {
        ValidatedMove::FirstPick { card } => {
            if let Some(previous) = session.pending_pick.filter(|p| *p != card.position) {
                tracing::debug!(
                    session = %session.key,
                    previous,
                    position = card.position,
                    "service restarted the attempt"
                );
                next.stale_picks.push(previous);
            }

            if let Some(target) = next.card_mut(card.position) {
                disclose(target, card);
                target.is_face_up = true;
            }
            next.pending_pick = Some(card.position);

            MoveOutcome::FirstCardRevealed {
                position: card.position,
            }
        }

        ValidatedMove::Resolved {
            history,
            attempt,
            successful_matches,
            is_over,
            revealed,
        } => {
            let matched = successful_matches > session.successful_matches;

            if let Some(card) = revealed {
                if let Some(target) = next.card_mut(card.position) {
                    disclose(target, card);
                    // Флаг открытости берём как есть, но закрывать тут нельзя.
                    if card.face_up == Some(true) {
                        target.is_face_up = true;
                    }
                }
            }

            if matched {
                for pos in attempt.positions() {
                    if let Some(target) = next.card_mut(pos) {
                        target.is_face_up = true;
                        target.is_matched = true;
                    }
                }
            } else {
                next.awaiting_continue.push(attempt);
            }

            // Первая карта, которую сервис не включил в попытку, закроется по "Continue".
            if let Some(previous) = session.pending_pick {
                if !attempt.positions().contains(&previous) && !matched_card(&next, previous) {
                    tracing::debug!(
                        session = %session.key,
                        previous,
                        %attempt,
                        "pending pick left out of the resolved attempt"
                    );
                    next.stale_picks.push(previous);
                }
            }

            next.attempt_history = history.to_vec();
            next.successful_matches = successful_matches;
            next.is_over = is_over;
            next.pending_pick = None;

            if matched {
                MoveOutcome::Matched(attempt)
            } else {
                MoveOutcome::NotMatched(attempt)
            }
        }
    };

    tracing::debug!(
        session = %next.key,
        ?outcome,
        matches = next.successful_matches,
        attempts = next.attempt_count(),
        is_over = next.is_over,
        "move response applied"
    );

    Ok(Reconciled {
        session: next,
        message: outcome.message(),
        outcome,
    })
}

/// Та же операция в форме `(сессия, сообщение)`.
///
/// При любой ошибке возвращается копия входной сессии
/// и сообщение об ошибке.
pub fn apply_move_response(
    session: &GameSession,
    response: &MoveResponse,
) -> (GameSession, MoveMessage) {
    match try_apply_move_response(session, response) {
        Ok(reconciled) => (reconciled.session, reconciled.message),
        Err(_) => (session.clone(), MoveMessage::Failure),
    }
}

fn matched_card(session: &GameSession, position: CardPosition) -> bool {
    session.card(position).map(|c| c.is_matched).unwrap_or(false)
}

/// Записать раскрытую сервисом надпись, если у карты её ещё нет.
fn disclose(card: &mut Card, revealed: &RevealedCard) {
    if card.face_label.is_none() {
        if let Some(label) = &revealed.label {
            card.face_label = Some(label.clone());
        }
    }
    if card.side.is_none() {
        card.side = revealed.side;
    }
}
