use crate::domain::{AttemptRecord, GameSession};
use crate::engine::errors::{ProtocolViolation, ReconcileError};
use crate::engine::response::{MoveResponse, RevealedCard};

/// Ответ, прошедший проверку формы для своего перехода.
#[derive(Debug)]
pub(crate) enum ValidatedMove<'a> {
    /// Сервис открыл первую карту попытки.
    FirstPick { card: &'a RevealedCard },

    /// Сервис закрыл попытку.
    Resolved {
        history: &'a [AttemptRecord],
        attempt: AttemptRecord,
        successful_matches: u32,
        is_over: bool,
        revealed: Option<&'a RevealedCard>,
    },
}

/// Проверить ответ на ход относительно текущей сессии.
///
/// Ничего не меняет: либо возвращает разобранный переход,
/// либо ошибку, после которой сессия остаётся как была.
pub(crate) fn validate_response<'a>(
    session: &GameSession,
    response: &'a MoveResponse,
) -> Result<ValidatedMove<'a>, ReconcileError> {
    if session.is_over {
        return Err(ReconcileError::SessionFinished);
    }

    if let Some(code) = &response.error_code {
        return Err(ReconcileError::Service {
            code: code.clone(),
            message: response.error_message.clone(),
        });
    }

    let in_progress = response
        .match_in_progress
        .ok_or(ProtocolViolation::MissingField("match_in_progress"))?;

    if in_progress {
        let card = response
            .selected_card
            .as_ref()
            .ok_or(ProtocolViolation::MissingField("selected_card"))?;
        check_revealed(session, card)?;
        return Ok(ValidatedMove::FirstPick { card });
    }

    let history = response
        .attempt_history
        .as_deref()
        .ok_or(ProtocolViolation::MissingField("match_attempts"))?;
    let successful_matches = response
        .successful_matches
        .ok_or(ProtocolViolation::MissingField("successful_matches"))?;
    let is_over = response
        .is_over
        .ok_or(ProtocolViolation::MissingField("game_over"))?;

    let attempt = check_history(session, history)?;

    if successful_matches < session.successful_matches {
        return Err(ProtocolViolation::MatchesDecreased {
            have: session.successful_matches,
            got: successful_matches,
        }
        .into());
    }
    if successful_matches > session.possible_matches {
        return Err(ProtocolViolation::MatchesOutOfRange {
            got: successful_matches,
            possible: session.possible_matches,
        }
        .into());
    }

    let revealed = response.selected_card.as_ref();
    if let Some(card) = revealed {
        check_revealed(session, card)?;
    }

    Ok(ValidatedMove::Resolved {
        history,
        attempt,
        successful_matches,
        is_over,
        revealed,
    })
}

/// История сервиса должна продолжать локальную: тот же префикс
/// и хотя бы одна новая запись. Возвращает последнюю запись.
fn check_history(
    session: &GameSession,
    history: &[AttemptRecord],
) -> Result<AttemptRecord, ProtocolViolation> {
    let have = session.attempt_history.len();

    if history.len() < have {
        return Err(ProtocolViolation::HistoryShrank {
            have,
            got: history.len(),
        });
    }

    if let Some(index) = session
        .attempt_history
        .iter()
        .zip(history)
        .position(|(local, remote)| local != remote)
    {
        return Err(ProtocolViolation::HistoryRewritten { index });
    }

    if history.len() as u64 > u64::from(session.max_attempts) {
        return Err(ProtocolViolation::AttemptsOutOfRange {
            got: history.len() as u32,
            max: session.max_attempts,
        });
    }

    for record in &history[have..] {
        for pos in record.positions() {
            if !session.has_card(pos) {
                return Err(ProtocolViolation::UnknownCard(pos));
            }
        }
    }

    history
        .last()
        .copied()
        .filter(|_| history.len() > have)
        .ok_or(ProtocolViolation::NoNewAttempt)
}

fn check_revealed(session: &GameSession, revealed: &RevealedCard) -> Result<(), ProtocolViolation> {
    let card = session
        .card(revealed.position)
        .ok_or(ProtocolViolation::UnknownCard(revealed.position))?;

    match (&card.face_label, &revealed.label) {
        (Some(have), Some(got)) if have != got => {
            Err(ProtocolViolation::LabelConflict(revealed.position))
        }
        _ => Ok(()),
    }
}
