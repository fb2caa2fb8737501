use crate::domain::CardPosition;

use thiserror::Error;

/// Почему ответ сервиса нельзя применить к текущей сессии.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProtocolViolation {
    #[error("в ответе нет поля {0}")]
    MissingField(&'static str),

    #[error("карты с позицией {0} нет в игре")]
    UnknownCard(CardPosition),

    #[error("история попыток короче локальной ({got} < {have})")]
    HistoryShrank { have: usize, got: usize },

    #[error("история попыток переписана начиная с записи {index}")]
    HistoryRewritten { index: usize },

    #[error("попытка закрыта, но новой записи в истории нет")]
    NoNewAttempt,

    #[error("число совпадений уменьшилось ({have} -> {got})")]
    MatchesDecreased { have: u32, got: u32 },

    #[error("совпадений больше, чем возможно ({got} > {possible})")]
    MatchesOutOfRange { got: u32, possible: u32 },

    #[error("попыток больше лимита ({got} > {max})")]
    AttemptsOutOfRange { got: u32, max: u32 },

    #[error("сервис прислал другую надпись для карты {0}")]
    LabelConflict(CardPosition),
}

/// Ошибки реконсилера. Любая из них оставляет сессию нетронутой.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("Сервис вернул ошибку (code={code})")]
    Service {
        code: String,
        message: Option<String>,
    },

    #[error("Ответ не соответствует протоколу: {0}")]
    ProtocolMismatch(#[from] ProtocolViolation),

    #[error("Игра уже окончена")]
    SessionFinished,
}
