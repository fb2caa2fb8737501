use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::CardPosition;
use crate::engine::ReconcileError;

/// Ошибки клиентского API (то, что видит слой представления).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (параметры новой игры и т.п.).
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),

    #[error("Язык {0} не найден")]
    UnknownLanguage(String),

    #[error("Нет активной игры")]
    NoActiveSession,

    #[error("Игра уже окончена")]
    SessionOver,

    #[error("Карты {0} нет в игре")]
    UnknownCard(CardPosition),

    /// Сервис ответил ошибкой.
    #[error("Ошибка сервиса (code={code}): {message}")]
    Service { code: String, message: String },

    /// Запрос не дошёл или ответ не пришёл.
    #[error("Ошибка транспорта: {0}")]
    Transport(String),

    /// Ответ не разобрался (битый JSON внутри формы и т.п.).
    #[error("Не удалось разобрать ответ: {0}")]
    Decode(String),

    /// Ответ разобрался, но не согласуется с состоянием игры.
    #[error("Ответ не согласуется с игрой: {0}")]
    Reconcile(String),
}

impl From<ReconcileError> for ApiError {
    fn from(err: ReconcileError) -> Self {
        match err {
            ReconcileError::Service { code, message } => ApiError::Service {
                code,
                message: message.unwrap_or_default(),
            },
            ReconcileError::SessionFinished => ApiError::SessionOver,
            other => ApiError::Reconcile(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
