//! Реконсилер сессии: превращает ответы сервиса в клиентское состояние.
//!
//! Высокоуровневая операция: `apply_move_response`
//!   - первая карта попытки - открыть её и ждать вторую;
//!   - вторая карта - дописать попытку, обновить счётчики по данным сервиса;
//!   - ошибка или несогласованный ответ - сессия не меняется.
//!
//! Совпадение пары клиент сам не вычисляет никогда.

pub mod errors;
pub mod messages;
pub mod reconciler;
pub mod response;
pub mod validation;

pub use errors::{ProtocolViolation, ReconcileError};
pub use messages::{MessageTexts, MoveMessage};
pub use reconciler::{apply_move_response, try_apply_move_response, MoveOutcome, Reconciled};
pub use response::{MoveResponse, RevealedCard};
