//! Доменная модель клиента WordMatch: карты, попытки, языки, игровая сессия.
//!
//! Всё здесь - клиентский кэш последнего известного состояния сервиса.
//! Правила игры (совпадение, перемешивание, счёт) живут только на сервере.

pub mod attempt;
pub mod card;
pub mod language;
pub mod session;

use core::fmt;

use serde::{Deserialize, Serialize};

/// Позиция карты на поле. Уникальна в пределах сессии.
pub type CardPosition = u32;

/// Идентификатор словарной пары (у лицевой и оборотной карты он общий).
pub type PairId = u32;

/// Непрозрачный ключ игровой сессии, который выдаёт сервис.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SessionKey(pub String);

/// Ключ пользователя на сервисе.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct UserKey(pub String);

impl UserKey {
    /// Ключ анонимного пользователя ("Default User" на сервере).
    pub const ANONYMOUS: &'static str = "-1";

    pub fn anonymous() -> Self {
        Self(Self::ANONYMOUS.to_string())
    }

    pub fn is_anonymous(&self) -> bool {
        self.0 == Self::ANONYMOUS
    }
}

impl Default for UserKey {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub use attempt::*;
pub use card::*;
pub use language::*;
pub use session::*;
