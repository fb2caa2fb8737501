use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::CardPosition;

/// Одна завершённая попытка: две выбранные позиции по порядку.
///
/// На проводе это массив из двух элементов: `[2, 5]`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AttemptRecord(pub CardPosition, pub CardPosition);

impl AttemptRecord {
    pub const fn new(first: CardPosition, second: CardPosition) -> Self {
        Self(first, second)
    }

    pub fn first(&self) -> CardPosition {
        self.0
    }

    pub fn second(&self) -> CardPosition {
        self.1
    }

    pub fn positions(&self) -> [CardPosition; 2] {
        [self.0, self.1]
    }
}

impl fmt::Display for AttemptRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}
