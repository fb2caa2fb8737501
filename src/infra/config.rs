use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::errors::ApiError;
use crate::domain::Language;
use crate::engine::messages::MessageTexts;

/// Ошибки загрузки конфигурации клиента.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Некорректный JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректный конфиг: {0}")]
    Invalid(String),
}

/// Границы параметров новой игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameLimits {
    pub min_matches: u32,
    pub max_matches: u32,
}

impl Default for GameLimits {
    fn default() -> Self {
        Self {
            min_matches: 1,
            max_matches: 20,
        }
    }
}

impl GameLimits {
    /// Проверить параметры новой игры до отправки на сервис.
    pub fn check(
        &self,
        language: &Language,
        possible_matches: u32,
        max_attempts: u32,
    ) -> Result<(), ApiError> {
        if possible_matches < self.min_matches || possible_matches > self.max_matches {
            return Err(ApiError::BadRequest(format!(
                "possible_matches должно быть от {} до {}, получено {}",
                self.min_matches, self.max_matches, possible_matches
            )));
        }

        if !language.supports_matches(possible_matches) {
            return Err(ApiError::BadRequest(format!(
                "в языке {} только {} пар, запрошено {}",
                language.name, language.card_count, possible_matches
            )));
        }

        if max_attempts < possible_matches {
            return Err(ApiError::BadRequest(format!(
                "max_attempts ({}) меньше possible_matches ({})",
                max_attempts, possible_matches
            )));
        }

        Ok(())
    }
}

/// Адрес API сервиса: `{root}/{name}/{version}/{method}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceEndpoint {
    pub root: String,
    pub name: String,
    pub version: String,
}

impl Default for ServiceEndpoint {
    fn default() -> Self {
        Self {
            root: "/_ah/api".into(),
            name: "word_match".into(),
            version: "v1".into(),
        }
    }
}

impl ServiceEndpoint {
    /// Путь метода API, например `/_ah/api/word_match/v1/make_move`.
    pub fn method_path(&self, method: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.root.trim_end_matches('/'),
            self.name,
            self.version,
            method
        )
    }
}

/// Конфигурация клиента.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: ServiceEndpoint,
    pub limits: GameLimits,
    pub messages: MessageTexts,
}

impl ClientConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.name.is_empty() || self.endpoint.version.is_empty() {
            return Err(ConfigError::Invalid(
                "endpoint.name и endpoint.version не могут быть пустыми".into(),
            ));
        }
        if self.limits.min_matches == 0 {
            return Err(ConfigError::Invalid("min_matches должно быть >= 1".into()));
        }
        if self.limits.min_matches > self.limits.max_matches {
            return Err(ConfigError::Invalid(format!(
                "min_matches ({}) больше max_matches ({})",
                self.limits.min_matches, self.limits.max_matches
            )));
        }
        Ok(())
    }
}
