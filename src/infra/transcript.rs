use serde::{Deserialize, Serialize};

use crate::api::dto::{GameFormDto, LanguageFormsDto, MoveResponseDto};
use crate::api::errors::ApiError;
use crate::client::GameClient;
use crate::domain::{CardPosition, UserKey};
use crate::infra::config::ClientConfig;
use crate::infra::scripted::ScriptedGameService;

/// Параметры новой игры и снимок, который вернул сервис.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TranscriptGame {
    pub language: String,
    pub possible_matches: u32,
    pub max_attempts: u32,
    pub snapshot: GameFormDto,
}

/// Шаг записанной сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptStep {
    /// Игрок открыл карту, сервис ответил `response`.
    Flip {
        position: CardPosition,
        response: MoveResponseDto,
    },
    /// Игрок нажал "Continue".
    Continue,
}

/// Записанная игровая сессия: языки, создание игры и ходы с ответами.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    #[serde(default)]
    pub config: ClientConfig,
    #[serde(default)]
    pub user_key: Option<UserKey>,
    #[serde(default)]
    pub languages: LanguageFormsDto,
    pub game: TranscriptGame,
    #[serde(default)]
    pub steps: Vec<TranscriptStep>,
}

impl Transcript {
    pub fn from_json_str(json: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Сервис-заглушка, который отдаёт ответы этой записи по порядку.
    pub fn scripted_service(&self) -> ScriptedGameService {
        let mut service = ScriptedGameService::new().with_languages(self.languages.clone());
        service.push_game(self.game.snapshot.clone());
        for step in &self.steps {
            if let TranscriptStep::Flip { response, .. } = step {
                service.push_move(response.clone());
            }
        }
        service
    }

    /// Прогнать запись через `GameClient`.
    ///
    /// `observe` вызывается после каждого шага; ошибка хода передаётся
    /// туда же и прогон не прерывает. Прерывает только неудачное
    /// создание игры.
    pub fn replay(
        &self,
        mut observe: impl FnMut(&TranscriptStep, Option<&ApiError>, &GameClient<ScriptedGameService>),
    ) -> Result<GameClient<ScriptedGameService>, ApiError> {
        let mut client = GameClient::new(self.scripted_service(), self.config.clone());
        if let Some(user) = &self.user_key {
            client.sign_in(user.clone());
        }

        client.load_languages()?;
        client.create_game(
            &self.game.language,
            self.game.possible_matches,
            self.game.max_attempts,
        )?;

        for step in &self.steps {
            let err = match step {
                TranscriptStep::Flip { position, .. } => client.flip_card(*position).err(),
                TranscriptStep::Continue => {
                    client.continue_after_mismatch();
                    None
                }
            };
            observe(step, err.as_ref(), &client);
        }

        Ok(client)
    }
}
