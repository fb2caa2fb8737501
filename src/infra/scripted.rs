use std::collections::VecDeque;

use crate::api::commands::{Command, MakeMoveRequest, NewGameRequest};
use crate::api::dto::{GameFormDto, LanguageFormsDto, MoveResponseDto};
use crate::api::errors::ApiError;
use crate::client::service::GameService;

/// Сервис-заглушка с заранее записанными ответами.
///
/// Ничего не вычисляет: отдаёт ответы по очереди и запоминает,
/// какие запросы пришли. Удобен:
/// - для тестов клиента;
/// - для прогона записанных сессий (replay CLI).
#[derive(Debug, Default)]
pub struct ScriptedGameService {
    languages: Option<LanguageFormsDto>,
    games: VecDeque<Result<GameFormDto, ApiError>>,
    moves: VecDeque<Result<MoveResponseDto, ApiError>>,
    received: Vec<Command>,
}

impl ScriptedGameService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_languages(mut self, languages: LanguageFormsDto) -> Self {
        self.languages = Some(languages);
        self
    }

    pub fn push_game(&mut self, form: GameFormDto) -> &mut Self {
        self.games.push_back(Ok(form));
        self
    }

    pub fn push_game_error(&mut self, err: ApiError) -> &mut Self {
        self.games.push_back(Err(err));
        self
    }

    pub fn push_move(&mut self, response: MoveResponseDto) -> &mut Self {
        self.moves.push_back(Ok(response));
        self
    }

    pub fn push_move_error(&mut self, err: ApiError) -> &mut Self {
        self.moves.push_back(Err(err));
        self
    }

    /// Все запросы в порядке поступления.
    pub fn received(&self) -> &[Command] {
        &self.received
    }

    pub fn pending_moves(&self) -> usize {
        self.moves.len()
    }
}

impl GameService for ScriptedGameService {
    fn list_languages(&mut self) -> Result<LanguageFormsDto, ApiError> {
        self.received.push(Command::ListLanguages);
        self.languages
            .clone()
            .ok_or_else(|| ApiError::Transport("нет заготовленного списка языков".into()))
    }

    fn create_game(&mut self, request: &NewGameRequest) -> Result<GameFormDto, ApiError> {
        self.received.push(Command::CreateGame(request.clone()));
        self.games
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("нет заготовленного ответа на CreateGame".into())))
    }

    fn make_move(&mut self, request: &MakeMoveRequest) -> Result<MoveResponseDto, ApiError> {
        self.received.push(Command::RevealCard(request.clone()));
        self.moves.pop_front().unwrap_or_else(|| {
            Err(ApiError::Transport(format!(
                "нет заготовленного ответа на ход {}",
                request.flipped_card_position
            )))
        })
    }
}
