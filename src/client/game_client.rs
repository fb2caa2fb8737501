use crate::api::commands::{Command, MakeMoveRequest, NewGameRequest};
use crate::api::errors::ApiError;
use crate::api::queries::{build_session_view, SessionViewDto};
use crate::client::service::GameService;
use crate::domain::{AttemptRecord, CardPosition, GameSession, Language, UserKey};
use crate::engine::{try_apply_move_response, MoveMessage, MoveOutcome};
use crate::infra::config::ClientConfig;
use crate::infra::mapping::{languages_from_forms, move_response_from_dto, session_from_game_form};

/// Клиент одной игровой сессии поверх `GameService`.
///
/// Вместо глобальной view-модели - явный объект. Все изменяющие методы
/// берут `&mut self`, поэтому в полёте не бывает больше одного хода.
pub struct GameClient<S: GameService> {
    service: S,
    config: ClientConfig,
    user: UserKey,
    languages: Vec<Language>,
    session: Option<GameSession>,
    last_move_message: MoveMessage,
}

impl<S: GameService> GameClient<S> {
    pub fn new(service: S, config: ClientConfig) -> Self {
        Self {
            service,
            config,
            user: UserKey::anonymous(),
            languages: Vec::new(),
            session: None,
            last_move_message: MoveMessage::MakeMove,
        }
    }

    pub fn with_user(mut self, user: UserKey) -> Self {
        self.user = user;
        self
    }

    pub fn user(&self) -> &UserKey {
        &self.user
    }

    pub fn sign_in(&mut self, user: UserKey) {
        self.user = user;
    }

    /// Выход: дальше играем анонимно.
    pub fn sign_out(&mut self) {
        self.user = UserKey::anonymous();
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }

    pub fn into_service(self) -> S {
        self.service
    }

    /// Загрузить языки для меню выбора.
    pub fn load_languages(&mut self) -> Result<&[Language], ApiError> {
        self.trace_request(Command::LIST_LANGUAGES);
        let forms = self.service.list_languages()?;
        self.languages = languages_from_forms(&forms)?;
        tracing::debug!(count = self.languages.len(), "languages loaded");
        Ok(&self.languages)
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn language(&self, name: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.name == name)
    }

    /// Создать новую игру. При успехе текущая сессия заменяется.
    ///
    /// При ошибке текущая сессия (если была) остаётся.
    pub fn create_game(
        &mut self,
        language_name: &str,
        possible_matches: u32,
        max_attempts: u32,
    ) -> Result<&GameSession, ApiError> {
        let language = self
            .language(language_name)
            .ok_or_else(|| ApiError::UnknownLanguage(language_name.to_string()))?;
        self.config
            .limits
            .check(language, possible_matches, max_attempts)?;

        let request = NewGameRequest {
            language: language.name.clone(),
            possible_matches,
            max_attempts,
            user_key: self.user.clone(),
        };

        self.trace_request(Command::CREATE_GAME);
        let form = self.service.create_game(&request)?;
        let session = session_from_game_form(&form)?;

        tracing::info!(
            session = %session.key,
            language = %session.language_name,
            possible_matches,
            max_attempts,
            "game created"
        );

        self.last_move_message = MoveMessage::MakeMove;
        Ok(&*self.session.insert(session))
    }

    /// Отменить игру: сессия просто забывается, сервис не трогаем.
    pub fn cancel_game(&mut self) -> Option<GameSession> {
        let session = self.session.take();
        if let Some(s) = &session {
            tracing::info!(session = %s.key, "game cancelled");
        }
        self.last_move_message = MoveMessage::MakeMove;
        session
    }

    /// Нет активной игры - показываем выбор новой.
    pub fn is_selecting_game(&self) -> bool {
        self.session.is_none()
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn last_move_message(&self) -> MoveMessage {
        self.last_move_message
    }

    pub fn last_move_text(&self) -> &str {
        self.last_move_message.text(&self.config.messages)
    }

    /// Открыть карту.
    ///
    /// Локальные проверки (нет игры, игра окончена, нет такой карты)
    /// не шлют запрос и не меняют сообщение. Любой сбой запроса или
    /// сверки оставляет сессию как была и ставит сообщение об ошибке.
    pub fn flip_card(&mut self, position: CardPosition) -> Result<MoveOutcome, ApiError> {
        let session = self.session.as_ref().ok_or(ApiError::NoActiveSession)?;
        if session.is_over {
            return Err(ApiError::SessionOver);
        }
        if !session.has_card(position) {
            return Err(ApiError::UnknownCard(position));
        }

        let request = MakeMoveRequest::new(session.key.clone(), position);
        tracing::debug!(
            path = %self.config.endpoint.method_path(Command::MAKE_MOVE),
            session = %request.urlsafe_game_key,
            position,
            "request"
        );

        let result = self
            .service
            .make_move(&request)
            .and_then(|dto| move_response_from_dto(&dto))
            .and_then(|response| {
                try_apply_move_response(session, &response).map_err(ApiError::from)
            });

        match result {
            Ok(reconciled) => {
                self.last_move_message = reconciled.message;
                self.session = Some(reconciled.session);
                Ok(reconciled.outcome)
            }
            Err(err) => {
                tracing::warn!(
                    session = %request.urlsafe_game_key,
                    position,
                    error = %err,
                    "flip failed, session unchanged"
                );
                self.last_move_message = MoveMessage::Failure;
                Err(err)
            }
        }
    }

    /// Кнопка "Continue": перевернуть карты неудачных попыток обратно.
    pub fn continue_after_mismatch(&mut self) -> Vec<AttemptRecord> {
        match self.session.as_mut() {
            Some(session) => session.continue_after_mismatch(),
            None => Vec::new(),
        }
    }

    fn trace_request(&self, method: &str) {
        tracing::debug!(path = %self.config.endpoint.method_path(method), "request");
    }

    /// DTO для отрисовки текущей игры.
    pub fn view(&self) -> Option<SessionViewDto> {
        self.session
            .as_ref()
            .map(|s| build_session_view(s, self.last_move_text()))
    }
}
