use crate::api::commands::{MakeMoveRequest, NewGameRequest};
use crate::api::dto::{GameFormDto, LanguageFormsDto, MoveResponseDto};
use crate::api::errors::ApiError;

/// Абстракция удалённого игрового сервиса.
///
/// Реализация отвечает только за доставку запросов и ответов
/// (HTTP, тестовый сценарий и т.п.); вся логика игры - на сервере,
/// вся сверка состояния - в `GameClient`.
pub trait GameService {
    /// Список языков для меню.
    fn list_languages(&mut self) -> Result<LanguageFormsDto, ApiError>;

    /// Создать игру и вернуть её снимок.
    fn create_game(&mut self, request: &NewGameRequest) -> Result<GameFormDto, ApiError>;

    /// Открыть карту. Ошибку сервиса можно вернуть и как `Ok` с полем `code`.
    fn make_move(&mut self, request: &MakeMoveRequest) -> Result<MoveResponseDto, ApiError>;
}
