// tests/client_tests.rs
//
// GameClient поверх ScriptedGameService:
//  1) языки и создание игры (локальные проверки не шлют запросов);
//  2) ходы: охранные проверки, ошибки сервиса/транспорта/разбора;
//  3) полный проход, "Continue", отмена, выход пользователя.

use word_match_client::{
    api::{
        commands::{Command, MakeMoveRequest, NewGameRequest},
        dto::{GameFormDto, LanguageDto, LanguageFormsDto, MoveResponseDto},
        errors::ApiError,
    },
    domain::{AttemptRecord, SessionKey, SessionPhase, UserKey},
    engine::{MoveMessage, MoveOutcome},
    infra::{ClientConfig, ScriptedGameService},
    GameClient,
};

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ КОНСТРУКТОРЫ
// -----------------------------

const GAME_KEY: &str = "game-xyz";

fn languages() -> LanguageFormsDto {
    let lang = |name: &str, count: u32| LanguageDto {
        urlsafe_key: format!("lang-{name}"),
        name: name.into(),
        card_count: Some(count),
        cards: None,
    };
    LanguageFormsDto {
        items: vec![lang("Thai", 80), lang("German", 2), lang("Spanish", 150)],
    }
}

/// Снимок новой игры: 2 пары, карты 0/2 и 1/3.
fn game_form() -> GameFormDto {
    GameFormDto {
        urlsafe_key: GAME_KEY.into(),
        language: "German".into(),
        user_name: "Anna".into(),
        possible_matches: 2,
        successful_matches: Some(0),
        num_match_attempts: Some(0),
        match_attempts: Some("[]".into()),
        max_attempts: 4,
        game_over: false,
        cards: r#"[
            {"id": 0, "front": "Hund", "position": 0},
            {"id": 1, "front": "Katze", "position": 1},
            {"id": 0, "back": "dog", "position": 2},
            {"id": 1, "back": "cat", "position": 3}
        ]"#
        .into(),
        match_in_progress: false,
        selected_card: None,
    }
}

fn first_pick(position: u32) -> MoveResponseDto {
    MoveResponseDto {
        urlsafe_key: Some(GAME_KEY.into()),
        match_in_progress: Some(true),
        selected_card: Some(format!(r#"{{"position": {position}}}"#)),
        ..MoveResponseDto::default()
    }
}

fn resolved(history: &str, matches: u32, over: bool) -> MoveResponseDto {
    MoveResponseDto {
        urlsafe_key: Some(GAME_KEY.into()),
        match_in_progress: Some(false),
        match_attempts: Some(history.into()),
        successful_matches: Some(matches),
        game_over: Some(over),
        ..MoveResponseDto::default()
    }
}

fn service_error(code: u32) -> MoveResponseDto {
    MoveResponseDto {
        code: Some(serde_json::json!(code)),
        message: Some("nope".into()),
        ..MoveResponseDto::default()
    }
}

/// Клиент с загруженными языками и созданной игрой.
fn client_in_game(
    moves: Vec<MoveResponseDto>,
    config: ClientConfig,
) -> GameClient<ScriptedGameService> {
    let mut service = ScriptedGameService::new().with_languages(languages());
    service.push_game(game_form());
    for m in moves {
        service.push_move(m);
    }

    let mut client = GameClient::new(service, config);
    client.load_languages().unwrap();
    client.create_game("German", 2, 4).unwrap();
    client
}

fn move_requests(client: &GameClient<ScriptedGameService>) -> Vec<&MakeMoveRequest> {
    client
        .service()
        .received()
        .iter()
        .filter_map(|c| match c {
            Command::RevealCard(req) => Some(req),
            _ => None,
        })
        .collect()
}

// -----------------------------
// ЯЗЫКИ И СОЗДАНИЕ ИГРЫ
// -----------------------------

#[test]
fn languages_are_loaded_sorted() {
    let service = ScriptedGameService::new().with_languages(languages());
    let mut client = GameClient::new(service, ClientConfig::default());

    let names: Vec<_> = client
        .load_languages()
        .unwrap()
        .iter()
        .map(|l| l.name.clone())
        .collect();

    assert_eq!(names, vec!["German", "Spanish", "Thai"]);
    assert_eq!(client.language("Thai").map(|l| l.card_count), Some(80));
    assert_eq!(client.service().received(), &[Command::ListLanguages]);
    assert!(client.is_selecting_game());
}

#[test]
fn create_game_validates_before_sending() {
    let mut service = ScriptedGameService::new().with_languages(languages());
    service.push_game(game_form());
    let mut client = GameClient::new(service, ClientConfig::default());
    client.load_languages().unwrap();

    assert_eq!(
        client.create_game("Klingon", 2, 4).unwrap_err(),
        ApiError::UnknownLanguage("Klingon".into())
    );
    // В German всего 2 пары.
    assert!(matches!(client.create_game("German", 3, 6), Err(ApiError::BadRequest(_))));
    assert!(matches!(client.create_game("German", 2, 1), Err(ApiError::BadRequest(_))));
    assert!(matches!(client.create_game("German", 0, 4), Err(ApiError::BadRequest(_))));

    // Ни один из неудачных вызовов не дошёл до сервиса.
    assert_eq!(client.service().received(), &[Command::ListLanguages]);
    assert!(client.session().is_none());
}

#[test]
fn create_game_sends_request_and_starts_session() {
    let client = client_in_game(vec![], ClientConfig::default());

    assert_eq!(
        client.service().received()[1],
        Command::CreateGame(NewGameRequest {
            language: "German".into(),
            possible_matches: 2,
            max_attempts: 4,
            user_key: UserKey::anonymous(),
        })
    );

    let session = client.session().unwrap();
    assert_eq!(session.key, SessionKey(GAME_KEY.into()));
    assert_eq!(session.phase(), SessionPhase::AwaitingFirstPick);
    assert_eq!(client.last_move_message(), MoveMessage::MakeMove);
    assert!(!client.is_selecting_game());
}

#[test]
fn failed_create_keeps_previous_session() {
    let mut client = client_in_game(vec![first_pick(0)], ClientConfig::default());
    client.flip_card(0).unwrap();
    let before = client.session().cloned();

    client
        .service_mut()
        .push_game_error(ApiError::Transport("timeout".into()));
    let err = client.create_game("German", 2, 4).unwrap_err();

    assert_eq!(err, ApiError::Transport("timeout".into()));
    assert_eq!(client.session().cloned(), before);
}

#[test]
fn signed_in_user_key_is_sent_and_sign_out_reverts() {
    let mut service = ScriptedGameService::new().with_languages(languages());
    service.push_game(game_form());
    service.push_game(game_form());

    let mut client =
        GameClient::new(service, ClientConfig::default()).with_user(UserKey("user-7".into()));
    client.load_languages().unwrap();
    client.create_game("German", 2, 4).unwrap();
    client.sign_out();
    client.create_game("German", 2, 4).unwrap();

    let keys: Vec<_> = client
        .service()
        .received()
        .iter()
        .filter_map(|c| match c {
            Command::CreateGame(req) => Some(req.user_key.0.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(keys, vec!["user-7", "-1"]);
    assert!(client.user().is_anonymous());
}

// -----------------------------
// ХОДЫ: ОХРАННЫЕ ПРОВЕРКИ
// -----------------------------

#[test]
fn flip_without_game_is_rejected_locally() {
    let service = ScriptedGameService::new();
    let mut client = GameClient::new(service, ClientConfig::default());

    assert_eq!(client.flip_card(0), Err(ApiError::NoActiveSession));
    assert!(client.service().received().is_empty());
    assert_eq!(client.last_move_message(), MoveMessage::MakeMove);
}

#[test]
fn flip_unknown_card_is_rejected_locally() {
    let mut client = client_in_game(vec![first_pick(0)], ClientConfig::default());

    assert_eq!(client.flip_card(9), Err(ApiError::UnknownCard(9)));
    assert!(move_requests(&client).is_empty());
    assert_eq!(client.service().pending_moves(), 1);
    assert_eq!(client.last_move_message(), MoveMessage::MakeMove);
}

// -----------------------------
// ХОДЫ: ОШИБКИ
// -----------------------------

#[test]
fn service_error_keeps_session_and_shows_failure_text() {
    let config =
        ClientConfig::from_json_str(r#"{"messages": {"failure": "Try again later"}}"#).unwrap();
    let mut client = client_in_game(vec![service_error(400)], config);
    let before = client.session().cloned();

    let err = client.flip_card(1).unwrap_err();

    assert_eq!(
        err,
        ApiError::Service {
            code: "400".into(),
            message: "nope".into()
        }
    );
    assert_eq!(client.session().cloned(), before);
    assert_eq!(client.last_move_message(), MoveMessage::Failure);
    assert_eq!(client.last_move_text(), "Try again later");
}

#[test]
fn transport_and_decode_errors_keep_session() {
    let mut client = client_in_game(vec![], ClientConfig::default());
    client
        .service_mut()
        .push_move_error(ApiError::Transport("connection reset".into()))
        .push_move(MoveResponseDto {
            match_in_progress: Some(false),
            match_attempts: Some("[[0,".into()),
            successful_matches: Some(0),
            game_over: Some(false),
            ..MoveResponseDto::default()
        });
    let before = client.session().cloned();

    assert!(matches!(client.flip_card(0), Err(ApiError::Transport(_))));
    assert_eq!(client.last_move_message(), MoveMessage::Failure);

    assert!(matches!(client.flip_card(0), Err(ApiError::Decode(_))));
    assert_eq!(client.session().cloned(), before);
}

#[test]
fn inconsistent_response_is_reconcile_error() {
    // Сервис "закрыл" попытку, не добавив её в историю.
    let mut client = client_in_game(vec![resolved("[]", 0, false)], ClientConfig::default());

    assert!(matches!(client.flip_card(0), Err(ApiError::Reconcile(_))));
    assert_eq!(client.last_move_message(), MoveMessage::Failure);
    assert_eq!(client.session().unwrap().attempt_count(), 0);
}

// -----------------------------
// ПОЛНЫЙ ПРОХОД
// -----------------------------

#[test]
fn full_game_flow() {
    let mut client = client_in_game(
        vec![
            first_pick(0),
            resolved("[[0, 1]]", 0, false),
            first_pick(0),
            resolved("[[0, 1], [0, 2]]", 1, false),
            first_pick(1),
            resolved("[[0, 1], [0, 2], [1, 3]]", 2, true),
        ],
        ClientConfig::default(),
    );

    assert_eq!(client.flip_card(0), Ok(MoveOutcome::FirstCardRevealed { position: 0 }));
    assert_eq!(client.last_move_text(), "Pick a second card.");
    assert_eq!(client.view().unwrap().cards[0].label.as_deref(), Some("Hund"));

    assert_eq!(
        client.flip_card(1),
        Ok(MoveOutcome::NotMatched(AttemptRecord::new(0, 1)))
    );
    assert!(client.view().unwrap().can_continue);

    assert_eq!(client.continue_after_mismatch(), vec![AttemptRecord::new(0, 1)]);
    assert_eq!(client.session().unwrap().face_up_count(), 0);

    client.flip_card(0).unwrap();
    assert_eq!(
        client.flip_card(2),
        Ok(MoveOutcome::Matched(AttemptRecord::new(0, 2)))
    );
    assert_eq!(client.last_move_text(), "It's a match!");

    client.flip_card(1).unwrap();
    client.flip_card(3).unwrap();

    let view = client.view().unwrap();
    assert!(view.is_over);
    assert_eq!(view.phase, SessionPhase::Finished);
    assert_eq!(view.successful_matches, 2);
    assert_eq!(view.attempt_count, 3);
    assert!(view.cards.iter().all(|c| c.is_face_up && c.label.is_some()));

    // Игра окончена: запрос не уходит.
    assert_eq!(client.flip_card(0), Err(ApiError::SessionOver));
    assert_eq!(move_requests(&client).len(), 6);
    assert!(move_requests(&client)
        .iter()
        .all(|r| r.urlsafe_game_key.0 == GAME_KEY));
}

#[test]
fn cancel_forgets_session_without_service_call() {
    let mut client = client_in_game(vec![first_pick(2)], ClientConfig::default());
    client.flip_card(2).unwrap();
    let received = client.service().received().len();

    let cancelled = client.cancel_game().unwrap();

    assert_eq!(cancelled.pending_pick, Some(2));
    assert!(client.is_selecting_game());
    assert!(client.view().is_none());
    assert_eq!(client.last_move_message(), MoveMessage::MakeMove);
    assert_eq!(client.service().received().len(), received);
    assert!(client.continue_after_mismatch().is_empty());
}
