//! Интеграционные тесты для доменной модели (crate::domain).

use word_match_client::domain::*;

/// Утилита: сессия 4 пары / 8 попыток, карты 0..8 с надписями.
fn make_session() -> GameSession {
    let cards = (0..8)
        .map(|pos| {
            let side = if pos % 2 == 0 { CardSide::Front } else { CardSide::Back };
            Card::face_down(pos)
                .with_pair(pos / 2)
                .with_label(side, format!("word-{pos}"))
        })
        .collect();

    GameSession::new(SessionKey("game-1".into()), "German", "Default User", 4, 8, cards)
}

#[test]
fn new_session_starts_awaiting_first_pick() {
    let s = make_session();

    assert_eq!(s.phase(), SessionPhase::AwaitingFirstPick);
    assert_eq!(s.attempt_count(), 0);
    assert_eq!(s.attempts_remaining(), 8);
    assert_eq!(s.successful_matches, 0);
    assert!(!s.match_in_progress());
    assert!(!s.is_over);
    assert_eq!(s.face_up_count(), 0);
    assert!(!s.needs_continue());
}

#[test]
fn phase_follows_pending_pick_and_is_over() {
    let mut s = make_session();

    s.pending_pick = Some(3);
    assert!(s.match_in_progress());
    assert_eq!(s.phase(), SessionPhase::AwaitingSecondPick);

    // Окончание игры важнее незакрытой попытки.
    s.is_over = true;
    assert_eq!(s.phase(), SessionPhase::Finished);
}

#[test]
fn attempt_count_is_history_length() {
    let mut s = make_session();
    s.attempt_history.push(AttemptRecord::new(0, 1));
    s.attempt_history.push(AttemptRecord::new(2, 5));

    assert_eq!(s.attempt_count(), 2);
    assert_eq!(s.attempts_remaining(), 6);
    assert_eq!(s.last_attempt(), Some(&AttemptRecord::new(2, 5)));
}

#[test]
fn card_lookup_by_position() {
    let s = make_session();

    assert!(s.has_card(7));
    assert!(!s.has_card(8));
    assert_eq!(s.card(5).and_then(|c| c.pair_id), Some(2));
}

#[test]
fn visible_label_only_when_face_up() {
    let mut card = Card::face_down(3).with_label(CardSide::Front, "Hund");

    assert_eq!(card.visible_label(), None);
    assert_eq!(card.to_string(), "#3[??]");

    card.is_face_up = true;
    assert_eq!(card.visible_label(), Some("Hund"));
    assert_eq!(card.to_string(), "#3[Hund]");
    assert!(card.is_front());
}

#[test]
fn face_up_card_without_label_is_displayed_blank() {
    let mut card = Card::face_down(4);
    card.is_face_up = true;

    assert_eq!(card.visible_label(), None);
    assert_eq!(card.to_string(), "#4[--]");
}

#[test]
fn continue_flips_unmatched_cards_back() {
    let mut s = make_session();
    for pos in [1, 6] {
        s.cards[pos].is_face_up = true;
    }
    s.attempt_history.push(AttemptRecord::new(1, 6));
    s.awaiting_continue.push(AttemptRecord::new(1, 6));

    let flipped = s.continue_after_mismatch();

    assert_eq!(flipped, vec![AttemptRecord::new(1, 6)]);
    assert!(!s.cards[1].is_face_up);
    assert!(!s.cards[6].is_face_up);
    assert!(!s.needs_continue());
    // История не трогается.
    assert_eq!(s.attempt_count(), 1);
}

#[test]
fn continue_keeps_matched_and_pending_cards_up() {
    let mut s = make_session();
    // 0 - из подтверждённой пары, 2 - первая карта новой попытки.
    for pos in [0, 2, 3] {
        s.cards[pos].is_face_up = true;
    }
    s.cards[0].is_matched = true;
    s.pending_pick = Some(2);
    s.awaiting_continue.push(AttemptRecord::new(0, 3));
    s.awaiting_continue.push(AttemptRecord::new(2, 3));

    s.continue_after_mismatch();

    assert!(s.cards[0].is_face_up);
    assert!(s.cards[2].is_face_up);
    assert!(!s.cards[3].is_face_up);
}

#[test]
fn continue_is_noop_without_mismatch_or_after_game_over() {
    let mut s = make_session();
    assert!(s.continue_after_mismatch().is_empty());

    s.cards[1].is_face_up = true;
    s.awaiting_continue.push(AttemptRecord::new(1, 6));
    s.is_over = true;

    let before = s.clone();
    assert!(s.continue_after_mismatch().is_empty());
    assert_eq!(s, before);
}

#[test]
fn attempt_record_serializes_as_pair() {
    let json = serde_json::to_string(&AttemptRecord::new(2, 5)).unwrap();
    assert_eq!(json, "[2,5]");

    let back: AttemptRecord = serde_json::from_str("[7, 1]").unwrap();
    assert_eq!(back.first(), 7);
    assert_eq!(back.second(), 1);
}

#[test]
fn language_bounds_and_sorting() {
    let german = Language::new("k1", "German", 3);
    assert!(german.supports_matches(3));
    assert!(!german.supports_matches(4));

    let mut langs = vec![
        Language::new("k2", "Thai", 10),
        german,
        Language::new("k3", "Spanish", 10),
    ];
    sort_languages(&mut langs);

    let names: Vec<_> = langs.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["German", "Spanish", "Thai"]);
}

#[test]
fn user_key_anonymous_by_default() {
    let key = UserKey::default();
    assert!(key.is_anonymous());
    assert_eq!(key.to_string(), "-1");
    assert!(!UserKey("agxzfnVzZXI".into()).is_anonymous());
}
