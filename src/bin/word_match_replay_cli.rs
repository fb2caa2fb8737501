// src/bin/word_match_replay_cli.rs

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use word_match_client::api::queries::SessionViewDto;
use word_match_client::infra::{Transcript, TranscriptStep};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: word_match_replay_cli <transcript.json>");
        return ExitCode::from(2);
    };

    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("Не удалось прочитать {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let transcript = match Transcript::from_json_str(&json) {
        Ok(t) => t,
        Err(err) => {
            eprintln!("Некорректная запись {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("=== WORD MATCH REPLAY ===\n");
    println!(
        "Язык: {} | пар: {} | попыток: {} | шагов: {}\n",
        transcript.game.language,
        transcript.game.possible_matches,
        transcript.game.max_attempts,
        transcript.steps.len()
    );

    let result = transcript.replay(|step, err, client| {
        match step {
            TranscriptStep::Flip { position, .. } => println!("> flip {position}"),
            TranscriptStep::Continue => println!("> continue"),
        }

        if let Some(err) = err {
            println!("  ошибка: {err}");
        }

        if let Some(view) = client.view() {
            print_board(&view);
        }
        println!();
    });

    match result {
        Ok(client) => {
            if let Some(session) = client.session() {
                println!(
                    "Итог: {}/{} пар за {} попыток, игра {}",
                    session.successful_matches,
                    session.possible_matches,
                    session.attempt_count(),
                    if session.is_over { "окончена" } else { "не окончена" }
                );
            }
            println!("=== WORD MATCH REPLAY DONE ===");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Прогон прерван: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_board(view: &SessionViewDto) {
    let cells: Vec<String> = view
        .cards
        .iter()
        .map(|c| match (&c.label, c.is_face_up) {
            (Some(label), _) => format!("{}:{}", c.position, label),
            (None, true) => format!("{}:--", c.position),
            (None, false) => format!("{}:??", c.position),
        })
        .collect();

    println!("  {}", cells.join(" | "));
    println!(
        "  matches {}/{} | attempts {}/{} | {:?} | {}",
        view.successful_matches,
        view.possible_matches,
        view.attempt_count,
        view.max_attempts,
        view.phase,
        view.last_move_message
    );
    if view.can_continue {
        println!("  [Continue]");
    }
}
