//! Drives a full protocol session the way a front-end would.

use parlor_chess::engines::difficulty::Difficulty;
use parlor_chess::game_state::chess_types::*;
use parlor_chess::protocol::text_protocol::{SessionConfig, SessionState};

fn send(session: &mut SessionState, line: &str) -> String {
    let mut out = Vec::<u8>::new();
    session
        .handle_command(line, &mut out)
        .expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("protocol output is UTF-8")
}

#[test]
fn human_plays_fools_mate_against_itself() {
    let mut session = SessionState::new(SessionConfig {
        difficulty: Difficulty::Easy,
        seed: Some(3),
        ai_side: None,
    });

    for lan in ["f2f3", "e7e5", "g2g4"] {
        let out = send(&mut session, &format!("move {lan}"));
        assert!(out.starts_with(&format!("played {lan}\n")));
    }
    let out = send(&mut session, "move d8h4");
    assert_eq!(out, "played d8h4\nstatus Checkmate - Black wins\n");
    assert_eq!(session.game_state().winner(), Winner::Side(Color::Black));

    assert!(send(&mut session, "move a2a3").starts_with("error: illegal move"));
    assert_eq!(send(&mut session, "moves"), "moves \n");

    assert_eq!(send(&mut session, "new"), "status White to move\n");
    assert_eq!(session.game_state(), &GameState::new_game());
}

#[test]
fn hard_engine_answers_every_human_move() {
    let mut session = SessionState::new(SessionConfig {
        difficulty: Difficulty::Hard,
        seed: None,
        ai_side: Some(Color::Black),
    });

    // No capture is ever on offer, so Black plays its first move in scan
    // order: the a-pawn, which is the lowest black piece on the board.
    for (human, reply) in [("e2e4", "a7a5"), ("d2d4", "a5a4"), ("g1f3", "a4a3")] {
        let out = send(&mut session, &format!("move {human}"));
        assert!(out.starts_with(&format!("played {human}\nstatus Black to move\n")));
        assert!(out.ends_with(&format!("bestmove {reply}\nstatus White to move\n")));
        assert_eq!(session.game_state().turn(), Color::White);
    }
}

#[test]
fn same_seed_gives_the_same_easy_session() {
    let config = SessionConfig {
        difficulty: Difficulty::Easy,
        seed: Some(11),
        ai_side: Some(Color::Black),
    };
    let mut first = SessionState::new(config);
    let mut second = SessionState::new(config);

    // The engine answers e2e4 itself, then plays both sides on request.
    for line in ["move e2e4", "ai", "ai"] {
        let a = send(&mut first, line);
        let b = send(&mut second, line);
        assert_eq!(a, b);
        assert!(!a.contains("error:"));
    }
    assert_eq!(first.game_state(), second.game_state());
}

#[test]
fn unknown_commands_do_not_end_the_session() {
    let mut session = SessionState::new(SessionConfig::default());
    assert_eq!(send(&mut session, "castle kingside"), "error: unknown command: castle\n");
    assert!(send(&mut session, "move").starts_with("error: "));
    assert!(send(&mut session, "fen").starts_with("error: invalid FEN"));
    let board = send(&mut session, "board");
    assert!(board.contains("fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"));
}
