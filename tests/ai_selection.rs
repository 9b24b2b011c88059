//! Search tiers pick from the rules engine's legal moves and play through
//! the same validated path as a human.

use std::collections::HashSet;

use parlor_chess::chess_errors::ChessError;
use parlor_chess::engines::difficulty::{build_engine, choose_move, Difficulty};
use parlor_chess::engines::engine_trait::Engine;
use parlor_chess::game_state::chess_types::*;

const HANGING_QUEEN: &str = "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1";

#[test]
fn easy_is_not_constant() {
    let game = GameState::new_game();
    let moves = game.all_legal_moves();
    let board = game.board();
    let mut engine = build_engine(Difficulty::Easy, Some(2024));

    let picks: HashSet<Move> = (0..64)
        .map(|_| {
            engine
                .choose_move(&moves, &board, Color::White)
                .expect("easy engine should not fail")
                .best_move
                .expect("start position has moves")
        })
        .collect();
    assert!(picks.len() > 1);
    assert!(picks.iter().all(|mv| moves.contains(mv)));
}

#[test]
fn hard_takes_the_strictly_better_capture() {
    let game = GameState::from_fen(HANGING_QUEEN).expect("fen should parse");
    let mv = choose_move(&game.all_legal_moves(), &game.board(), game.turn(), Difficulty::Hard)
        .expect("position has moves");
    assert_eq!(mv, Move::new(Square::new(3, 4), Square::new(4, 3)));
}

#[test]
fn normal_prefers_captures() {
    let game = GameState::from_fen(HANGING_QUEEN).expect("fen should parse");
    for seed in 0..10 {
        let mut engine = build_engine(Difficulty::Normal, Some(seed));
        let out = engine
            .choose_move(&game.all_legal_moves(), &game.board(), game.turn())
            .expect("normal engine should not fail");
        assert_eq!(out.best_move, Some(Move::new(Square::new(3, 4), Square::new(4, 3))));
    }
}

#[test]
fn search_reports_no_move_when_game_is_over() {
    let mut game = GameState::new_game();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let mv = parlor_chess::utils::long_algebraic::long_algebraic_to_move(text)
            .expect("move should parse");
        assert!(game.make_move(mv));
    }
    assert!(game.is_game_over());
    let result = choose_move(&game.all_legal_moves(), &game.board(), game.turn(), Difficulty::Hard);
    assert_eq!(result, Err(ChessError::NoMoveAvailable));
}

#[test]
fn ai_moves_are_always_accepted_by_the_engine() {
    for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
        let mut game = GameState::new_game();
        let mut engine = build_engine(difficulty, Some(99));
        for _ in 0..40 {
            if game.is_game_over() {
                break;
            }
            let out = engine
                .choose_move(&game.all_legal_moves(), &game.board(), game.turn())
                .expect("engine should not fail");
            let mv = out.best_move.expect("game in progress has moves");
            assert!(game.make_move(mv), "{difficulty} produced illegal {mv}");
        }
    }
}
