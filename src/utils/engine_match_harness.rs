//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without protocol
//! I/O. Every engine move goes through `GameState::make_move`, so a match
//! doubles as a check that engines only ever return legal moves.

use std::time::Instant;

use log::{debug, info};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 300 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves_lan: Vec<String>,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn report(&self) -> String {
        format!(
            "outcome={:?} plies={} white_ms={:.3} black_ms={:.3}",
            self.outcome,
            self.played_moves_lan.len(),
            self.white_total_time_ns as f64 / 1_000_000.0,
            self.black_total_time_ns as f64 / 1_000_000.0
        )
    }
}

/// Play a single engine-vs-engine match from the starting position.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_state(engine_white, engine_black, GameState::new_game(), config)
}

/// Play a match from a caller-provided state.
pub fn play_engine_match_from_state(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    mut state: GameState,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut played_moves_lan = Vec::<String>::new();
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        if state.is_game_over() {
            break;
        }

        let side = state.turn();
        let legal_moves = state.all_legal_moves();
        let board = state.board();

        let started = Instant::now();
        let output = match side {
            Color::White => engine_white.choose_move(&legal_moves, &board, side)?,
            Color::Black => engine_black.choose_move(&legal_moves, &board, side)?,
        };
        let elapsed = started.elapsed().as_nanos();
        match side {
            Color::White => white_total_time_ns += elapsed,
            Color::Black => black_total_time_ns += elapsed,
        }

        let mv = output.best_move.ok_or(ChessError::NoMoveAvailable)?;
        let lan = move_to_long_algebraic(mv)?;
        if !state.make_move(mv) {
            return Err(ChessError::IllegalMove(lan));
        }
        debug!("match ply {} {side} {lan}", played_moves_lan.len() + 1);
        played_moves_lan.push(lan);
    }

    let outcome = match (state.is_game_over(), state.winner()) {
        (true, Winner::Side(Color::White)) => MatchOutcome::WhiteWinCheckmate,
        (true, Winner::Side(Color::Black)) => MatchOutcome::BlackWinCheckmate,
        (true, _) => MatchOutcome::DrawStalemate,
        (false, _) => MatchOutcome::DrawMaxPlies,
    };
    info!(
        "match finished {:?} after {} plies",
        outcome,
        played_moves_lan.len()
    );

    Ok(MatchResult {
        outcome,
        final_state: state,
        played_moves_lan,
        white_total_time_ns,
        black_total_time_ns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_one_ply::OnePlyEngine;
    use crate::engines::engine_random::RandomEngine;

    #[test]
    fn random_vs_random_stays_legal_and_terminates() {
        let mut white = RandomEngine::with_seed(1);
        let mut black = RandomEngine::with_seed(2);
        let config = MatchConfig { max_plies: 60 };
        let result = play_engine_match(&mut white, &mut black, &config).expect("match should run");
        assert!(result.played_moves_lan.len() <= 60);
        if result.outcome == MatchOutcome::DrawMaxPlies {
            assert_eq!(result.played_moves_lan.len(), 60);
        } else {
            assert!(result.final_state.is_game_over());
        }
    }

    #[test]
    fn max_plies_caps_the_match() {
        // Quiet position: the one-ply engine takes the first move in scan order.
        let start = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("fen should parse");
        let mut white = OnePlyEngine::new();
        let mut black = RandomEngine::with_seed(5);
        let config = MatchConfig { max_plies: 1 };
        let result = play_engine_match_from_state(&mut white, &mut black, start, &config)
            .expect("match should run");
        assert_eq!(result.played_moves_lan, vec!["a1b1".to_owned()]);
        assert_eq!(result.outcome, MatchOutcome::DrawMaxPlies);
        assert!(result.report().starts_with("outcome=DrawMaxPlies plies=1"));
    }

    #[test]
    fn finished_start_state_plays_no_moves() {
        let start = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("fen should parse");
        let mut white = RandomEngine::with_seed(1);
        let mut black = RandomEngine::with_seed(2);
        let result = play_engine_match_from_state(&mut white, &mut black, start, &MatchConfig::default())
            .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawStalemate);
        assert!(result.played_moves_lan.is_empty());
    }
}
