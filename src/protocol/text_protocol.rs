//! Line-oriented text protocol and command loop.
//!
//! Parses commands from stdin, maintains the current game, routes `ai`
//! requests to the engine for the selected difficulty, and writes replies to
//! stdout. Bad input produces an `error:` line; the loop keeps running.
//!
//! Commands:
//! - `new` / `fen <fen>` / `board` / `status`
//! - `moves [square]`, `move <lan>`, `ai`
//! - `difficulty <easy|normal|hard>`, `quit`

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::difficulty::{build_engine, Difficulty};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    /// Side the engine answers for automatically after each human move.
    pub ai_side: Option<Color>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            seed: None,
            ai_side: Some(Color::Black),
        }
    }
}

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = SessionState::new(config);

    session.greet(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct SessionState {
    game_state: GameState,
    engine: Box<dyn Engine>,
    config: SessionConfig,
}

impl SessionState {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            game_state: GameState::new_game(),
            engine: build_engine(config.difficulty, config.seed),
            config,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    fn greet(&mut self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_game_state(&self.game_state))?;
        writeln!(out, "status {}", self.game_state.status())?;
        // Engine opens the game when it plays White.
        self.reply_if_engine_to_move(out)
    }

    /// Handle one input line. Returns `Ok(true)` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        let result = match cmd {
            "new" => {
                self.game_state.reset();
                self.engine.new_game();
                writeln!(out, "status {}", self.game_state.status())?;
                self.reply_if_engine_to_move(out)?;
                Ok(())
            }
            "fen" => self.handle_fen(&rest.join(" "), out),
            "board" => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
                writeln!(out, "fen {}", self.game_state.get_fen())?;
                Ok(())
            }
            "status" => {
                writeln!(out, "status {}", self.game_state.status())?;
                Ok(())
            }
            "moves" => self.handle_moves(rest.first().copied(), out),
            "move" => self.handle_move(rest.first().copied(), out),
            "ai" => self.handle_ai(out),
            "difficulty" => self.handle_difficulty(rest.first().copied(), out),
            "quit" => return Ok(true),
            other => Err(ChessError::UnknownCommand(other.to_owned())),
        };

        if let Err(err) = result {
            warn!("command '{trimmed}' failed: {err}");
            writeln!(out, "error: {err}")?;
        }
        Ok(false)
    }

    fn handle_fen(&mut self, fen: &str, out: &mut impl Write) -> ChessResult<()> {
        if fen.is_empty() {
            return Err(ChessError::InvalidFen("missing FEN after 'fen'".to_owned()));
        }
        self.game_state = GameState::from_fen(fen)?;
        self.engine.new_game();
        write_status(out, &self.game_state)?;
        Ok(self.reply_if_engine_to_move(out)?)
    }

    fn handle_moves(&mut self, square: Option<&str>, out: &mut impl Write) -> ChessResult<()> {
        let moves = match square {
            Some(text) => self.game_state.legal_moves_for(algebraic_to_square(text)?),
            None => self.game_state.all_legal_moves(),
        };
        let lans = moves
            .into_iter()
            .map(move_to_long_algebraic)
            .collect::<ChessResult<Vec<_>>>()?;
        writeln!(out, "moves {}", lans.join(" "))?;
        Ok(())
    }

    fn handle_move(&mut self, lan: Option<&str>, out: &mut impl Write) -> ChessResult<()> {
        let lan = lan.ok_or_else(|| ChessError::InvalidMoveText("missing move".to_owned()))?;
        let mv = long_algebraic_to_move(lan)?;
        if !self.game_state.make_move(mv) {
            return Err(ChessError::IllegalMove(lan.to_owned()));
        }
        writeln!(out, "played {}", move_to_long_algebraic(mv)?)?;
        write_status(out, &self.game_state)?;
        Ok(self.reply_if_engine_to_move(out)?)
    }

    fn handle_ai(&mut self, out: &mut impl Write) -> ChessResult<()> {
        if self.game_state.is_game_over() {
            return Err(ChessError::NoMoveAvailable);
        }
        let legal_moves = self.game_state.all_legal_moves();
        let result = self.engine.choose_move(
            &legal_moves,
            &self.game_state.board(),
            self.game_state.turn(),
        )?;

        for info in &result.info_lines {
            writeln!(out, "{info}")?;
        }

        let mv = result.best_move.ok_or(ChessError::NoMoveAvailable)?;
        let lan = move_to_long_algebraic(mv)?;
        if !self.game_state.make_move(mv) {
            return Err(ChessError::IllegalMove(lan));
        }
        debug!("{} played {lan}", self.engine.name());
        writeln!(out, "bestmove {lan}")?;
        write_status(out, &self.game_state)
    }

    fn handle_difficulty(&mut self, value: Option<&str>, out: &mut impl Write) -> ChessResult<()> {
        let value = value.ok_or_else(|| ChessError::UnknownDifficulty(String::new()))?;
        let difficulty: Difficulty = value.parse()?;
        self.config.difficulty = difficulty;
        self.engine = build_engine(difficulty, self.config.seed);
        writeln!(out, "difficulty {difficulty}")?;
        Ok(())
    }

    fn reply_if_engine_to_move(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.game_state.is_game_over() || self.config.ai_side != Some(self.game_state.turn()) {
            return Ok(());
        }
        if let Err(err) = self.handle_ai(out) {
            writeln!(out, "error: {err}")?;
        }
        Ok(())
    }
}

fn write_status(out: &mut impl Write, game_state: &GameState) -> ChessResult<()> {
    writeln!(out, "status {}", game_state.status())?;
    Ok(())
}
