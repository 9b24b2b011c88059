//! Crate root module declarations for the Parlor Chess engine.
//!
//! Exposes the rules engine (`game_state`, `move_generation`), the move
//! search (`search`, `engines`), the text protocol front-end, and utility
//! helpers for notation, rendering and engine matches.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
}

pub mod engines {
    pub mod difficulty;
    pub mod engine_greedy;
    pub mod engine_one_ply;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod protocol {
    pub mod text_protocol;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
