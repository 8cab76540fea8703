mod board;
mod bot_controller;
pub mod config;
mod game_state;
pub mod logger;
mod types;
mod win_detector;

pub use board::{Board, InvalidMove};
pub use bot_controller::{best_move, evaluate};
pub use config::{CONFIG_FILE_NAME, GameConfig, Validate, load_config, parse_config, save_config};
pub use game_state::{GameSession, SessionError};
pub use logger::init_logger;
pub use types::{
    BOARD_SIZE, GameOutcome, GamePhase, Mark, PlayerAssignment, Position, WinningLine,
};
pub use win_detector::{check_win, outcome};
