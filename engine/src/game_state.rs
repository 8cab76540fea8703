use crate::board::{Board, InvalidMove};
use crate::bot_controller::best_move;
use crate::log;
use crate::types::{GameOutcome, GamePhase, Mark, PlayerAssignment, Position};
use crate::win_detector::outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    AlreadyStarted,
    NotStarted,
    OutOfTurn,
    GameOver,
    InvalidMark,
    Move(InvalidMove),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::AlreadyStarted => write!(f, "Game is already started"),
            SessionError::NotStarted => write!(f, "Game is not started"),
            SessionError::OutOfTurn => write!(f, "Not your turn"),
            SessionError::GameOver => write!(f, "Game is already over"),
            SessionError::InvalidMark => write!(f, "Player mark must be X or O"),
            SessionError::Move(e) => write!(f, "Invalid move: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<InvalidMove> for SessionError {
    fn from(e: InvalidMove) -> Self {
        SessionError::Move(e)
    }
}

#[derive(Debug)]
pub struct GameSession {
    board: Board,
    players: Option<PlayerAssignment>,
    phase: GamePhase,
    last_move: Option<Position>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: None,
            phase: GamePhase::NotStarted,
            last_move: None,
        }
    }

    pub fn start(&mut self, human_mark: Mark) -> Result<Option<Position>, SessionError> {
        if self.phase != GamePhase::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }

        let players =
            PlayerAssignment::from_human_mark(human_mark).ok_or(SessionError::InvalidMark)?;
        self.players = Some(players);
        log!("Game started, human plays {}", players.human());

        // X always moves first
        if players.computer() == Mark::X {
            self.phase = GamePhase::AwaitingComputerMove;
            let (pos, _) = self.play_computer_move()?;
            return Ok(Some(pos));
        }

        self.phase = GamePhase::AwaitingHumanMove;
        Ok(None)
    }

    pub fn play_human_move(&mut self, pos: Position) -> Result<GameOutcome, SessionError> {
        let players = self.expect_phase(GamePhase::AwaitingHumanMove)?;

        self.board.place(pos, players.human())?;
        self.last_move = Some(pos);
        log!("Human placed {} at ({}, {})", players.human(), pos.row, pos.col);

        Ok(self.advance_phase(players, GamePhase::AwaitingComputerMove))
    }

    pub fn play_computer_move(&mut self) -> Result<(Position, GameOutcome), SessionError> {
        let players = self.expect_phase(GamePhase::AwaitingComputerMove)?;

        let Some(pos) = best_move(&mut self.board, players) else {
            unreachable!("a game awaiting a move always has an empty cell");
        };
        self.board.place(pos, players.computer())?;
        self.last_move = Some(pos);
        log!(
            "Computer placed {} at ({}, {})",
            players.computer(),
            pos.row,
            pos.col
        );

        let result = self.advance_phase(players, GamePhase::AwaitingHumanMove);
        Ok((pos, result))
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.players = None;
        self.phase = GamePhase::NotStarted;
        self.last_move = None;
        log!("Game restarted");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn players(&self) -> Option<PlayerAssignment> {
        self.players
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.players.map(|players| outcome(&self.board, players))
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<PlayerAssignment, SessionError> {
        match self.phase {
            GamePhase::NotStarted => Err(SessionError::NotStarted),
            GamePhase::Over => Err(SessionError::GameOver),
            phase if phase != expected => Err(SessionError::OutOfTurn),
            _ => match self.players {
                Some(players) => Ok(players),
                None => Err(SessionError::NotStarted),
            },
        }
    }

    fn advance_phase(&mut self, players: PlayerAssignment, next: GamePhase) -> GameOutcome {
        let result = outcome(&self.board, players);
        match result {
            GameOutcome::InProgress => self.phase = next,
            GameOutcome::Win(line) => {
                self.phase = GamePhase::Over;
                log!("{} wins", line.mark);
            }
            GameOutcome::Draw => {
                self.phase = GamePhase::Over;
                log!("Draw");
            }
        }
        result
    }
}
