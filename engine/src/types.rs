use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Empty => write!(f, "."),
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [Position; BOARD_SIZE],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [Position; BOARD_SIZE]) -> Self {
        Self { mark, cells }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(WinningLine),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerAssignment {
    human: Mark,
    computer: Mark,
}

impl PlayerAssignment {
    pub fn from_human_mark(human: Mark) -> Option<Self> {
        human.opponent().map(|computer| Self { human, computer })
    }

    pub fn human(&self) -> Mark {
        self.human
    }

    pub fn computer(&self) -> Mark {
        self.computer
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    AwaitingHumanMove,
    AwaitingComputerMove,
    Over,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_mapping() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_assignment_from_human_mark() {
        let players = PlayerAssignment::from_human_mark(Mark::O).unwrap();
        assert_eq!(players.human(), Mark::O);
        assert_eq!(players.computer(), Mark::X);
    }

    #[test]
    fn test_assignment_rejects_empty_mark() {
        assert!(PlayerAssignment::from_human_mark(Mark::Empty).is_none());
    }
}
