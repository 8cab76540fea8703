use crate::board::Board;
use crate::types::{BOARD_SIZE, GameOutcome, Mark, PlayerAssignment, Position, WinningLine};

// Scan order is fixed: rows top to bottom, columns left to right, main
// diagonal, anti diagonal. The first complete line found is the one reported.
pub fn check_win(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    for row in 0..BOARD_SIZE {
        if let Some(line) = check_line(board, mark, [(row, 0), (row, 1), (row, 2)]) {
            return Some(line);
        }
    }

    for col in 0..BOARD_SIZE {
        if let Some(line) = check_line(board, mark, [(0, col), (1, col), (2, col)]) {
            return Some(line);
        }
    }

    if let Some(line) = check_line(board, mark, [(0, 0), (1, 1), (2, 2)]) {
        return Some(line);
    }

    check_line(board, mark, [(0, 2), (1, 1), (2, 0)])
}

fn check_line(
    board: &Board,
    mark: Mark,
    cells: [(usize, usize); BOARD_SIZE],
) -> Option<WinningLine> {
    let positions = cells.map(|(row, col)| Position::new(row, col));
    if positions.iter().all(|&pos| board.get(pos) == Some(mark)) {
        Some(WinningLine::new(mark, positions))
    } else {
        None
    }
}

pub fn outcome(board: &Board, players: PlayerAssignment) -> GameOutcome {
    if let Some(line) = check_win(board, players.computer()) {
        return GameOutcome::Win(line);
    }
    if let Some(line) = check_win(board, players.human()) {
        return GameOutcome::Win(line);
    }
    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
