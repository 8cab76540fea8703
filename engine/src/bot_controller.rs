use crate::board::Board;
use crate::types::{GameOutcome, PlayerAssignment, Position};
use crate::win_detector::outcome;

pub fn evaluate(board: &Board, players: PlayerAssignment) -> Option<i32> {
    match outcome(board, players) {
        GameOutcome::Win(line) if line.mark == players.computer() => Some(1),
        GameOutcome::Win(_) => Some(-1),
        GameOutcome::Draw => Some(0),
        GameOutcome::InProgress => None,
    }
}

fn minimax(board: &mut Board, players: PlayerAssignment, is_maximizing: bool) -> i32 {
    if let Some(score) = evaluate(board, players) {
        return score;
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for pos in board.available_moves() {
            board.set(pos, players.computer());
            let score = minimax(board, players, false);
            board.clear(pos);
            best_score = best_score.max(score);
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for pos in board.available_moves() {
            board.set(pos, players.human());
            let score = minimax(board, players, true);
            board.clear(pos);
            best_score = best_score.min(score);
        }
        best_score
    }
}

pub fn best_move(board: &mut Board, players: PlayerAssignment) -> Option<Position> {
    let mut best_score = i32::MIN;
    let mut best = None;

    for pos in board.available_moves() {
        board.set(pos, players.computer());
        let score = minimax(board, players, false);
        board.clear(pos);

        // only a strictly greater score replaces the current best, so the
        // first cell in row-major order wins ties
        if score > best_score {
            best_score = score;
            best = Some(pos);
        }
    }

    best
}
