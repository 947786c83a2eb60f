//! Exhaustive minimax opponent
//!
//! Searches the whole remaining game tree. Depth is bounded by the number of
//! empty cells, so at most nine plies.

use crate::board::{Board, CELLS};
use crate::eval::{detect_winner, is_full};
use crate::game::Player;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Score for a position the automated mark has won
pub const WIN_SCORE: i32 = 1;

/// Score for a position the human mark has won
pub const LOSS_SCORE: i32 = -1;

pub const DRAW_SCORE: i32 = 0;

// ============================================================================
// MINIMAX AI
// ============================================================================

/// Minimax player for one mark
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinimaxAI {
    pub automated: Player,
}

impl MinimaxAI {
    pub fn new(automated: Player) -> Self {
        Self { automated }
    }

    pub fn human(&self) -> Player {
        self.automated.opponent()
    }

    /// Best cell for the automated mark, `None` on a full board
    pub fn best_move(&self, board: &Board) -> Option<(usize, usize)> {
        choose_move(board, self.automated, self.human())
    }
}

/// Pick the empty cell with the highest minimax score for `automated`.
///
/// Cells are tried in row-major order and only a strictly better score
/// replaces the current pick, so ties go to the first cell found.
pub fn choose_move(board: &Board, automated: Player, human: Player) -> Option<(usize, usize)> {
    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for (row, col) in CELLS {
        if board.get(row, col).is_some() {
            continue;
        }

        board.set(row, col, Some(automated));
        let score = search(&mut board, false, automated, human);
        board.set(row, col, None);

        if score > best_score {
            best_score = score;
            best_move = Some((row, col));
        }
    }

    best_move
}

/// Score a position from `automated`'s point of view under optimal play.
///
/// `maximizing` is true when `automated` moves next.
pub fn minimax(board: &Board, maximizing: bool, automated: Player, human: Player) -> i32 {
    let mut board = *board;
    search(&mut board, maximizing, automated, human)
}

// ============================================================================
// SEARCH
// ============================================================================

/// Place, recurse, undo on a scratch board
fn search(board: &mut Board, maximizing: bool, automated: Player, human: Player) -> i32 {
    match detect_winner(board) {
        Some(winner) if winner == automated => return WIN_SCORE,
        Some(_) => return LOSS_SCORE,
        None if is_full(board) => return DRAW_SCORE,
        None => {}
    }

    let mover = if maximizing { automated } else { human };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for (row, col) in CELLS {
        if board.get(row, col).is_some() {
            continue;
        }

        board.set(row, col, Some(mover));
        let score = search(board, !maximizing, automated, human);
        board.set(row, col, None);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;
    use crate::game::GameResult;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn o_ai() -> MinimaxAI {
        MinimaxAI::new(Player::O)
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(minimax(&board("OOO/XX./X.."), true, Player::O, Player::X), WIN_SCORE);
        assert_eq!(minimax(&board("XXX/OO./O.."), true, Player::O, Player::X), LOSS_SCORE);
        assert_eq!(minimax(&board("XOX/XOO/OXX"), true, Player::O, Player::X), DRAW_SCORE);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(minimax(&Board::new(), false, Player::O, Player::X), DRAW_SCORE);
    }

    #[test]
    fn test_center_after_corner_opening() {
        for corner in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            let mut b = Board::new();
            b.set(corner.0, corner.1, Some(Player::X));
            assert_eq!(o_ai().best_move(&b), Some((1, 1)), "corner {:?}", corner);
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        // O can win at (1,2) or must block X at (0,2); winning comes first
        let b = board("XX./OO./X..");
        assert_eq!(o_ai().best_move(&b), Some((1, 2)));
    }

    #[test]
    fn test_blocks_threat() {
        let b = board("XX./.O./...");
        assert_eq!(o_ai().best_move(&b), Some((0, 2)));
    }

    #[test]
    fn test_plays_for_either_mark() {
        // X to move with a winning cell available
        let b = board("XX./OO./...");
        let ai = MinimaxAI::new(Player::X);
        assert_eq!(ai.human(), Player::O);
        assert_eq!(ai.best_move(&b), Some((0, 2)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(o_ai().best_move(&board("XOX/XOO/OXX")), None);
    }

    #[test]
    fn test_tie_break_is_first_cell() {
        // After a center opening every corner draws; the first corner is picked
        let b = board(".../.X./...");
        let corner_scores: Vec<_> = [(0, 0), (0, 2), (2, 0), (2, 2)]
            .iter()
            .map(|&(row, col)| {
                let mut next = b;
                next.set(row, col, Some(Player::O));
                minimax(&next, false, Player::O, Player::X)
            })
            .collect();
        assert!(corner_scores.iter().all(|&score| score == DRAW_SCORE));
        assert_eq!(o_ai().best_move(&b), Some((0, 0)));
    }

    /// Let X try every line of play against the AI; O must never lose.
    fn explore(board: &mut Board, games: &mut usize) {
        let empty: Vec<_> = board.empty_cells().collect();
        for (row, col) in empty {
            board.set(row, col, Some(Player::X));
            match evaluate(board) {
                GameResult::Won(winner) => panic!("{winner} beat the AI:\n{board}"),
                GameResult::Tie => *games += 1,
                GameResult::Ongoing => {
                    let (r, c) = o_ai().best_move(board).unwrap();
                    board.set(r, c, Some(Player::O));
                    if evaluate(board) == GameResult::Ongoing {
                        explore(board, games);
                    } else {
                        *games += 1;
                    }
                    board.set(r, c, None);
                }
            }
            board.set(row, col, None);
        }
    }

    #[test]
    fn test_never_loses_as_second_player() {
        let mut board = Board::new();
        let mut games = 0;
        explore(&mut board, &mut games);
        assert!(games > 0);
    }

    #[test]
    fn test_never_picks_losing_move_when_draw_exists() {
        let positions = ["X../.../...", ".X./.../...", "X../.O./..X", "X.X/.O./...", ".../.X./..."];
        for text in positions {
            let b = board(text);
            let (row, col) = o_ai().best_move(&b).unwrap();
            let mut next = b;
            next.set(row, col, Some(Player::O));
            let chosen = minimax(&next, false, Player::O, Player::X);

            let best = b
                .empty_cells()
                .map(|(r, c)| {
                    let mut alt = b;
                    alt.set(r, c, Some(Player::O));
                    minimax(&alt, false, Player::O, Player::X)
                })
                .max()
                .unwrap();
            assert_eq!(chosen, best, "position {text}");
            assert!(chosen >= DRAW_SCORE, "position {text}");
        }
    }
}
