//! # Scoring constants
//! Material values and the score bounds search uses to tell forced mates apart
//! from heuristic evaluations.
//!
//! Any score whose absolute value is at or above [`MATE_BOUND`] denotes a forced
//! mate. Ordinary evaluations must stay strictly below it.

use super::piece::{PieceKind, NUM_PIECE_KINDS};

/// Evaluation score, in centipawns.
pub type Eval = i32;

/// Upper bound of any score.
pub const INFINITY: Eval = 99_999;
/// Score of a position where the side to move delivers mate.
pub const MATE_SCORE: Eval = INFINITY;
/// Smallest score magnitude interpreted as a forced mate.
pub const MATE_BOUND: Eval = MATE_SCORE - 1;

/// Maximum search depth, in plies.
pub const MAX_PLY: usize = 128;

/// Material value of each piece kind, with a trailing entry for "no piece
/// kind" at index [`NUM_PIECE_KINDS`].
pub const PIECE_VALUES: [Eval; NUM_PIECE_KINDS + 1] = [100, 300, 320, 500, 900, INFINITY, 0];

/// Material value of an optional piece kind, 0 when there is none.
#[inline]
pub const fn material_value(kind: Option<PieceKind>) -> Eval {
    match kind {
        Some(kind) => PIECE_VALUES[kind as usize],
        None => PIECE_VALUES[NUM_PIECE_KINDS],
    }
}

/// Checks if a score lies in the forced mate range.
/// # Example
/// ```
/// # use chesscore::game::score::*;
/// assert!(is_mate_score(MATE_BOUND));
/// assert!(is_mate_score(-MATE_SCORE));
/// assert!(!is_mate_score(MATE_BOUND - 1));
/// ```
#[inline]
pub const fn is_mate_score(eval: Eval) -> bool {
    eval.unsigned_abs() >= MATE_BOUND as u32
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bounds_are_ordered() {
        assert!(MATE_BOUND < MATE_SCORE);
        assert!(MATE_SCORE <= INFINITY);
    }

    #[test]
    fn mate_boundary() {
        assert!(is_mate_score(MATE_BOUND));
        assert!(is_mate_score(MATE_SCORE));
        assert!(is_mate_score(-MATE_BOUND));
        assert!(!is_mate_score(MATE_BOUND - 1));
        assert!(!is_mate_score(-(MATE_BOUND - 1)));
        assert!(!is_mate_score(0));
    }

    #[test]
    fn material_without_king_stays_below_mate() {
        let army = 8 * PieceKind::Pawn.value()
            + 2 * PieceKind::Knight.value()
            + 2 * PieceKind::Bishop.value()
            + 2 * PieceKind::Rook.value()
            + 9 * PieceKind::Queen.value();
        assert!(!is_mate_score(army));
        assert!(!is_mate_score(-army));
    }

    #[test]
    fn values() {
        assert_eq!(PieceKind::Pawn.value(), 100);
        assert_eq!(PieceKind::Queen.value(), 900);
        assert_eq!(PieceKind::King.value(), INFINITY);
        assert_eq!(material_value(None), 0);
        assert_eq!(material_value(Some(PieceKind::Rook)), 500);
    }
}
