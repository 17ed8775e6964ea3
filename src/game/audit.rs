//! # Shift guard audit
//! Exhaustive check that every [`Delta`] is paired with the right non-edge
//! guard masks.
//!
//! For each delta and each square, shifting the square's bitboard through
//! [`Bitboard::shift_guarded`] must give exactly the square reached by
//! [`Square::translate`], which computes the destination from file and rank
//! coordinates and never looks at a mask. Post-shift guarding with
//! [`Delta::target_guard`] must agree with it, and the pre-shift guard must
//! contain exactly the squares a piece can leave from.

use thiserror::Error;

use super::{
    bitboard::Bitboard,
    square::{Delta, Square},
};

/// A disagreement between a guard mask and coordinate arithmetic.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
pub enum GuardError {
    #[error("source guard of {delta:?} is {got:#018x}, expected {expected:#018x}")]
    InexactGuard {
        delta: Delta,
        expected: Bitboard,
        got: Bitboard,
    },
    #[error("shifting {square} by {delta:?} gave {got:#018x}, expected {expected:#018x}")]
    WrongTarget {
        square: Square,
        delta: Delta,
        expected: Bitboard,
        got: Bitboard,
    },
    #[error("pre-shift and post-shift guards of {delta:?} disagree on {square}")]
    GuardsDisagree { square: Square, delta: Delta },
}

/// Summary of a successful audit.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct AuditReport {
    /// Number of (square, delta) pairs checked.
    pub checked: usize,
    /// Pairs whose translation stays on the board.
    pub on_board: usize,
    /// Pairs where an unguarded shift would have wrapped onto a wrong square.
    pub wraparounds: usize,
}

/// Runs the audit over all 16 deltas and all 64 squares.
pub fn audit_shift_guards() -> Result<AuditReport, GuardError> {
    let mut report = AuditReport::default();
    for delta in Delta::iter() {
        let delta_report = audit_delta(delta)?;
        log::debug!(
            "{delta:?}: {} on-board targets, {} wraparounds removed",
            delta_report.on_board,
            delta_report.wraparounds
        );
        report.checked += delta_report.checked;
        report.on_board += delta_report.on_board;
        report.wraparounds += delta_report.wraparounds;
    }
    Ok(report)
}

/// Runs the audit for a single delta.
pub fn audit_delta(delta: Delta) -> Result<AuditReport, GuardError> {
    let mut report = AuditReport::default();
    let mut sources = Bitboard::EMPTY;

    for square in Square::iter() {
        let origin = square.bitboard();
        let expected = square
            .translate(delta)
            .map_or(Bitboard::EMPTY, Square::bitboard);

        let got = origin.shift_guarded(delta);
        if got != expected {
            return Err(GuardError::WrongTarget {
                square,
                delta,
                expected,
                got,
            });
        }
        if origin.shift(delta) & delta.target_guard() != got {
            return Err(GuardError::GuardsDisagree { square, delta });
        }

        let raw = origin.shift(delta);
        if raw.is_not_empty() && raw != expected {
            log::trace!("{delta:?} from {square} wraps onto {raw:?}");
            report.wraparounds += 1;
        }
        if expected.is_not_empty() {
            sources.insert(square);
            report.on_board += 1;
        }
        report.checked += 1;
    }

    if sources != delta.source_guard() {
        return Err(GuardError::InexactGuard {
            delta,
            expected: sources,
            got: delta.source_guard(),
        });
    }
    Ok(report)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_guards_pass() {
        let report = audit_shift_guards().unwrap();
        assert_eq!(report.checked, 16 * 64);
        assert!(report.wraparounds > 0);
    }

    #[test]
    fn on_board_counts() {
        // 7 * 8 squares can step one file or one rank, 7 * 7 diagonally.
        assert_eq!(audit_delta(Delta::East).unwrap().on_board, 56);
        assert_eq!(audit_delta(Delta::North).unwrap().on_board, 56);
        assert_eq!(audit_delta(Delta::SouthWest).unwrap().on_board, 49);
        assert_eq!(audit_delta(Delta::KnightNorthEast).unwrap().on_board, 42);
        assert_eq!(audit_delta(Delta::KnightWestSouth).unwrap().on_board, 42);
    }

    #[test]
    fn vertical_shifts_never_wrap() {
        assert_eq!(audit_delta(Delta::North).unwrap().wraparounds, 0);
        assert_eq!(audit_delta(Delta::South).unwrap().wraparounds, 0);
    }

    #[test]
    fn horizontal_wraparounds() {
        // Every h-file square but h1 wraps onto the a-file of the next rank.
        assert_eq!(audit_delta(Delta::East).unwrap().wraparounds, 7);
        // Knight jumps two files right wrap from every square of files G and H.
        assert_eq!(audit_delta(Delta::KnightEastNorth).unwrap().wraparounds, 16);
    }

    #[test]
    fn error_message_names_square() {
        let err = GuardError::GuardsDisagree {
            square: Square::H4,
            delta: Delta::East,
        };
        assert_eq!(
            err.to_string(),
            "pre-shift and post-shift guards of East disagree on h4"
        );
    }
}
