//! Outcome classification of a game.

/// Status of a game, as reported by whoever tracks its history.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Checkmate,
    DrawByRepetition,
    DrawByStalemate,
    DrawByInsufficientMaterial,
    DrawBy50MoveRule,
}
impl GameStatus {
    /// Checks if the game has ended, whatever the result.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Checks if the game ended in a draw.
    #[inline]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            Self::DrawByRepetition
                | Self::DrawByStalemate
                | Self::DrawByInsufficientMaterial
                | Self::DrawBy50MoveRule
        )
    }
}
impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::InProgress => "in progress",
                Self::Checkmate => "checkmate",
                Self::DrawByRepetition => "draw by repetition",
                Self::DrawByStalemate => "draw by stalemate",
                Self::DrawByInsufficientMaterial => "draw by insufficient material",
                Self::DrawBy50MoveRule => "draw by the fifty-move rule",
            }
        )
    }
}

#[cfg(test)]
mod test {
    use super::GameStatus;

    #[test]
    fn classification() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Checkmate.is_over());
        assert!(!GameStatus::Checkmate.is_draw());
        assert!(GameStatus::DrawBy50MoveRule.is_draw());
        assert!(GameStatus::DrawByStalemate.is_over());
    }
}
