//! Colours for each players and their pieces.

/// Number of different colours (2).
pub const NUM_COLOURS: usize = 2;

/// Colour enumeration.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Colour {
    White = 0,
    Black = 1,
}
impl Colour {
    /// Both colours, white first.
    pub const ALL: [Self; NUM_COLOURS] = [Self::White, Self::Black];

    /// Inverts the colour in place.
    /// # Example
    /// ```
    /// # use chesscore::game::colour::Colour;
    /// let mut side_to_move = Colour::White;
    /// side_to_move.invert();
    /// assert_eq!(side_to_move, Colour::Black);
    /// ```
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverse()
    }

    /// Returns the inverse of this colour.
    #[inline]
    pub const fn inverse(&self) -> Self {
        if self.is_black() {
            Colour::White
        } else {
            Colour::Black
        }
    }

    /// Checks if the colour variant is white.
    #[inline]
    pub const fn is_white(&self) -> bool {
        matches!(self, Colour::White)
    }

    /// Checks if the colour variant is black.
    #[inline]
    pub const fn is_black(&self) -> bool {
        matches!(self, Colour::Black)
    }

    /// Iterator over both colours, white first.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }
}
impl std::ops::Not for Colour {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        self.inverse()
    }
}
impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if self.is_black() { "Black" } else { "White" })
    }
}
impl From<bool> for Colour {
    fn from(value: bool) -> Self {
        if value {
            Self::Black
        } else {
            Self::White
        }
    }
}
impl From<&bool> for Colour {
    fn from(value: &bool) -> Self {
        Self::from(*value)
    }
}

#[cfg(test)]
mod test {
    use super::Colour;

    #[test]
    fn inverse() {
        assert_eq!(Colour::White.inverse(), Colour::Black);
        assert_eq!(!Colour::Black, Colour::White);
        for colour in Colour::iter() {
            assert_eq!(colour.inverse().inverse(), colour);
        }
    }

    #[test]
    fn from_bool_matches_discriminant() {
        assert_eq!(Colour::from(false) as u8, 0);
        assert_eq!(Colour::from(&true) as u8, 1);
    }
}
