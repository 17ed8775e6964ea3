//! Piece types encoding.
//!
//! A [`Piece`] packs a [`PieceKind`] and a [`Colour`] into a single byte,
//! `kind + 6 * colour`. White pieces take values 0 to 5, black pieces 6 to 11,
//! and [`Piece::NONE`] (12) stands for "no piece". Tables indexed by piece
//! can therefore be dense arrays of 12 entries.

use thiserror::Error;

use super::{colour::Colour, score::Eval};
use crate::parsing::{parse_exact, PartialFromStr};

/// Total number of different piece kinds (6).
pub const NUM_PIECE_KINDS: usize = 6;
/// Total number of different pieces, kinds and colours combined (12).
pub const NUM_PIECES: usize = NUM_PIECE_KINDS * 2;

const PIECE_SYMBOLS: [char; NUM_PIECES + 1] =
    ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k', '.'];
const PIECE_SYMBOLS_UNICODE: [char; NUM_PIECES + 1] = [
    '♙', '♘', '♗', '♖', '♕', '♔', '♟', '♞', '♝', '♜', '♛', '♚', '·',
];
const PIECE_ASSET_NAMES: [&str; NUM_PIECES] = [
    "wP", "wN", "wB", "wR", "wQ", "wK", "bP", "bN", "bB", "bR", "bQ", "bK",
];
const SAN_SYMBOLS: [&str; NUM_PIECE_KINDS] = ["P", "N", "B", "R", "Q", "K"];

/// Errors encountered when parsing a piece or piece kind.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Error)]
pub enum PieceParseError {
    #[error("{0} is not a valid piece symbol")]
    InvalidPieceSymbol(char),
    #[error("Empty input")]
    EmptyInput,
    #[error("A piece can only be one character long")]
    InputTooLong,
    #[error("{0} is not a packed piece value")]
    InvalidPackedValue(u8),
}

/// The kind of a piece, one of Pawn, Knight, Bishop, Rook, Queen or King.
///
/// The absence of a piece kind is `Option::<PieceKind>::None`, which fits in
/// the same single byte.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}
impl PieceKind {
    /// All piece kinds.
    pub const ALL: [Self; NUM_PIECE_KINDS] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Pieces that a pawn can promote to.
    pub const PROMOTION_TARGETS: [Self; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// A piece kind from its index (0 for pawns up to 5 for kings).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < NUM_PIECE_KINDS {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Checks if this piece kind is a diagonal slider (bishops and queens).
    #[inline(always)]
    pub const fn is_diagonal_slider(self) -> bool {
        (self as u8 + 3) & 0b101 == 0b101
    }
    /// Checks if this piece kind is an orthogonal slider (rooks and queens).
    #[inline(always)]
    pub const fn is_orthogonal_slider(self) -> bool {
        (self as u8 + 3) & 0b110 == 0b110
    }

    /// Material value of this piece kind, in centipawns.
    #[inline]
    pub const fn value(self) -> Eval {
        super::score::PIECE_VALUES[self as usize]
    }

    /// Letter used for this piece kind in standard algebraic notation.
    pub const fn san_symbol(self) -> &'static str {
        SAN_SYMBOLS[self as usize]
    }

    /// Iterator over all piece kinds.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }
}
impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.san_symbol())
    }
}
impl PartialFromStr for PieceKind {
    type Err = PieceParseError;

    fn partial_from_str(s: &str) -> Result<(Self, &str), Self::Err> {
        let (piece, rest) = Piece::partial_from_str(s)?;
        Ok((piece.kind(), rest))
    }
}
impl std::str::FromStr for PieceKind {
    type Err = PieceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_exact(s, PieceParseError::InputTooLong)
    }
}

/// Complete set of information for identifying a piece (colour and kind),
/// packed as `kind + 6 * colour`.
///
/// # Parsing
/// Pieces can be mapped from their FEN letter ('p', 'n', 'b', 'r', 'q', 'k' for
/// black, uppercase for white) with [`Piece::from_fen_char`], which returns
/// [`Piece::NONE`] for any other character. They can also be parsed from their
/// letter or unicode symbol using Rust's [`FromStr`](std::str::FromStr) trait.
/// ```
/// # use chesscore::game::piece::*;
/// # use chesscore::game::colour::*;
/// assert_eq!(Piece::from_fen_char('Q'), Piece::new(PieceKind::Queen, Colour::White));
/// assert_eq!(Piece::from_fen_char('/'), Piece::NONE);
/// assert_eq!("♞".parse(), Ok(Piece::BLACK_KNIGHT));
/// ```
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Piece(u8);

impl Piece {
    pub const WHITE_PAWN: Self = Self::new(PieceKind::Pawn, Colour::White);
    pub const WHITE_KNIGHT: Self = Self::new(PieceKind::Knight, Colour::White);
    pub const WHITE_BISHOP: Self = Self::new(PieceKind::Bishop, Colour::White);
    pub const WHITE_ROOK: Self = Self::new(PieceKind::Rook, Colour::White);
    pub const WHITE_QUEEN: Self = Self::new(PieceKind::Queen, Colour::White);
    pub const WHITE_KING: Self = Self::new(PieceKind::King, Colour::White);
    pub const BLACK_PAWN: Self = Self::new(PieceKind::Pawn, Colour::Black);
    pub const BLACK_KNIGHT: Self = Self::new(PieceKind::Knight, Colour::Black);
    pub const BLACK_BISHOP: Self = Self::new(PieceKind::Bishop, Colour::Black);
    pub const BLACK_ROOK: Self = Self::new(PieceKind::Rook, Colour::Black);
    pub const BLACK_QUEEN: Self = Self::new(PieceKind::Queen, Colour::Black);
    pub const BLACK_KING: Self = Self::new(PieceKind::King, Colour::Black);

    /// Sentinel for "no piece".
    pub const NONE: Self = Self(NUM_PIECES as u8);

    /// White pieces, in piece kind order.
    pub const WHITE: [Self; NUM_PIECE_KINDS] = [
        Self::WHITE_PAWN,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_ROOK,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
    ];
    /// Black pieces, in piece kind order.
    pub const BLACK: [Self; NUM_PIECE_KINDS] = [
        Self::BLACK_PAWN,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_ROOK,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];
    /// All pieces, in packed value order.
    pub const ALL: [Self; NUM_PIECES] = [
        Self::WHITE_PAWN,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_ROOK,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
        Self::BLACK_PAWN,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_ROOK,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];

    /// Creates a new `kind` piece of the given `colour`.
    #[inline]
    pub const fn new(kind: PieceKind, colour: Colour) -> Self {
        Self(kind as u8 + NUM_PIECE_KINDS as u8 * colour as u8)
    }

    /// A piece from its packed value.
    ///
    /// Returns `None` for values of 12 and above, including the sentinel.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < NUM_PIECES {
            Some(Self(index))
        } else {
            None
        }
    }

    /// The packed value of this piece (12 for [`Piece::NONE`]).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Checks if this is the [`Piece::NONE`] sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 as usize >= NUM_PIECES
    }

    /// Returns the kind of this piece.
    ///
    /// Must not be called on [`Piece::NONE`]: debug builds panic, release
    /// builds return an unspecified kind.
    /// # Example
    /// ```
    /// # use chesscore::game::piece::*;
    /// assert_eq!(Piece::BLACK_ROOK.kind(), PieceKind::Rook);
    /// ```
    #[inline]
    pub const fn kind(self) -> PieceKind {
        debug_assert!(!self.is_none(), "kind of Piece::NONE");
        PieceKind::ALL[(self.0 as usize) % NUM_PIECE_KINDS]
    }

    /// Returns the colour of this piece.
    ///
    /// Must not be called on [`Piece::NONE`]: debug builds panic, release
    /// builds return an unspecified colour.
    #[inline]
    pub const fn colour(self) -> Colour {
        debug_assert!(!self.is_none(), "colour of Piece::NONE");
        if self.0 as usize >= NUM_PIECE_KINDS {
            Colour::Black
        } else {
            Colour::White
        }
    }

    /// Returns the kind of this piece, or `None` for [`Piece::NONE`].
    #[inline]
    pub const fn try_kind(self) -> Option<PieceKind> {
        if self.is_none() {
            None
        } else {
            Some(self.kind())
        }
    }

    /// Returns the colour of this piece, or `None` for [`Piece::NONE`].
    #[inline]
    pub const fn try_colour(self) -> Option<Colour> {
        if self.is_none() {
            None
        } else {
            Some(self.colour())
        }
    }

    /// The pieces of a given colour, in piece kind order.
    #[inline]
    pub const fn of_colour(colour: Colour) -> [Self; NUM_PIECE_KINDS] {
        match colour {
            Colour::White => Self::WHITE,
            Colour::Black => Self::BLACK,
        }
    }

    /// Maps a FEN piece placement character to a piece.
    ///
    /// Any character that does not denote a piece (digits, '/', ...) maps to
    /// [`Piece::NONE`], which callers are expected to branch on.
    /// # Example
    /// ```
    /// # use chesscore::game::piece::*;
    /// assert_eq!(Piece::from_fen_char('k'), Piece::BLACK_KING);
    /// assert!(Piece::from_fen_char('8').is_none());
    /// ```
    pub const fn from_fen_char(c: char) -> Self {
        match c {
            'P' => Self::WHITE_PAWN,
            'N' => Self::WHITE_KNIGHT,
            'B' => Self::WHITE_BISHOP,
            'R' => Self::WHITE_ROOK,
            'Q' => Self::WHITE_QUEEN,
            'K' => Self::WHITE_KING,
            'p' => Self::BLACK_PAWN,
            'n' => Self::BLACK_KNIGHT,
            'b' => Self::BLACK_BISHOP,
            'r' => Self::BLACK_ROOK,
            'q' => Self::BLACK_QUEEN,
            'k' => Self::BLACK_KING,
            _ => Self::NONE,
        }
    }

    /// Returns the piece's FEN symbol ('.' for [`Piece::NONE`]).
    /// # Example
    /// ```
    /// # use chesscore::game::piece::*;
    /// # use chesscore::game::colour::*;
    /// assert_eq!(Piece::new(PieceKind::Pawn, Colour::Black).symbol(), 'p');
    /// ```
    pub const fn symbol(self) -> char {
        PIECE_SYMBOLS[self.slot()]
    }

    /// Returns the piece's Unicode symbol ('·' for [`Piece::NONE`]).
    pub const fn unicode_symbol(self) -> char {
        PIECE_SYMBOLS_UNICODE[self.slot()]
    }

    /// Short name of the piece, as used for piece image assets ("wP", "bK").
    ///
    /// Returns `None` for [`Piece::NONE`].
    pub fn asset_name(self) -> Option<&'static str> {
        PIECE_ASSET_NAMES.get(self.0 as usize).copied()
    }

    /// Index into tables that carry one trailing entry for [`Piece::NONE`].
    #[inline]
    const fn slot(self) -> usize {
        if self.is_none() {
            NUM_PIECES
        } else {
            self.0 as usize
        }
    }
}
impl From<Piece> for usize {
    #[inline]
    fn from(value: Piece) -> Self {
        value.0 as usize
    }
}
impl From<Piece> for u8 {
    #[inline]
    fn from(value: Piece) -> Self {
        value.0
    }
}
/// Accepts the 12 packed pieces and [`Piece::NONE`].
impl TryFrom<u8> for Piece {
    type Error = PieceParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= Self::NONE.0 {
            Ok(Self(value))
        } else {
            Err(PieceParseError::InvalidPackedValue(value))
        }
    }
}
impl std::fmt::Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "Piece::NONE")
        } else {
            write!(f, "Piece({})", self.symbol())
        }
    }
}
impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl PartialFromStr for Piece {
    type Err = PieceParseError;

    fn partial_from_str(s: &str) -> Result<(Self, &str), Self::Err> {
        let symbol = s.chars().next().ok_or(PieceParseError::EmptyInput)?;
        let piece = match symbol {
            '♙' => Self::WHITE_PAWN,
            '♘' => Self::WHITE_KNIGHT,
            '♗' => Self::WHITE_BISHOP,
            '♖' => Self::WHITE_ROOK,
            '♕' => Self::WHITE_QUEEN,
            '♔' => Self::WHITE_KING,
            '♟' => Self::BLACK_PAWN,
            '♞' => Self::BLACK_KNIGHT,
            '♝' => Self::BLACK_BISHOP,
            '♜' => Self::BLACK_ROOK,
            '♛' => Self::BLACK_QUEEN,
            '♚' => Self::BLACK_KING,
            c => Self::from_fen_char(c),
        };
        if piece.is_none() {
            return Err(PieceParseError::InvalidPieceSymbol(symbol));
        }

        Ok((piece, &s[symbol.len_utf8()..]))
    }
}
impl std::str::FromStr for Piece {
    type Err = PieceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_exact(s, PieceParseError::InputTooLong)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn packing_round_trip() {
        for piece in Piece::ALL {
            assert_eq!(Piece::new(piece.kind(), piece.colour()), piece);
        }
        for colour in Colour::iter() {
            for kind in PieceKind::iter() {
                let piece = Piece::new(kind, colour);
                assert_eq!((piece.kind(), piece.colour()), (kind, colour));
            }
        }
    }

    #[test]
    fn packed_values_are_dense() {
        for (index, piece) in Piece::ALL.into_iter().enumerate() {
            assert_eq!(piece.index() as usize, index);
            assert_eq!(Piece::from_index(index as u8), Some(piece));
        }
        assert_eq!(Piece::NONE.index(), 12);
        assert_eq!(Piece::from_index(12), None);
    }

    #[test]
    fn raw_bytes_past_sentinel_are_rejected() {
        assert_eq!(Piece::try_from(5), Ok(Piece::WHITE_KING));
        assert_eq!(Piece::try_from(12), Ok(Piece::NONE));
        assert_eq!(
            Piece::try_from(13),
            Err(PieceParseError::InvalidPackedValue(13))
        );
        assert!(Piece::try_from(u8::MAX).is_err());
        assert_eq!(u8::from(Piece::BLACK_QUEEN), 10);
    }

    #[test]
    fn pieces_of_colour() {
        for colour in Colour::iter() {
            for (kind, piece) in PieceKind::iter().zip(Piece::of_colour(colour)) {
                assert_eq!(piece, Piece::new(kind, colour));
            }
        }
    }

    #[test]
    fn fen_chars() {
        assert_eq!(
            Piece::from_fen_char('Q'),
            Piece::new(PieceKind::Queen, Colour::White)
        );
        assert_eq!(
            Piece::from_fen_char('k'),
            Piece::new(PieceKind::King, Colour::Black)
        );
        for c in ['x', '/', '8', ' ', 'Z', '♔'] {
            assert_eq!(Piece::from_fen_char(c), Piece::NONE);
        }
        for piece in Piece::ALL {
            assert_eq!(Piece::from_fen_char(piece.symbol()), piece);
        }
    }

    #[test]
    fn sentinel_is_total_through_try() {
        assert_eq!(Piece::NONE.try_kind(), None);
        assert_eq!(Piece::NONE.try_colour(), None);
        assert_eq!(Piece::WHITE_KING.try_kind(), Some(PieceKind::King));
        assert_eq!(Piece::NONE.symbol(), '.');
        assert_eq!(Piece::NONE.asset_name(), None);
        assert_eq!(Piece::BLACK_QUEEN.asset_name(), Some("bQ"));
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn none_has_no_kind() {
        let _ = Piece::NONE.kind();
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn none_has_no_colour() {
        let _ = Piece::NONE.colour();
    }

    #[test]
    fn sliders() {
        let diagonal = PieceKind::iter()
            .filter(|kind| kind.is_diagonal_slider())
            .collect::<Vec<_>>();
        let orthogonal = PieceKind::iter()
            .filter(|kind| kind.is_orthogonal_slider())
            .collect::<Vec<_>>();
        assert_eq!(diagonal, vec![PieceKind::Bishop, PieceKind::Queen]);
        assert_eq!(orthogonal, vec![PieceKind::Rook, PieceKind::Queen]);
    }

    #[test]
    fn parse() {
        assert_eq!("p".parse(), Ok(Piece::BLACK_PAWN));
        assert_eq!("♕".parse(), Ok(Piece::WHITE_QUEEN));
        assert_eq!("n".parse(), Ok(PieceKind::Knight));
        assert_eq!("".parse::<Piece>(), Err(PieceParseError::EmptyInput));
        assert_eq!(
            "x".parse::<Piece>(),
            Err(PieceParseError::InvalidPieceSymbol('x'))
        );
        assert_eq!("Qq".parse::<Piece>(), Err(PieceParseError::InputTooLong));
    }

    #[test]
    fn symbols() {
        assert_eq!(Piece::WHITE_KNIGHT.to_string(), "N");
        assert_eq!(Piece::BLACK_ROOK.unicode_symbol(), '♜');
        assert_eq!(PieceKind::Queen.san_symbol(), "Q");
        assert_eq!(PieceKind::Pawn.to_string(), "P");
    }
}
