//! Enumerations of chessboard accessing constants, such as files, ranks and squares.
//!
//! Squares are numbered from the top-left corner of the board as seen by White:
//! a8 is 0, h8 is 7, a1 is 56 and h1 is 63. The file of a square lives in the
//! low three bits of its index and the rank in the high three bits.

use thiserror::Error;

use super::{bitboard::Bitboard, colour::Colour};
use crate::parsing::{parse_exact, PartialFromStr};

/// Errors encountered when parsing a file, rank or square from text.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
pub enum SquareParseError {
    #[error("{0} is not a valid file")]
    InvalidFile(char),
    #[error("{0} is not a valid rank")]
    InvalidRank(char),
    #[error("Empty input")]
    EmptyInput,
    #[error("Unexpected characters after the parsed value")]
    InputTooLong,
    #[error("{0} is not a square index")]
    InvalidIndex(u8),
}

/// Files of a chessboard (A-H), left to right from White's point of view.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}
impl File {
    /// All files, ordered from A to H.
    pub const ALL: [Self; 8] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];

    /// Returns the set of all squares within a given file as a bitboard.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::FILES[self as usize]
    }

    /// A file from a given index.
    ///
    /// Fails if the index is more than 7.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Index of the file, 0 for A up to 7 for H.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The file mirrored left-right (A <-> H, B <-> G, ...).
    #[inline]
    pub const fn flip(self) -> Self {
        Self::ALL[7 - self as usize]
    }

    /// Iterator over all files, from A to H.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        Self::ALL.into_iter()
    }
}
impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + *self as u8) as char)
    }
}
impl PartialFromStr for File {
    type Err = SquareParseError;

    fn partial_from_str(s: &str) -> Result<(Self, &str), Self::Err> {
        let symbol = s.chars().next().ok_or(SquareParseError::EmptyInput)?;
        let file = match symbol.to_ascii_lowercase() {
            c @ 'a'..='h' => Self::ALL[(c as u8 - b'a') as usize],
            _ => Err(SquareParseError::InvalidFile(symbol))?,
        };

        Ok((file, &s[symbol.len_utf8()..]))
    }
}
impl std::str::FromStr for File {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_exact(s, SquareParseError::InputTooLong)
    }
}

/// Ranks of a chessboard, top to bottom from White's point of view.
///
/// The discriminant is the rank index used by square numbering, so rank 8 is
/// 0 and rank 1 is 7.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    Eight,
    Seven,
    Six,
    Five,
    Four,
    Three,
    Two,
    One,
}
impl Rank {
    /// All ranks, ordered by index (from rank 8 down to rank 1).
    pub const ALL: [Self; 8] = [
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
        Self::One,
    ];

    /// Returns the set of all squares within a given rank as a bitboard.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::RANKS[self as usize]
    }

    /// A rank from a given index (0 is rank 8, 7 is rank 1).
    ///
    /// Fails if the index is more than 7.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Index of the rank, 0 for rank 8 up to 7 for rank 1.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The rank number as written in algebraic notation (1 to 8).
    #[inline]
    pub const fn number(self) -> u8 {
        8 - self as u8
    }

    /// The rank mirrored across the board's horizontal midline (8 <-> 1, ...).
    #[inline]
    pub const fn flip(self) -> Self {
        Self::ALL[7 - self as usize]
    }

    /// The rank a player's pawns start on.
    #[inline]
    pub const fn pawn_rank(colour: Colour) -> Self {
        match colour {
            Colour::White => Self::Two,
            Colour::Black => Self::Seven,
        }
    }

    /// The rank a player's pawns promote on.
    #[inline]
    pub const fn promotion_rank(colour: Colour) -> Self {
        match colour {
            Colour::White => Self::Eight,
            Colour::Black => Self::One,
        }
    }

    /// Iterator over all ranks, from rank 8 down to rank 1.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        Self::ALL.into_iter()
    }
}
impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}
impl PartialFromStr for Rank {
    type Err = SquareParseError;

    fn partial_from_str(s: &str) -> Result<(Self, &str), Self::Err> {
        let symbol = s.chars().next().ok_or(SquareParseError::EmptyInput)?;
        let rank = match symbol {
            c @ '1'..='8' => Self::ALL[(b'8' - c as u8) as usize],
            _ => Err(SquareParseError::InvalidRank(symbol))?,
        };

        Ok((rank, &s[symbol.len_utf8()..]))
    }
}
impl std::str::FromStr for Rank {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_exact(s, SquareParseError::InputTooLong)
    }
}

/// A square of the board, or the [`Square::NONE`] sentinel.
///
/// The index layout is `rank_index * 8 + file_index`, starting from a8.
/// # Example
/// ```
/// # use chesscore::game::square::*;
/// let e4 = Square::new(File::E, Rank::Four);
/// assert_eq!(e4, Square::E4);
/// assert_eq!(e4.index(), 36);
/// assert_eq!((e4.file(), e4.rank()), (File::E, Rank::Four));
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board (64).
    pub const NUM_SQUARES: usize = 64;

    /// Bits of a square index holding its rank. XOR-ing with this mirrors a
    /// square vertically while keeping its file.
    pub const RANK_BITS: u8 = 0b111_000;
    /// Bits of a square index holding its file. XOR-ing with this mirrors a
    /// square horizontally while keeping its rank.
    pub const FILE_BITS: u8 = 0b000_111;

    /// Sentinel for "no square". Its index (64) is just past the last square.
    pub const NONE: Self = Self(64);

    pub const A8: Self = Self(0);
    pub const B8: Self = Self(1);
    pub const C8: Self = Self(2);
    pub const D8: Self = Self(3);
    pub const E8: Self = Self(4);
    pub const F8: Self = Self(5);
    pub const G8: Self = Self(6);
    pub const H8: Self = Self(7);
    pub const A7: Self = Self(8);
    pub const B7: Self = Self(9);
    pub const C7: Self = Self(10);
    pub const D7: Self = Self(11);
    pub const E7: Self = Self(12);
    pub const F7: Self = Self(13);
    pub const G7: Self = Self(14);
    pub const H7: Self = Self(15);
    pub const A6: Self = Self(16);
    pub const B6: Self = Self(17);
    pub const C6: Self = Self(18);
    pub const D6: Self = Self(19);
    pub const E6: Self = Self(20);
    pub const F6: Self = Self(21);
    pub const G6: Self = Self(22);
    pub const H6: Self = Self(23);
    pub const A5: Self = Self(24);
    pub const B5: Self = Self(25);
    pub const C5: Self = Self(26);
    pub const D5: Self = Self(27);
    pub const E5: Self = Self(28);
    pub const F5: Self = Self(29);
    pub const G5: Self = Self(30);
    pub const H5: Self = Self(31);
    pub const A4: Self = Self(32);
    pub const B4: Self = Self(33);
    pub const C4: Self = Self(34);
    pub const D4: Self = Self(35);
    pub const E4: Self = Self(36);
    pub const F4: Self = Self(37);
    pub const G4: Self = Self(38);
    pub const H4: Self = Self(39);
    pub const A3: Self = Self(40);
    pub const B3: Self = Self(41);
    pub const C3: Self = Self(42);
    pub const D3: Self = Self(43);
    pub const E3: Self = Self(44);
    pub const F3: Self = Self(45);
    pub const G3: Self = Self(46);
    pub const H3: Self = Self(47);
    pub const A2: Self = Self(48);
    pub const B2: Self = Self(49);
    pub const C2: Self = Self(50);
    pub const D2: Self = Self(51);
    pub const E2: Self = Self(52);
    pub const F2: Self = Self(53);
    pub const G2: Self = Self(54);
    pub const H2: Self = Self(55);
    pub const A1: Self = Self(56);
    pub const B1: Self = Self(57);
    pub const C1: Self = Self(58);
    pub const D1: Self = Self(59);
    pub const E1: Self = Self(60);
    pub const F1: Self = Self(61);
    pub const G1: Self = Self(62);
    pub const H1: Self = Self(63);

    /// Instantiates a new square based on file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self((rank as u8) << 3 | file as u8)
    }

    /// Instantiates a square from a file index `x` and rank index `y`, both
    /// counted from the top-left corner.
    ///
    /// Returns `None` if either coordinate is more than 7.
    /// # Example
    /// ```
    /// # use chesscore::game::square::*;
    /// assert_eq!(Square::from_coords(0, 0), Some(Square::A8));
    /// assert_eq!(Square::from_coords(7, 7), Some(Square::H1));
    /// assert_eq!(Square::from_coords(8, 0), None);
    /// ```
    #[inline]
    pub const fn from_coords(x: u8, y: u8) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Self(y << 3 | x))
        } else {
            None
        }
    }

    /// Instantiates a new square from its index.
    ///
    /// Returns `None` if the index is more than 63.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Index of the square (64 for [`Square::NONE`]).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Checks that this is an actual square of the board, not [`Square::NONE`].
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 < 64
    }

    /// Checks if this is the [`Square::NONE`] sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        !self.is_valid()
    }

    /// Returns the file of the square.
    ///
    /// Must not be called on [`Square::NONE`]: debug builds panic, release
    /// builds return an unspecified file.
    #[inline]
    pub const fn file(self) -> File {
        debug_assert!(self.is_valid(), "file of Square::NONE");
        File::ALL[(self.0 & Self::FILE_BITS) as usize]
    }

    /// Returns the rank of the square.
    ///
    /// Must not be called on [`Square::NONE`]: debug builds panic, release
    /// builds return an unspecified rank.
    #[inline]
    pub const fn rank(self) -> Rank {
        debug_assert!(self.is_valid(), "rank of Square::NONE");
        Rank::ALL[((self.0 & Self::RANK_BITS) >> 3) as usize]
    }

    /// Mirrors the square across the horizontal midline, keeping its file.
    ///
    /// Must not be called on [`Square::NONE`].
    /// # Example
    /// ```
    /// # use chesscore::game::square::*;
    /// assert_eq!(Square::A8.flip_rank(), Square::A1);
    /// assert_eq!(Square::E2.flip_rank(), Square::E7);
    /// ```
    #[inline]
    pub const fn flip_rank(self) -> Self {
        debug_assert!(self.is_valid(), "flip_rank of Square::NONE");
        Self(self.0 ^ Self::RANK_BITS)
    }

    /// Mirrors the square left-right, keeping its rank.
    ///
    /// Must not be called on [`Square::NONE`].
    /// # Example
    /// ```
    /// # use chesscore::game::square::*;
    /// assert_eq!(Square::A8.flip_file(), Square::H8);
    /// assert_eq!(Square::C3.flip_file(), Square::F3);
    /// ```
    #[inline]
    pub const fn flip_file(self) -> Self {
        debug_assert!(self.is_valid(), "flip_file of Square::NONE");
        Self(self.0 ^ Self::FILE_BITS)
    }

    /// Translates this square by a given delta.
    ///
    /// Returns `None` if the translation would go out of the board.
    /// # Example
    /// ```
    /// # use chesscore::game::square::*;
    /// assert_eq!(Square::E4.translate(Delta::North), Some(Square::E5));
    /// assert_eq!(Square::G1.translate(Delta::KnightEastNorth), None);
    /// ```
    #[inline]
    pub const fn translate(self, delta: Delta) -> Option<Self> {
        debug_assert!(self.is_valid(), "translate of Square::NONE");
        let file = (self.0 & Self::FILE_BITS) as i8 + delta.file_step();
        let rank = ((self.0 & Self::RANK_BITS) >> 3) as i8 + delta.rank_step();
        if 0 <= file && file < 8 && 0 <= rank && rank < 8 {
            Some(Self((rank as u8) << 3 | file as u8))
        } else {
            None
        }
    }

    /// Returns a bitboard containing only this square.
    ///
    /// [`Square::NONE`] gives the empty bitboard.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        match 1u64.checked_shl(self.0 as u32) {
            Some(bits) => Bitboard(bits),
            None => Bitboard::EMPTY,
        }
    }

    /// An iterator over all squares, ordered from a8 to h1.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64).map(Self)
    }

    /// An iterator over the squares of a rank, ordered from file A to file H.
    pub fn rank_iter(rank: Rank) -> impl DoubleEndedIterator<Item = Self> {
        File::iter().map(move |file| Self::new(file, rank))
    }
}
impl From<Square> for usize {
    #[inline]
    fn from(value: Square) -> Self {
        value.0 as usize
    }
}
impl From<Square> for u8 {
    #[inline]
    fn from(value: Square) -> Self {
        value.0
    }
}
/// Accepts the 64 board squares and [`Square::NONE`].
impl TryFrom<u8> for Square {
    type Error = SquareParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= Self::NONE.0 {
            Ok(Self(value))
        } else {
            Err(SquareParseError::InvalidIndex(value))
        }
    }
}
impl std::fmt::Debug for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.to_string().to_ascii_uppercase())
        } else {
            write!(f, "NONE")
        }
    }
}
impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "{}{}", self.file(), self.rank())
        } else {
            write!(f, "-")
        }
    }
}
impl PartialFromStr for Square {
    type Err = SquareParseError;

    fn partial_from_str(s: &str) -> Result<(Self, &str), Self::Err> {
        let (file, rest) = File::partial_from_str(s)?;
        let (rank, rest) = Rank::partial_from_str(rest)?;
        Ok((Self::new(file, rank), rest))
    }
}
impl std::str::FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_exact(s, SquareParseError::InputTooLong)
    }
}

/// Deltas represent directions in which pieces can move.
///
/// The discriminant is the change in square index. Moving north (toward rank
/// 8) lowers the index, moving east (toward file H) raises it.
#[repr(i8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Delta {
    North = -8,
    South = 8,
    East = 1,
    West = -1,

    NorthEast = -7,
    NorthWest = -9,
    SouthEast = 9,
    SouthWest = 7,

    KnightNorthEast = -15,
    KnightNorthWest = -17,
    KnightSouthEast = 17,
    KnightSouthWest = 15,
    KnightEastNorth = -6,
    KnightWestNorth = -10,
    KnightEastSouth = 10,
    KnightWestSouth = 6,
}
impl Delta {
    pub const KNIGHT_DELTAS: [Self; 8] = [
        Self::KnightNorthEast,
        Self::KnightNorthWest,
        Self::KnightSouthEast,
        Self::KnightSouthWest,
        Self::KnightEastNorth,
        Self::KnightWestNorth,
        Self::KnightEastSouth,
        Self::KnightWestSouth,
    ];
    pub const QUEEN_DELTAS: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Iterator over all one-step and knight deltas.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::QUEEN_DELTAS
            .into_iter()
            .chain(Self::KNIGHT_DELTAS)
    }

    /// Change in file index, positive toward file H.
    #[inline]
    pub const fn file_step(self) -> i8 {
        match self {
            Self::North | Self::South => 0,
            Self::East | Self::NorthEast | Self::SouthEast => 1,
            Self::West | Self::NorthWest | Self::SouthWest => -1,
            Self::KnightNorthEast | Self::KnightSouthEast => 1,
            Self::KnightNorthWest | Self::KnightSouthWest => -1,
            Self::KnightEastNorth | Self::KnightEastSouth => 2,
            Self::KnightWestNorth | Self::KnightWestSouth => -2,
        }
    }

    /// Change in rank index, positive toward rank 1.
    #[inline]
    pub const fn rank_step(self) -> i8 {
        match self {
            Self::East | Self::West => 0,
            Self::North | Self::NorthEast | Self::NorthWest => -1,
            Self::South | Self::SouthEast | Self::SouthWest => 1,
            Self::KnightNorthEast | Self::KnightNorthWest => -2,
            Self::KnightSouthEast | Self::KnightSouthWest => 2,
            Self::KnightEastNorth | Self::KnightWestNorth => -1,
            Self::KnightEastSouth | Self::KnightWestSouth => 1,
        }
    }

    /// The delta going the opposite way.
    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::NorthEast => Self::SouthWest,
            Self::NorthWest => Self::SouthEast,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
            Self::KnightNorthEast => Self::KnightSouthWest,
            Self::KnightNorthWest => Self::KnightSouthEast,
            Self::KnightSouthEast => Self::KnightNorthWest,
            Self::KnightSouthWest => Self::KnightNorthEast,
            Self::KnightEastNorth => Self::KnightWestSouth,
            Self::KnightWestNorth => Self::KnightEastSouth,
            Self::KnightEastSouth => Self::KnightWestNorth,
            Self::KnightWestSouth => Self::KnightEastNorth,
        }
    }

    /// Pawn push and capture deltas for a colour, as (push, east capture,
    /// west capture).
    pub const fn pawn_deltas(colour: Colour) -> (Self, Self, Self) {
        match colour {
            Colour::White => (Self::North, Self::NorthEast, Self::NorthWest),
            Colour::Black => (Self::South, Self::SouthEast, Self::SouthWest),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coordinates_round_trip() {
        for index in 0..64 {
            let square = Square::from_index(index).unwrap();
            let (file, rank) = (square.file(), square.rank());
            assert_eq!(Square::new(file, rank), square);
            assert_eq!(
                Square::from_coords(file.index(), rank.index()),
                Some(square)
            );
        }
        assert_eq!(Square::from_index(64), None);
        assert_eq!(Square::from_coords(3, 8), None);
    }

    #[test]
    fn numbering_starts_top_left() {
        assert_eq!(Square::new(File::A, Rank::Eight).index(), 0);
        assert_eq!(Square::new(File::H, Rank::Eight).index(), 7);
        assert_eq!(Square::new(File::A, Rank::One).index(), 56);
        assert_eq!(Square::new(File::H, Rank::One).index(), 63);
        assert_eq!(Square::NONE.index(), 64);
    }

    #[test]
    fn mirrors_are_involutions() {
        for square in Square::iter() {
            assert_eq!(square.flip_rank().flip_rank(), square);
            assert_eq!(square.flip_file().flip_file(), square);
            assert_eq!(square.flip_rank().file(), square.file());
            assert_eq!(square.flip_rank().rank(), square.rank().flip());
            assert_eq!(square.flip_file().rank(), square.rank());
            assert_eq!(square.flip_file().file(), square.file().flip());
        }
    }

    #[test]
    fn corners() {
        assert_eq!(Square::A8.flip_rank(), Square::A1);
        assert_eq!(Square::A8.flip_file(), Square::H8);
        assert_eq!(Square::H1.flip_rank(), Square::H8);
        assert_eq!(Square::H1.flip_file(), Square::A1);
    }

    #[test]
    fn mirror_bits_match_corners() {
        assert_eq!(Square::RANK_BITS, Square::A1.index());
        assert_eq!(Square::FILE_BITS, Square::H8.index());
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn none_has_no_file() {
        let _ = Square::NONE.file();
    }

    #[test]
    fn none_is_empty_bitboard() {
        assert!(Square::NONE.bitboard().is_empty());
        assert!(Square::NONE.is_none());
        assert_eq!(Square::NONE.to_string(), "-");
    }

    #[test]
    fn raw_bytes_past_sentinel_are_rejected() {
        assert_eq!(Square::try_from(36), Ok(Square::E4));
        assert_eq!(Square::try_from(64), Ok(Square::NONE));
        assert_eq!(
            Square::try_from(200),
            Err(SquareParseError::InvalidIndex(200))
        );
        assert_eq!(u8::from(Square::H1), 63);
    }

    #[test]
    fn delta_steps_match_index_offsets() {
        for delta in Delta::iter() {
            assert_eq!(delta.rank_step() * 8 + delta.file_step(), delta as i8);
            assert_eq!(delta.inverse() as i8, -(delta as i8));
        }
    }

    #[test]
    fn translate_edges() {
        assert_eq!(Square::A8.translate(Delta::North), None);
        assert_eq!(Square::A8.translate(Delta::West), None);
        assert_eq!(Square::H4.translate(Delta::East), None);
        assert_eq!(Square::H4.translate(Delta::West), Some(Square::G4));
        assert_eq!(Square::B1.translate(Delta::KnightWestNorth), None);
        assert_eq!(Square::B1.translate(Delta::KnightNorthWest), Some(Square::A3));
        assert_eq!(Square::G1.translate(Delta::KnightNorthEast), Some(Square::H3));
        assert_eq!(Square::E4.translate(Delta::SouthEast), Some(Square::F3));
    }

    #[test]
    fn knight_reaches_eight_squares_from_center() {
        let targets = Delta::KNIGHT_DELTAS
            .iter()
            .filter_map(|&delta| Square::D4.translate(delta))
            .count();
        assert_eq!(targets, 8);
        let targets = Delta::KNIGHT_DELTAS
            .iter()
            .filter_map(|&delta| Square::A1.translate(delta))
            .count();
        assert_eq!(targets, 2);
    }

    #[test]
    fn parse_and_display() {
        for square in Square::iter() {
            assert_eq!(square.to_string().parse(), Ok(square));
        }
        assert_eq!("E4".parse(), Ok(Square::E4));
        assert_eq!("".parse::<Square>(), Err(SquareParseError::EmptyInput));
        assert_eq!("i4".parse::<Square>(), Err(SquareParseError::InvalidFile('i')));
        assert_eq!("a9".parse::<Square>(), Err(SquareParseError::InvalidRank('9')));
        assert_eq!("a1b".parse::<Square>(), Err(SquareParseError::InputTooLong));
        assert_eq!("c".parse::<File>(), Ok(File::C));
        assert_eq!("3".parse::<Rank>(), Ok(Rank::Three));
    }

    #[test]
    fn pawn_ranks() {
        assert_eq!(Rank::pawn_rank(Colour::White), Rank::Two);
        assert_eq!(Rank::promotion_rank(Colour::Black), Rank::One);
        assert_eq!(Rank::pawn_rank(Colour::Black).flip(), Rank::Two);
    }
}
