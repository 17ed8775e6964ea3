//! # Representation of sets of squares.
//! Bitboards are an efficient way to represent sets of squares, bit `i` standing
//! for the square of index `i`.
//!
//! Since squares are numbered from a8, moving a set of squares one rank up
//! (toward rank 8) is `>> 8`, one rank down is `<< 8`, one file left (toward
//! file A) is `>> 1` and one file right is `<< 1`. Vertical shifts simply drop
//! bits off the ends of the integer, but horizontal ones wrap around onto the
//! neighbouring rank: the non-edge masks defined here guard against that.

use std::iter::FusedIterator;

use super::square::{Delta, File, Rank, Square};

/// Bitboards are data structures used to efficiently represent a set of squares.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bitboard(pub(crate) u64);

impl Bitboard {
    /// The empty bitboard.
    pub const EMPTY: Self = Self(0);
    /// The full (universe) bitboard.
    pub const UNIVERSE: Self = Self(u64::MAX);

    /// Masks of each file, indexed by [`File`].
    pub const FILES: [Self; 8] = [
        Self(0x0101010101010101),
        Self(0x0202020202020202),
        Self(0x0404040404040404),
        Self(0x0808080808080808),
        Self(0x1010101010101010),
        Self(0x2020202020202020),
        Self(0x4040404040404040),
        Self(0x8080808080808080),
    ];

    /// Masks of each rank, indexed by [`Rank`] (rank 8 first).
    pub const RANKS: [Self; 8] = [
        Self(0x00000000000000FF),
        Self(0x000000000000FF00),
        Self(0x0000000000FF0000),
        Self(0x00000000FF000000),
        Self(0x000000FF00000000),
        Self(0x0000FF0000000000),
        Self(0x00FF000000000000),
        Self(0xFF00000000000000),
    ];

    /// Every square but those of file A.
    pub const NOT_FILE_A: Self = Self(!Self::FILES[File::A as usize].0);
    /// Every square but those of files A and B.
    pub const NOT_FILE_AB: Self =
        Self(!(Self::FILES[File::A as usize].0 | Self::FILES[File::B as usize].0));
    /// Every square but those of file H.
    pub const NOT_FILE_H: Self = Self(!Self::FILES[File::H as usize].0);
    /// Every square but those of files G and H.
    pub const NOT_FILE_GH: Self =
        Self(!(Self::FILES[File::G as usize].0 | Self::FILES[File::H as usize].0));

    /// Every square but those of rank 1.
    pub const NOT_RANK_1: Self = Self(!Self::RANKS[Rank::One as usize].0);
    /// Every square but those of ranks 1 and 2.
    pub const NOT_RANK_12: Self =
        Self(!(Self::RANKS[Rank::One as usize].0 | Self::RANKS[Rank::Two as usize].0));
    /// Every square but those of rank 8.
    pub const NOT_RANK_8: Self = Self(!Self::RANKS[Rank::Eight as usize].0);
    /// Every square but those of ranks 7 and 8.
    pub const NOT_RANK_78: Self =
        Self(!(Self::RANKS[Rank::Seven as usize].0 | Self::RANKS[Rank::Eight as usize].0));

    /// Wraps raw bits into a bitboard.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// The raw bits of this bitboard.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns an empty bitboard.
    #[inline]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Returns the universal set (contains all squares).
    #[inline]
    pub const fn universe() -> Self {
        Self::UNIVERSE
    }

    /// Checks if a bitboard is empty.
    /// # Example
    /// ```
    /// # use chesscore::game::bitboard::*;
    /// assert!(Bitboard::empty().is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks if a bitboard has one or more bits set.
    #[inline]
    pub const fn is_not_empty(&self) -> bool {
        self.0 != 0
    }

    /// Adds a square to the set.
    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= square.bitboard().0
    }

    /// Removes a square from the set.
    #[inline]
    pub fn remove(&mut self, square: Square) {
        self.0 &= !square.bitboard().0
    }

    /// Toggles a square (if it was present it is removed and vice-versa).
    #[inline]
    pub fn toggle(&mut self, square: Square) {
        self.0 ^= square.bitboard().0
    }

    /// Checks if a given square is set on the bitboard.
    /// # Example
    /// ```
    /// # use chesscore::game::bitboard::*;
    /// # use chesscore::game::square::*;
    /// let bb = Bitboard::from_iter([Square::E5, Square::D7]);
    /// assert!(bb.is_set(Square::E5));
    /// assert!(!bb.is_set(Square::E6));
    /// ```
    #[inline]
    pub const fn is_set(&self, square: Square) -> bool {
        self.intersects(square.bitboard())
    }

    /// Checks if a bitboard contains exactly one element.
    #[inline]
    pub const fn is_single_populated(&self) -> bool {
        self.0.is_power_of_two()
    }

    /// Checks if a bitboard has more than one element.
    #[inline]
    pub const fn has_more_than_one(&self) -> bool {
        (self.0 & self.0.wrapping_sub(1)) != 0
    }

    /// Returns the cardinality of the bitboard (i.e. how many squares are set).
    /// # Example
    /// ```
    /// # use chesscore::game::bitboard::*;
    /// assert_eq!(Bitboard::empty().len(), 0);
    /// assert_eq!(Bitboard::NOT_FILE_A.len(), 56);
    /// assert_eq!(Bitboard::NOT_RANK_78.len(), 48);
    /// ```
    #[inline]
    pub const fn len(&self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Returns the lowest square in the bitboard (closest to a8).
    ///
    /// If the bitboard is empty, returns `None`.
    #[inline]
    pub const fn lowest_square(&self) -> Option<Square> {
        Square::from_index(self.0.trailing_zeros() as u8)
    }

    /// Pops the lowest square in the bitboard.
    ///
    /// If the bitboard is empty, returns `None`.
    /// # Example
    /// ```
    /// # use chesscore::game::bitboard::*;
    /// # use chesscore::game::square::*;
    /// let mut bb = Bitboard::from_iter([Square::E5, Square::D7]);
    /// assert_eq!(bb.pop_lowest_square(), Some(Square::D7));
    /// assert_eq!(bb.pop_lowest_square(), Some(Square::E5));
    /// assert_eq!(bb.pop_lowest_square(), None);
    /// ```
    #[inline]
    pub fn pop_lowest_square(&mut self) -> Option<Square> {
        let square = self.lowest_square()?;
        self.0 &= self.0.wrapping_sub(1);
        Some(square)
    }

    /// Returns the highest square in the bitboard (closest to h1).
    ///
    /// If the bitboard is empty, returns `None`.
    #[inline]
    pub const fn highest_square(&self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Square::from_index(63 - self.0.leading_zeros() as u8)
        }
    }

    /// Pops the highest square in the bitboard.
    ///
    /// If the bitboard is empty, returns `None`.
    #[inline]
    pub fn pop_highest_square(&mut self) -> Option<Square> {
        let square = self.highest_square()?;
        *self ^= square.bitboard();
        Some(square)
    }

    /// Mirrors the bitboard across the horizontal midline. This can be thought
    /// of as "looking at it from the opponent's perspective".
    /// # Example
    /// ```
    /// # use chesscore::game::bitboard::*;
    /// # use chesscore::game::square::*;
    /// let bb = Bitboard::from_iter([Square::E5, Square::D7]);
    /// let flipped = bb.flip_ranks().collect::<Vec<_>>();
    /// assert_eq!(flipped, vec![Square::E4, Square::D2])
    /// ```
    #[inline]
    pub const fn flip_ranks(&self) -> Self {
        Self(self.0.swap_bytes())
    }

    /// Mirrors the bitboard left-right.
    #[inline]
    pub const fn flip_files(&self) -> Self {
        Self(self.0.reverse_bits().swap_bytes())
    }

    /// Returns `true` if two bitboards intersect i.e. have at least one common
    /// set square.
    #[inline]
    pub const fn intersects(&self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns the intersection of two bitboards.
    #[inline]
    pub const fn intersection(&self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the union of two bitboards.
    #[inline]
    pub const fn union(&self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Shifts all bits of the bitboard by the index offset of a delta,
    /// without any edge guard.
    ///
    /// Horizontal components wrap around the board edges: use
    /// [`Bitboard::shift_guarded`] unless the input is known to be clear of
    /// the edges it would cross.
    #[inline]
    pub const fn shift(&self, delta: Delta) -> Self {
        Self(if 0 < delta as i8 {
            self.0 << (delta as u8)
        } else {
            self.0 >> (-(delta as i8) as u8)
        })
    }

    /// Shifts all squares of the bitboard in the given direction, dropping the
    /// squares that would leave the board.
    /// # Example
    /// ```
    /// # use chesscore::game::bitboard::*;
    /// # use chesscore::game::square::*;
    /// let bb = Bitboard::from_iter([Square::H5, Square::D7]);
    /// let shifted_east = bb.shift_guarded(Delta::East).collect::<Vec<_>>();
    /// assert_eq!(shifted_east, vec![Square::E7])
    /// ```
    #[inline]
    pub const fn shift_guarded(&self, delta: Delta) -> Self {
        self.intersection(delta.source_guard()).shift(delta)
    }

    /// Inverts the bitboard (non-members of the set become members and vice-versa).
    #[inline]
    pub const fn invert(&self) -> Self {
        Self(!self.0)
    }
}

impl Delta {
    /// Squares a piece can be translated from by this delta without leaving
    /// the board.
    ///
    /// AND-ing with this before shifting removes wraparound.
    pub const fn source_guard(self) -> Bitboard {
        let files = match self.file_step() {
            2 => Bitboard::NOT_FILE_GH,
            1 => Bitboard::NOT_FILE_H,
            -1 => Bitboard::NOT_FILE_A,
            -2 => Bitboard::NOT_FILE_AB,
            _ => Bitboard::UNIVERSE,
        };
        let ranks = match self.rank_step() {
            2 => Bitboard::NOT_RANK_12,
            1 => Bitboard::NOT_RANK_1,
            -1 => Bitboard::NOT_RANK_8,
            -2 => Bitboard::NOT_RANK_78,
            _ => Bitboard::UNIVERSE,
        };
        files.intersection(ranks)
    }

    /// Squares a piece can be translated to by this delta from somewhere on
    /// the board.
    ///
    /// AND-ing with this after shifting removes wraparound.
    pub const fn target_guard(self) -> Bitboard {
        self.inverse().source_guard()
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}
impl std::ops::BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0
    }
}
impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}
impl std::ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}
impl std::ops::BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}
impl std::ops::BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0
    }
}
impl std::ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

// [Add] implementations (guarded shifts).
impl std::ops::Add<Delta> for Bitboard {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Delta) -> Self::Output {
        self.shift_guarded(rhs)
    }
}
impl std::ops::AddAssign<Delta> for Bitboard {
    #[inline]
    fn add_assign(&mut self, rhs: Delta) {
        *self = self.shift_guarded(rhs)
    }
}

// [Sub] implementations (reverse guarded shifts).
impl std::ops::Sub<Delta> for Bitboard {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Delta) -> Self::Output {
        self.shift_guarded(rhs.inverse())
    }
}
impl std::ops::SubAssign<Delta> for Bitboard {
    #[inline]
    fn sub_assign(&mut self, rhs: Delta) {
        *self = self.shift_guarded(rhs.inverse())
    }
}

/// Iterates over set squares in a [Bitboard], from a8 to h1.
impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lowest_square()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = Bitboard::len(self) as usize;
        (size, Some(size))
    }
}
/// Iterates over set squares from h1 back to a8.
impl DoubleEndedIterator for Bitboard {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.pop_highest_square()
    }
}
impl FusedIterator for Bitboard {}
impl ExactSizeIterator for Bitboard {}
impl FromIterator<Square> for Bitboard {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut bb = Self::default();
        bb.extend(iter);
        bb
    }
}
impl Extend<Square> for Bitboard {
    fn extend<T: IntoIterator<Item = Square>>(&mut self, iter: T) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

impl From<Bitboard> for u64 {
    fn from(value: Bitboard) -> Self {
        value.0
    }
}
impl From<u64> for Bitboard {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bitboard({:#018x})", self.0)
    }
}
impl std::fmt::Display for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in Rank::iter() {
            for square in Square::rank_iter(rank) {
                write!(f, "{} ", if self.is_set(square) { 'x' } else { '.' })?
            }
            writeln!(f, " {rank}")?
        }
        for file in File::iter() {
            write!(f, "{file} ")?
        }
        Ok(())
    }
}
impl std::fmt::UpperHex for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::UpperHex::fmt(&self.0, f)
    }
}
impl std::fmt::LowerHex for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}
impl std::fmt::Binary for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Binary::fmt(&self.0, f)
    }
}
