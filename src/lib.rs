//! # Chesscore
//! Bitboard board representation for chess engines.
//!
//! This crate defines how squares and pieces are encoded as bits, and the
//! geometry that move generation, search and evaluation build upon: square
//! numbering, file/rank decomposition, mirroring and wraparound-safe shift
//! masks.
//!
//! Squares are numbered from a8 (0) to h1 (63), left to right then top to
//! bottom from White's point of view.

pub mod game;
pub mod parsing;

#[cfg(test)]
mod tests;
