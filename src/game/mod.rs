//! # Board representation
//! This module contains the primitives every other part of an engine builds on:
//! squares, bitboards, pieces, colours and scoring constants.

pub mod audit;
pub mod bitboard;
pub mod colour;
pub mod piece;
pub mod score;
pub mod square;
pub mod status;
