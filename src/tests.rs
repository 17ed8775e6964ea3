use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::game::{
    bitboard::Bitboard,
    colour::Colour,
    piece::{Piece, PieceKind},
    square::{Delta, File, Rank, Square},
    status::GameStatus,
};

#[test]
fn npo_for_enums() {
    use std::mem::size_of;
    assert_eq!(size_of::<PieceKind>(), size_of::<Option<PieceKind>>());
    assert_eq!(size_of::<Colour>(), size_of::<Option<Colour>>());
    assert_eq!(size_of::<File>(), size_of::<Option<File>>());
    assert_eq!(size_of::<Rank>(), size_of::<Option<Rank>>());
    assert_eq!(size_of::<Square>(), 1);
    assert_eq!(size_of::<Piece>(), 1);
    assert_eq!(size_of::<Bitboard>(), size_of::<u64>());
}

#[test]
fn shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Square>();
    assert_send_sync::<Piece>();
    assert_send_sync::<Bitboard>();
    assert_send_sync::<Delta>();
    assert_send_sync::<GameStatus>();
}

#[test]
fn random_boards_shift_like_their_squares() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for _ in 0..1000 {
        let bb = Bitboard::new(rng.gen());
        for delta in Delta::iter() {
            let expected = bb
                .filter_map(|square| square.translate(delta))
                .collect::<Bitboard>();
            assert_eq!(bb.shift_guarded(delta), expected, "{delta:?} on {bb:?}");
            assert_eq!(bb.shift(delta) & delta.target_guard(), expected);
        }
    }
}

#[test]
fn random_boards_flip_like_their_squares() {
    let mut rng = SmallRng::seed_from_u64(0xf11b);
    for _ in 0..1000 {
        let bb = Bitboard::new(rng.gen());
        let by_rank = bb.map(Square::flip_rank).collect::<Bitboard>();
        let by_file = bb.map(Square::flip_file).collect::<Bitboard>();
        assert_eq!(bb.flip_ranks(), by_rank);
        assert_eq!(bb.flip_files(), by_file);
        assert_eq!(bb.flip_ranks().flip_ranks(), bb);
    }
}

#[test]
fn pawn_double_push() {
    let pawns = Rank::Two.bitboard() | Square::E4.bitboard();
    let (push, _, _) = Delta::pawn_deltas(Colour::White);
    let single = (pawns + push) & Rank::Three.bitboard();
    let double = single + push;
    assert_eq!(double, Rank::Four.bitboard());

    let black_pawns = Rank::Seven.bitboard().flip_ranks();
    assert_eq!(black_pawns, Rank::Two.bitboard());
}

#[test]
fn placement_row_from_fen_chars() {
    // Piece placement of the starting position's back rank for black.
    let mut squares = Square::rank_iter(Rank::Eight);
    let mut placed = Vec::new();
    for c in "rnbqkbnr".chars() {
        let piece = Piece::from_fen_char(c);
        if piece.is_none() {
            continue;
        }
        if let Some(square) = squares.next() {
            placed.push((square, piece));
        }
    }
    assert_eq!(placed.len(), 8);
    assert_eq!(placed[4], (Square::E8, Piece::BLACK_KING));
    assert!(placed.iter().all(|(_, piece)| piece.colour() == Colour::Black));
}
