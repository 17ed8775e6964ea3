use chesscore::game::{
    audit::{audit_shift_guards, GuardError},
    bitboard::Bitboard,
    piece::Piece,
    square::{Delta, File, Rank, Square, SquareParseError},
};
use clap::{Parser, Subcommand};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Checks every shift guard against coordinate arithmetic (DEFAULT)
    Audit,
    /// Prints file, rank and non-edge masks as boards
    Masks {
        /// Prints raw hexadecimal values instead of boards
        #[arg(long)]
        hex: bool,
    },
    /// Shows how a square is encoded
    Square {
        /// Square name (e.g. "e4") or index (0 is a8, 63 is h1)
        square: String,
    },
    /// Shows how a FEN character maps to a piece
    Piece {
        /// A single FEN character
        symbol: char,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("square index {0} is outside the board")]
    IndexOutOfRange(u8),
    #[error(transparent)]
    InvalidSquare(#[from] SquareParseError),
    #[error(transparent)]
    Guard(#[from] GuardError),
}

pub fn main() -> Result<(), CliError> {
    let args = Arguments::parse();
    env_logger::init();

    match args.command.unwrap_or(Command::Audit) {
        Command::Audit => {
            let report = audit_shift_guards()?;
            println!(
                "{} shifts checked, {} on board, {} wraparounds removed by guards",
                report.checked, report.on_board, report.wraparounds
            );
        }
        Command::Masks { hex } => {
            let named = File::iter()
                .map(|file| (format!("file {file}"), file.bitboard()))
                .chain(Rank::iter().map(|rank| (format!("rank {rank}"), rank.bitboard())))
                .chain(
                    [
                        ("not file A", Bitboard::NOT_FILE_A),
                        ("not files A-B", Bitboard::NOT_FILE_AB),
                        ("not file H", Bitboard::NOT_FILE_H),
                        ("not files G-H", Bitboard::NOT_FILE_GH),
                        ("not rank 1", Bitboard::NOT_RANK_1),
                        ("not ranks 1-2", Bitboard::NOT_RANK_12),
                        ("not rank 8", Bitboard::NOT_RANK_8),
                        ("not ranks 7-8", Bitboard::NOT_RANK_78),
                    ]
                    .map(|(name, mask)| (name.to_string(), mask)),
                );
            for (name, mask) in named {
                if hex {
                    println!("{name:14} {mask:#018x} ({} squares)", mask.len());
                } else {
                    println!("{name} ({} squares)\n{mask}\n", mask.len());
                }
            }
        }
        Command::Square { square } => {
            let square = match square.parse::<u8>() {
                Ok(index) => Square::from_index(index).ok_or(CliError::IndexOutOfRange(index))?,
                Err(_) => square.parse::<Square>()?,
            };
            println!("square      {square}");
            println!("index       {}", square.index());
            println!("file        {} ({})", square.file(), square.file().index());
            println!("rank        {} ({})", square.rank(), square.rank().index());
            println!("flip rank   {}", square.flip_rank());
            println!("flip file   {}", square.flip_file());
            let moves = Delta::iter()
                .filter_map(|delta| square.translate(delta).map(|to| format!("{delta:?}->{to}")))
                .collect::<Vec<_>>();
            println!("steps       {}", moves.join(" "));
            println!("{}", square.bitboard());
        }
        Command::Piece { symbol } => {
            let piece = Piece::from_fen_char(symbol);
            match (piece.try_kind(), piece.try_colour()) {
                (Some(kind), Some(colour)) => println!(
                    "{symbol:?} is a {colour} {kind:?} {} (packed value {}, worth {})",
                    piece.unicode_symbol(),
                    piece.index(),
                    kind.value()
                ),
                _ => println!("{symbol:?} does not denote a piece"),
            }
        }
    }
    Ok(())
}
