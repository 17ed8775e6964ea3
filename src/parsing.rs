//! # Parsing
//! Squares, files, ranks and pieces can be parsed from raw strings using the
//! standard Rust [`FromStr`](std::str::FromStr) trait.
//!
//! On top of that, these types implement the [`PartialFromStr`] trait, a small
//! parser combinator interface. Unlike [`FromStr`](std::str::FromStr), the `Ok`
//! variant returned by [`PartialFromStr`] contains two values:
//! - The parsed value
//! - A suffix of the input that was not part of the parsed value.
//!
//! A string like "d4rest" would return `Ok((Square::D4, "rest"))` when parsed.
//! This makes it easy to chain parsers over a larger input, for example the
//! string "e2e4" can be read as two squares by successive calls.

use std::convert::Infallible;

/// Parses a prefix of a string, returning the parsed value along with the
/// unparsed rest of the input.
pub trait PartialFromStr: Sized {
    type Err;

    fn partial_from_str(s: &str) -> Result<(Self, &str), Self::Err>;
}
impl<T: PartialFromStr> PartialFromStr for Option<T> {
    type Err = Infallible;

    fn partial_from_str(s: &str) -> Result<(Self, &str), Self::Err> {
        match T::partial_from_str(s) {
            Ok((value, rest)) => Ok((Some(value), rest)),
            Err(_) => Ok((None, s)),
        }
    }
}

/// Parses the whole input, failing with `too_long` if anything is left after
/// the parsed value.
pub(crate) fn parse_exact<T: PartialFromStr>(s: &str, too_long: T::Err) -> Result<T, T::Err> {
    T::partial_from_str(s).and_then(|(result, rest)| {
        if rest.is_empty() {
            Ok(result)
        } else {
            Err(too_long)
        }
    })
}

#[cfg(test)]
mod test {
    use super::PartialFromStr;
    use crate::game::square::Square;

    #[test]
    fn chained_squares() {
        let (from, rest) = Square::partial_from_str("e2e4").unwrap();
        let (to, rest) = Square::partial_from_str(rest).unwrap();
        assert_eq!((from, to, rest), (Square::E2, Square::E4, ""));
    }

    #[test]
    fn optional_parse_keeps_input() {
        let (square, rest) = Option::<Square>::partial_from_str("z9").unwrap();
        assert_eq!(square, None);
        assert_eq!(rest, "z9");
    }
}
