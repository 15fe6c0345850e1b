//! Parsing of typed console answers.

use gridmark_engine::{BoardSize, Coord};
use tracing::instrument;

/// Interpretation of a typed board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeAnswer {
    /// A supported size.
    Size(BoardSize),
    /// Not a plain non-negative number.
    NotANumber,
    /// A number outside the supported range.
    OutOfBounds,
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn to_number(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

/// Parses a board size answer (surrounding whitespace ignored).
#[instrument]
pub fn parse_size(input: &str) -> SizeAnswer {
    let input = input.trim();
    if !is_digits(input) {
        return SizeAnswer::NotANumber;
    }
    usize::try_from(to_number(input))
        .ok()
        .and_then(|n| BoardSize::new(n).ok())
        .map_or(SizeAnswer::OutOfBounds, SizeAnswer::Size)
}

/// Parses a 1-based `x, y` coordinate into a zero-based [`Coord`].
///
/// Accepted forms are `x, y`, `x,y` and `x y`, with spaces allowed
/// around either number. A lone run of digits splits before its last
/// digit, so `12` reads as column 1, row 2.
#[instrument]
pub fn parse_coordinate(input: &str) -> Option<Coord> {
    let input = input.trim_matches(' ');

    let (column, row) = match input.split_once(',') {
        Some((column, row)) => (column.trim_matches(' '), row.trim_matches(' ')),
        None => match input.split_once(' ') {
            Some((column, row)) => (column, row.trim_start_matches(' ')),
            None if input.len() > 1 && input.is_ascii() => input.split_at(input.len() - 1),
            None => return None,
        },
    };

    (is_digits(column) && is_digits(row))
        .then(|| Coord::from_one_based(to_number(column), to_number(row)))
}

/// Parses a yes/no answer from its first character, case-insensitively.
///
/// Returns `None` for anything that starts with neither `y` nor `n`.
#[instrument]
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.chars().next()?.to_ascii_lowercase() {
        'y' => Some(true),
        'n' => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_formats() {
        let expected = Some(Coord::new(1, 2));
        assert_eq!(parse_coordinate("2, 3"), expected);
        assert_eq!(parse_coordinate("2,3"), expected);
        assert_eq!(parse_coordinate("2 3"), expected);
        assert_eq!(parse_coordinate("  2 ,  3  "), expected);
        assert_eq!(parse_coordinate("23"), expected);
    }

    #[test]
    fn test_coordinate_multi_digit() {
        assert_eq!(parse_coordinate("10, 10"), Some(Coord::new(9, 9)));
        assert_eq!(parse_coordinate("103"), Some(Coord::new(9, 2)));
    }

    #[test]
    fn test_coordinate_zero_maps_off_board() {
        assert_eq!(parse_coordinate("0, 1"), Some(Coord::new(-1, 0)));
    }

    #[test]
    fn test_coordinate_rejects_garbage() {
        for input in ["", "1", "a, b", "1,,2", "1 2 3", "-1, 2", "1;2", ", 2", "1,"] {
            assert_eq!(parse_coordinate(input), None, "input {input:?}");
        }
    }

    #[test]
    fn test_size_answers() {
        assert_eq!(parse_size(" 4 "), SizeAnswer::Size(BoardSize::new(4).unwrap()));
        assert_eq!(parse_size("x"), SizeAnswer::NotANumber);
        assert_eq!(parse_size(""), SizeAnswer::NotANumber);
        assert_eq!(parse_size("1"), SizeAnswer::OutOfBounds);
        assert_eq!(parse_size("11"), SizeAnswer::OutOfBounds);
        assert_eq!(parse_size("123456789012345678901234567890"), SizeAnswer::OutOfBounds);
    }

    #[test]
    fn test_yes_no_first_character() {
        assert_eq!(parse_yes_no("Yes please"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("NO"), Some(false));
        assert_eq!(parse_yes_no(""), None);
        assert_eq!(parse_yes_no(" y"), None);
        assert_eq!(parse_yes_no("maybe"), None);
    }
}
