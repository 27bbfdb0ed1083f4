//! Parsing of raw prompt answers.
//!
//! Every function here is forgiving: malformed input never produces an
//! error, it degrades to a documented fallback.

use std::num::{IntErrorKind, ParseIntError};

use crate::domain::value_objects::Framework;

/// Answers that count as "yes" once trimmed and lower-cased.
const AFFIRMATIVE: [&str; 4] = ["y", "yes", "1", "true"];

/// Interpret a yes/no answer. Anything outside [`AFFIRMATIVE`] is `false`.
pub fn parse_flag(input: &str) -> bool {
    let normalised = input.trim().to_lowercase();
    AFFIRMATIVE.contains(&normalised.as_str())
}

/// Parse a comma-separated list of 1-based framework numbers.
///
/// Out-of-range numbers are dropped. A single non-numeric token discards
/// the whole answer. An empty result becomes [`Framework::DEFAULT_SELECTION`].
pub fn parse_framework_selection(input: &str) -> Vec<Framework> {
    let indices: Result<Vec<Option<i64>>, _> = input.split(',').map(parse_index).collect();

    let selected: Vec<Framework> = match indices {
        Ok(indices) => indices
            .into_iter()
            .flatten()
            .filter_map(Framework::from_menu_index)
            .collect(),
        Err(_) => Vec::new(),
    };

    if selected.is_empty() {
        Framework::DEFAULT_SELECTION.to_vec()
    } else {
        selected
    }
}

/// A number too large for `i64` is still a number: it parses as `None`
/// so the caller drops it like any other out-of-range entry.
fn parse_index(token: &str) -> Result<Option<i64>, ParseIntError> {
    match token.trim().parse::<i64>() {
        Ok(n) => Ok(Some(n)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Outcome of the numbered target-folder menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Zero-based index into the listed directories.
    Listed(usize),
    /// The trailing "enter custom path" entry.
    Custom,
    /// Out of range or not a number.
    Fallback,
}

/// Interpret an answer to a menu of `listed` entries followed by one
/// "custom" entry numbered `listed + 1`.
pub fn parse_menu_choice(input: &str, listed: usize) -> MenuChoice {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=listed).contains(&n) => MenuChoice::Listed(n - 1),
        Ok(n) if n == listed + 1 => MenuChoice::Custom,
        _ => MenuChoice::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_flags() {
        for input in ["y", "Y", "yes", "1", "true", "  YES  ", "True"] {
            assert!(parse_flag(input), "expected true for {input:?}");
        }
    }

    #[test]
    fn negative_flags() {
        for input in ["n", "", "no", "maybe", "0", "yep"] {
            assert!(!parse_flag(input), "expected false for {input:?}");
        }
    }

    #[test]
    fn first_three_frameworks_in_order() {
        assert_eq!(
            parse_framework_selection("1,2,3"),
            vec![Framework::PortersFiveForces, Framework::Swot, Framework::Vrio]
        );
    }

    #[test]
    fn order_and_whitespace_are_respected() {
        assert_eq!(
            parse_framework_selection(" 7 , 4"),
            vec![Framework::McKinsey7S, Framework::Pestel]
        );
    }

    #[test]
    fn non_numeric_token_falls_back_to_default() {
        assert_eq!(
            parse_framework_selection("9,abc"),
            Framework::DEFAULT_SELECTION.to_vec()
        );
        assert_eq!(
            parse_framework_selection("2,abc"),
            Framework::DEFAULT_SELECTION.to_vec()
        );
    }

    #[test]
    fn empty_input_falls_back_to_default() {
        assert_eq!(parse_framework_selection(""), Framework::DEFAULT_SELECTION.to_vec());
    }

    #[test]
    fn out_of_range_only_falls_back_to_default() {
        assert_eq!(
            parse_framework_selection("0,8,-1"),
            Framework::DEFAULT_SELECTION.to_vec()
        );
    }

    #[test]
    fn out_of_range_entries_are_dropped() {
        assert_eq!(parse_framework_selection("9,5"), vec![Framework::ValueChain]);
    }

    #[test]
    fn oversized_numbers_are_dropped_not_fatal() {
        assert_eq!(
            parse_framework_selection("1,99999999999999999999"),
            vec![Framework::PortersFiveForces]
        );
        assert_eq!(
            parse_framework_selection("-99999999999999999999, 6"),
            vec![Framework::BusinessModelCanvas]
        );
    }

    #[test]
    fn menu_choice_ranges() {
        assert_eq!(parse_menu_choice("1", 3), MenuChoice::Listed(0));
        assert_eq!(parse_menu_choice("3", 3), MenuChoice::Listed(2));
        assert_eq!(parse_menu_choice("4", 3), MenuChoice::Custom);
        assert_eq!(parse_menu_choice("5", 3), MenuChoice::Fallback);
        assert_eq!(parse_menu_choice("0", 3), MenuChoice::Fallback);
        assert_eq!(parse_menu_choice("abc", 3), MenuChoice::Fallback);
        assert_eq!(parse_menu_choice("", 3), MenuChoice::Fallback);
    }
}
