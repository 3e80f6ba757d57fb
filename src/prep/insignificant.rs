//! The RFC 4518 insignificant character handling step.
//!
//! Spaces inside a prepared value carry no meaning of their own, but their
//! structure must survive canonicalization so that `a b` and `ab` stay
//! distinct. One six-state automaton does the shaping for all four string
//! shapes; each shape only decides what happens at the value boundaries:
//!
//! * whole values start and end with exactly one SPACE,
//! * initial substrings start with exactly one SPACE,
//! * final substrings end with exactly one SPACE,
//! * any substrings add nothing, but an existing boundary run still
//!   collapses to a single SPACE.
//!
//! Interior runs of one or more spaces always become exactly two SPACEs.
//! Numeric strings and telephone numbers bypass the automaton entirely;
//! their insignificant characters are simply removed.
//!
//! Every function is linear in the input and emits at most `2n + 2` code
//! points.

use alloc::string::String;

/// Shapes a whole attribute value or equality/ordering assertion value.
///
/// Empty and all-space inputs become two SPACEs.
pub fn attribute_value(input: &str) -> String {
    shape(
        input,
        Boundary {
            leading_space: true,
            trailing_space: true,
        },
    )
}

/// Shapes the fragment before the first `*` of a substring assertion.
///
/// Empty and all-space inputs become one SPACE.
pub fn substring_initial(input: &str) -> String {
    shape(
        input,
        Boundary {
            leading_space: true,
            trailing_space: false,
        },
    )
}

/// Shapes a fragment between two `*`s of a substring assertion.
///
/// Empty and all-space inputs become one SPACE.
pub fn substring_any(input: &str) -> String {
    shape(
        input,
        Boundary {
            leading_space: false,
            trailing_space: false,
        },
    )
}

/// Shapes the fragment after the last `*` of a substring assertion.
///
/// Empty and all-space inputs become one SPACE.
pub fn substring_final(input: &str) -> String {
    shape(
        input,
        Boundary {
            leading_space: false,
            trailing_space: true,
        },
    )
}

/// Numeric strings: every SPACE is insignificant and removed.
pub fn numeric(input: &str) -> String {
    input.chars().filter(|&character| character != ' ').collect()
}

/// Telephone numbers: SPACE and every hyphen variant are insignificant
/// and removed.
pub fn telephone(input: &str) -> String {
    input
        .chars()
        .filter(|&character| !matches!(character, ' ' | '\u{002D}' | '\u{058A}' | '\u{2010}' | '\u{2011}' | '\u{2212}' | '\u{FE63}' | '\u{FF0D}'))
        .collect()
}

/// Whether a shape unconditionally owns a boundary SPACE. When it does
/// not, an existing run of input spaces at that boundary still collapses
/// to a single SPACE rather than disappearing.
struct Boundary {
    leading_space: bool,
    trailing_space: bool,
}

enum State {
    Start,
    InitialSpaces,
    InitialChar,
    Chars,
    Spaces,
    SpaceChar,
}

fn shape(input: &str, boundary: Boundary) -> String {
    let mut output = String::with_capacity(input.len() + 2);
    let mut state = State::Start;

    for character in input.chars() {
        let is_space = character == ' ';
        state = match state {
            State::Start if is_space => State::InitialSpaces,
            State::Start => {
                if boundary.leading_space {
                    output.push(' ');
                }
                output.push(character);
                State::InitialChar
            }
            State::InitialSpaces if is_space => State::InitialSpaces,
            State::InitialSpaces => {
                // The leading run collapses into one space whether or not
                // the shape would have added one.
                output.push(' ');
                output.push(character);
                State::InitialChar
            }
            State::InitialChar | State::Chars if is_space => State::Spaces,
            State::InitialChar | State::Chars => {
                output.push(character);
                State::Chars
            }
            State::Spaces if is_space => State::Spaces,
            State::Spaces => {
                output.push_str("  ");
                output.push(character);
                State::SpaceChar
            }
            State::SpaceChar if is_space => State::Spaces,
            State::SpaceChar => {
                output.push(character);
                State::Chars
            }
        };
    }

    match state {
        // Nothing but spaces, or nothing at all.
        State::Start | State::InitialSpaces => {
            output.push(' ');
            if boundary.leading_space && boundary.trailing_space {
                output.push(' ');
            }
        }
        // A trailing run collapses into one space, which doubles as the
        // boundary space for shapes that own one.
        State::Spaces => output.push(' '),
        State::InitialChar | State::Chars | State::SpaceChar => {
            if boundary.trailing_space {
                output.push(' ');
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attribute_value_brackets_with_single_spaces() {
        assert_eq!(attribute_value("Hello"), " Hello ");
        assert_eq!(attribute_value("  abc  "), " abc ");
        assert_eq!(attribute_value("a"), " a ");
    }

    #[test]
    fn attribute_value_empty_forms() {
        assert_eq!(attribute_value(""), "  ");
        assert_eq!(attribute_value(" "), "  ");
        assert_eq!(attribute_value("     "), "  ");
    }

    #[test]
    fn interior_runs_become_exactly_two_spaces() {
        assert_eq!(attribute_value("a b"), " a  b ");
        assert_eq!(attribute_value("a  b"), " a  b ");
        assert_eq!(attribute_value("a   b"), " a  b ");
        assert_eq!(attribute_value("a b c"), " a  b  c ");
        assert_eq!(attribute_value("a  b   c"), " a  b  c ");
    }

    #[test]
    fn initial_shape_has_no_unconditional_trailing_space() {
        assert_eq!(substring_initial("Hello"), " Hello");
        assert_eq!(substring_initial("  Hello"), " Hello");
        assert_eq!(substring_initial("Hello  "), " Hello ");
        assert_eq!(substring_initial(""), " ");
        assert_eq!(substring_initial("   "), " ");
    }

    #[test]
    fn any_shape_keeps_collapsed_boundary_runs() {
        assert_eq!(substring_any("a"), "a");
        assert_eq!(substring_any("  a  "), " a ");
        assert_eq!(substring_any("a  b"), "a  b");
        assert_eq!(substring_any(""), " ");
        assert_eq!(substring_any("  "), " ");
    }

    #[test]
    fn final_shape_always_ends_with_one_space() {
        assert_eq!(substring_final("llo"), "llo ");
        assert_eq!(substring_final("llo  "), "llo ");
        assert_eq!(substring_final("  llo"), " llo ");
        assert_eq!(substring_final(""), " ");
    }

    #[test]
    fn single_char_inputs_get_both_boundaries() {
        assert_eq!(attribute_value("x"), " x ");
        assert_eq!(substring_initial("x"), " x");
        assert_eq!(substring_final("x"), "x ");
    }

    #[test]
    fn numeric_drops_every_space() {
        assert_eq!(numeric(" 123  456 "), "123456");
        assert_eq!(numeric(""), "");
        assert_eq!(numeric("   "), "");
    }

    #[test]
    fn telephone_drops_spaces_and_hyphen_variants() {
        assert_eq!(telephone("+ (33) 1-123--456  789"), "+(33)1123456789");
        assert_eq!(telephone("1\u{2010}2\u{2011}3\u{2212}4"), "1234");
        assert_eq!(telephone("5\u{058A}6\u{FE63}7\u{FF0D}8"), "5678");
        assert_eq!(telephone(""), "");
    }

    #[test]
    fn output_is_bounded_by_twice_input_plus_two() {
        for input in ["", " ", "a", "a b", "a  b", " a ", "word  word   word "] {
            let shaped = attribute_value(input);
            assert!(shaped.chars().count() <= 2 * input.chars().count() + 2);
        }
    }
}
