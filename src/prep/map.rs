//! The RFC 4518 map step.
//!
//! Mapping is a deterministic code-point-to-sequence rewrite: control
//! characters disappear, every separator becomes SPACE, soft hyphens and
//! other invisible format characters disappear, and under a
//! case-insensitive policy the full RFC 3454 B.2 fold applies.
//!
//! The declarative tables in [`super::tables`] and [`super::classify`] are
//! compiled once into a two-stage lookup: the high bits of a code point
//! select a 256-entry page, the low byte selects the [`Action`]. Pages are
//! built on first use and published through [`OnceBox`], so concurrent
//! callers either see no table yet (and race to build identical ones) or a
//! fully initialized one.

use alloc::{boxed::Box, collections::BTreeMap, string::String};

use once_cell::race::OnceBox;

use super::{CasePolicy, classify, tables};

/// Rewrites `input` according to RFC 4518 section 2.2.
///
/// The rewrite never fails; prohibited characters are the next step's
/// business. Output length is at most four code points per input code
/// point (the widest B.2 expansion).
pub fn map(input: &str, case_policy: CasePolicy) -> String {
    if input.is_ascii() {
        return map_ascii(input, case_policy);
    }

    let table = table();
    let mut output = String::with_capacity(input.len());

    for character in input.chars() {
        match table.action(character as u32) {
            Action::Keep => output.push(character),
            Action::Drop => {}
            Action::Space => output.push(' '),
            Action::Fold(folded) if case_policy == CasePolicy::CaseInsensitive => {
                output.push(folded);
            }
            Action::FoldExpand(targets) if case_policy == CasePolicy::CaseInsensitive => {
                for &target in targets {
                    if let Some(folded) = char::from_u32(target) {
                        output.push(folded);
                    }
                }
            }
            Action::Fold(_) | Action::FoldExpand(_) => output.push(character),
        }
    }

    output
}

/// The ASCII-only path: same contract as [`map`], dispatching on bytes.
fn map_ascii(input: &str, case_policy: CasePolicy) -> String {
    let mut output = String::with_capacity(input.len());

    for byte in input.bytes() {
        match byte {
            0x00..=0x08 | 0x0E..=0x1F | 0x7F => {}
            0x09..=0x0D => output.push(' '),
            b'A'..=b'Z' if case_policy == CasePolicy::CaseInsensitive => {
                output.push((byte + 0x20) as char);
            }
            _ => output.push(byte as char),
        }
    }

    output
}

/// What the map step does with one code point.
#[derive(Debug, Clone, Copy)]
enum Action {
    Keep,
    Drop,
    Space,
    Fold(char),
    FoldExpand(&'static [u32]),
}

struct MapTable {
    pages: BTreeMap<u32, Box<[Action; 256]>>,
}

impl MapTable {
    fn action(&self, code_point: u32) -> Action {
        match self.pages.get(&(code_point >> 8)) {
            Some(page) => page[(code_point & 0xFF) as usize],
            None => Action::Keep,
        }
    }

    fn set(&mut self, code_point: u32, action: Action) {
        let page = self
            .pages
            .entry(code_point >> 8)
            .or_insert_with(|| Box::new([Action::Keep; 256]));
        page[(code_point & 0xFF) as usize] = action;
    }

    fn build() -> Self {
        let mut table = Self {
            pages: BTreeMap::new(),
        };

        for &(first, last) in classify::MAPPED_TO_NOTHING {
            for code_point in first..=last {
                table.set(code_point, Action::Drop);
            }
        }

        for &(first, last) in classify::MAPPED_TO_SPACE {
            for code_point in first..=last {
                table.set(code_point, Action::Space);
            }
        }

        for range in tables::FOLD_RANGES {
            for code_point in range.first..=range.last {
                let target = match range.kind {
                    tables::FoldKind::Offset(delta) => code_point.checked_add_signed(delta),
                    tables::FoldKind::EvenOdd if code_point % 2 == 0 => Some(code_point + 1),
                    tables::FoldKind::OddEven if code_point % 2 == 1 => Some(code_point + 1),
                    tables::FoldKind::EvenOdd | tables::FoldKind::OddEven => None,
                };
                if let Some(folded) = target.and_then(char::from_u32) {
                    table.set(code_point, Action::Fold(folded));
                }
            }
        }

        for &(code_point, target) in tables::FOLD_SINGLES {
            if let Some(folded) = char::from_u32(target) {
                table.set(code_point, Action::Fold(folded));
            }
        }

        for &(code_point, targets) in tables::FOLD_EXPANSIONS {
            table.set(code_point, Action::FoldExpand(targets));
        }

        table
    }
}

fn table() -> &'static MapTable {
    static TABLE: OnceBox<MapTable> = OnceBox::new();
    TABLE.get_or_init(|| Box::new(MapTable::build()))
}
