//! Case-fold data for the map step: RFC 3454 table B.2.
//!
//! B.2 is the fold used together with NFKC. It is larger than plain
//! lowercasing because it must commute with compatibility normalization:
//! letterlike symbols, squared unit abbreviations, Roman numerals,
//! enclosed letters, mathematical alphanumerics, and the presentation
//! ligatures all fold here so that normalizing afterwards can no longer
//! surface an uppercase letter.
//!
//! The enumeration is split three ways. Contiguous runs that fold by a
//! fixed offset or by even/odd pairing live in [`FOLD_RANGES`]; irregular
//! one-to-one entries live in [`FOLD_SINGLES`]; one-to-many expansions
//! live in [`FOLD_EXPANSIONS`] with their targets in B.2 order. The map
//! step compiles all three into one page-indexed lookup at first use.

/// How every code point inside a [`FoldRange`] folds.
pub(super) enum FoldKind {
    /// Folds to the code point plus `delta`.
    Offset(i32),
    /// Even code points fold to the next code point up; odd ones are
    /// already folded.
    EvenOdd,
    /// Odd code points fold to the next code point up; even ones are
    /// already folded.
    OddEven,
}

pub(super) struct FoldRange {
    pub first: u32,
    pub last: u32,
    pub kind: FoldKind,
}

const fn fold(first: u32, last: u32, kind: FoldKind) -> FoldRange {
    FoldRange { first, last, kind }
}

pub(super) const FOLD_RANGES: &[FoldRange] = &[
    // Basic Latin and Latin-1.
    fold(0x0041, 0x005A, FoldKind::Offset(32)),
    fold(0x00C0, 0x00D6, FoldKind::Offset(32)),
    fold(0x00D8, 0x00DE, FoldKind::Offset(32)),
    // Latin Extended-A.
    fold(0x0100, 0x012F, FoldKind::EvenOdd),
    fold(0x0132, 0x0137, FoldKind::EvenOdd),
    fold(0x0139, 0x0148, FoldKind::OddEven),
    fold(0x014A, 0x0177, FoldKind::EvenOdd),
    fold(0x0179, 0x017E, FoldKind::OddEven),
    // Latin Extended-B pairings; the loners are in FOLD_SINGLES.
    fold(0x0182, 0x0185, FoldKind::EvenOdd),
    fold(0x01A0, 0x01A5, FoldKind::EvenOdd),
    fold(0x01B3, 0x01B6, FoldKind::OddEven),
    fold(0x01CD, 0x01DC, FoldKind::OddEven),
    fold(0x01DE, 0x01EF, FoldKind::EvenOdd),
    fold(0x01F8, 0x021F, FoldKind::EvenOdd),
    fold(0x0222, 0x0233, FoldKind::EvenOdd),
    // Greek.
    fold(0x0388, 0x038A, FoldKind::Offset(37)),
    fold(0x0391, 0x03A1, FoldKind::Offset(32)),
    fold(0x03A3, 0x03AB, FoldKind::Offset(32)),
    fold(0x03D8, 0x03EF, FoldKind::EvenOdd),
    // Cyrillic.
    fold(0x0400, 0x040F, FoldKind::Offset(80)),
    fold(0x0410, 0x042F, FoldKind::Offset(32)),
    fold(0x0460, 0x0481, FoldKind::EvenOdd),
    fold(0x048A, 0x04BF, FoldKind::EvenOdd),
    fold(0x04C1, 0x04C4, FoldKind::OddEven),
    fold(0x04D0, 0x04F5, FoldKind::EvenOdd),
    fold(0x0500, 0x050F, FoldKind::EvenOdd),
    // Armenian.
    fold(0x0531, 0x0556, FoldKind::Offset(48)),
    // Latin Extended Additional.
    fold(0x1E00, 0x1E95, FoldKind::EvenOdd),
    fold(0x1EA0, 0x1EF9, FoldKind::EvenOdd),
    // Greek Extended.
    fold(0x1F08, 0x1F0F, FoldKind::Offset(-8)),
    fold(0x1F18, 0x1F1D, FoldKind::Offset(-8)),
    fold(0x1F28, 0x1F2F, FoldKind::Offset(-8)),
    fold(0x1F38, 0x1F3F, FoldKind::Offset(-8)),
    fold(0x1F48, 0x1F4D, FoldKind::Offset(-8)),
    fold(0x1F68, 0x1F6F, FoldKind::Offset(-8)),
    fold(0x1FB8, 0x1FB9, FoldKind::Offset(-8)),
    fold(0x1FBA, 0x1FBB, FoldKind::Offset(-74)),
    fold(0x1FC8, 0x1FCB, FoldKind::Offset(-86)),
    fold(0x1FD8, 0x1FD9, FoldKind::Offset(-8)),
    fold(0x1FDA, 0x1FDB, FoldKind::Offset(-100)),
    fold(0x1FE8, 0x1FE9, FoldKind::Offset(-8)),
    fold(0x1FEA, 0x1FEB, FoldKind::Offset(-112)),
    fold(0x1FF8, 0x1FF9, FoldKind::Offset(-128)),
    fold(0x1FFA, 0x1FFB, FoldKind::Offset(-126)),
    // Number forms and enclosed alphanumerics.
    fold(0x2160, 0x216F, FoldKind::Offset(16)),
    fold(0x24B6, 0x24CF, FoldKind::Offset(26)),
    // Fullwidth Latin.
    fold(0xFF21, 0xFF3A, FoldKind::Offset(32)),
    // Deseret.
    fold(0x10400, 0x10425, FoldKind::Offset(40)),
    // Mathematical alphanumerics fold to plain Latin and Greek smalls.
    // The gaps inside the script, fraktur, and double-struck alphabets
    // are code points that were never assigned there; their letterlike
    // ancestors in the 2100 block carry their own entries.
    fold(0x1D400, 0x1D419, FoldKind::Offset(-119_711)),
    fold(0x1D434, 0x1D44D, FoldKind::Offset(-119_763)),
    fold(0x1D468, 0x1D481, FoldKind::Offset(-119_815)),
    fold(0x1D49C, 0x1D49C, FoldKind::Offset(-119_867)),
    fold(0x1D49E, 0x1D49F, FoldKind::Offset(-119_867)),
    fold(0x1D4A2, 0x1D4A2, FoldKind::Offset(-119_867)),
    fold(0x1D4A5, 0x1D4A6, FoldKind::Offset(-119_867)),
    fold(0x1D4A9, 0x1D4AC, FoldKind::Offset(-119_867)),
    fold(0x1D4AE, 0x1D4B5, FoldKind::Offset(-119_867)),
    fold(0x1D4D0, 0x1D4E9, FoldKind::Offset(-119_919)),
    fold(0x1D504, 0x1D505, FoldKind::Offset(-119_971)),
    fold(0x1D507, 0x1D50A, FoldKind::Offset(-119_971)),
    fold(0x1D50D, 0x1D514, FoldKind::Offset(-119_971)),
    fold(0x1D516, 0x1D51C, FoldKind::Offset(-119_971)),
    fold(0x1D538, 0x1D539, FoldKind::Offset(-120_023)),
    fold(0x1D53B, 0x1D53E, FoldKind::Offset(-120_023)),
    fold(0x1D540, 0x1D544, FoldKind::Offset(-120_023)),
    fold(0x1D546, 0x1D546, FoldKind::Offset(-120_023)),
    fold(0x1D54A, 0x1D550, FoldKind::Offset(-120_023)),
    fold(0x1D56C, 0x1D585, FoldKind::Offset(-120_075)),
    fold(0x1D5A0, 0x1D5B9, FoldKind::Offset(-120_127)),
    fold(0x1D5D4, 0x1D5ED, FoldKind::Offset(-120_179)),
    fold(0x1D608, 0x1D621, FoldKind::Offset(-120_231)),
    fold(0x1D63C, 0x1D655, FoldKind::Offset(-120_283)),
    fold(0x1D670, 0x1D689, FoldKind::Offset(-120_335)),
    // Mathematical Greek capitals, split around the capital theta symbol
    // so sigma lands on U+03C3 rather than the final form.
    fold(0x1D6A8, 0x1D6B8, FoldKind::Offset(-119_543)),
    fold(0x1D6BA, 0x1D6C0, FoldKind::Offset(-119_543)),
    fold(0x1D6E2, 0x1D6F2, FoldKind::Offset(-119_601)),
    fold(0x1D6F4, 0x1D6FA, FoldKind::Offset(-119_601)),
    fold(0x1D71C, 0x1D72C, FoldKind::Offset(-119_659)),
    fold(0x1D72E, 0x1D734, FoldKind::Offset(-119_659)),
    fold(0x1D756, 0x1D766, FoldKind::Offset(-119_717)),
    fold(0x1D768, 0x1D76E, FoldKind::Offset(-119_717)),
    fold(0x1D790, 0x1D7A0, FoldKind::Offset(-119_775)),
    fold(0x1D7A2, 0x1D7A8, FoldKind::Offset(-119_775)),
];

/// Irregular one-to-one folds.
pub(super) const FOLD_SINGLES: &[(u32, u32)] = &[
    (0x00B5, 0x03BC),
    (0x0178, 0x00FF),
    (0x017F, 0x0073),
    (0x0181, 0x0253),
    (0x0186, 0x0254),
    (0x0187, 0x0188),
    (0x0189, 0x0256),
    (0x018A, 0x0257),
    (0x018B, 0x018C),
    (0x018E, 0x01DD),
    (0x018F, 0x0259),
    (0x0190, 0x025B),
    (0x0191, 0x0192),
    (0x0193, 0x0260),
    (0x0194, 0x0263),
    (0x0196, 0x0269),
    (0x0197, 0x0268),
    (0x0198, 0x0199),
    (0x019C, 0x026F),
    (0x019D, 0x0272),
    (0x019F, 0x0275),
    (0x01A6, 0x0280),
    (0x01A7, 0x01A8),
    (0x01A9, 0x0283),
    (0x01AC, 0x01AD),
    (0x01AE, 0x0288),
    (0x01AF, 0x01B0),
    (0x01B1, 0x028A),
    (0x01B2, 0x028B),
    (0x01B7, 0x0292),
    (0x01B8, 0x01B9),
    (0x01BC, 0x01BD),
    (0x01C4, 0x01C6),
    (0x01C5, 0x01C6),
    (0x01C7, 0x01C9),
    (0x01C8, 0x01C9),
    (0x01CA, 0x01CC),
    (0x01CB, 0x01CC),
    (0x01F1, 0x01F3),
    (0x01F2, 0x01F3),
    (0x01F4, 0x01F5),
    (0x01F6, 0x0195),
    (0x01F7, 0x01BF),
    (0x0220, 0x019E),
    (0x0345, 0x03B9),
    (0x0386, 0x03AC),
    (0x038C, 0x03CC),
    (0x038E, 0x03CD),
    (0x038F, 0x03CE),
    (0x03C2, 0x03C3),
    (0x03D0, 0x03B2),
    (0x03D1, 0x03B8),
    (0x03D2, 0x03C5),
    (0x03D3, 0x03CD),
    (0x03D4, 0x03CB),
    (0x03D5, 0x03C6),
    (0x03D6, 0x03C0),
    (0x03F0, 0x03BA),
    (0x03F1, 0x03C1),
    (0x03F2, 0x03C3),
    (0x03F4, 0x03B8),
    (0x03F5, 0x03B5),
    (0x04C7, 0x04C8),
    (0x04CB, 0x04CC),
    (0x04F8, 0x04F9),
    (0x1E9B, 0x1E61),
    (0x1F59, 0x1F51),
    (0x1F5B, 0x1F53),
    (0x1F5D, 0x1F55),
    (0x1F5F, 0x1F57),
    (0x1FBE, 0x03B9),
    (0x1FEC, 0x1FE5),
    (0x2102, 0x0063),
    (0x2107, 0x025B),
    (0x210B, 0x0068),
    (0x210C, 0x0068),
    (0x210D, 0x0068),
    (0x2110, 0x0069),
    (0x2111, 0x0069),
    (0x2112, 0x006C),
    (0x2115, 0x006E),
    (0x2119, 0x0070),
    (0x211A, 0x0071),
    (0x211B, 0x0072),
    (0x211C, 0x0072),
    (0x211D, 0x0072),
    (0x2124, 0x007A),
    (0x2126, 0x03C9),
    (0x2128, 0x007A),
    (0x212A, 0x006B),
    (0x212B, 0x00E5),
    (0x212C, 0x0062),
    (0x212D, 0x0063),
    (0x2130, 0x0065),
    (0x2131, 0x0066),
    (0x2133, 0x006D),
    (0x213E, 0x03B3),
    (0x213F, 0x03C0),
    (0x2145, 0x0064),
    (0x1D6B9, 0x03B8),
    (0x1D6D3, 0x03C3),
    (0x1D6F3, 0x03B8),
    (0x1D70D, 0x03C3),
    (0x1D72D, 0x03B8),
    (0x1D747, 0x03C3),
    (0x1D767, 0x03B8),
    (0x1D781, 0x03C3),
    (0x1D7A1, 0x03B8),
    (0x1D7BB, 0x03C3),
];

/// One-to-many folds; targets are emitted in the listed order.
pub(super) const FOLD_EXPANSIONS: &[(u32, &[u32])] = &[
    (0x00DF, &[0x0073, 0x0073]),
    (0x0130, &[0x0069, 0x0307]),
    (0x0149, &[0x02BC, 0x006E]),
    (0x01F0, &[0x006A, 0x030C]),
    (0x037A, &[0x0020, 0x03B9]),
    (0x0390, &[0x03B9, 0x0308, 0x0301]),
    (0x03B0, &[0x03C5, 0x0308, 0x0301]),
    (0x0587, &[0x0565, 0x0582]),
    (0x1E96, &[0x0068, 0x0331]),
    (0x1E97, &[0x0074, 0x0308]),
    (0x1E98, &[0x0077, 0x030A]),
    (0x1E99, &[0x0079, 0x030A]),
    (0x1E9A, &[0x0061, 0x02BE]),
    (0x1F50, &[0x03C5, 0x0313]),
    (0x1F52, &[0x03C5, 0x0313, 0x0300]),
    (0x1F54, &[0x03C5, 0x0313, 0x0301]),
    (0x1F56, &[0x03C5, 0x0313, 0x0342]),
    (0x1F80, &[0x1F00, 0x03B9]),
    (0x1F81, &[0x1F01, 0x03B9]),
    (0x1F82, &[0x1F02, 0x03B9]),
    (0x1F83, &[0x1F03, 0x03B9]),
    (0x1F84, &[0x1F04, 0x03B9]),
    (0x1F85, &[0x1F05, 0x03B9]),
    (0x1F86, &[0x1F06, 0x03B9]),
    (0x1F87, &[0x1F07, 0x03B9]),
    (0x1F88, &[0x1F00, 0x03B9]),
    (0x1F89, &[0x1F01, 0x03B9]),
    (0x1F8A, &[0x1F02, 0x03B9]),
    (0x1F8B, &[0x1F03, 0x03B9]),
    (0x1F8C, &[0x1F04, 0x03B9]),
    (0x1F8D, &[0x1F05, 0x03B9]),
    (0x1F8E, &[0x1F06, 0x03B9]),
    (0x1F8F, &[0x1F07, 0x03B9]),
    (0x1F90, &[0x1F20, 0x03B9]),
    (0x1F91, &[0x1F21, 0x03B9]),
    (0x1F92, &[0x1F22, 0x03B9]),
    (0x1F93, &[0x1F23, 0x03B9]),
    (0x1F94, &[0x1F24, 0x03B9]),
    (0x1F95, &[0x1F25, 0x03B9]),
    (0x1F96, &[0x1F26, 0x03B9]),
    (0x1F97, &[0x1F27, 0x03B9]),
    (0x1F98, &[0x1F20, 0x03B9]),
    (0x1F99, &[0x1F21, 0x03B9]),
    (0x1F9A, &[0x1F22, 0x03B9]),
    (0x1F9B, &[0x1F23, 0x03B9]),
    (0x1F9C, &[0x1F24, 0x03B9]),
    (0x1F9D, &[0x1F25, 0x03B9]),
    (0x1F9E, &[0x1F26, 0x03B9]),
    (0x1F9F, &[0x1F27, 0x03B9]),
    (0x1FA0, &[0x1F60, 0x03B9]),
    (0x1FA1, &[0x1F61, 0x03B9]),
    (0x1FA2, &[0x1F62, 0x03B9]),
    (0x1FA3, &[0x1F63, 0x03B9]),
    (0x1FA4, &[0x1F64, 0x03B9]),
    (0x1FA5, &[0x1F65, 0x03B9]),
    (0x1FA6, &[0x1F66, 0x03B9]),
    (0x1FA7, &[0x1F67, 0x03B9]),
    (0x1FA8, &[0x1F60, 0x03B9]),
    (0x1FA9, &[0x1F61, 0x03B9]),
    (0x1FAA, &[0x1F62, 0x03B9]),
    (0x1FAB, &[0x1F63, 0x03B9]),
    (0x1FAC, &[0x1F64, 0x03B9]),
    (0x1FAD, &[0x1F65, 0x03B9]),
    (0x1FAE, &[0x1F66, 0x03B9]),
    (0x1FAF, &[0x1F67, 0x03B9]),
    (0x1FB2, &[0x1F70, 0x03B9]),
    (0x1FB3, &[0x03B1, 0x03B9]),
    (0x1FB4, &[0x03AC, 0x03B9]),
    (0x1FB6, &[0x03B1, 0x0342]),
    (0x1FB7, &[0x03B1, 0x0342, 0x03B9]),
    (0x1FBC, &[0x03B1, 0x03B9]),
    (0x1FC2, &[0x1F74, 0x03B9]),
    (0x1FC3, &[0x03B7, 0x03B9]),
    (0x1FC4, &[0x03AE, 0x03B9]),
    (0x1FC6, &[0x03B7, 0x0342]),
    (0x1FC7, &[0x03B7, 0x0342, 0x03B9]),
    (0x1FCC, &[0x03B7, 0x03B9]),
    (0x1FD2, &[0x03B9, 0x0308, 0x0300]),
    (0x1FD3, &[0x03B9, 0x0308, 0x0301]),
    (0x1FD6, &[0x03B9, 0x0342]),
    (0x1FD7, &[0x03B9, 0x0308, 0x0342]),
    (0x1FE2, &[0x03C5, 0x0308, 0x0300]),
    (0x1FE3, &[0x03C5, 0x0308, 0x0301]),
    (0x1FE4, &[0x03C1, 0x0313]),
    (0x1FE6, &[0x03C5, 0x0342]),
    (0x1FE7, &[0x03C5, 0x0308, 0x0342]),
    (0x1FF2, &[0x1F7C, 0x03B9]),
    (0x1FF3, &[0x03C9, 0x03B9]),
    (0x1FF4, &[0x03CE, 0x03B9]),
    (0x1FF6, &[0x03C9, 0x0342]),
    (0x1FF7, &[0x03C9, 0x0342, 0x03B9]),
    (0x1FFC, &[0x03C9, 0x03B9]),
    (0x20A8, &[0x0072, 0x0073]),
    (0x2103, &[0x00B0, 0x0063]),
    (0x2109, &[0x00B0, 0x0066]),
    (0x2116, &[0x006E, 0x006F]),
    (0x2120, &[0x0073, 0x006D]),
    (0x2121, &[0x0074, 0x0065, 0x006C]),
    (0x2122, &[0x0074, 0x006D]),
    (0x3371, &[0x0068, 0x0070, 0x0061]),
    (0x3373, &[0x0061, 0x0075]),
    (0x3375, &[0x006F, 0x0076]),
    (0x3380, &[0x0070, 0x0061]),
    (0x3381, &[0x006E, 0x0061]),
    (0x3382, &[0x03BC, 0x0061]),
    (0x3383, &[0x006D, 0x0061]),
    (0x3384, &[0x006B, 0x0061]),
    (0x3385, &[0x006B, 0x0062]),
    (0x3386, &[0x006D, 0x0062]),
    (0x3387, &[0x0067, 0x0062]),
    (0x338A, &[0x0070, 0x0066]),
    (0x338B, &[0x006E, 0x0066]),
    (0x338C, &[0x03BC, 0x0066]),
    (0x3390, &[0x0068, 0x007A]),
    (0x3391, &[0x006B, 0x0068, 0x007A]),
    (0x3392, &[0x006D, 0x0068, 0x007A]),
    (0x3393, &[0x0067, 0x0068, 0x007A]),
    (0x3394, &[0x0074, 0x0068, 0x007A]),
    (0x33A9, &[0x0070, 0x0061]),
    (0x33AA, &[0x006B, 0x0070, 0x0061]),
    (0x33AB, &[0x006D, 0x0070, 0x0061]),
    (0x33AC, &[0x0067, 0x0070, 0x0061]),
    (0x33B4, &[0x0070, 0x0076]),
    (0x33B5, &[0x006E, 0x0076]),
    (0x33B6, &[0x03BC, 0x0076]),
    (0x33B7, &[0x006D, 0x0076]),
    (0x33B8, &[0x006B, 0x0076]),
    (0x33B9, &[0x006D, 0x0076]),
    (0x33BA, &[0x0070, 0x0077]),
    (0x33BB, &[0x006E, 0x0077]),
    (0x33BC, &[0x03BC, 0x0077]),
    (0x33BD, &[0x006D, 0x0077]),
    (0x33BE, &[0x006B, 0x0077]),
    (0x33BF, &[0x006D, 0x0077]),
    (0x33C0, &[0x006B, 0x03C9]),
    (0x33C1, &[0x006D, 0x03C9]),
    (0x33C3, &[0x0062, 0x0071]),
    (0x33C6, &[0x0063, 0x2215, 0x006B, 0x0067]),
    (0x33C7, &[0x0063, 0x006F, 0x002E]),
    (0x33C8, &[0x0064, 0x0062]),
    (0x33C9, &[0x0067, 0x0079]),
    (0x33CB, &[0x0068, 0x0070]),
    (0x33CD, &[0x006B, 0x006B]),
    (0x33CE, &[0x006B, 0x006D]),
    (0x33D7, &[0x0070, 0x0068]),
    (0x33D9, &[0x0070, 0x0070, 0x006D]),
    (0x33DA, &[0x0070, 0x0072]),
    (0x33DC, &[0x0073, 0x0076]),
    (0x33DD, &[0x0077, 0x0062]),
    (0xFB00, &[0x0066, 0x0066]),
    (0xFB01, &[0x0066, 0x0069]),
    (0xFB02, &[0x0066, 0x006C]),
    (0xFB03, &[0x0066, 0x0066, 0x0069]),
    (0xFB04, &[0x0066, 0x0066, 0x006C]),
    (0xFB05, &[0x0073, 0x0074]),
    (0xFB06, &[0x0073, 0x0074]),
    (0xFB13, &[0x0574, 0x0576]),
    (0xFB14, &[0x0574, 0x0565]),
    (0xFB15, &[0x0574, 0x056B]),
    (0xFB16, &[0x057E, 0x0576]),
    (0xFB17, &[0x0574, 0x056D]),
];
