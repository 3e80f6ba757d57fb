//! Literal case-fold expectations, written out independently of the
//! mapper's own tables so a data error in one place cannot hide in the
//! other. Each entry is the prepared form of a single character under the
//! case-insensitive policy, without the surrounding value shaping.

use ldap_prep::prep::map::map;
use ldap_prep::{AssertionType, CasePolicy, prepare};
use pretty_assertions::assert_eq;

#[track_caller]
fn assert_folds(input: char, expected: &str) {
    let mut buffer = [0u8; 4];
    let folded = map(input.encode_utf8(&mut buffer), CasePolicy::CaseInsensitive);
    assert_eq!(folded, expected, "U+{:04X}", input as u32);
}

#[test]
fn basic_latin_and_latin1() {
    for (uppercase, lowercase) in ('A'..='Z').zip('a'..='z') {
        assert_folds(uppercase, &lowercase.to_string());
    }

    assert_folds('\u{00B5}', "\u{03BC}");
    assert_folds('À', "à");
    assert_folds('Ç', "ç");
    assert_folds('Ö', "ö");
    assert_folds('Ø', "ø");
    assert_folds('Þ', "þ");
    assert_folds('ß', "ss");
}

#[test]
fn latin_extended_a() {
    assert_folds('Ā', "ā");
    assert_folds('Ć', "ć");
    assert_folds('Đ', "đ");
    assert_folds('Ĳ', "ĳ");
    assert_folds('İ', "i\u{0307}");
    assert_folds('Ĺ', "ĺ");
    assert_folds('Ň', "ň");
    assert_folds('\u{0149}', "\u{02BC}n");
    assert_folds('Ŋ', "ŋ");
    assert_folds('Œ', "œ");
    assert_folds('Ŧ', "ŧ");
    assert_folds('Ŷ', "ŷ");
    assert_folds('\u{0178}', "ÿ");
    assert_folds('Ź', "ź");
    assert_folds('Ž', "ž");
    assert_folds('\u{017F}', "s");
}

#[test]
fn latin_extended_b() {
    assert_folds('\u{0181}', "\u{0253}");
    assert_folds('\u{0182}', "\u{0183}");
    assert_folds('\u{0186}', "\u{0254}");
    assert_folds('\u{0187}', "\u{0188}");
    assert_folds('\u{0189}', "\u{0256}");
    assert_folds('\u{018A}', "\u{0257}");
    assert_folds('\u{018E}', "\u{01DD}");
    assert_folds('\u{018F}', "\u{0259}");
    assert_folds('\u{0190}', "\u{025B}");
    assert_folds('\u{0191}', "\u{0192}");
    assert_folds('\u{0193}', "\u{0260}");
    assert_folds('\u{0194}', "\u{0263}");
    assert_folds('\u{0196}', "\u{0269}");
    assert_folds('\u{0197}', "\u{0268}");
    assert_folds('\u{019C}', "\u{026F}");
    assert_folds('\u{019D}', "\u{0272}");
    assert_folds('\u{019F}', "\u{0275}");
    assert_folds('\u{01A0}', "\u{01A1}");
    assert_folds('\u{01A6}', "\u{0280}");
    assert_folds('\u{01A9}', "\u{0283}");
    assert_folds('\u{01AE}', "\u{0288}");
    assert_folds('\u{01B1}', "\u{028A}");
    assert_folds('\u{01B2}', "\u{028B}");
    assert_folds('\u{01B7}', "\u{0292}");
    // The digraphs fold through their title-case forms.
    assert_folds('\u{01C4}', "\u{01C6}");
    assert_folds('\u{01C5}', "\u{01C6}");
    assert_folds('\u{01C7}', "\u{01C9}");
    assert_folds('\u{01C8}', "\u{01C9}");
    assert_folds('\u{01CA}', "\u{01CC}");
    assert_folds('\u{01CB}', "\u{01CC}");
    assert_folds('\u{01CD}', "\u{01CE}");
    assert_folds('\u{01DB}', "\u{01DC}");
    assert_folds('\u{01DE}', "\u{01DF}");
    assert_folds('\u{01F0}', "j\u{030C}");
    assert_folds('\u{01F1}', "\u{01F3}");
    assert_folds('\u{01F2}', "\u{01F3}");
    assert_folds('\u{01F6}', "\u{0195}");
    assert_folds('\u{01F7}', "\u{01BF}");
    assert_folds('\u{01F8}', "\u{01F9}");
    assert_folds('\u{0200}', "\u{0201}");
    assert_folds('\u{021E}', "\u{021F}");
    assert_folds('\u{0220}', "\u{019E}");
    assert_folds('\u{0222}', "\u{0223}");
    assert_folds('\u{0232}', "\u{0233}");
}

#[test]
fn greek() {
    assert_folds('\u{0345}', "\u{03B9}");
    assert_folds('\u{0386}', "\u{03AC}");
    assert_folds('\u{0388}', "\u{03AD}");
    assert_folds('\u{0389}', "\u{03AE}");
    assert_folds('\u{038A}', "\u{03AF}");
    assert_folds('\u{038C}', "\u{03CC}");
    assert_folds('\u{038E}', "\u{03CD}");
    assert_folds('\u{038F}', "\u{03CE}");
    assert_folds('\u{0390}', "\u{03B9}\u{0308}\u{0301}");
    for (uppercase, lowercase) in ('Α'..='Ρ').zip('α'..='ρ') {
        assert_folds(uppercase, &lowercase.to_string());
    }
    for (uppercase, lowercase) in ('Σ'..='Ϋ').zip('σ'..='ϋ') {
        assert_folds(uppercase, &lowercase.to_string());
    }
    assert_folds('\u{03B0}', "\u{03C5}\u{0308}\u{0301}");
    assert_folds('\u{03C2}', "\u{03C3}");
    assert_folds('\u{03D0}', "\u{03B2}");
    assert_folds('\u{03D1}', "\u{03B8}");
    assert_folds('\u{03D2}', "\u{03C5}");
    assert_folds('\u{03D3}', "\u{03CD}");
    assert_folds('\u{03D4}', "\u{03CB}");
    assert_folds('\u{03D5}', "\u{03C6}");
    assert_folds('\u{03D6}', "\u{03C0}");
    assert_folds('\u{03D8}', "\u{03D9}");
    assert_folds('\u{03EE}', "\u{03EF}");
    assert_folds('\u{03F0}', "\u{03BA}");
    assert_folds('\u{03F1}', "\u{03C1}");
    assert_folds('\u{03F2}', "\u{03C3}");
    assert_folds('\u{03F4}', "\u{03B8}");
    assert_folds('\u{03F5}', "\u{03B5}");
}

#[test]
fn cyrillic() {
    assert_folds('Ѐ', "ѐ");
    assert_folds('Џ', "џ");
    assert_folds('А', "а");
    assert_folds('Я', "я");
    assert_folds('Ѡ', "ѡ");
    assert_folds('\u{0480}', "\u{0481}");
    assert_folds('\u{048A}', "\u{048B}");
    assert_folds('\u{04C1}', "\u{04C2}");
    assert_folds('\u{04C3}', "\u{04C4}");
    assert_folds('\u{04C7}', "\u{04C8}");
    assert_folds('\u{04CB}', "\u{04CC}");
    assert_folds('\u{04D0}', "\u{04D1}");
    assert_folds('\u{04F4}', "\u{04F5}");
    assert_folds('\u{04F8}', "\u{04F9}");
    assert_folds('\u{0500}', "\u{0501}");
    assert_folds('\u{050E}', "\u{050F}");
}

#[test]
fn armenian() {
    assert_folds('Ա', "ա");
    assert_folds('Մ', "մ");
    assert_folds('Ֆ', "ֆ");
    assert_folds('\u{0587}', "\u{0565}\u{0582}");
    assert_folds('\u{FB13}', "\u{0574}\u{0576}");
    assert_folds('\u{FB14}', "\u{0574}\u{0565}");
    assert_folds('\u{FB15}', "\u{0574}\u{056B}");
    assert_folds('\u{FB16}', "\u{057E}\u{0576}");
    assert_folds('\u{FB17}', "\u{0574}\u{056D}");
}

#[test]
fn latin_extended_additional() {
    assert_folds('\u{1E00}', "\u{1E01}");
    assert_folds('\u{1E3C}', "\u{1E3D}");
    assert_folds('\u{1E94}', "\u{1E95}");
    assert_folds('\u{1E96}', "h\u{0331}");
    assert_folds('\u{1E97}', "t\u{0308}");
    assert_folds('\u{1E98}', "w\u{030A}");
    assert_folds('\u{1E99}', "y\u{030A}");
    assert_folds('\u{1E9A}', "a\u{02BE}");
    assert_folds('\u{1E9B}', "\u{1E61}");
    assert_folds('\u{1EA0}', "\u{1EA1}");
    assert_folds('\u{1EF8}', "\u{1EF9}");
}

#[test]
fn greek_extended() {
    assert_folds('\u{1F08}', "\u{1F00}");
    assert_folds('\u{1F1D}', "\u{1F15}");
    assert_folds('\u{1F49}', "\u{1F41}");
    assert_folds('\u{1F50}', "\u{03C5}\u{0313}");
    assert_folds('\u{1F52}', "\u{03C5}\u{0313}\u{0300}");
    assert_folds('\u{1F54}', "\u{03C5}\u{0313}\u{0301}");
    assert_folds('\u{1F56}', "\u{03C5}\u{0313}\u{0342}");
    assert_folds('\u{1F59}', "\u{1F51}");
    assert_folds('\u{1F5F}', "\u{1F57}");
    assert_folds('\u{1F6F}', "\u{1F67}");
    assert_folds('\u{1F80}', "\u{1F00}\u{03B9}");
    assert_folds('\u{1F85}', "\u{1F05}\u{03B9}");
    assert_folds('\u{1F8C}', "\u{1F04}\u{03B9}");
    assert_folds('\u{1F95}', "\u{1F25}\u{03B9}");
    assert_folds('\u{1F9E}', "\u{1F26}\u{03B9}");
    assert_folds('\u{1FA3}', "\u{1F63}\u{03B9}");
    assert_folds('\u{1FAF}', "\u{1F67}\u{03B9}");
    assert_folds('\u{1FB2}', "\u{1F70}\u{03B9}");
    assert_folds('\u{1FB3}', "\u{03B1}\u{03B9}");
    assert_folds('\u{1FB4}', "\u{03AC}\u{03B9}");
    assert_folds('\u{1FB6}', "\u{03B1}\u{0342}");
    assert_folds('\u{1FB7}', "\u{03B1}\u{0342}\u{03B9}");
    assert_folds('\u{1FB8}', "\u{1FB0}");
    assert_folds('\u{1FBA}', "\u{1F70}");
    assert_folds('\u{1FBC}', "\u{03B1}\u{03B9}");
    assert_folds('\u{1FBE}', "\u{03B9}");
    assert_folds('\u{1FC7}', "\u{03B7}\u{0342}\u{03B9}");
    assert_folds('\u{1FCB}', "\u{1F75}");
    assert_folds('\u{1FD3}', "\u{03B9}\u{0308}\u{0301}");
    assert_folds('\u{1FDB}', "\u{1F77}");
    assert_folds('\u{1FE4}', "\u{03C1}\u{0313}");
    assert_folds('\u{1FE7}', "\u{03C5}\u{0308}\u{0342}");
    assert_folds('\u{1FEB}', "\u{1F7B}");
    assert_folds('\u{1FEC}', "\u{1FE5}");
    assert_folds('\u{1FF7}', "\u{03C9}\u{0342}\u{03B9}");
    assert_folds('\u{1FFB}', "\u{1F7D}");
    assert_folds('\u{1FFC}', "\u{03C9}\u{03B9}");
}

#[test]
fn letterlike_symbols() {
    assert_folds('\u{2102}', "c");
    assert_folds('\u{2107}', "\u{025B}");
    assert_folds('\u{210B}', "h");
    assert_folds('\u{2110}', "i");
    assert_folds('\u{2112}', "l");
    assert_folds('\u{2115}', "n");
    assert_folds('\u{2116}', "no");
    assert_folds('\u{2119}', "p");
    assert_folds('\u{211A}', "q");
    assert_folds('\u{211D}', "r");
    assert_folds('\u{2120}', "sm");
    assert_folds('\u{2121}', "tel");
    assert_folds('\u{2122}', "tm");
    assert_folds('\u{2124}', "z");
    assert_folds('\u{2126}', "\u{03C9}");
    assert_folds('\u{2128}', "z");
    assert_folds('\u{212A}', "k");
    assert_folds('\u{212B}', "\u{00E5}");
    assert_folds('\u{212C}', "b");
    assert_folds('\u{2130}', "e");
    assert_folds('\u{2131}', "f");
    assert_folds('\u{2133}', "m");
    assert_folds('\u{213E}', "\u{03B3}");
    assert_folds('\u{213F}', "\u{03C0}");
    assert_folds('\u{2145}', "d");
    assert_folds('\u{20A8}', "rs");
    assert_folds('\u{2103}', "\u{00B0}c");
    assert_folds('\u{2109}', "\u{00B0}f");
}

#[test]
fn squared_units() {
    assert_folds('\u{3371}', "hpa");
    assert_folds('\u{3373}', "au");
    assert_folds('\u{3375}', "ov");
    assert_folds('\u{3380}', "pa");
    assert_folds('\u{3382}', "\u{03BC}a");
    assert_folds('\u{3387}', "gb");
    assert_folds('\u{338A}', "pf");
    assert_folds('\u{3390}', "hz");
    assert_folds('\u{3394}', "thz");
    assert_folds('\u{33A9}', "pa");
    assert_folds('\u{33AB}', "mpa");
    assert_folds('\u{33B6}', "\u{03BC}v");
    assert_folds('\u{33BE}', "kw");
    assert_folds('\u{33C0}', "k\u{03C9}");
    assert_folds('\u{33C3}', "bq");
    assert_folds('\u{33C6}', "c\u{2215}kg");
    assert_folds('\u{33C7}', "co.");
    assert_folds('\u{33C9}', "gy");
    assert_folds('\u{33CB}', "hp");
    assert_folds('\u{33D9}', "ppm");
    assert_folds('\u{33DC}', "sv");
    assert_folds('\u{33DD}', "wb");
}

#[test]
fn latin_ligatures() {
    assert_folds('\u{FB00}', "ff");
    assert_folds('\u{FB01}', "fi");
    assert_folds('\u{FB02}', "fl");
    assert_folds('\u{FB03}', "ffi");
    assert_folds('\u{FB04}', "ffl");
    assert_folds('\u{FB05}', "st");
    assert_folds('\u{FB06}', "st");
}

#[test]
fn number_forms_enclosed_and_fullwidth() {
    for offset in 0..16u32 {
        let numeral = char::from_u32(0x2160 + offset).unwrap();
        let small = char::from_u32(0x2170 + offset).unwrap();
        assert_folds(numeral, &small.to_string());
    }
    for offset in 0..26u32 {
        let circled = char::from_u32(0x24B6 + offset).unwrap();
        let small = char::from_u32(0x24D0 + offset).unwrap();
        assert_folds(circled, &small.to_string());
    }
    for offset in 0..26u32 {
        let fullwidth = char::from_u32(0xFF21 + offset).unwrap();
        let small = char::from_u32(0xFF41 + offset).unwrap();
        assert_folds(fullwidth, &small.to_string());
    }
}

#[test]
fn supplementary_alphabets() {
    for offset in 0..38u32 {
        let deseret = char::from_u32(0x10400 + offset).unwrap();
        let small = char::from_u32(0x10428 + offset).unwrap();
        assert_folds(deseret, &small.to_string());
    }

    assert_folds('\u{1D400}', "a");
    assert_folds('\u{1D419}', "z");
    assert_folds('\u{1D434}', "a");
    assert_folds('\u{1D468}', "a");
    assert_folds('\u{1D49C}', "a");
    assert_folds('\u{1D49E}', "c");
    assert_folds('\u{1D4A2}', "g");
    assert_folds('\u{1D4AE}', "s");
    assert_folds('\u{1D4D0}', "a");
    assert_folds('\u{1D504}', "a");
    assert_folds('\u{1D507}', "d");
    assert_folds('\u{1D516}', "s");
    assert_folds('\u{1D538}', "a");
    assert_folds('\u{1D540}', "i");
    assert_folds('\u{1D546}', "o");
    assert_folds('\u{1D54A}', "s");
    assert_folds('\u{1D56C}', "a");
    assert_folds('\u{1D5A0}', "a");
    assert_folds('\u{1D5D4}', "a");
    assert_folds('\u{1D608}', "a");
    assert_folds('\u{1D63C}', "a");
    assert_folds('\u{1D670}', "a");
    assert_folds('\u{1D689}', "z");
    assert_folds('\u{1D6A8}', "\u{03B1}");
    assert_folds('\u{1D6B8}', "\u{03C1}");
    assert_folds('\u{1D6B9}', "\u{03B8}");
    assert_folds('\u{1D6BA}', "\u{03C3}");
    assert_folds('\u{1D6C0}', "\u{03C9}");
    assert_folds('\u{1D6D3}', "\u{03C3}");
    assert_folds('\u{1D6E2}', "\u{03B1}");
    assert_folds('\u{1D71C}', "\u{03B1}");
    assert_folds('\u{1D756}', "\u{03B1}");
    assert_folds('\u{1D790}', "\u{03B1}");
    assert_folds('\u{1D7A3}', "\u{03C4}");
}

#[test]
fn folding_survives_the_whole_pipeline() {
    // The fold output feeds normalization, so a full prepare of a folded
    // character composes where NFKC composes.
    let prepared = prepare(
        "\u{0390}".as_bytes(),
        AssertionType::SubstringAny,
        CasePolicy::CaseInsensitive,
    )
    .unwrap();
    assert_eq!(prepared, "\u{0390}");

    // The iota emitted by the ypogegrammeni folds is the full letter, so
    // it stays a letter of its own rather than recomposing.
    let prepared = prepare(
        "\u{1F88}".as_bytes(),
        AssertionType::SubstringAny,
        CasePolicy::CaseInsensitive,
    )
    .unwrap();
    assert_eq!(prepared, "\u{1F00}\u{03B9}");
}
