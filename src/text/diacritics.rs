//! Folding of accented Latin letters to their ASCII base letters.
//!
//! Only the letters listed in [`DIACRITICS`] are folded; everything else,
//! including Greek, Cyrillic and CJK text, passes through untouched. This is
//! deliberately not Unicode normalization: combining marks are not stripped
//! and no other script is transliterated.
//!
//! The table is declared per base letter. At compile time it is inverted into
//! a dense array indexed by code point, so [`remove_diacritics`] is a single
//! pass over the input with one array lookup per non-ASCII character.

use alloc::borrow::Cow;
use alloc::string::String;
use core::ops::RangeInclusive;

/// Base letters and the accented code points that fold to them.
///
/// No code point appears under more than one base; this is checked when the
/// lookup array is built, at compile time.
pub const DIACRITICS: &[(&str, &[RangeInclusive<char>])] = &[
    ("A", &['\u{C0}'..='\u{C5}']),
    ("AE", &['\u{C6}'..='\u{C6}']),
    ("C", &['\u{C7}'..='\u{C7}']),
    ("D", &['\u{D0}'..='\u{D0}']),
    ("E", &['\u{C8}'..='\u{CB}']),
    ("I", &['\u{CC}'..='\u{CF}']),
    ("N", &['\u{D1}'..='\u{D1}']),
    ("O", &['\u{D2}'..='\u{D6}', '\u{D8}'..='\u{D8}']),
    ("OE", &['\u{152}'..='\u{152}']),
    ("S", &['\u{160}'..='\u{160}']),
    ("U", &['\u{D9}'..='\u{DC}']),
    ("Y", &['\u{DD}'..='\u{DD}']),
    ("Z", &['\u{17D}'..='\u{17D}']),
    ("a", &['\u{E0}'..='\u{E5}']),
    ("ae", &['\u{E6}'..='\u{E6}']),
    ("c", &['\u{E7}'..='\u{E7}']),
    ("d", &['\u{F0}'..='\u{F0}']),
    ("e", &['\u{E8}'..='\u{EB}']),
    ("i", &['\u{EC}'..='\u{EF}']),
    ("n", &['\u{F1}'..='\u{F1}']),
    ("o", &['\u{F2}'..='\u{F6}', '\u{F8}'..='\u{F8}']),
    ("oe", &['\u{153}'..='\u{153}']),
    ("s", &['\u{161}'..='\u{161}']),
    ("u", &['\u{F9}'..='\u{FC}']),
    ("y", &['\u{FD}'..='\u{FD}', '\u{FF}'..='\u{FF}']),
    ("z", &['\u{17E}'..='\u{17E}']),
    ("ss", &['\u{DF}'..='\u{DF}']),
];

/// First and last code point covered by the lookup array.
const FOLD_FIRST: u32 = 0xC0;
const FOLD_LAST: u32 = 0x17E;
const FOLD_LEN: usize = (FOLD_LAST - FOLD_FIRST + 1) as usize;

static FOLDS: [Option<&str>; FOLD_LEN] = build_folds();

const fn build_folds() -> [Option<&'static str>; FOLD_LEN] {
    let mut folds: [Option<&'static str>; FOLD_LEN] = [None; FOLD_LEN];
    let mut i = 0;
    while i < DIACRITICS.len() {
        let (base, ranges) = DIACRITICS[i];
        let mut j = 0;
        while j < ranges.len() {
            let start = *ranges[j].start() as u32;
            let end = *ranges[j].end() as u32;
            assert!(
                start >= FOLD_FIRST && end <= FOLD_LAST && start <= end,
                "diacritic range outside the lookup window"
            );
            let mut cp = start;
            while cp <= end {
                let slot = (cp - FOLD_FIRST) as usize;
                assert!(folds[slot].is_none(), "overlapping diacritic ranges");
                folds[slot] = Some(base);
                cp += 1;
            }
            j += 1;
        }
        i += 1;
    }
    folds
}

/// ASCII replacement for `c`, if it is a folded letter.
///
/// ```
/// use textcodec::text::diacritics::fold_char;
///
/// assert_eq!(fold_char('é'), Some("e"));
/// assert_eq!(fold_char('Œ'), Some("OE"));
/// assert_eq!(fold_char('ß'), Some("ss"));
/// assert_eq!(fold_char('Ω'), None);
/// assert_eq!(fold_char('e'), None);
/// ```
#[inline]
pub fn fold_char(c: char) -> Option<&'static str> {
    let cp = c as u32;
    if !(FOLD_FIRST..=FOLD_LAST).contains(&cp) {
        return None;
    }
    FOLDS[(cp - FOLD_FIRST) as usize]
}

/// Replace accented Latin letters with their unaccented ASCII equivalents.
///
/// Text without any folded letter is returned borrowed.
///
/// ```
/// use textcodec::remove_diacritics;
///
/// assert_eq!(remove_diacritics("café"), "cafe");
/// assert_eq!(remove_diacritics("naïve œuf"), "naive oeuf");
/// assert_eq!(remove_diacritics("Straße"), "Strasse");
/// assert_eq!(remove_diacritics("Ωmega"), "Ωmega");
/// ```
pub fn remove_diacritics(text: &str) -> Cow<'_, str> {
    let Some(split) = text
        .char_indices()
        .find_map(|(offset, c)| fold_char(c).map(|_| offset))
    else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..split]);
    for c in text[split..].chars() {
        match fold_char(c) {
            Some(base) => out.push_str(base),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn empty() {
        assert_eq!(remove_diacritics(""), "");
    }

    #[test]
    fn ascii_is_borrowed() {
        let out = remove_diacritics("Hello, world");
        assert!(matches!(out, Cow::Borrowed("Hello, world")));
    }

    #[test]
    fn single_letters() {
        assert_eq!(remove_diacritics("café"), "cafe");
        assert_eq!(remove_diacritics("ÀÉÎ"), "AEI");
        assert_eq!(remove_diacritics("naïve œuf"), "naive oeuf");
    }

    #[test]
    fn digraphs() {
        assert_eq!(remove_diacritics("Æsir Œdipe ßeta æon"), "AEsir OEdipe sseta aeon");
    }

    #[test]
    fn latin_extended_a_entries() {
        assert_eq!(remove_diacritics("Škoda Žižek šal"), "Skoda Zizek sal");
    }

    #[test]
    fn unlisted_characters_untouched() {
        // Multiplication/division signs sit between the letters, thorn has no entry,
        // ą is Latin Extended-A but not in the table.
        assert_eq!(remove_diacritics("× ÷ Þ þ ą"), "× ÷ Þ þ ą");
        assert_eq!(remove_diacritics("Ω Ж 日本"), "Ω Ж 日本");
        // Combining marks are not normalization targets.
        assert_eq!(remove_diacritics("e\u{301}"), "e\u{301}");
    }

    #[test]
    fn prefix_before_first_fold_is_kept() {
        assert_eq!(remove_diacritics("日本 résumé"), "日本 resume");
    }

    #[test]
    fn full_latin1_upper_half() {
        let input: String = ('\u{C0}'..='\u{FF}').collect();
        let expected = "AAAAAAAECEEEEIIIIDNOOOOO×OUUUUYÞss\
                        aaaaaaaeceeeeiiiidnooooo÷ouuuuyþy";
        assert_eq!(remove_diacritics(&input), expected);
    }

    #[test]
    fn table_matches_lookup() {
        let mut mapped = 0;
        for (base, ranges) in DIACRITICS {
            assert!(base.is_ascii() && !base.is_empty());
            for range in ranges.iter() {
                for c in range.clone() {
                    assert_eq!(fold_char(c), Some(*base), "{:?}", c);
                    mapped += 1;
                }
            }
        }
        let in_lookup = FOLDS.iter().filter(|f| f.is_some()).count();
        assert_eq!(mapped, in_lookup);
    }

    #[test]
    fn output_has_no_folded_letters_left() {
        let input: String = (0xA0..=0x17F).filter_map(char::from_u32).collect();
        let out = remove_diacritics(&input);
        let left: Vec<char> = out.chars().filter(|&c| fold_char(c).is_some()).collect();
        assert!(left.is_empty());
    }
}
