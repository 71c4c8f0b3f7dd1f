//! # Quantity annotation
//!
//! Assigns each resyllabified syllable a phonetic quantity. A syllable
//! closed by a consonant is long by position; an open syllable is long only
//! if its vowel content weighs enough (a diphthong, or a macron vowel).

use crate::syllable::classify::{char_is_vowel, lower};
use crate::types::{Quantity, RawSyllable, RhythmStats, VerseSyllable};
use crate::verse::ELISION_MARKER;

/// Turns the resyllabified syllables of one verse into [`VerseSyllable`]s,
/// accumulating rhythm statistics along the way.
pub(crate) fn annotate(syllables: Vec<RawSyllable>) -> (Vec<VerseSyllable>, RhythmStats) {
    let mut stats = RhythmStats::default();
    let mut out = Vec::with_capacity(syllables.len());

    for syllable in syllables {
        let quantity = quantity_of(&syllable);
        stats.record(quantity);
        out.push(VerseSyllable {
            value: syllable.value,
            begin: syllable.begin,
            end: syllable.end,
            quantity,
        });
    }

    (out, stats)
}

/// Weighs one syllable.
///
/// Closed syllables (final consonant) are long by position. For open ones,
/// vowels are weighed left to right: a plain vowel counts 1, a macron vowel
/// 2, a breve vowel 0, and anything swallowed by the spelling (the `u` of a
/// `qu`/`gu` cluster, a leading sneaky semivowel) 0. An elision marker
/// restarts the count, since only the surviving vowel sounds. Two or more
/// makes the syllable long.
fn quantity_of(syllable: &RawSyllable) -> Quantity {
    let chars: Vec<char> = syllable.value.chars().collect();

    if !chars.last().copied().is_some_and(char_is_vowel) {
        return Quantity::Long;
    }

    let sneaky = syllable.starts_with_sneaky_semivowel();
    let mut weight = 0u32;

    for (i, &c) in chars.iter().enumerate() {
        match lower(c) {
            'i' => {
                if !(i == 0 && sneaky) {
                    weight += 1;
                }
            }
            'u' => {
                let after_qg = i > 0 && matches!(lower(chars[i - 1]), 'q' | 'g');
                let before_vowel = chars.get(i + 1).copied().is_some_and(char_is_vowel);
                if !((i == 0 && sneaky) || (after_qg && before_vowel)) {
                    weight += 1;
                }
            }
            'a' | 'e' | 'o' | 'y' => weight += 1,
            'ā' | 'ē' | 'ī' | 'ō' | 'ū' | 'ȳ' => weight += 2,
            c if c == ELISION_MARKER => weight = 0,
            _ => {}
        }
    }

    if weight > 1 {
        Quantity::Long
    } else {
        Quantity::Short
    }
}
