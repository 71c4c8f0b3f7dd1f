//! # Resyllabification across word boundaries
//!
//! Within a verse, words are not pronounced in isolation: a word-final
//! consonant jumps onto a following vowel-initial word, and a word-final
//! vowel (or vowel + `m`) elides into it. This pass rewrites the flat
//! syllable sequence of a verse accordingly.

use tracing::trace;

use crate::syllable::classify::{char_is_vowel, lower};
use crate::types::{RawSyllable, WordPosition};
use crate::verse::ELISION_MARKER;

/// Merges syllables across word boundaries within one verse.
///
/// For each word-end/word-start pair where the next word begins with a
/// vowel (or `h`):
///
/// - if the previous syllable ends in a vowel, or in `m` preceded by a
///   vowel, the two syllables elide: the new syllable keeps that final
///   character, the elision marker, and the following syllable's text, and
///   spans both originals;
/// - otherwise the final consonant resyllabifies: it moves to the front of
///   the following syllable and the spans shift by one character.
///
/// Syllables opening with a sneaky semivowel consume neither: their written
/// vowel sounds like a consonant.
pub(crate) fn resyllabify(syllables: Vec<RawSyllable>) -> Vec<RawSyllable> {
    let mut out: Vec<RawSyllable> = Vec::with_capacity(syllables.len());

    for mut cur in syllables {
        let Some(prev) = out.last_mut() else {
            out.push(cur);
            continue;
        };

        if prev.is_word_end()
            && cur.is_word_start()
            && !cur.starts_with_sneaky_semivowel()
            && opens_with_vocalic(&cur)
        {
            if let Some(ult) = prev.value.chars().last() {
                if char_is_vowel(ult) || (lower(ult) == 'm' && penult_is_vowel(&prev.value)) {
                    trace!(left = %prev.value, right = %cur.value, "eliding");
                    let mut merged = String::with_capacity(cur.value.len() + 2);
                    merged.push(ult);
                    merged.push(ELISION_MARKER);
                    merged.push_str(&cur.value);
                    cur.value = merged;
                    cur.begin = prev.begin;
                    prev.position.insert(WordPosition::DIRTY);
                    cur.position.insert(WordPosition::MERGED);
                } else {
                    trace!(consonant = %ult, onto = %cur.value, "resyllabifying");
                    prev.value.pop();
                    cur.value.insert(0, ult);
                    cur.begin = prev.end - 1;
                    prev.end -= 1;
                }
            }
        }

        out.push(cur);
    }

    out.retain(|s| !s.is_dirty());
    out
}

// A word can be consumed by the previous one when it opens with a vowel or
// a (silent) h.
fn opens_with_vocalic(syllable: &RawSyllable) -> bool {
    match syllable.value.chars().next() {
        Some(c) => char_is_vowel(c) || lower(c) == 'h',
        None => false,
    }
}

fn penult_is_vowel(value: &str) -> bool {
    value.chars().rev().nth(1).is_some_and(char_is_vowel)
}
