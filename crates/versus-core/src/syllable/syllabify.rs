//! # Word syllabification
//!
//! A single left-to-right pass over a word, accumulating characters into
//! the current syllable and closing it whenever the classifiers say a
//! boundary has been reached. Two families of exceptions (indivisible
//! prefixes up front, `cu`/`hu` merges at the end) are handled outside the
//! main loop.

use tracing::trace;

use crate::syllable::classify::{
    consonant_starts_next, is_diphthong, is_th, is_vowel, liquid_consonant, long_coda, lower,
    nj_cluster, prefix_len, sneaky_semivowel, strip_trema, vowel_ahead, vowel_nucleus,
};
use crate::types::{RawSyllable, SyllableFlags, WordPosition};

/// Splits a single word into syllables.
///
/// The returned values are normalized (diaeresis marks removed) but
/// otherwise preserve the spelling of the input, including case and
/// macron/breve marks. `offset` shifts the reported character spans so
/// that they index into the line the word was cut from; spans tile the
/// word exactly, in order.
///
/// The first syllable is tagged as a word start and the last one as a word
/// end. An empty word yields no syllables.
///
/// ```
/// let syllables = versus_core::syllabify("amīcus", 0);
/// let values: Vec<&str> = syllables.iter().map(|s| s.value.as_str()).collect();
/// assert_eq!(values, ["a", "mī", "cus"]);
/// ```
#[must_use]
pub fn syllabify(word: &str, offset: usize) -> Vec<RawSyllable> {
    let chars: Vec<char> = word.chars().collect();
    syllabify_chars(&chars, offset)
}

/// Implementation of [`syllabify`] over an already decoded word, so callers
/// slicing words out of a larger line avoid re-collecting.
pub(crate) fn syllabify_chars(word: &[char], offset: usize) -> Vec<RawSyllable> {
    let len = word.len();
    if len == 0 {
        return Vec::new();
    }

    let mut out: Vec<RawSyllable> = Vec::new();
    let mut syllable = String::new();
    let mut flags = SyllableFlags::NONE;
    let mut begin = 0;
    let mut vowel = false;
    let mut i = 0;

    // An indivisible prefix is taken verbatim as the first syllable.
    let prefix = prefix_len(word);
    if prefix > 0 && prefix < len {
        out.push(RawSyllable {
            value: word[..prefix].iter().map(|&c| strip_trema(c)).collect(),
            begin: offset,
            end: prefix + offset,
            position: WordPosition::NONE,
            flags: SyllableFlags::NONE,
        });
        begin = prefix;
        i = prefix;
    }

    while i < len {
        let c = word[i];

        if vowel {
            if is_vowel(word, i, false) {
                // A second vowel either extends the nucleus (diphthong),
                // reveals the previous i/u to be a semivowel, or closes the
                // syllable right before it.
                let sneaky = sneaky_semivowel(word, &syllable, i);
                if sneaky {
                    flags.insert(SyllableFlags::SNEAKY_SEMIVOWEL);
                } else if !is_diphthong(word, i) {
                    out.push(RawSyllable {
                        value: std::mem::take(&mut syllable),
                        begin: begin + offset,
                        end: i + offset,
                        position: WordPosition::NONE,
                        flags: std::mem::take(&mut flags),
                    });
                    begin = i;
                }
            } else {
                vowel = false;

                if consonant_starts_next(word, i)
                    || nj_cluster(word, i)
                    || is_th(word, i)
                    || liquid_consonant(word, i)
                {
                    // This consonant opens the next syllable.
                    out.push(RawSyllable {
                        value: std::mem::take(&mut syllable),
                        begin: begin + offset,
                        end: i + offset,
                        position: WordPosition::NONE,
                        flags: std::mem::take(&mut flags),
                    });
                    begin = i;
                } else if vowel_ahead(word, i + 1) {
                    // This consonant closes the current syllable, and a
                    // long coda drags the next one along with it.
                    syllable.push(strip_trema(c));
                    let mut close = i + 1;
                    if long_coda(word, i) {
                        syllable.push(strip_trema(word[i + 1]));
                        close = i + 2;
                    }
                    out.push(RawSyllable {
                        value: std::mem::take(&mut syllable),
                        begin: begin + offset,
                        end: close + offset,
                        position: WordPosition::NONE,
                        flags: std::mem::take(&mut flags),
                    });
                    begin = close;
                    i = close;
                    continue;
                }
                // No vowel ahead: the trailing consonants pile onto the
                // current syllable.
            }
        } else if vowel_nucleus(word, i) {
            vowel = true;
        }

        syllable.push(strip_trema(c));
        i += 1;
    }

    if !syllable.is_empty() {
        out.push(RawSyllable {
            value: syllable,
            begin: begin + offset,
            end: len + offset,
            position: WordPosition::END,
            flags,
        });
    }

    merge_exceptions(&mut out);

    out[0].position.insert(WordPosition::START);
    if out.len() == 1 {
        out[0].position.insert(WordPosition::END);
    }

    trace!(word = %word.iter().collect::<String>(), syllables = out.len(), "syllabified");
    out
}

// A handful of words around the cui/huic pronouns defeat the general
// algorithm, which splits their u-i sequence. They are stitched back
// together here: a trailing `cu|i` or `hu|ic` pair merges, and so does a
// leading `cu|i` (for the genitive cuius and friends).
fn merge_exceptions(out: &mut Vec<RawSyllable>) {
    let matches_pair = |prev: &RawSyllable, last: &RawSyllable, p: &str, l: &str| {
        prev.value.chars().map(lower).eq(p.chars()) && last.value.chars().map(lower).eq(l.chars())
    };

    let n = out.len();
    if n >= 2
        && (matches_pair(&out[n - 2], &out[n - 1], "cu", "i")
            || matches_pair(&out[n - 2], &out[n - 1], "hu", "ic"))
    {
        if let Some(last) = out.pop() {
            if let Some(prev) = out.last_mut() {
                prev.value.push_str(&last.value);
                prev.end = last.end;
                prev.position |= last.position;
                prev.flags |= last.flags;
            }
        }
    }

    if out.len() >= 2 && matches_pair(&out[0], &out[1], "cu", "i") {
        let second = out.remove(1);
        out[0].value.push_str(&second.value);
        out[0].end = second.end;
        out[0].position |= second.position;
        out[0].flags |= second.flags;
    }
}
