//! # Character classification for Latin words
//!
//! Stateless predicates over a word (as a slice of chars) and an index.
//! These are the building blocks the syllabifier uses to decide where a
//! syllable boundary falls. Out-of-range indices are never an error: they
//! simply fail the predicate.
//!
//! Everything here is case-insensitive and understands the marked vowel
//! spellings found in edited Latin text: macron (`ā`), breve (`ă`), and
//! diaeresis (`ä`).

/// Lowercases a single character.
pub(crate) fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn lower_at(word: &[char], i: usize) -> Option<char> {
    word.get(i).copied().map(lower)
}

/// Returns `true` if the given character is a vowel letter, in any of its
/// plain, macron, breve, or diaeresis spellings.
pub(crate) fn char_is_vowel(c: char) -> bool {
    matches!(
        lower(c),
        'a' | 'ā'
            | 'ă'
            | 'ä'
            | 'e'
            | 'ē'
            | 'ĕ'
            | 'ë'
            | 'i'
            | 'ī'
            | 'ĭ'
            | 'ï'
            | 'o'
            | 'ō'
            | 'ŏ'
            | 'ö'
            | 'u'
            | 'ū'
            | 'ŭ'
            | 'ü'
            | 'y'
            | 'ȳ'
            | 'ў'
            | 'ÿ'
    )
}

fn is_semivowel(word: &[char], i: usize) -> bool {
    matches!(lower_at(word, i), Some('j' | 'v'))
}

/// Returns `true` if the word contains a vowel at the given index. When
/// `accept_semivowel` is set, the explicit semivowel spellings `j` and `v`
/// also count (useful for marked-up verse such as `Lā|vī|nja|que`).
pub(crate) fn is_vowel(word: &[char], i: usize, accept_semivowel: bool) -> bool {
    match word.get(i) {
        Some(&c) => char_is_vowel(c) || (accept_semivowel && is_semivowel(word, i)),
        None => false,
    }
}

/// Returns `true` if the character at the given index acts as a vowel
/// nucleus: either a plain vowel, or a semivowel spelling that is not
/// followed by a vowel. The `V` of `RVM` is a nucleus; the `v` of `vit` is
/// a consonant.
pub(crate) fn vowel_nucleus(word: &[char], i: usize) -> bool {
    is_vowel(word, i, false) || (is_semivowel(word, i) && !is_vowel(word, i + 1, true))
}

/// Returns `true` if the vowel at the given index continues a diphthong
/// opened by the previous character (e.g. for `aestās` this only holds at
/// index 1).
///
/// The recognized pairs are ae, au, ei, eu, oe. A preceding `u`/`v` only
/// continues the syllable inside a `qu-`/`gu-` cluster, where any following
/// vowel belongs to the same syllable; the bare `ui` sequence is left to the
/// general algorithm (and to the `cu`/`hu` merge exceptions) instead of
/// being treated as a diphthong here.
pub(crate) fn is_diphthong(word: &[char], i: usize) -> bool {
    if i == 0 {
        return false;
    }
    let Some(c) = lower_at(word, i) else {
        return false;
    };

    match lower(word[i - 1]) {
        'a' | 'ă' => c == 'e' || c == 'u',
        'e' | 'ĕ' => c == 'i' || c == 'u',
        'o' | 'ŏ' => c == 'e',
        'u' | 'ŭ' | 'v' => {
            i >= 2
                && matches!(lower(word[i - 2]), 'q' | 'g')
                && is_vowel(word, i, false)
        }
        _ => false,
    }
}

/// Returns `true` if there is at least one vowel at or after the given index.
pub(crate) fn vowel_ahead(word: &[char], i: usize) -> bool {
    (i..word.len()).any(|j| is_vowel(word, j, false))
}

/// Returns `true` if the consonant at the given index is a stop followed by
/// a liquid (`l` or `r`), forming an atomic cluster that opens the next
/// syllable (e.g. the `cr` of `alacris`).
pub(crate) fn liquid_consonant(word: &[char], i: usize) -> bool {
    if !matches!(lower_at(word, i + 1), Some('l' | 'r')) {
        return false;
    }
    matches!(
        lower_at(word, i),
        Some('b' | 'c' | 'd' | 'f' | 'g' | 'k' | 'p' | 't' | 'z')
    )
}

/// Returns `true` for a `th` cluster at the given index, which always opens
/// the next syllable (`Cy|the|rē|a`).
pub(crate) fn is_th(word: &[char], i: usize) -> bool {
    lower_at(word, i) == Some('t') && lower_at(word, i + 1) == Some('h')
}

/// Returns `true` for an `n` + `i`/`j` + vowel cluster at the given index.
/// The `n` opens the next syllable even though the `i`/`j` after it is a
/// consonantal semivowel (`Lā|vī|nja|que`).
pub(crate) fn nj_cluster(word: &[char], i: usize) -> bool {
    lower_at(word, i) == Some('n')
        && matches!(lower_at(word, i + 1), Some('i' | 'j'))
        && is_vowel(word, i + 2, false)
}

/// Returns `true` if the consonant at the given index belongs to the next
/// syllable. This holds when what follows it is a vowel nucleus: a plain
/// vowel, a semivowel spelling acting as a vowel (`VI|RVM`), or a
/// `qu-`/`gu-` cluster in front of a vowel (covers `qv` spellings such as
/// `qvo|qve`).
pub(crate) fn consonant_starts_next(word: &[char], i: usize) -> bool {
    if is_vowel(word, i + 1, false) {
        return true;
    }
    if is_semivowel(word, i + 1) && !is_vowel(word, i + 2, true) {
        return true;
    }
    matches!(lower_at(word, i), Some('q' | 'g'))
        && matches!(lower_at(word, i + 1), Some('u' | 'v'))
        && is_vowel(word, i + 2, false)
}

/// Returns `true` if the consonant at the given index starts a long coda:
/// a `b` or `n` followed by two more consonants. The syllable then keeps
/// both this consonant and the next one (`obs|cū|rus`, `iūnc|tā|rum`).
pub(crate) fn long_coda(word: &[char], i: usize) -> bool {
    matches!(lower_at(word, i), Some('b' | 'n'))
        && i + 2 < word.len()
        && !is_vowel(word, i + 1, true)
        && !is_vowel(word, i + 2, true)
}

/// Returns the length of a leading indivisible prefix, or 0 if the word has
/// none. Such prefixes count as an atomic syllable regardless of what the
/// main algorithm would make of them. Currently only `in-` qualifies.
pub(crate) fn prefix_len(word: &[char]) -> usize {
    if lower_at(word, 0) == Some('i') && lower_at(word, 1) == Some('n') {
        2
    } else {
        0
    }
}

/// Returns `true` if the vowel at the given index reveals that the syllable
/// accumulated so far is really a semivowel written with `i` or `u` instead
/// of `j` or `v` (the `iu` of `iuvat` sounds like `ju`).
pub(crate) fn sneaky_semivowel(word: &[char], current: &str, i: usize) -> bool {
    let mut chars = current.chars().map(lower);
    let head = chars.next();
    if chars.next().is_some() || !matches!(head, Some('i' | 'u')) {
        return false;
    }
    is_vowel(word, i, false)
}

/// Returns `true` if the character belongs to a word: an ASCII Latin letter
/// or any marked vowel. Everything else is an inert separator.
pub(crate) fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || char_is_vowel(c)
}

/// Normalizes a diaeresis vowel to its plain form, preserving case. Any
/// other character is returned unchanged.
pub(crate) fn strip_trema(c: char) -> char {
    match c {
        'ä' => 'a',
        'ë' => 'e',
        'ï' => 'i',
        'ö' => 'o',
        'ü' => 'u',
        'ÿ' => 'y',
        'Ä' => 'A',
        'Ë' => 'E',
        'Ï' => 'I',
        'Ö' => 'O',
        'Ü' => 'U',
        'Ÿ' => 'Y',
        _ => c,
    }
}
