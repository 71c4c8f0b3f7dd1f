//! # The scanning pipeline
//!
//! Ties everything together: split the input into verse lines, syllabify
//! each word in place, resyllabify across word boundaries, weigh the
//! syllables, and classify the result.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::syllable::classify::{is_alpha, strip_trema};
use crate::syllable::syllabify_chars;
use crate::types::{Poem, Verse};
use crate::verse::meter::{analyze, figure_out_rhythm};
use crate::verse::quantity::annotate;
use crate::verse::resyllabify::resyllabify;

// Verse separators: newlines, or the slashes conventionally used when
// quoting verse inline.
static LINE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n/]+").unwrap());

/// Scans a text of Latin verse.
///
/// Lines are cut at newlines or slashes; blank lines are skipped. Each
/// remaining line becomes one [`Verse`], with syllable offsets indexing
/// (in chars) into that verse's `line` field, which is the input line with
/// diaeresis vowels normalized. Any character that is not a Latin letter or
/// a marked vowel just separates words.
///
/// Scanning never fails: input that fits no known meter comes back tagged
/// [`MeterKind::Unknown`](crate::MeterKind::Unknown).
///
/// ```
/// use versus_core::MeterKind;
///
/// let poem = versus_core::scan("Arma virumque canō, Trōiae quī prīmus ab ōrīs");
/// assert_eq!(poem.kind, MeterKind::DactylicHexameter);
/// assert_eq!(poem.verses[0].syllables.len(), 15);
/// ```
#[must_use]
pub fn scan(text: &str) -> Poem {
    let mut verses = Vec::new();

    for line in LINE_SPLIT.split(text) {
        if line.trim().is_empty() {
            continue;
        }
        verses.push(scan_line(line));
    }

    analyze(verses)
}

fn scan_line(line: &str) -> Verse {
    let chars: Vec<char> = line.chars().collect();
    let mut raw = Vec::new();

    let mut start = None;
    for (i, &c) in chars.iter().enumerate() {
        match (start, is_alpha(c)) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                raw.extend(syllabify_chars(&chars[s..i], s));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        raw.extend(syllabify_chars(&chars[s..], s));
    }

    let (syllables, stats) = annotate(resyllabify(raw));
    let kind = figure_out_rhythm(&stats);
    debug!(%kind, syllables = syllables.len(), "verse scanned");

    Verse {
        syllables,
        kind,
        line: chars.iter().map(|&c| strip_trema(c)).collect(),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MeterKind;

    #[test]
    fn hexameter_line() {
        let poem = scan("Arma virumque canō, Trōiae quī prīmus ab ōrīs");
        assert_eq!(poem.kind, MeterKind::DactylicHexameter);
        assert_eq!(poem.verses.len(), 1);

        let verse = &poem.verses[0];
        assert_eq!(verse.kind, MeterKind::DactylicHexameter);
        assert_eq!(verse.syllables.len(), 15);
        assert_eq!(verse.stats.total(), 15);
        let values: Vec<&str> = verse.syllables.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(
            values,
            [
                "Ar", "ma", "vi", "rum", "que", "ca", "nō", "Trō", "iae", "quī", "prī", "mu",
                "sa", "bō", "rīs"
            ]
        );
    }

    #[test]
    fn hexameter_with_marked_semivowels() {
        let poem = scan("Ītaliam fātō profugus Lāvīnjaque vēnit");
        assert_eq!(poem.kind, MeterKind::DactylicHexameter);
    }

    #[test]
    fn two_hexameters_make_a_hexameter_poem() {
        let poem = scan(
            "Arma virumque canō, Trōiae quī prīmus ab ōrīs\n\
             Ītaliam fātō profugus Lāvīnjaque vēnit",
        );
        assert_eq!(poem.kind, MeterKind::DactylicHexameter);
        assert!(poem
            .verses
            .iter()
            .all(|v| v.kind == MeterKind::DactylicHexameter));
    }

    #[test]
    fn adonic_endings() {
        use crate::types::Quantity::{Long, Short};

        // lambi|t Hydaspēs: the t resyllabifies before the (silent) h.
        let poem = scan("lambit Hydaspēs");
        assert_eq!(poem.verses[0].stats.pattern, [Long, Short, Short, Long, Long]);

        // corpor(e) in ūnō: elision, then the n splits onto ūnō.
        let poem = scan("corpore in ūnō");
        assert_eq!(poem.verses[0].stats.pattern, [Long, Short, Short, Long, Long]);
    }

    #[test]
    fn pentameter_line() {
        let poem = scan("Mūsa per undēnōs ēmodulanda pedēs");
        assert_eq!(poem.kind, MeterKind::DactylicPentameter);
        assert_eq!(poem.verses[0].stats.total(), 13);
    }

    #[test]
    fn elegiac_couplet() {
        let poem = scan(
            "Arma virumque canō, Trōiae quī prīmus ab ōrīs\n\
             Mūsa per undēnōs ēmodulanda pedēs",
        );
        assert_eq!(poem.kind, MeterKind::ElegiacCouplet);
        assert_eq!(poem.verses[0].kind, MeterKind::DactylicHexameter);
        assert_eq!(poem.verses[1].kind, MeterKind::DactylicPentameter);
    }

    #[test]
    fn slashes_separate_verses() {
        let poem = scan("Arma virumque canō / Mūsa per undēnōs");
        assert_eq!(poem.verses.len(), 2);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let poem = scan("\n\n  \nArma virumque canō\n\n");
        assert_eq!(poem.verses.len(), 1);
    }

    #[test]
    fn empty_input_is_an_empty_unknown_poem() {
        let poem = scan("");
        assert!(poem.verses.is_empty());
        assert_eq!(poem.kind, MeterKind::Unknown);
    }

    #[test]
    fn prose_is_unknown_but_still_scanned() {
        let poem = scan("gallia est omnis dīvīsa in partēs trēs");
        assert_eq!(poem.kind, MeterKind::Unknown);
        assert!(!poem.verses[0].syllables.is_empty());
    }

    #[test]
    fn offsets_index_into_the_line() {
        let poem = scan("arma virumque");
        let verse = &poem.verses[0];
        let line: Vec<char> = verse.line.chars().collect();
        for syllable in &verse.syllables {
            let span: String = line[syllable.begin..syllable.end].iter().collect();
            assert_eq!(span, syllable.value);
        }
    }

    #[test]
    fn diaeresis_is_normalized_in_line_and_syllables() {
        let poem = scan("aëris meüs");
        let verse = &poem.verses[0];
        assert_eq!(verse.line, "aeris meus");
        assert!(verse.syllables.iter().all(|s| !s.value.contains('ë')));
    }

    #[test]
    fn punctuation_separates_words() {
        let poem = scan("arma, virumque; canō.");
        let values: Vec<&str> = poem.verses[0]
            .syllables
            .iter()
            .map(|s| s.value.as_str())
            .collect();
        assert_eq!(values, ["ar", "ma", "vi", "rum", "que", "ca", "nō"]);
    }
}
