//! # versus-core
//!
//! A rule-based scansion engine for Latin verse.
//!
//! Given a text, the engine splits each line into words, each word into
//! syllables, merges syllables across word boundaries the way a reader
//! would pronounce them (elision and resyllabification), weighs every
//! syllable long or short, and finally matches the resulting rhythm
//! against the dactylic meters.
//!
//! ```
//! use versus_core::{scan, MeterKind, Quantity};
//!
//! let poem = scan("Arma virumque canō, Trōiae quī prīmus ab ōrīs");
//!
//! assert_eq!(poem.kind, MeterKind::DactylicHexameter);
//!
//! let verse = &poem.verses[0];
//! assert_eq!(verse.syllables[0].value, "Ar");
//! assert_eq!(verse.syllables[0].quantity, Quantity::Long);
//! ```
//!
//! Scanning is infallible: text that fits no known meter is still fully
//! syllabified and weighed, just tagged [`MeterKind::Unknown`].
//!
//! The engine expects edited Latin text: macrons (`ā`) mark long vowels,
//! breves (`ă`) explicit shorts, and a diaeresis (`ë`) a vowel pronounced
//! in hiatus. The semivowel spellings `j` and `v` are understood, and bare
//! `i`/`u` acting as semivowels are detected where possible.

pub mod syllable;
pub mod types;
pub mod verse;

pub use syllable::syllabify;
pub use types::{
    MeterKind, Poem, Quantity, RawSyllable, RhythmStats, SyllableFlags, Verse, VerseSyllable,
    WordPosition,
};
pub use verse::{is_enclitic_dactyl, scan, ELISION_MARKER};
