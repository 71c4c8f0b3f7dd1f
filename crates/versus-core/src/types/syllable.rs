use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Position tags for a syllable within its word.
///
/// A syllable can carry several tags at once: a monosyllable is both the
/// start and the end of its word (`START | END`), and resyllabification
/// stacks `MERGED` on top of whatever the syllable already had. `DIRTY` and
/// `MERGED` are transient: they only ever appear while a verse is being
/// resyllabified, and no `DIRTY` syllable survives that stage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WordPosition(u8);

impl WordPosition {
    /// Nothing special: the syllable sits in the middle of its word.
    pub const NONE: Self = Self(0);
    /// First syllable of a word.
    pub const START: Self = Self(1 << 1);
    /// Last syllable of a word.
    pub const END: Self = Self(1 << 2);
    /// Discarded during resyllabification (e.g. the left side of an elision).
    pub const DIRTY: Self = Self(1 << 3);
    /// Result of merging two syllables across a word boundary.
    pub const MERGED: Self = Self(1 << 4);

    /// Returns `true` if every tag in `other` is set on `self`.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Adds the tags in `other` to `self`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitOr for WordPosition {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for WordPosition {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Flags for special quirks of a syllable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SyllableFlags(u8);

impl SyllableFlags {
    /// No quirks.
    pub const NONE: Self = Self(0);
    /// The syllable appears to start with the vowel `i` or `u`, but that
    /// letter is really the semivowel `j`/`v` and quantity determination has
    /// to treat it as a consonant.
    pub const SNEAKY_SEMIVOWEL: Self = Self(1 << 1);

    /// Returns `true` if every flag in `other` is set on `self`.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Adds the flags in `other` to `self`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitOr for SyllableFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SyllableFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A syllable as produced by syllabification, before any verse-level
/// interpretation.
///
/// `begin` and `end` are half-open character (codepoint) offsets. Right out
/// of the syllabifier they index into the word; the scanner rebases them into
/// the verse line by passing the word's base offset along. `value` holds the
/// syllable text with diaeresis marks already normalized to plain vowels,
/// which keeps `line[begin..end] == value` true since that normalization is
/// one-to-one per character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSyllable {
    /// The syllable text.
    pub value: String,
    /// Start offset (in chars).
    pub begin: usize,
    /// End offset (in chars, exclusive).
    pub end: usize,
    /// Position tags within the word.
    pub position: WordPosition,
    /// Quirk flags.
    pub flags: SyllableFlags,
}

impl RawSyllable {
    /// Returns `true` if this syllable opens a word.
    #[must_use]
    pub fn is_word_start(&self) -> bool {
        self.position.contains(WordPosition::START)
    }

    /// Returns `true` if this syllable closes a word.
    #[must_use]
    pub fn is_word_end(&self) -> bool {
        self.position.contains(WordPosition::END)
    }

    /// Returns `true` if this syllable was discarded by resyllabification.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.position.contains(WordPosition::DIRTY)
    }

    /// Returns `true` if the leading `i`/`u` of this syllable is really a
    /// semivowel.
    #[must_use]
    pub fn starts_with_sneaky_semivowel(&self) -> bool {
        self.flags.contains(SyllableFlags::SNEAKY_SEMIVOWEL)
    }
}

impl fmt::Display for RawSyllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}..{}]", self.value, self.begin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_position_is_a_set() {
        let mut pos = WordPosition::START | WordPosition::END;
        assert!(pos.contains(WordPosition::START));
        assert!(pos.contains(WordPosition::END));
        assert!(!pos.contains(WordPosition::DIRTY));

        pos.insert(WordPosition::MERGED);
        assert!(pos.contains(WordPosition::MERGED));
        assert!(pos.contains(WordPosition::START | WordPosition::MERGED));
    }

    #[test]
    fn none_is_contained_everywhere() {
        assert!(WordPosition::NONE.contains(WordPosition::NONE));
        assert!(WordPosition::START.contains(WordPosition::NONE));
        assert!(SyllableFlags::SNEAKY_SEMIVOWEL.contains(SyllableFlags::NONE));
    }

    #[test]
    fn syllable_predicates() {
        let s = RawSyllable {
            value: "iam".into(),
            begin: 0,
            end: 3,
            position: WordPosition::START | WordPosition::END,
            flags: SyllableFlags::SNEAKY_SEMIVOWEL,
        };
        assert!(s.is_word_start());
        assert!(s.is_word_end());
        assert!(!s.is_dirty());
        assert!(s.starts_with_sneaky_semivowel());
        assert_eq!(s.to_string(), "iam[0..3]");
    }

    #[test]
    fn raw_syllable_serialization_roundtrip() {
        let s = RawSyllable {
            value: "mī".into(),
            begin: 1,
            end: 3,
            position: WordPosition::NONE,
            flags: SyllableFlags::NONE,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: RawSyllable = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
