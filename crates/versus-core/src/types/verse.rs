use std::fmt;

use serde::{Deserialize, Serialize};

/// Phonetic quantity of a verse syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// A short syllable (`u` in traditional notation).
    Short,
    /// A long syllable (`-` in traditional notation).
    Long,
}

impl Quantity {
    /// Returns the traditional scansion glyph for this quantity.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Short => 'u',
            Self::Long => '-',
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A syllable in its final, verse-level form.
///
/// Unlike [`RawSyllable`](crate::RawSyllable), this type assumes that
/// resyllabification has already been applied: offsets index into the verse
/// line, the value may span an elided word boundary, and the quantity is
/// settled. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseSyllable {
    /// The syllable text (may contain the elision marker `_`).
    pub value: String,
    /// Start offset into the verse line (in chars).
    pub begin: usize,
    /// End offset into the verse line (in chars, exclusive).
    pub end: usize,
    /// The phonetic quantity.
    pub quantity: Quantity,
}

/// Rhythm statistics accumulated over one verse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RhythmStats {
    /// Number of long syllables.
    pub long_count: usize,
    /// Number of short syllables.
    pub short_count: usize,
    /// Quantities in verse order, one per syllable.
    pub pattern: Vec<Quantity>,
}

impl RhythmStats {
    /// Records one syllable's quantity.
    pub fn record(&mut self, quantity: Quantity) {
        match quantity {
            Quantity::Long => self.long_count += 1,
            Quantity::Short => self.short_count += 1,
        }
        self.pattern.push(quantity);
    }

    /// Total number of recorded syllables.
    #[must_use]
    pub fn total(&self) -> usize {
        self.long_count + self.short_count
    }
}

impl FromIterator<Quantity> for RhythmStats {
    fn from_iter<I: IntoIterator<Item = Quantity>>(iter: I) -> Self {
        let mut stats = Self::default();
        for quantity in iter {
            stats.record(quantity);
        }
        stats
    }
}

/// The meter detected for a verse or a whole poem.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum MeterKind {
    /// No confident classification. This is a normal result, not a failure.
    #[default]
    Unknown,
    /// Six dactylic feet, the last one enclitic (long + anceps).
    DactylicHexameter,
    /// The pentameter of elegiac poetry.
    DactylicPentameter,
    /// Alternating hexameter/pentameter couplets (poem level only).
    ElegiacCouplet,
}

impl fmt::Display for MeterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::DactylicHexameter => write!(f, "dactylic hexameter"),
            Self::DactylicPentameter => write!(f, "dactylic pentameter"),
            Self::ElegiacCouplet => write!(f, "elegiac couplet"),
        }
    }
}

/// One scanned verse: its syllables, meter, display line, and rhythm stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// The verse syllables in reading order.
    pub syllables: Vec<VerseSyllable>,
    /// The meter detected for this verse.
    pub kind: MeterKind,
    /// The original line, with diaeresis marks normalized to plain vowels.
    pub line: String,
    /// Rhythm statistics for this verse.
    pub stats: RhythmStats,
}

/// A fully scanned poem: the terminal artifact of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poem {
    /// The scanned verses, one per non-blank input line.
    pub verses: Vec<Verse>,
    /// The meter detected for the poem as a whole.
    pub kind: MeterKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_glyphs() {
        assert_eq!(Quantity::Long.to_string(), "-");
        assert_eq!(Quantity::Short.to_string(), "u");
    }

    #[test]
    fn rhythm_stats_record() {
        let stats: RhythmStats =
            [Quantity::Long, Quantity::Short, Quantity::Short]
                .into_iter()
                .collect();
        assert_eq!(stats.long_count, 1);
        assert_eq!(stats.short_count, 2);
        assert_eq!(stats.total(), 3);
        assert_eq!(
            stats.pattern,
            vec![Quantity::Long, Quantity::Short, Quantity::Short]
        );
    }

    #[test]
    fn meter_kind_display() {
        assert_eq!(MeterKind::Unknown.to_string(), "unknown");
        assert_eq!(
            MeterKind::DactylicHexameter.to_string(),
            "dactylic hexameter"
        );
        assert_eq!(MeterKind::ElegiacCouplet.to_string(), "elegiac couplet");
    }

    #[test]
    fn meter_kind_default_is_unknown() {
        assert_eq!(MeterKind::default(), MeterKind::Unknown);
    }

    #[test]
    fn poem_serialization_roundtrip() {
        let poem = Poem {
            verses: vec![Verse {
                syllables: vec![VerseSyllable {
                    value: "iam".into(),
                    begin: 0,
                    end: 3,
                    quantity: Quantity::Long,
                }],
                kind: MeterKind::Unknown,
                line: "iam".into(),
                stats: [Quantity::Long].into_iter().collect(),
            }],
            kind: MeterKind::Unknown,
        };

        let json = serde_json::to_string_pretty(&poem).unwrap();
        let back: Poem = serde_json::from_str(&json).unwrap();
        assert_eq!(poem, back);
    }
}
