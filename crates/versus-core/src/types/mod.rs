//! The data model: syllables, verses, quantities, and meters.

pub mod syllable;
pub mod verse;

pub use syllable::{RawSyllable, SyllableFlags, WordPosition};
pub use verse::{MeterKind, Poem, Quantity, RhythmStats, Verse, VerseSyllable};
