//! Splitting Latin words into syllables.

pub(crate) mod classify;
mod syllabify;

pub use syllabify::syllabify;
pub(crate) use syllabify::syllabify_chars;
