//! Verse-level analysis: resyllabification, quantities, and meters.

pub(crate) mod meter;
pub(crate) mod quantity;
pub(crate) mod resyllabify;
mod scan;

pub use meter::is_enclitic_dactyl;
pub use scan::scan;

/// Separates the two halves of an elided syllable in its textual value
/// (e.g. `e_a` for `nūdāss(e) a(licui)`).
pub const ELISION_MARKER: char = '_';
