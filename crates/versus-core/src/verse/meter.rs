//! # Meter classification
//!
//! Matches a verse's rhythm pattern against known meters, and aggregates
//! per-verse results into a poem-level classification.

use tracing::debug;

use crate::types::{MeterKind, Poem, Quantity, RhythmStats, Verse};

/// The fixed tail of a dactylic pentameter: a spondee closing the first
/// hemistich, then two full dactyls and the final long. The first foot and
/// a half admit contraction, so only this tail is reliable.
const PENTAMETER_CLOSE: [Quantity; 8] = [
    Quantity::Long,
    Quantity::Long,
    Quantity::Short,
    Quantity::Short,
    Quantity::Long,
    Quantity::Short,
    Quantity::Short,
    Quantity::Long,
];

/// Returns `true` if the pattern reads as `n` dactylic feet where the last
/// foot is enclitic: a long plus a final anceps counted long. Every
/// non-final foot is either a full dactyl (`- u u`) or a contracted spondee
/// (`- -`); `forbid_contraction` names a zero-based foot that must stay a
/// full dactyl.
///
/// ```
/// use versus_core::{Quantity::{Long, Short}, is_enclitic_dactyl};
///
/// // Five dactyls and a spondee: a golden hexameter line.
/// let mut pattern = vec![Long, Short, Short].repeat(5);
/// pattern.extend([Long, Long]);
/// assert!(is_enclitic_dactyl(&pattern, 6, None));
/// ```
#[must_use]
pub fn is_enclitic_dactyl(
    pattern: &[Quantity],
    n: usize,
    forbid_contraction: Option<usize>,
) -> bool {
    let mut i = 0;
    let mut foot = 0;
    let mut n = n;

    while i < pattern.len() && n > 1 {
        if pattern[i] != Quantity::Long {
            return false;
        }
        if pattern.get(i + 1) == Some(&Quantity::Long) {
            if forbid_contraction == Some(foot) {
                return false;
            }
            i += 2;
        } else if pattern.get(i + 1) == Some(&Quantity::Short)
            && pattern.get(i + 2) == Some(&Quantity::Short)
        {
            i += 3;
        } else {
            return false;
        }
        n -= 1;
        foot += 1;
    }

    i + 2 == pattern.len() && pattern.get(i) == Some(&Quantity::Long)
}

/// Classifies one verse from its rhythm statistics.
pub(crate) fn figure_out_rhythm(stats: &RhythmStats) -> MeterKind {
    let total = stats.total();

    if (12..=14).contains(&total) && stats.pattern.ends_with(&PENTAMETER_CLOSE) {
        MeterKind::DactylicPentameter
    } else if total >= 13 && is_enclitic_dactyl(&stats.pattern, 6, None) {
        MeterKind::DactylicHexameter
    } else {
        MeterKind::Unknown
    }
}

// Whether an unclassified verse could still pass as the given meter.
// Relaxed coercion of unclassified verses is reserved for later; the
// classifier stays conservative until then.
fn can_coerce_into(_verse: &Verse, _kind: MeterKind) -> bool {
    false
}

/// Aggregates per-verse classifications into a poem.
///
/// A poem where every classified verse agrees on one meter takes that
/// meter, provided no verse stayed unclassified. A strict alternation of
/// hexameters (odd verses) and pentameters (even verses) over an even
/// number of lines is an elegiac couplet. Anything else is unknown.
pub(crate) fn analyze(verses: Vec<Verse>) -> Poem {
    let mut kinds: Vec<MeterKind> = Vec::new();
    let mut unknown = 0usize;
    for verse in &verses {
        if verse.kind == MeterKind::Unknown {
            unknown += 1;
        } else if !kinds.contains(&verse.kind) {
            kinds.push(verse.kind);
        }
    }

    let kind = match kinds.as_slice() {
        [single] => {
            let single = *single;
            if verses
                .iter()
                .filter(|v| v.kind == MeterKind::Unknown)
                .all(|v| can_coerce_into(v, single))
            {
                single
            } else {
                MeterKind::Unknown
            }
        }
        [a, b]
            if matches!(
                (*a, *b),
                (MeterKind::DactylicHexameter, MeterKind::DactylicPentameter)
                    | (MeterKind::DactylicPentameter, MeterKind::DactylicHexameter)
            ) =>
        {
            if is_elegiac(&verses) {
                MeterKind::ElegiacCouplet
            } else {
                MeterKind::Unknown
            }
        }
        _ => MeterKind::Unknown,
    };

    debug!(verses = verses.len(), unknown, %kind, "poem analyzed");
    Poem { verses, kind }
}

// An elegiac couplet alternates hexameter and pentameter, hexameter first,
// over complete couplets. Every verse has to fit its slot.
fn is_elegiac(verses: &[Verse]) -> bool {
    if verses.len() % 2 != 0 {
        return false;
    }
    verses.iter().enumerate().all(|(i, verse)| {
        let want = if i % 2 == 0 {
            MeterKind::DactylicHexameter
        } else {
            MeterKind::DactylicPentameter
        };
        verse.kind == want || (verse.kind == MeterKind::Unknown && can_coerce_into(verse, want))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use Quantity::{Long, Short};

    const DACTYL: [Quantity; 3] = [Long, Short, Short];
    const SPONDEE: [Quantity; 2] = [Long, Long];

    fn pattern(feet: &[&[Quantity]]) -> Vec<Quantity> {
        feet.iter().flat_map(|f| f.iter().copied()).collect()
    }

    fn verse(kind: MeterKind) -> Verse {
        Verse {
            syllables: Vec::new(),
            kind,
            line: String::new(),
            stats: RhythmStats::default(),
        }
    }

    #[test]
    fn full_dactylic_runs() {
        let p = pattern(&[&DACTYL, &DACTYL, &DACTYL, &DACTYL, &DACTYL, &SPONDEE]);
        assert!(is_enclitic_dactyl(&p, 6, None));

        // Final anceps: a trochee closes just as well.
        let p = pattern(&[&DACTYL, &DACTYL, &DACTYL, &DACTYL, &DACTYL, &[Long, Short]]);
        assert!(is_enclitic_dactyl(&p, 6, None));
    }

    #[test]
    fn contracted_feet_are_accepted() {
        let p = pattern(&[&DACTYL, &SPONDEE, &DACTYL, &SPONDEE, &DACTYL, &SPONDEE]);
        assert!(is_enclitic_dactyl(&p, 6, None));
    }

    #[test]
    fn wrong_foot_counts_are_rejected() {
        let p = pattern(&[&DACTYL, &DACTYL, &DACTYL, &DACTYL, &[Long, Short]]);
        assert!(!is_enclitic_dactyl(&p, 6, None));

        // All spondees never reaches six feet with the right remainder.
        let p = pattern(&[&SPONDEE, &SPONDEE, &SPONDEE, &SPONDEE, &SPONDEE]);
        assert!(!is_enclitic_dactyl(&p, 6, None));
    }

    #[test]
    fn short_in_the_downbeat_is_rejected() {
        let p = pattern(&[&[Short, Short, Long], &DACTYL, &DACTYL, &DACTYL, &DACTYL, &SPONDEE]);
        assert!(!is_enclitic_dactyl(&p, 6, None));
    }

    #[test]
    fn forbidding_contraction() {
        let p = pattern(&[&DACTYL, &SPONDEE]);
        assert!(is_enclitic_dactyl(&p, 2, None));
        assert!(is_enclitic_dactyl(&p, 2, Some(0)));

        let p = pattern(&[&SPONDEE, &SPONDEE]);
        assert!(is_enclitic_dactyl(&p, 2, None));
        assert!(!is_enclitic_dactyl(&p, 2, Some(0)));
    }

    #[test]
    fn pentameter_detection() {
        // - u u | - - | - || - u u | - u u | -
        let stats: RhythmStats = pattern(&[
            &DACTYL,
            &SPONDEE,
            &[Long],
            &DACTYL,
            &DACTYL,
            &[Long],
        ])
        .into_iter()
        .collect();
        assert_eq!(stats.total(), 13);
        assert_eq!(figure_out_rhythm(&stats), MeterKind::DactylicPentameter);
    }

    #[test]
    fn hexameter_detection() {
        let stats: RhythmStats =
            pattern(&[&DACTYL, &SPONDEE, &SPONDEE, &SPONDEE, &DACTYL, &SPONDEE])
                .into_iter()
                .collect();
        assert_eq!(figure_out_rhythm(&stats), MeterKind::DactylicHexameter);
    }

    #[test]
    fn too_short_is_unknown() {
        let stats: RhythmStats = pattern(&[&DACTYL, &SPONDEE]).into_iter().collect();
        assert_eq!(figure_out_rhythm(&stats), MeterKind::Unknown);
    }

    #[test]
    fn uniform_poems_take_the_common_meter() {
        let poem = analyze(vec![
            verse(MeterKind::DactylicHexameter),
            verse(MeterKind::DactylicHexameter),
        ]);
        assert_eq!(poem.kind, MeterKind::DactylicHexameter);

        let poem = analyze(vec![verse(MeterKind::DactylicPentameter)]);
        assert_eq!(poem.kind, MeterKind::DactylicPentameter);
    }

    #[test]
    fn unknown_verses_spoil_a_uniform_poem() {
        let poem = analyze(vec![
            verse(MeterKind::DactylicHexameter),
            verse(MeterKind::Unknown),
        ]);
        assert_eq!(poem.kind, MeterKind::Unknown);
    }

    #[test]
    fn elegiac_alternation() {
        let poem = analyze(vec![
            verse(MeterKind::DactylicHexameter),
            verse(MeterKind::DactylicPentameter),
            verse(MeterKind::DactylicHexameter),
            verse(MeterKind::DactylicPentameter),
        ]);
        assert_eq!(poem.kind, MeterKind::ElegiacCouplet);
    }

    #[test]
    fn incomplete_couplets_are_unknown() {
        let poem = analyze(vec![
            verse(MeterKind::DactylicHexameter),
            verse(MeterKind::DactylicPentameter),
            verse(MeterKind::DactylicHexameter),
        ]);
        assert_eq!(poem.kind, MeterKind::Unknown);
    }

    #[test]
    fn inverted_couplets_are_unknown() {
        let poem = analyze(vec![
            verse(MeterKind::DactylicPentameter),
            verse(MeterKind::DactylicHexameter),
        ]);
        assert_eq!(poem.kind, MeterKind::Unknown);
    }

    #[test]
    fn empty_poem_is_unknown() {
        let poem = analyze(Vec::new());
        assert_eq!(poem.kind, MeterKind::Unknown);
    }
}
