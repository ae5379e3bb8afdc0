//! Intra-individual (ipsative) analysis: each index against the
//! examinee's own mean rather than the population's.

use std::collections::BTreeMap;

use cognia_core::models::classification::{IpsativeEntry, IpsativeProfile, RelativeStanding};
use cognia_core::models::index::IndexId;

/// Distance from the personal mean at which an index becomes a relative
/// strength or weakness.
pub const IPSATIVE_GAP: f64 = 10.0;

/// Mean, population standard deviation, and per-index relative standing
/// over the administered indices.
///
/// Returns `None` when no index participates. The mean and deviation are
/// order-independent and each standing depends only on that index's own
/// score against the mean, so permuting the input changes nothing.
///
/// A child can sit entirely above the population mean and still show a
/// personal weakness here; this reading and the normative one answer
/// different questions and are reported side by side, never merged.
pub fn analyze_ipsative(indices: &BTreeMap<IndexId, u16>) -> Option<IpsativeProfile> {
    if indices.is_empty() {
        return None;
    }

    let n = indices.len() as f64;
    let mean = indices.values().map(|p| f64::from(*p)).sum::<f64>() / n;
    let variance = indices
        .values()
        .map(|p| {
            let delta = f64::from(*p) - mean;
            delta * delta
        })
        .sum::<f64>()
        / n;
    let stdev = variance.sqrt();

    let entries = indices
        .iter()
        .map(|(index, points)| {
            let delta = f64::from(*points) - mean;
            let standing = if delta >= IPSATIVE_GAP {
                RelativeStanding::Strength
            } else if delta <= -IPSATIVE_GAP {
                RelativeStanding::Weakness
            } else {
                RelativeStanding::Average
            };
            IpsativeEntry {
                index: *index,
                points: *points,
                delta,
                standing,
            }
        })
        .collect();

    Some(IpsativeProfile { mean, stdev, entries })
}
