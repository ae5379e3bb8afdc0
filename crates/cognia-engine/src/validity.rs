//! QIT validity: whether the global score is interpretable.

use std::collections::BTreeMap;

use cognia_core::models::classification::{HomogeneityFlag, PairHomogeneity, ValidityVerdict};
use cognia_core::models::index::IndexId;
use cognia_core::models::thresholds::ClassificationThresholds;

/// Heterogeneous pair count at which the QIT becomes fragile.
pub const HETEROGENEOUS_PAIR_LIMIT: usize = 2;

/// Classify QIT validity from the administered primary indices and their
/// pair flags.
///
/// Strict priority order:
/// 1. fewer than five administered primaries is `Incomplete`, and nothing
///    else is examined;
/// 2. dispersion (max minus min) at or past the cutoff is `Invalid`;
/// 3. two or more heterogeneous pairs is `Fragile`;
/// 4. otherwise `Valid`.
///
/// Dispersion beats pair count when both fire: a spread-out profile
/// already rules the QIT out, and downgrading that to `Fragile` would
/// change the clinical meaning.
pub fn classify_validity(
    primaries: &BTreeMap<IndexId, u16>,
    pairs: &[PairHomogeneity],
    thresholds: &ClassificationThresholds,
) -> ValidityVerdict {
    if primaries.len() < IndexId::PRIMARY.len() {
        return ValidityVerdict::Incomplete {
            scored: primaries.len(),
        };
    }

    let max = primaries.values().copied().max().unwrap_or(0);
    let min = primaries.values().copied().min().unwrap_or(0);
    let dispersion = u32::from(max - min);
    if dispersion >= thresholds.dispersion_invalid {
        return ValidityVerdict::Invalid { dispersion };
    }

    let heterogeneous_pairs = pairs
        .iter()
        .filter(|pair| matches!(pair.flag, Some(HomogeneityFlag::Heterogeneous { .. })))
        .count();
    if heterogeneous_pairs >= HETEROGENEOUS_PAIR_LIMIT {
        return ValidityVerdict::Fragile { heterogeneous_pairs };
    }

    ValidityVerdict::Valid { dispersion }
}
