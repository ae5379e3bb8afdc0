//! Pair homogeneity: agreement between the two subtests behind each
//! primary index.

use cognia_core::models::classification::{HomogeneityFlag, PairHomogeneity};
use cognia_core::models::index::IndexId;
use cognia_core::models::profile::Profile;
use cognia_core::models::subtest::SubtestId;
use cognia_core::models::thresholds::ClassificationThresholds;

/// The canonical subtest pair behind each primary index, record-form
/// order.
pub const CANONICAL_PAIRS: [(IndexId, SubtestId, SubtestId); 5] = [
    (IndexId::Icv, SubtestId::Similitudes, SubtestId::Vocabulaire),
    (IndexId::Ivs, SubtestId::Cubes, SubtestId::PuzzlesVisuels),
    (IndexId::Irf, SubtestId::Matrices, SubtestId::Balances),
    (IndexId::Imt, SubtestId::MemoireChiffres, SubtestId::MemoireImages),
    (IndexId::Ivt, SubtestId::Symboles, SubtestId::Code),
];

/// Compare the two scaled scores feeding one index.
///
/// Tri-state: `None` when either subtest was not administered. A pair
/// with a missing side is not evaluable, which is not the same claim as
/// homogeneous. Otherwise heterogeneous exactly when the gap reaches
/// `max_gap` (boundary inclusive).
pub fn check_pair(
    first: Option<u8>,
    second: Option<u8>,
    max_gap: u8,
) -> Option<HomogeneityFlag> {
    let (a, b) = (first?, second?);
    let gap = a.abs_diff(b);
    if gap >= max_gap {
        Some(HomogeneityFlag::Heterogeneous {
            gap: u32::from(gap),
        })
    } else {
        Some(HomogeneityFlag::Homogeneous)
    }
}

/// The homogeneity reading for all five canonical pairs, record-form
/// order. Pairs with a missing side appear with `flag: None` so the
/// report can state "non évaluable" instead of silently skipping them.
pub fn pair_homogeneity(
    profile: &Profile,
    thresholds: &ClassificationThresholds,
) -> Vec<PairHomogeneity> {
    CANONICAL_PAIRS
        .iter()
        .map(|(index, first, second)| PairHomogeneity {
            index: *index,
            first: *first,
            second: *second,
            flag: check_pair(
                profile.subtest_points(*first),
                profile.subtest_points(*second),
                thresholds.pair_gap,
            ),
        })
        .collect()
}
