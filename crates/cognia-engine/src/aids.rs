//! Complementary-index sums: cross-check aids for the clinician.
//!
//! The published conversion tables turn a sum of scaled scores into each
//! complementary composite. This engine only produces the sum; the
//! clinician carries it to the table.

use cognia_core::models::classification::{AidTotal, CompositeAids};
use cognia_core::models::profile::Profile;
use cognia_core::models::subtest::SubtestId;

/// Subtests summed for the Aptitude Générale (IAG) aid.
pub const IAG_SUBTESTS: [SubtestId; 5] = [
    SubtestId::Similitudes,
    SubtestId::Vocabulaire,
    SubtestId::Cubes,
    SubtestId::Matrices,
    SubtestId::Balances,
];

/// Subtests summed for the Compétence Cognitive (ICC) aid.
pub const ICC_SUBTESTS: [SubtestId; 4] = [
    SubtestId::MemoireChiffres,
    SubtestId::MemoireImages,
    SubtestId::Code,
    SubtestId::Symboles,
];

/// Subtests summed for the Non Verbal (INV) aid.
pub const INV_SUBTESTS: [SubtestId; 6] = [
    SubtestId::Cubes,
    SubtestId::PuzzlesVisuels,
    SubtestId::Matrices,
    SubtestId::Balances,
    SubtestId::MemoireImages,
    SubtestId::Code,
];

/// Sum a subtest subset, or `Incomplete` if any member is missing.
///
/// A partial sum is never returned: next to the conversion table it would
/// look like a complete one and convert to a wrong composite.
pub fn aid_total(profile: &Profile, subset: &[SubtestId]) -> AidTotal {
    let mut total = 0u32;
    for subtest in subset {
        match profile.subtest_points(*subtest) {
            Some(points) => total += u32::from(points),
            None => return AidTotal::Incomplete,
        }
    }
    AidTotal::Points(total)
}

/// All three complementary-index aids for one profile.
pub fn composite_aids(profile: &Profile) -> CompositeAids {
    CompositeAids {
        iag: aid_total(profile, &IAG_SUBTESTS),
        icc: aid_total(profile, &ICC_SUBTESTS),
        inv: aid_total(profile, &INV_SUBTESTS),
    }
}
