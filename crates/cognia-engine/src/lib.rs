//! cognia-engine
//!
//! Deterministic classification rules for WISC-V profiles: age arithmetic,
//! qualitative bands, pair homogeneity, QIT validity, intra-individual
//! analysis, and complementary-index sums. Pure computation over an
//! immutable profile snapshot — no I/O, no retained state, safe to run
//! over many profiles concurrently.

pub mod age;
pub mod aids;
pub mod bands;
pub mod facts;
pub mod homogeneity;
pub mod ipsative;
pub mod normative;
pub mod validity;

use tracing::info;

use cognia_core::models::classification::ClassificationResult;
use cognia_core::models::profile::Profile;

pub use cognia_core::models::thresholds::ClassificationThresholds;

/// Run every classification rule over one profile snapshot and assemble
/// the result.
///
/// The profile is read, never retained; the result is created fresh on
/// every call. The ipsative analysis runs over the five primary indices:
/// the QIT is the quantity under validity test, and the complementary
/// indices reuse the primaries' subtests and would double-weight them.
pub fn classify_profile(
    profile: &Profile,
    thresholds: &ClassificationThresholds,
) -> ClassificationResult {
    let age = age::age_at_testing(profile.birth_date, profile.test_date);
    let pairs = homogeneity::pair_homogeneity(profile, thresholds);
    let primaries = profile.primary_index_points();
    let validity = validity::classify_validity(&primaries, &pairs, thresholds);
    let normative = normative::normative_entries(profile);
    let ipsative = ipsative::analyze_ipsative(&primaries);
    let aids = aids::composite_aids(profile);

    info!(
        profile_id = %profile.id,
        verdict = ?validity,
        "profile classified"
    );

    ClassificationResult {
        profile_id: profile.id,
        examinee: profile.examinee.clone(),
        age,
        validity,
        pairs,
        normative,
        ipsative,
        aids,
        thresholds: *thresholds,
    }
}
