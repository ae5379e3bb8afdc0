//! Tri-state pair homogeneity and the canonical five pairs.

use std::collections::BTreeMap;

use cognia_core::models::classification::HomogeneityFlag;
use cognia_core::models::index::IndexId;
use cognia_core::models::profile::{Profile, RawProfile};
use cognia_core::models::subtest::SubtestId;
use cognia_core::models::thresholds::ClassificationThresholds;
use cognia_engine::homogeneity::{check_pair, pair_homogeneity, CANONICAL_PAIRS};
use jiff::civil::date;

#[test]
fn missing_either_side_is_not_evaluable() {
    assert_eq!(check_pair(None, Some(12), 5), None);
    assert_eq!(check_pair(Some(12), None, 5), None);
    assert_eq!(check_pair(None, None, 5), None);
}

#[test]
fn similitudes_12_vocabulaire_6_splits_at_threshold_5() {
    assert_eq!(
        check_pair(Some(12), Some(6), 5),
        Some(HomogeneityFlag::Heterogeneous { gap: 6 })
    );
}

#[test]
fn gap_exactly_at_threshold_is_heterogeneous() {
    assert_eq!(
        check_pair(Some(12), Some(7), 5),
        Some(HomogeneityFlag::Heterogeneous { gap: 5 })
    );
    assert_eq!(
        check_pair(Some(12), Some(8), 5),
        Some(HomogeneityFlag::Homogeneous)
    );
}

#[test]
fn gap_is_symmetric() {
    assert_eq!(check_pair(Some(6), Some(12), 5), check_pair(Some(12), Some(6), 5));
}

#[test]
fn equal_scores_are_homogeneous() {
    assert_eq!(
        check_pair(Some(10), Some(10), 5),
        Some(HomogeneityFlag::Homogeneous)
    );
}

#[test]
fn a_four_point_gap_flips_between_the_two_workbook_readings() {
    // The sources disagree on the threshold (4 vs 5); a gap of exactly 4
    // is the case that separates them.
    assert_eq!(
        check_pair(Some(10), Some(6), 4),
        Some(HomogeneityFlag::Heterogeneous { gap: 4 })
    );
    assert_eq!(
        check_pair(Some(10), Some(6), 5),
        Some(HomogeneityFlag::Homogeneous)
    );
}

#[test]
fn canonical_pairs_cover_the_five_primaries_in_order() {
    let indices: Vec<IndexId> = CANONICAL_PAIRS.iter().map(|(index, _, _)| *index).collect();
    assert_eq!(indices, IndexId::PRIMARY.to_vec());
}

#[test]
fn canonical_pairs_stay_inside_their_own_domain() {
    for (index, first, second) in CANONICAL_PAIRS {
        assert_eq!(first.domain(), index, "{} feeds {}", first.name(), index.name());
        assert_eq!(second.domain(), index, "{} feeds {}", second.name(), index.name());
    }
}

fn profile_with_subtests(entries: &[(SubtestId, u8)]) -> Profile {
    let raw = RawProfile {
        examinee: "L.".to_string(),
        birth_date: date(2015, 6, 15),
        test_date: date(2024, 3, 1),
        subtests: entries.iter().copied().collect(),
        indices: BTreeMap::new(),
    };
    raw.into_profile().unwrap()
}

#[test]
fn profile_readings_come_back_in_record_form_order() {
    let profile = profile_with_subtests(&[
        (SubtestId::Similitudes, 12),
        (SubtestId::Vocabulaire, 6),
        (SubtestId::Cubes, 10),
        (SubtestId::PuzzlesVisuels, 11),
        (SubtestId::Matrices, 9),
        // Balances not administered: the IRF pair is not evaluable.
        (SubtestId::MemoireChiffres, 8),
        (SubtestId::MemoireImages, 13),
        (SubtestId::Symboles, 10),
        (SubtestId::Code, 10),
    ]);

    let pairs = pair_homogeneity(&profile, &ClassificationThresholds::default());

    assert_eq!(pairs.len(), 5);
    assert_eq!(pairs[0].index, IndexId::Icv);
    assert_eq!(pairs[0].flag, Some(HomogeneityFlag::Heterogeneous { gap: 6 }));
    assert_eq!(pairs[1].index, IndexId::Ivs);
    assert_eq!(pairs[1].flag, Some(HomogeneityFlag::Homogeneous));
    assert_eq!(pairs[2].index, IndexId::Irf);
    assert_eq!(pairs[2].flag, None);
    assert_eq!(pairs[3].index, IndexId::Imt);
    assert_eq!(pairs[3].flag, Some(HomogeneityFlag::Heterogeneous { gap: 5 }));
    assert_eq!(pairs[4].index, IndexId::Ivt);
    assert_eq!(pairs[4].flag, Some(HomogeneityFlag::Homogeneous));
}

#[test]
fn strict_pairs_preset_flags_more_pairs() {
    let profile = profile_with_subtests(&[
        (SubtestId::Similitudes, 12),
        (SubtestId::Vocabulaire, 8),
    ]);

    let common = pair_homogeneity(&profile, &ClassificationThresholds::workbook());
    assert_eq!(common[0].flag, Some(HomogeneityFlag::Homogeneous));

    let strict = pair_homogeneity(&profile, &ClassificationThresholds::strict_pairs());
    assert_eq!(
        strict[0].flag,
        Some(HomogeneityFlag::Heterogeneous { gap: 4 })
    );
}
