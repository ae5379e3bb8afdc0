//! Intra-individual analysis: personal mean, spread, and relative
//! standings.

use std::collections::BTreeMap;

use cognia_core::models::classification::RelativeStanding;
use cognia_core::models::index::IndexId;
use cognia_engine::ipsative::analyze_ipsative;

fn indices(entries: &[(IndexId, u16)]) -> BTreeMap<IndexId, u16> {
    entries.iter().copied().collect()
}

#[test]
fn no_participating_index_yields_none() {
    assert_eq!(analyze_ipsative(&BTreeMap::new()), None);
}

#[test]
fn single_index_is_its_own_mean() {
    let profile = analyze_ipsative(&indices(&[(IndexId::Icv, 112)])).unwrap();

    assert_eq!(profile.mean, 112.0);
    assert_eq!(profile.stdev, 0.0);
    assert_eq!(profile.entries.len(), 1);
    assert_eq!(profile.entries[0].delta, 0.0);
    assert_eq!(profile.entries[0].standing, RelativeStanding::Average);
}

#[test]
fn known_mean_and_population_deviation() {
    // 100, 110, 90, 100, 100: mean 100, population variance 40.
    let profile = analyze_ipsative(&indices(&[
        (IndexId::Icv, 100),
        (IndexId::Ivs, 110),
        (IndexId::Irf, 90),
        (IndexId::Imt, 100),
        (IndexId::Ivt, 100),
    ]))
    .unwrap();

    assert_eq!(profile.mean, 100.0);
    assert!(
        (profile.stdev - 40.0_f64.sqrt()).abs() < 1e-12,
        "population deviation expected, got {}",
        profile.stdev
    );
}

#[test]
fn standings_flip_exactly_at_ten_points_from_the_mean() {
    // Mean 100; deltas are exactly -10, 0, 0, 0, +10.
    let profile = analyze_ipsative(&indices(&[
        (IndexId::Icv, 90),
        (IndexId::Ivs, 100),
        (IndexId::Irf, 100),
        (IndexId::Imt, 100),
        (IndexId::Ivt, 110),
    ]))
    .unwrap();

    let standing_of = |index: IndexId| {
        profile
            .entries
            .iter()
            .find(|e| e.index == index)
            .map(|e| e.standing)
            .unwrap()
    };

    assert_eq!(standing_of(IndexId::Icv), RelativeStanding::Weakness);
    assert_eq!(standing_of(IndexId::Ivt), RelativeStanding::Strength);
    assert_eq!(standing_of(IndexId::Ivs), RelativeStanding::Average);
}

#[test]
fn inside_the_ten_point_corridor_stays_average() {
    // Mean 100; extremes sit 8 points out, inside the +-10 corridor.
    let profile = analyze_ipsative(&indices(&[
        (IndexId::Icv, 92),
        (IndexId::Ivs, 100),
        (IndexId::Irf, 100),
        (IndexId::Imt, 100),
        (IndexId::Ivt, 108),
    ]))
    .unwrap();

    for entry in &profile.entries {
        assert_eq!(
            entry.standing,
            RelativeStanding::Average,
            "{} should be average at delta {}",
            entry.index.abbreviation(),
            entry.delta
        );
    }
}

#[test]
fn a_personal_weakness_can_sit_above_the_population_mean() {
    // Everything well above 100: ipsative and normative readings answer
    // different questions.
    let profile = analyze_ipsative(&indices(&[
        (IndexId::Icv, 140),
        (IndexId::Ivs, 138),
        (IndexId::Irf, 136),
        (IndexId::Imt, 118),
        (IndexId::Ivt, 138),
    ]))
    .unwrap();

    let imt = profile.entries.iter().find(|e| e.index == IndexId::Imt).unwrap();
    assert_eq!(imt.standing, RelativeStanding::Weakness);
    assert!(imt.points > 100);
}

#[test]
fn input_order_does_not_change_the_analysis() {
    let forward = analyze_ipsative(&indices(&[
        (IndexId::Icv, 130),
        (IndexId::Ivs, 128),
        (IndexId::Irf, 125),
        (IndexId::Imt, 127),
        (IndexId::Ivt, 126),
    ]));
    let backward = analyze_ipsative(&indices(&[
        (IndexId::Ivt, 126),
        (IndexId::Imt, 127),
        (IndexId::Irf, 125),
        (IndexId::Ivs, 128),
        (IndexId::Icv, 130),
    ]));

    assert_eq!(forward, backward);
}

#[test]
fn analysis_is_deterministic() {
    let scored = indices(&[(IndexId::Icv, 104), (IndexId::Imt, 87)]);
    assert_eq!(analyze_ipsative(&scored), analyze_ipsative(&scored));
}
