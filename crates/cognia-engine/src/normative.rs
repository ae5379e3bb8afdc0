//! Normative reading: each administered index against the population
//! anchors.

use cognia_core::models::classification::NormativeEntry;
use cognia_core::models::index::IndexId;
use cognia_core::models::profile::Profile;

use crate::bands::qualitative_band;

/// Population mean for composite scores.
pub const NORMATIVE_MEAN: f64 = 100.0;
/// Population standard deviation for composite scores.
pub const NORMATIVE_SD: f64 = 15.0;

/// One normative entry per administered index, report order (QIT first,
/// then primaries, then complementaries).
///
/// `deviation_sd` places the score relative to the population mean in SD
/// units: 130 sits two SD above, 85 one SD below. The written report
/// quotes that figure next to the band.
pub fn normative_entries(profile: &Profile) -> Vec<NormativeEntry> {
    IndexId::ALL
        .iter()
        .filter_map(|index| profile.indices.get(index))
        .map(|score| NormativeEntry {
            index: score.index,
            points: score.points,
            band: qualitative_band(score.points),
            deviation_sd: (f64::from(score.points) - NORMATIVE_MEAN) / NORMATIVE_SD,
            percentile: score.percentile,
            confidence_interval: score.confidence_interval,
        })
        .collect()
}
