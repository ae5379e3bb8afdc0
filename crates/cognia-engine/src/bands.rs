//! Qualitative bands for composite scores.
//!
//! The normative partition of the score line: fixed boundaries around the
//! population mean of 100, checked descending, first match wins.

use cognia_core::models::classification::QualitativeBand;

pub const TRES_SUPERIEUR_MIN: u16 = 130;
pub const SUPERIEUR_MIN: u16 = 120;
pub const MOYEN_FORT_MIN: u16 = 110;
pub const MOYEN_MIN: u16 = 90;
pub const MOYEN_FAIBLE_MIN: u16 = 80;
pub const ZONE_LIMITE_MIN: u16 = 70;

/// Classify a composite score into its descriptive band.
///
/// Total over all scores; each lower bound is inclusive and each upper
/// bound exclusive, so 130 reads Très Supérieur and 129 Supérieur.
/// Callers filter out non-administered indices first; there is no band
/// for absence.
pub fn qualitative_band(points: u16) -> QualitativeBand {
    match points {
        p if p >= TRES_SUPERIEUR_MIN => QualitativeBand::TresSuperieur,
        p if p >= SUPERIEUR_MIN => QualitativeBand::Superieur,
        p if p >= MOYEN_FORT_MIN => QualitativeBand::MoyenFort,
        p if p >= MOYEN_MIN => QualitativeBand::Moyen,
        p if p >= MOYEN_FAIBLE_MIN => QualitativeBand::MoyenFaible,
        p if p >= ZONE_LIMITE_MIN => QualitativeBand::ZoneLimite,
        _ => QualitativeBand::TresFaible,
    }
}
