use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::index::IndexId;
use super::profile::ValidationError;

/// Lowest scaled score a subtest can produce.
pub const SCALED_MIN: u8 = 1;
/// Highest scaled score a subtest can produce.
pub const SCALED_MAX: u8 = 19;

/// The 15 WISC-V subtests, French edition nomenclature.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SubtestId {
    Similitudes,
    Vocabulaire,
    Information,
    Comprehension,
    Cubes,
    PuzzlesVisuels,
    Matrices,
    Balances,
    Arithmetique,
    MemoireChiffres,
    MemoireImages,
    SequenceLettresChiffres,
    Code,
    Symboles,
    Barrage,
}

impl SubtestId {
    /// Canonical record-form ordering.
    pub const ALL: [SubtestId; 15] = [
        SubtestId::Similitudes,
        SubtestId::Vocabulaire,
        SubtestId::Information,
        SubtestId::Comprehension,
        SubtestId::Cubes,
        SubtestId::PuzzlesVisuels,
        SubtestId::Matrices,
        SubtestId::Balances,
        SubtestId::Arithmetique,
        SubtestId::MemoireChiffres,
        SubtestId::MemoireImages,
        SubtestId::SequenceLettresChiffres,
        SubtestId::Code,
        SubtestId::Symboles,
        SubtestId::Barrage,
    ];

    /// Display name as printed on the record form.
    pub fn name(&self) -> &'static str {
        match self {
            SubtestId::Similitudes => "Similitudes",
            SubtestId::Vocabulaire => "Vocabulaire",
            SubtestId::Information => "Information",
            SubtestId::Comprehension => "Compréhension",
            SubtestId::Cubes => "Cubes",
            SubtestId::PuzzlesVisuels => "Puzzles visuels",
            SubtestId::Matrices => "Matrices",
            SubtestId::Balances => "Balances",
            SubtestId::Arithmetique => "Arithmétique",
            SubtestId::MemoireChiffres => "Mémoire des chiffres",
            SubtestId::MemoireImages => "Mémoire des images",
            SubtestId::SequenceLettresChiffres => "Séquence Lettres-Chiffres",
            SubtestId::Code => "Code",
            SubtestId::Symboles => "Symboles",
            SubtestId::Barrage => "Barrage",
        }
    }

    /// Record-form abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            SubtestId::Similitudes => "SIM",
            SubtestId::Vocabulaire => "VOC",
            SubtestId::Information => "INF",
            SubtestId::Comprehension => "COM",
            SubtestId::Cubes => "CUB",
            SubtestId::PuzzlesVisuels => "PUZ",
            SubtestId::Matrices => "MAT",
            SubtestId::Balances => "BAL",
            SubtestId::Arithmetique => "ARI",
            SubtestId::MemoireChiffres => "MCH",
            SubtestId::MemoireImages => "MIM",
            SubtestId::SequenceLettresChiffres => "SLC",
            SubtestId::Code => "COD",
            SubtestId::Symboles => "SYM",
            SubtestId::Barrage => "BAR",
        }
    }

    /// The primary index this subtest feeds.
    pub fn domain(&self) -> IndexId {
        match self {
            SubtestId::Similitudes
            | SubtestId::Vocabulaire
            | SubtestId::Information
            | SubtestId::Comprehension => IndexId::Icv,
            SubtestId::Cubes | SubtestId::PuzzlesVisuels => IndexId::Ivs,
            SubtestId::Matrices | SubtestId::Balances | SubtestId::Arithmetique => IndexId::Irf,
            SubtestId::MemoireChiffres
            | SubtestId::MemoireImages
            | SubtestId::SequenceLettresChiffres => IndexId::Imt,
            SubtestId::Code | SubtestId::Symboles | SubtestId::Barrage => IndexId::Ivt,
        }
    }
}

/// A scaled subtest score (mean 10, SD 3), guaranteed in [1,19].
///
/// Absence ("not administered") is structural: the entry form's 0 sentinel
/// is decoded by [`SubtestScore::from_raw`] and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubtestScore {
    pub subtest: SubtestId,
    pub points: u8,
}

impl SubtestScore {
    /// Decode a raw form entry: 0 means "not administered" and maps to
    /// `None`; anything outside [1,19] is rejected.
    pub fn from_raw(subtest: SubtestId, raw: u8) -> Result<Option<Self>, ValidationError> {
        match raw {
            0 => Ok(None),
            SCALED_MIN..=SCALED_MAX => Ok(Some(SubtestScore {
                subtest,
                points: raw,
            })),
            _ => Err(ValidationError {
                field: subtest.abbreviation().to_string(),
                value: f64::from(raw),
                min: f64::from(SCALED_MIN),
                max: f64::from(SCALED_MAX),
                message: format!(
                    "WISC-V: {} score {} is outside range [{}, {}]",
                    subtest.name(),
                    raw,
                    SCALED_MIN,
                    SCALED_MAX,
                ),
            }),
        }
    }
}
