use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::profile::ValidationError;

/// Lowest composite score the norm tables produce.
pub const COMPOSITE_MIN: u16 = 40;
/// Highest composite score the norm tables produce.
pub const COMPOSITE_MAX: u16 = 160;

/// The 9 WISC-V composite indices: the global QIT, the five primary
/// indices, and the three complementary indices looked up from separate
/// conversion tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IndexId {
    Qit,
    Icv,
    Ivs,
    Irf,
    Imt,
    Ivt,
    Iag,
    Icc,
    Inv,
}

impl IndexId {
    /// Report ordering: global first, then primaries, then complementaries.
    pub const ALL: [IndexId; 9] = [
        IndexId::Qit,
        IndexId::Icv,
        IndexId::Ivs,
        IndexId::Irf,
        IndexId::Imt,
        IndexId::Ivt,
        IndexId::Iag,
        IndexId::Icc,
        IndexId::Inv,
    ];

    /// The five primary indices, record-form order.
    pub const PRIMARY: [IndexId; 5] = [
        IndexId::Icv,
        IndexId::Ivs,
        IndexId::Irf,
        IndexId::Imt,
        IndexId::Ivt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IndexId::Qit => "Quotient Intellectuel Total",
            IndexId::Icv => "Compréhension Verbale",
            IndexId::Ivs => "Visuospatial",
            IndexId::Irf => "Raisonnement Fluide",
            IndexId::Imt => "Mémoire de Travail",
            IndexId::Ivt => "Vitesse de Traitement",
            IndexId::Iag => "Aptitude Générale",
            IndexId::Icc => "Compétence Cognitive",
            IndexId::Inv => "Non Verbal",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            IndexId::Qit => "QIT",
            IndexId::Icv => "ICV",
            IndexId::Ivs => "IVS",
            IndexId::Irf => "IRF",
            IndexId::Imt => "IMT",
            IndexId::Ivt => "IVT",
            IndexId::Iag => "IAG",
            IndexId::Icc => "ICC",
            IndexId::Inv => "INV",
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(
            self,
            IndexId::Icv | IndexId::Ivs | IndexId::Irf | IndexId::Imt | IndexId::Ivt
        )
    }
}

/// 95% confidence interval around a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceInterval {
    pub low: u16,
    pub high: u16,
}

/// A composite index score (mean 100, SD 15), guaranteed in [40,160].
///
/// Percentile and confidence interval are optional (the clinician may not
/// have looked them up), but when present they are validated against the
/// score at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndexScore {
    pub index: IndexId,
    pub points: u16,
    pub percentile: Option<f32>,
    pub confidence_interval: Option<ConfidenceInterval>,
}

impl IndexScore {
    /// Decode a raw form entry: 0 means "not computed" and maps to `None`.
    ///
    /// A percentile or interval attached to a 0 score is meaningless and is
    /// discarded with the sentinel. For a real score, the percentile must
    /// fall in [0,100] and the interval must bracket the score.
    pub fn from_raw(
        index: IndexId,
        raw: u16,
        percentile: Option<f32>,
        confidence_interval: Option<(u16, u16)>,
    ) -> Result<Option<Self>, ValidationError> {
        if raw == 0 {
            return Ok(None);
        }

        if !(COMPOSITE_MIN..=COMPOSITE_MAX).contains(&raw) {
            return Err(ValidationError {
                field: index.abbreviation().to_string(),
                value: f64::from(raw),
                min: f64::from(COMPOSITE_MIN),
                max: f64::from(COMPOSITE_MAX),
                message: format!(
                    "WISC-V: {} ({}) score {} is outside range [{}, {}]",
                    index.name(),
                    index.abbreviation(),
                    raw,
                    COMPOSITE_MIN,
                    COMPOSITE_MAX,
                ),
            });
        }

        if let Some(p) = percentile
            && !(0.0..=100.0).contains(&p)
        {
            return Err(ValidationError {
                field: index.abbreviation().to_string(),
                value: f64::from(p),
                min: 0.0,
                max: 100.0,
                message: format!(
                    "WISC-V: {} percentile {} is outside range [0, 100]",
                    index.abbreviation(),
                    p,
                ),
            });
        }

        let confidence_interval = match confidence_interval {
            Some((low, high)) if low <= raw && raw <= high => {
                Some(ConfidenceInterval { low, high })
            }
            Some((low, high)) => {
                return Err(ValidationError {
                    field: index.abbreviation().to_string(),
                    value: f64::from(raw),
                    min: f64::from(low),
                    max: f64::from(high),
                    message: format!(
                        "WISC-V: {} confidence interval [{}, {}] does not bracket score {}",
                        index.abbreviation(),
                        low,
                        high,
                        raw,
                    ),
                });
            }
            None => None,
        };

        Ok(Some(IndexScore {
            index,
            points: raw,
            percentile,
            confidence_interval,
        }))
    }
}
