use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::index::{ConfidenceInterval, IndexId};
use super::subtest::SubtestId;
use super::thresholds::ClassificationThresholds;

/// Completed age at testing, in whole years and months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExamineeAge {
    pub years: u32,
    pub months: u32,
}

/// Agreement between the two subtests feeding one primary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum HomogeneityFlag {
    Homogeneous,
    Heterogeneous { gap: u32 },
}

/// The homogeneity reading for one canonical subtest pair.
///
/// `flag` is `None` when either subtest was not administered: the pair is
/// not evaluable, which the report states explicitly rather than treating
/// it as homogeneous or dropping the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PairHomogeneity {
    pub index: IndexId,
    pub first: SubtestId,
    pub second: SubtestId,
    pub flag: Option<HomogeneityFlag>,
}

/// Whether the global QIT score can be interpreted, with the figure that
/// decided it.
///
/// `Invalid` (dispersion) outranks `Fragile` (pair count) when both rules
/// fire; the classifier guarantees that ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidityVerdict {
    /// Fewer than five primary indices administered; nothing else checked.
    Incomplete { scored: usize },
    /// Primary-index dispersion reached the cutoff.
    Invalid { dispersion: u32 },
    /// Two or more subtest pairs are heterogeneous.
    Fragile { heterogeneous_pairs: usize },
    /// Homogeneous profile, QIT interpretable.
    Valid { dispersion: u32 },
}

/// Descriptive band for a composite score, mean 100, SD 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QualitativeBand {
    TresSuperieur,
    Superieur,
    MoyenFort,
    Moyen,
    MoyenFaible,
    ZoneLimite,
    TresFaible,
}

impl QualitativeBand {
    /// The wording used in written reports.
    pub fn label(&self) -> &'static str {
        match self {
            QualitativeBand::TresSuperieur => "Très Supérieur",
            QualitativeBand::Superieur => "Supérieur",
            QualitativeBand::MoyenFort => "Moyen Fort",
            QualitativeBand::Moyen => "Moyen",
            QualitativeBand::MoyenFaible => "Moyen Faible",
            QualitativeBand::ZoneLimite => "Fragile (zone limite)",
            QualitativeBand::TresFaible => "Très Faible",
        }
    }
}

/// Normative reading of one administered index: the score against the
/// population anchors, with its band and distance from the mean in SD
/// units. Percentile and confidence interval are echoed when the
/// clinician entered them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormativeEntry {
    pub index: IndexId,
    pub points: u16,
    pub band: QualitativeBand,
    pub deviation_sd: f64,
    pub percentile: Option<f32>,
    pub confidence_interval: Option<ConfidenceInterval>,
}

/// How an index sits relative to the examinee's own mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RelativeStanding {
    Strength,
    Weakness,
    Average,
}

/// One index in the intra-individual analysis: its distance from the
/// personal mean and the resulting standing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IpsativeEntry {
    pub index: IndexId,
    pub points: u16,
    pub delta: f64,
    pub standing: RelativeStanding,
}

/// Intra-individual (ipsative) analysis: mean and population standard
/// deviation of the administered indices, with one entry per index.
///
/// Self-referenced by construction. It answers "how does this child
/// compare to themself", the normative entries answer "to the norm";
/// the two are separate fields and are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IpsativeProfile {
    pub mean: f64,
    pub stdev: f64,
    pub entries: Vec<IpsativeEntry>,
}

/// The sum of one complementary-index subtest subset, or `Incomplete`
/// when a required subtest was not administered.
///
/// Serializes to exactly a JSON integer or the string `"Incomplete"`,
/// the contract the narrative layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AidTotal {
    Points(u32),
    Incomplete,
}

impl Serialize for AidTotal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            AidTotal::Points(points) => serializer.serialize_u32(*points),
            AidTotal::Incomplete => serializer.serialize_str("Incomplete"),
        }
    }
}

impl<'de> Deserialize<'de> for AidTotal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AidTotalVisitor;

        impl serde::de::Visitor<'_> for AidTotalVisitor {
            type Value = AidTotal;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an integer sum or the string \"Incomplete\"")
            }

            fn visit_u64<E>(self, value: u64) -> Result<AidTotal, E>
            where
                E: serde::de::Error,
            {
                u32::try_from(value)
                    .map(AidTotal::Points)
                    .map_err(|_| E::custom(format!("aid sum {value} does not fit in u32")))
            }

            fn visit_i64<E>(self, value: i64) -> Result<AidTotal, E>
            where
                E: serde::de::Error,
            {
                u32::try_from(value)
                    .map(AidTotal::Points)
                    .map_err(|_| E::custom(format!("aid sum {value} is not a valid total")))
            }

            fn visit_str<E>(self, value: &str) -> Result<AidTotal, E>
            where
                E: serde::de::Error,
            {
                if value == "Incomplete" {
                    Ok(AidTotal::Incomplete)
                } else {
                    Err(E::unknown_variant(value, &["Incomplete"]))
                }
            }
        }

        deserializer.deserialize_any(AidTotalVisitor)
    }
}

/// The three complementary-index cross-check sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositeAids {
    #[ts(type = "number | \"Incomplete\"")]
    pub iag: AidTotal,
    #[ts(type = "number | \"Incomplete\"")]
    pub icc: AidTotal,
    #[ts(type = "number | \"Incomplete\"")]
    pub inv: AidTotal,
}

/// The complete rule-based reading of one profile.
///
/// Assembled in one pass over an immutable profile snapshot and never
/// mutated afterwards. The thresholds that produced the verdict are
/// echoed so a stored result stays auditable after the configuration
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationResult {
    pub profile_id: Uuid,
    pub examinee: String,
    pub age: ExamineeAge,
    pub validity: ValidityVerdict,
    pub pairs: Vec<PairHomogeneity>,
    pub normative: Vec<NormativeEntry>,
    pub ipsative: Option<IpsativeProfile>,
    pub aids: CompositeAids,
    pub thresholds: ClassificationThresholds,
}
