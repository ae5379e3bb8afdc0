use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

use super::index::{IndexId, IndexScore};
use super::subtest::{SubtestId, SubtestScore};

/// A score entry rejected at the profile boundary.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub message: String,
}

/// One index entry as submitted by the entry form. A `points` of 0 means
/// "not computed", the sentinel convention of the paper record form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawIndexEntry {
    pub points: u16,
    #[serde(default)]
    pub percentile: Option<f32>,
    #[serde(default)]
    pub confidence_interval: Option<(u16, u16)>,
}

/// Scores exactly as submitted by the entry form or document extraction:
/// 0 sentinels allowed, nothing validated yet.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawProfile {
    pub examinee: String,
    pub birth_date: jiff::civil::Date,
    pub test_date: jiff::civil::Date,
    #[serde(default)]
    pub subtests: BTreeMap<SubtestId, u8>,
    #[serde(default)]
    pub indices: BTreeMap<IndexId, RawIndexEntry>,
}

impl RawProfile {
    /// Check every entry against its range without building a profile.
    ///
    /// Returns all offending entries, not just the first, so the entry form
    /// can surface the full list at once.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (subtest, raw) in &self.subtests {
            if let Err(e) = SubtestScore::from_raw(*subtest, *raw) {
                errors.push(e);
            }
        }
        for (index, entry) in &self.indices {
            if let Err(e) = IndexScore::from_raw(
                *index,
                entry.points,
                entry.percentile,
                entry.confidence_interval,
            ) {
                errors.push(e);
            }
        }
        errors
    }

    /// Decode into an immutable [`Profile`], turning 0 sentinels into
    /// structural absence. Fails on the first out-of-range entry.
    pub fn into_profile(self) -> Result<Profile, CoreError> {
        let mut subtests = BTreeMap::new();
        for (subtest, raw) in &self.subtests {
            if let Some(score) = SubtestScore::from_raw(*subtest, *raw)? {
                subtests.insert(*subtest, score);
            }
        }

        let mut indices = BTreeMap::new();
        for (index, entry) in &self.indices {
            if let Some(score) = IndexScore::from_raw(
                *index,
                entry.points,
                entry.percentile,
                entry.confidence_interval,
            )? {
                indices.insert(*index, score);
            }
        }

        Ok(Profile {
            id: Uuid::new_v4(),
            examinee: self.examinee,
            birth_date: self.birth_date,
            test_date: self.test_date,
            subtests,
            indices,
        })
    }
}

/// An immutable snapshot of one examinee's scores for a single analysis run.
///
/// Absent entries mean "not administered"; the 0 sentinel never survives
/// past [`RawProfile::into_profile`]. No component retains the profile
/// beyond its own call, so classifying many profiles concurrently needs no
/// coordination.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Profile {
    pub id: Uuid,
    pub examinee: String,
    pub birth_date: jiff::civil::Date,
    pub test_date: jiff::civil::Date,
    pub subtests: BTreeMap<SubtestId, SubtestScore>,
    pub indices: BTreeMap<IndexId, IndexScore>,
}

impl Profile {
    /// Scaled points for a subtest, if administered.
    pub fn subtest_points(&self, subtest: SubtestId) -> Option<u8> {
        self.subtests.get(&subtest).map(|s| s.points)
    }

    /// Composite points for an index, if computed.
    pub fn index_points(&self, index: IndexId) -> Option<u16> {
        self.indices.get(&index).map(|s| s.points)
    }

    /// The administered primary indices and their points.
    pub fn primary_index_points(&self) -> BTreeMap<IndexId, u16> {
        IndexId::PRIMARY
            .iter()
            .filter_map(|index| self.index_points(*index).map(|points| (*index, points)))
            .collect()
    }
}

/// Build a civil date, rejecting impossible calendar dates.
///
/// The entry form submits separate day/month/year fields; a February 30
/// fails here, before a [`RawProfile`] can exist.
pub fn civil_date(year: i16, month: i8, day: i8) -> Result<jiff::civil::Date, CoreError> {
    jiff::civil::Date::new(year, month, day).map_err(CoreError::from)
}
