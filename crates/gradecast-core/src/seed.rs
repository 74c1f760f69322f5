//! Bootstrap datasets that let the regressors train before any history exists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::TrainingRecord;

/// Lowest score of a synthesized seed vector.
const SYNTHESIZED_LOW: f64 = 50.0;
/// Highest score of a synthesized seed vector.
const SYNTHESIZED_HIGH: f64 = 95.0;
/// Number of synthesized seed vectors.
const SYNTHESIZED_ROWS: usize = 7;

const REFERENCE_TWO: [[f64; 2]; 7] = [
    [80.0, 70.0],
    [90.0, 85.0],
    [60.0, 65.0],
    [70.0, 75.0],
    [85.0, 80.0],
    [50.0, 55.0],
    [95.0, 90.0],
];

const REFERENCE_THREE: [[f64; 3]; 7] = [
    [80.0, 70.0, 75.0],
    [90.0, 85.0, 88.0],
    [60.0, 65.0, 70.0],
    [70.0, 75.0, 80.0],
    [85.0, 80.0, 90.0],
    [50.0, 55.0, 60.0],
    [95.0, 90.0, 92.0],
];

/// How the seed dataset is produced for a given assessment count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedPolicy {
    /// Evenly spaced uniform identity vectors for any assessment count.
    #[default]
    Synthesized,
    /// Fixed tables for two and three assessments, nothing otherwise.
    Reference,
    /// No seed data; models train on history alone.
    None,
}

impl fmt::Display for SeedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedPolicy::Synthesized => write!(f, "synthesized"),
            SeedPolicy::Reference => write!(f, "reference"),
            SeedPolicy::None => write!(f, "none"),
        }
    }
}

impl FromStr for SeedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "synthesized" | "synthesised" => Ok(SeedPolicy::Synthesized),
            "reference" => Ok(SeedPolicy::Reference),
            "none" | "off" => Ok(SeedPolicy::None),
            other => Err(format!("unknown seed policy: {other}")),
        }
    }
}

/// Produce the seed records for a session with `n` assessments.
///
/// Every record is an identity pair (label equals features).
pub fn seed_dataset(policy: SeedPolicy, n: usize) -> Vec<TrainingRecord> {
    match policy {
        SeedPolicy::Synthesized => synthesized(n),
        SeedPolicy::Reference => reference(n),
        SeedPolicy::None => Vec::new(),
    }
}

fn synthesized(n: usize) -> Vec<TrainingRecord> {
    if n == 0 {
        return Vec::new();
    }
    let step = (SYNTHESIZED_HIGH - SYNTHESIZED_LOW) / (SYNTHESIZED_ROWS - 1) as f64;
    (0..SYNTHESIZED_ROWS)
        .map(|row| {
            let value = SYNTHESIZED_LOW + step * row as f64;
            TrainingRecord::identity(vec![value; n])
        })
        .collect()
}

fn reference(n: usize) -> Vec<TrainingRecord> {
    match n {
        2 => REFERENCE_TWO
            .iter()
            .map(|row| TrainingRecord::identity(row.to_vec()))
            .collect(),
        3 => REFERENCE_THREE
            .iter()
            .map(|row| TrainingRecord::identity(row.to_vec()))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_covers_any_dimension() {
        for n in 1..=8 {
            let seed = seed_dataset(SeedPolicy::Synthesized, n);
            assert_eq!(seed.len(), SYNTHESIZED_ROWS);
            assert!(seed.iter().all(|r| r.features.len() == n && r.label == r.features));
        }
        assert!(seed_dataset(SeedPolicy::Synthesized, 0).is_empty());
    }

    #[test]
    fn synthesized_values_are_evenly_spaced() {
        let seed = seed_dataset(SeedPolicy::Synthesized, 2);
        let firsts: Vec<f64> = seed.iter().map(|r| r.features[0]).collect();
        assert_eq!(firsts, vec![50.0, 57.5, 65.0, 72.5, 80.0, 87.5, 95.0]);
    }

    #[test]
    fn reference_has_two_shapes_only() {
        assert_eq!(seed_dataset(SeedPolicy::Reference, 2).len(), 7);
        assert_eq!(seed_dataset(SeedPolicy::Reference, 3)[0].features, vec![80.0, 70.0, 75.0]);
        assert!(seed_dataset(SeedPolicy::Reference, 1).is_empty());
        assert!(seed_dataset(SeedPolicy::Reference, 5).is_empty());
    }

    #[test]
    fn none_never_seeds() {
        assert!(seed_dataset(SeedPolicy::None, 2).is_empty());
    }

    #[test]
    fn policy_display_and_parse() {
        assert_eq!(SeedPolicy::Synthesized.to_string(), "synthesized");
        assert_eq!("Reference".parse::<SeedPolicy>().unwrap(), SeedPolicy::Reference);
        assert_eq!("off".parse::<SeedPolicy>().unwrap(), SeedPolicy::None);
        assert!("random".parse::<SeedPolicy>().is_err());
        assert_eq!(SeedPolicy::default(), SeedPolicy::Synthesized);
    }
}
