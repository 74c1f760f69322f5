//! Central estimation engine.
//!
//! Runs one session end to end: load history, seed, train, predict, compute
//! required scores, and fold a completed session back into the store.

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::learning::absorb_session;
use crate::model::{Session, TrainingRecord};
use crate::predictor::{predict_scores, Prediction, FALLBACK_SCORE};
use crate::report::SessionReport;
use crate::required::{required_scores, RequiredScoreReport};
use crate::seed::{seed_dataset, SeedPolicy};
use crate::trainer::{train_regressors, trained_count};
use crate::traits::TrainingStore;

/// Configuration for the estimation engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How bootstrap training data is produced.
    pub seed_policy: SeedPolicy,
    /// Score used when no prediction can be made.
    pub fallback_score: f64,
    /// Append completed sessions to the training store.
    pub continuous_learning: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed_policy: SeedPolicy::default(),
            fallback_score: FALLBACK_SCORE,
            continuous_learning: true,
        }
    }
}

/// The pure result of estimating a session against some history.
#[derive(Debug, Clone)]
pub struct Estimate {
    pub required: RequiredScoreReport,
    pub prediction: Prediction,
    pub trained_models: usize,
}

impl Estimate {
    /// Wrap the estimate into a report for `session`.
    pub fn into_report(
        self,
        session: &Session,
        history_records: usize,
        store_updated: bool,
    ) -> SessionReport {
        SessionReport {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            target: session.target,
            assessments: session.assessments.clone(),
            required: self.required,
            prediction: self.prediction,
            trained_models: self.trained_models,
            history_records,
            store_updated,
        }
    }
}

/// The central estimation engine.
pub struct Estimator {
    config: EngineConfig,
}

impl Estimator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Estimate `session` using `history` plus the seed dataset. Performs no I/O.
    pub fn estimate(&self, session: &Session, history: &[TrainingRecord]) -> Estimate {
        let n = session.assessment_count();

        let mut dataset = seed_dataset(self.config.seed_policy, n);
        dataset.extend_from_slice(history);

        let slots = train_regressors(&dataset, n);
        let trained_models = trained_count(&slots);
        tracing::debug!(
            "trained {trained_models}/{n} regressors on {} records ({} seed)",
            dataset.len(),
            dataset.len() - history.len()
        );

        let prediction = predict_scores(&session.assessments, &slots, self.config.fallback_score);
        let required = required_scores(session.target, &session.assessments);

        Estimate {
            required,
            prediction,
            trained_models,
        }
    }

    /// Run a full session against `store`.
    ///
    /// The store is loaded once and, when the session is complete and
    /// continuous learning is enabled, overwritten once with the extended
    /// history. Only store errors are returned.
    pub fn run(&self, session: &Session, store: &mut dyn TrainingStore) -> Result<SessionReport> {
        let mut history = store
            .load()
            .with_context(|| format!("failed to load training data from {}", store.describe()))?;
        let history_records = history.len();

        let estimate = self.estimate(session, &history);

        let mut store_updated = false;
        if self.config.continuous_learning
            && absorb_session(&mut history, session).is_some()
        {
            store
                .save(&history)
                .with_context(|| format!("failed to save training data to {}", store.describe()))?;
            tracing::info!(
                "training data updated: {} records in {}",
                history.len(),
                store.describe()
            );
            store_updated = true;
        }

        Ok(estimate.into_report(session, history_records, store_updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Assessment;
    use crate::predictor::{FallbackReason, ScoreSource};
    use crate::required::RequirementStatus;

    /// Minimal in-memory store for engine tests.
    #[derive(Default)]
    struct VecStore {
        records: Vec<TrainingRecord>,
        saves: usize,
        fail_save: bool,
    }

    impl TrainingStore for VecStore {
        fn load(&self) -> Result<Vec<TrainingRecord>> {
            Ok(self.records.clone())
        }

        fn save(&mut self, records: &[TrainingRecord]) -> Result<()> {
            if self.fail_save {
                anyhow::bail!("disk full");
            }
            self.records = records.to_vec();
            self.saves += 1;
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".into()
        }
    }

    fn session(target: f64, scores: &[Option<f64>]) -> Session {
        let weight = 100.0 / scores.len() as f64;
        Session::new(
            target,
            scores
                .iter()
                .enumerate()
                .map(|(i, s)| Assessment::new(format!("A{}", i + 1), weight, *s))
                .collect(),
        )
    }

    #[test]
    fn completed_session_grows_store_by_one() {
        let mut store = VecStore {
            records: vec![TrainingRecord::identity(vec![60.0, 65.0])],
            ..Default::default()
        };
        let estimator = Estimator::new(EngineConfig::default());
        let report = estimator
            .run(&session(70.0, &[Some(80.0), Some(90.0)]), &mut store)
            .unwrap();

        assert!(report.store_updated);
        assert_eq!(report.history_records, 1);
        assert_eq!(report.required.status, RequirementStatus::TargetMet);
        assert_eq!(store.records.len(), 2);
        assert_eq!(store.records[1], TrainingRecord::identity(vec![80.0, 90.0]));
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn incomplete_session_does_not_touch_store() {
        let mut store = VecStore::default();
        let report = Estimator::new(EngineConfig::default())
            .run(&session(70.0, &[Some(80.0), None]), &mut store)
            .unwrap();
        assert!(!report.store_updated);
        assert_eq!(store.saves, 0);
        assert!(store.records.is_empty());
    }

    #[test]
    fn learning_can_be_disabled() {
        let mut store = VecStore::default();
        let config = EngineConfig {
            continuous_learning: false,
            ..Default::default()
        };
        let report = Estimator::new(config)
            .run(&session(70.0, &[Some(80.0), Some(90.0)]), &mut store)
            .unwrap();
        assert!(!report.store_updated);
        assert_eq!(store.saves, 0);
    }

    #[test]
    fn save_failure_propagates() {
        let mut store = VecStore {
            fail_save: true,
            ..Default::default()
        };
        let err = Estimator::new(EngineConfig::default())
            .run(&session(70.0, &[Some(80.0), Some(90.0)]), &mut store)
            .unwrap_err();
        assert!(format!("{err:#}").contains("disk full"));
    }

    #[test]
    fn empty_history_identity_seed() {
        let estimator = Estimator::new(EngineConfig::default());
        let estimate = estimator.estimate(&session(75.0, &[Some(72.5), None]), &[]);
        assert_eq!(estimate.trained_models, 2);
        let predicted = &estimate.prediction.scores[1];
        assert_eq!(predicted.source, ScoreSource::Model);
        assert!((predicted.score - 72.5).abs() < 1e-6);
    }

    #[test]
    fn no_seed_shape_falls_back_to_constant() {
        let estimator = Estimator::new(EngineConfig {
            seed_policy: SeedPolicy::Reference,
            ..Default::default()
        });
        let estimate = estimator.estimate(
            &session(75.0, &[Some(80.0), Some(70.0), None, Some(60.0), Some(90.0)]),
            &[],
        );
        assert_eq!(estimate.trained_models, 0);
        assert_eq!(estimate.prediction.scores[2].score, 70.0);
        assert_eq!(
            estimate.prediction.scores[2].source,
            ScoreSource::Fallback(FallbackReason::NoModel)
        );
    }

    #[test]
    fn history_shorter_than_session_is_ignored() {
        let estimator = Estimator::new(EngineConfig {
            seed_policy: SeedPolicy::None,
            ..Default::default()
        });
        let history = vec![
            TrainingRecord::identity(vec![90.0, 90.0]),
            TrainingRecord::identity(vec![40.0, 40.0]),
        ];
        let estimate = estimator.estimate(&session(75.0, &[Some(80.0), Some(70.0), None]), &history);
        assert_eq!(estimate.trained_models, 0);
        assert_eq!(estimate.prediction.scores[2].score, 70.0);
    }

    #[test]
    fn history_drives_predictions() {
        let estimator = Estimator::new(EngineConfig {
            seed_policy: SeedPolicy::None,
            ..Default::default()
        });
        // Second assessment is always ten points below the first.
        let history: Vec<TrainingRecord> = [60.0, 70.0, 80.0, 90.0]
            .iter()
            .map(|&v| TrainingRecord::identity(vec![v, v - 10.0]))
            .collect();
        let estimate = estimator.estimate(&session(75.0, &[Some(85.0), None]), &history);
        assert_eq!(estimate.prediction.scores[1].score, 75.0);
        assert_eq!(estimate.prediction.final_grade, 80.0);
    }

    #[test]
    fn repeated_runs_keep_learning() {
        let mut store = VecStore::default();
        let estimator = Estimator::new(EngineConfig::default());
        let complete = session(70.0, &[Some(80.0), Some(90.0)]);
        estimator.run(&complete, &mut store).unwrap();
        let second = estimator.run(&complete, &mut store).unwrap();
        assert_eq!(second.history_records, 1);
        assert_eq!(store.records.len(), 2);
        assert_eq!(store.records[0], store.records[1]);
    }
}
