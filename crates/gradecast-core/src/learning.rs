//! Continuous learning: completed sessions become training data.

use crate::model::{Session, TrainingRecord};

/// Append the session's score vector to `history` if every assessment is scored.
///
/// Returns the appended record. Sessions with a missing or non-finite score,
/// or with no assessments at all, leave `history` untouched. Repeated calls with the
/// same session append duplicates.
pub fn absorb_session(history: &mut Vec<TrainingRecord>, session: &Session) -> Option<TrainingRecord> {
    if !session.is_complete() {
        return None;
    }
    let scores = session.known_scores()?;
    if !scores.iter().all(|s| s.is_finite()) {
        tracing::warn!("not recording session with non-finite scores: {scores:?}");
        return None;
    }
    let record = TrainingRecord::identity(scores);
    history.push(record.clone());
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Assessment;

    fn scored(scores: &[Option<f64>]) -> Session {
        Session::new(
            60.0,
            scores
                .iter()
                .enumerate()
                .map(|(i, s)| Assessment::new(format!("A{i}"), 25.0, *s))
                .collect(),
        )
    }

    #[test]
    fn complete_session_adds_identity_record() {
        let mut history = vec![TrainingRecord::identity(vec![1.0, 2.0])];
        let record = absorb_session(&mut history, &scored(&[Some(80.0), Some(72.5)])).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(record.features, vec![80.0, 72.5]);
        assert_eq!(record.label, record.features);
        assert_eq!(history[1], record);
    }

    #[test]
    fn incomplete_session_is_ignored() {
        let mut history = Vec::new();
        assert!(absorb_session(&mut history, &scored(&[Some(80.0), None])).is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn non_finite_scores_are_never_recorded() {
        let mut history = vec![TrainingRecord::identity(vec![80.0, 70.0])];
        assert!(absorb_session(&mut history, &scored(&[Some(f64::NAN), Some(80.0)])).is_none());
        assert!(absorb_session(&mut history, &scored(&[Some(90.0), Some(f64::INFINITY)])).is_none());
        assert_eq!(history, vec![TrainingRecord::identity(vec![80.0, 70.0])]);
    }

    #[test]
    fn empty_session_is_ignored() {
        let mut history = Vec::new();
        assert!(absorb_session(&mut history, &scored(&[])).is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn no_deduplication() {
        let mut history = Vec::new();
        let session = scored(&[Some(90.0), Some(85.0), Some(88.0)]);
        absorb_session(&mut history, &session);
        absorb_session(&mut history, &session);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], history[1]);
    }
}
