use admit_score::profiles::{ProfileId, ProfileRepository, RepositoryError, StoredProfile};
use admit_score::scoring::Profile;
use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local profile store; snapshots are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<Vec<StoredProfile>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
    fn latest(&self) -> Result<Option<StoredProfile>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("profile store lock poisoned".to_string()))?;
        Ok(guard
            .iter()
            .max_by_key(|record| record.recency_key())
            .cloned())
    }

    fn insert(&self, profile: Profile) -> Result<StoredProfile, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("profile store lock poisoned".to_string()))?;
        let next_id = guard.last().map(|record| record.id.0 + 1).unwrap_or(1);
        let now = Utc::now();
        let stored = StoredProfile {
            id: ProfileId(next_id),
            profile,
            created_at: now,
            updated_at: now,
        };
        guard.push(stored.clone());
        Ok(stored)
    }
}

pub(crate) fn parse_gpa(raw: &str) -> Result<f64, String> {
    let gpa = parse_finite(raw)?;
    if gpa < 0.0 {
        return Err(format!("GPA cannot be negative, found {gpa}"));
    }
    Ok(gpa)
}

pub(crate) fn parse_multiplier(raw: &str) -> Result<f64, String> {
    let multiplier = parse_finite(raw)?;
    if multiplier <= 0.0 {
        return Err(format!("major multiplier must be positive, found {multiplier}"));
    }
    Ok(multiplier)
}

fn parse_finite(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("'{raw}' is not a number: {err}"))?;
    if !value.is_finite() {
        return Err(format!("'{raw}' is not a finite number"));
    }
    Ok(value)
}
