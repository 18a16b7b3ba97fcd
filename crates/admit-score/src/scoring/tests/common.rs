use crate::scoring::{Metrics, Profile, ScoreEngine};

pub(super) fn engine() -> ScoreEngine {
    ScoreEngine::new()
}

pub(super) fn score(profile: Profile) -> Metrics {
    engine().compute(&profile)
}

/// Default profile with its test scores replaced.
pub(super) fn with_tests(sat: u32, act: u32) -> Profile {
    Profile {
        sat,
        act,
        ..Profile::default()
    }
}

pub(super) fn with_ap(ap_offered: u32, ap_taken: u32) -> Profile {
    Profile {
        ap_offered,
        ap_taken,
        ..Profile::default()
    }
}

/// Strongest possible academics and activities with every hook enabled.
pub(super) fn maxed_out_recruit() -> Profile {
    Profile {
        gpa: 4.0,
        sat: 1600,
        act: 0,
        ap_offered: 10,
        ap_taken: 10,
        ec_tier: 10,
        roles: 4,
        major_multiplier: 1.0,
        is_ed: true,
        is_athlete: true,
        is_legacy: true,
    }
}

/// Middling academics carried by a full rigor load and top-tier activities.
pub(super) fn activity_spike_profile() -> Profile {
    Profile {
        gpa: 3.5,
        sat: 1300,
        act: 0,
        ap_offered: 10,
        ap_taken: 10,
        ec_tier: 10,
        roles: 0,
        major_multiplier: 1.0,
        is_ed: false,
        is_athlete: false,
        is_legacy: false,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
