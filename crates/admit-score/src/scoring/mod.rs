//! Admissions confidence scoring.
//!
//! The engine is a pure pipeline: test normalization, GPA percentile, academic index, rigor,
//! extracurriculars, weighted composite with hooks, verdict, and feedback. Callers recompute
//! [`Metrics`] explicitly after any profile change.

mod bands;
pub mod domain;
pub mod feedback;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{MajorTrack, Metrics, Profile, ProfileDraft, TestKind, Verdict};
pub use feedback::FeedbackNote;
pub use rules::CompositeBreakdown;

use bands::round_tenths;
use tracing::debug;

/// Stateless scorer shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreEngine;

impl ScoreEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, profile: &Profile) -> Metrics {
        self.evaluate(profile).metrics
    }

    /// Metrics together with the intermediate values that produced them.
    pub fn evaluate(&self, profile: &Profile) -> Evaluation {
        let test = rules::normalize_test(profile.sat, profile.act);
        let gpa_percentile = rules::gpa_percentile(profile.gpa);
        let ai_score = rules::academic_index(profile.gpa, test.raw_sub_score);
        let rigor = rules::rigor_score(profile.ap_offered, profile.ap_taken);
        let extracurricular = rules::extracurricular_score(profile.ec_tier, profile.roles);

        let breakdown = rules::composite(profile, ai_score, rigor, extracurricular);
        let verdict = Verdict::from_final_score(breakdown.final_score);
        let notes = feedback::select_notes(profile, ai_score, breakdown.final_score);

        debug!(
            final_score = breakdown.final_score,
            %verdict,
            ai_score,
            "profile scored"
        );

        Evaluation {
            metrics: Metrics {
                test_percentile: test.percentile,
                test_label: TestKind::percentile_label(test.kind).to_string(),
                test_sub: TestKind::rank_label(test.kind).to_string(),
                gpa_percentile,
                ai_score,
                rigor_score: round_tenths(rigor),
                ec_score: round_tenths(extracurricular),
                final_score: breakdown.final_score,
                verdict,
                feedback: feedback::render(&notes),
            },
            test_kind: test.kind,
            breakdown,
            notes,
        }
    }
}

/// Convenience wrapper over [`ScoreEngine::compute`].
pub fn compute(profile: &Profile) -> Metrics {
    ScoreEngine.compute(profile)
}

/// Engine output with an audit trail of the composite.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub metrics: Metrics,
    pub test_kind: Option<TestKind>,
    pub breakdown: CompositeBreakdown,
    pub notes: Vec<FeedbackNote>,
}
