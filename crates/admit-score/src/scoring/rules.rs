use super::bands::{round_half_up, ACT_LADDER, GPA_LADDER, SAT_LADDER};
use super::domain::{Profile, TestKind};

const ACADEMIC_INDEX_MAX: f64 = 240.0;
const SUB_SCORE_MAX: f64 = 10.0;
const FINAL_SCORE_CAP: f64 = 99.0;

const ED_BONUS: f64 = 8.0;
const ATHLETE_BONUS: f64 = 20.0;
const LEGACY_BONUS: f64 = 5.0;

pub(crate) struct TestNormalization {
    pub kind: Option<TestKind>,
    pub percentile: u8,
    pub raw_sub_score: f64,
}

/// SAT wins whenever it is present; ACT is only consulted without an SAT score.
pub(crate) fn normalize_test(sat: u32, act: u32) -> TestNormalization {
    if sat > 0 {
        let sat = f64::from(sat);
        TestNormalization {
            kind: Some(TestKind::Sat),
            percentile: SAT_LADDER.percentile(sat),
            raw_sub_score: sat / 1600.0 * 80.0,
        }
    } else if act > 0 {
        let act = f64::from(act);
        TestNormalization {
            kind: Some(TestKind::Act),
            percentile: ACT_LADDER.percentile(act),
            raw_sub_score: act / 36.0 * 80.0,
        }
    } else {
        TestNormalization {
            kind: None,
            percentile: 0,
            raw_sub_score: 0.0,
        }
    }
}

pub(crate) fn gpa_percentile(gpa: f64) -> u8 {
    GPA_LADDER.percentile(gpa)
}

pub(crate) fn academic_index(gpa: f64, test_raw_sub_score: f64) -> u16 {
    let rank_score = if gpa >= 3.9 { 78.0 } else { 75.0 };
    let raw = gpa / 4.0 * 80.0 + test_raw_sub_score + rank_score;
    round_half_up(raw).min(ACADEMIC_INDEX_MAX) as u16
}

/// Unrounded rigor score on a 0-10 scale.
pub(crate) fn rigor_score(ap_offered: u32, ap_taken: u32) -> f64 {
    let mut ratio = if ap_offered > 0 {
        f64::from(ap_taken) / f64::from(ap_offered)
    } else {
        0.0
    };
    // Small schools: taking nearly every offered AP counts as taking all of them.
    if ap_offered < 8 && ratio >= 0.8 {
        ratio = 1.0;
    }
    let volume_bonus = if ap_taken > 10 { 1.0 } else { 0.0 };
    (ratio * 10.0 + volume_bonus).min(SUB_SCORE_MAX)
}

/// Unrounded extracurricular score on a 0-10 scale.
pub(crate) fn extracurricular_score(ec_tier: u32, roles: u32) -> f64 {
    (f64::from(ec_tier) + f64::from(roles) * 0.5).min(SUB_SCORE_MAX)
}

/// Weighted 0-100 composite and the hook-adjusted final score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeBreakdown {
    pub ai_norm: f64,
    pub rigor_norm: f64,
    pub ec_norm: f64,
    pub base_score: f64,
    pub major_multiplier: f64,
    pub hook_bonus: f64,
    /// Multiplied and hook-adjusted score before rounding and capping.
    pub adjusted_score: f64,
    pub final_score: i32,
}

pub(crate) fn composite(
    profile: &Profile,
    ai_score: u16,
    rigor_score: f64,
    ec_score: f64,
) -> CompositeBreakdown {
    let ai_norm = f64::from(ai_score) / ACADEMIC_INDEX_MAX * 100.0;
    let rigor_norm = rigor_score / SUB_SCORE_MAX * 100.0;
    let ec_norm = ec_score / SUB_SCORE_MAX * 100.0;
    let base_score = ai_norm * 0.4 + rigor_norm * 0.3 + ec_norm * 0.3;

    let mut adjusted_score = base_score * profile.major_multiplier;
    let mut hook_bonus = 0.0;
    for (applies, bonus) in [
        (profile.is_ed, ED_BONUS),
        (profile.is_athlete, ATHLETE_BONUS),
        (profile.is_legacy, LEGACY_BONUS),
    ] {
        if applies {
            adjusted_score += bonus;
            hook_bonus += bonus;
        }
    }

    let final_score = round_half_up(adjusted_score).min(FINAL_SCORE_CAP) as i32;

    CompositeBreakdown {
        ai_norm,
        rigor_norm,
        ec_norm,
        base_score,
        major_multiplier: profile.major_multiplier,
        hook_bonus,
        adjusted_score,
        final_score,
    }
}
