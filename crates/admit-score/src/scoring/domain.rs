use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Academic profile consumed by the score engine.
///
/// Field names follow the persisted snake_case schema so the same value can travel through
/// the profile store, the HTTP surface, and CSV imports unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub gpa: f64,
    /// `0` means no SAT score was provided.
    pub sat: u32,
    /// `0` means no ACT score was provided.
    pub act: u32,
    pub ap_offered: u32,
    pub ap_taken: u32,
    pub ec_tier: u32,
    pub roles: u32,
    pub major_multiplier: f64,
    pub is_ed: bool,
    pub is_athlete: bool,
    pub is_legacy: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            gpa: 3.95,
            sat: 1510,
            act: 0,
            ap_offered: 18,
            ap_taken: 12,
            ec_tier: 7,
            roles: 3,
            major_multiplier: MajorTrack::LiberalArts.multiplier(),
            is_ed: false,
            is_athlete: false,
            is_legacy: false,
        }
    }
}

/// Partially specified profile as it arrives from forms, JSON bodies, or CSV rows.
///
/// Absent fields are coerced to the [`Profile::default`] values. Present values are kept even
/// when they are zero, so a stored ACT-only profile keeps `sat = 0`. A non-finite or negative
/// GPA and a non-finite or non-positive major multiplier are treated as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub gpa: Option<f64>,
    pub sat: Option<u32>,
    pub act: Option<u32>,
    pub ap_offered: Option<u32>,
    pub ap_taken: Option<u32>,
    pub ec_tier: Option<u32>,
    pub roles: Option<u32>,
    pub major_multiplier: Option<f64>,
    pub is_ed: Option<bool>,
    pub is_athlete: Option<bool>,
    pub is_legacy: Option<bool>,
}

impl ProfileDraft {
    pub fn into_profile(self) -> Profile {
        let defaults = Profile::default();
        Profile {
            gpa: self
                .gpa
                .filter(|gpa| gpa.is_finite() && *gpa >= 0.0)
                .unwrap_or(defaults.gpa),
            sat: self.sat.unwrap_or(defaults.sat),
            act: self.act.unwrap_or(defaults.act),
            ap_offered: self.ap_offered.unwrap_or(defaults.ap_offered),
            ap_taken: self.ap_taken.unwrap_or(defaults.ap_taken),
            ec_tier: self.ec_tier.unwrap_or(defaults.ec_tier),
            roles: self.roles.unwrap_or(defaults.roles),
            major_multiplier: self
                .major_multiplier
                .filter(|multiplier| multiplier.is_finite() && *multiplier > 0.0)
                .unwrap_or(defaults.major_multiplier),
            is_ed: self.is_ed.unwrap_or(defaults.is_ed),
            is_athlete: self.is_athlete.unwrap_or(defaults.is_athlete),
            is_legacy: self.is_legacy.unwrap_or(defaults.is_legacy),
        }
    }
}

impl From<Profile> for ProfileDraft {
    fn from(profile: Profile) -> Self {
        Self {
            gpa: Some(profile.gpa),
            sat: Some(profile.sat),
            act: Some(profile.act),
            ap_offered: Some(profile.ap_offered),
            ap_taken: Some(profile.ap_taken),
            ec_tier: Some(profile.ec_tier),
            roles: Some(profile.roles),
            major_multiplier: Some(profile.major_multiplier),
            is_ed: Some(profile.is_ed),
            is_athlete: Some(profile.is_athlete),
            is_legacy: Some(profile.is_legacy),
        }
    }
}

/// Conventional intended-major presets and their competitiveness multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MajorTrack {
    Engineering,
    Business,
    LiberalArts,
    Humanities,
}

impl MajorTrack {
    pub const ALL: [MajorTrack; 4] = [
        MajorTrack::Engineering,
        MajorTrack::Business,
        MajorTrack::LiberalArts,
        MajorTrack::Humanities,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            MajorTrack::Engineering => 0.85,
            MajorTrack::Business => 0.95,
            MajorTrack::LiberalArts => 1.0,
            MajorTrack::Humanities => 1.05,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MajorTrack::Engineering => "CS / Engineering (Hardest)",
            MajorTrack::Business => "Business / Econ",
            MajorTrack::LiberalArts => "Liberal Arts / Undecided",
            MajorTrack::Humanities => "Humanities",
        }
    }

    /// Preset matching a multiplier exactly, if any.
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|track| (track.multiplier() - multiplier).abs() < f64::EPSILON)
    }
}

impl FromStr for MajorTrack {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "engineering" | "cs" | "stem" => Ok(MajorTrack::Engineering),
            "business" | "econ" | "economics" => Ok(MajorTrack::Business),
            "liberal-arts" | "liberal_arts" | "undecided" => Ok(MajorTrack::LiberalArts),
            "humanities" => Ok(MajorTrack::Humanities),
            other => Err(format!(
                "unknown major track '{other}' (expected engineering, business, liberal-arts, humanities)"
            )),
        }
    }
}

/// Standardized test that fed the academic index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    Sat,
    Act,
}

impl TestKind {
    pub fn percentile_label(kind: Option<Self>) -> &'static str {
        match kind {
            Some(TestKind::Sat) => "SAT Percentile",
            Some(TestKind::Act) => "ACT Percentile",
            None => "Test Percentile",
        }
    }

    pub fn rank_label(kind: Option<Self>) -> &'static str {
        match kind {
            Some(TestKind::Sat) => "SAT Rank",
            Some(TestKind::Act) => "ACT Rank",
            None => "No Score",
        }
    }
}

/// Coarse qualitative bucket derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    #[serde(rename = "Elite Tier")]
    EliteTier,
    #[serde(rename = "Strong Match")]
    StrongMatch,
    #[serde(rename = "Competitive")]
    Competitive,
    #[serde(rename = "Reach")]
    Reach,
}

impl Verdict {
    pub fn from_final_score(score: i32) -> Self {
        match score {
            s if s >= 90 => Verdict::EliteTier,
            s if s >= 80 => Verdict::StrongMatch,
            s if s >= 70 => Verdict::Competitive,
            _ => Verdict::Reach,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::EliteTier => "Elite Tier",
            Verdict::StrongMatch => "Strong Match",
            Verdict::Competitive => "Competitive",
            Verdict::Reach => "Reach",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived metrics consumed by presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub test_percentile: u8,
    pub test_label: String,
    pub test_sub: String,
    pub gpa_percentile: u8,
    pub ai_score: u16,
    /// Rounded to one fractional digit.
    pub rigor_score: f64,
    /// Rounded to one fractional digit.
    pub ec_score: f64,
    pub final_score: i32,
    pub verdict: Verdict,
    /// Narrative feedback carrying inline `<b>` emphasis markup.
    pub feedback: String,
}
