use super::domain::Profile;

/// Narrative notices that can make up a profile's feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackNote {
    RecruitStatus,
    MajorWarning,
    ActivitySpike,
    BalancedProfile,
}

impl FeedbackNote {
    /// Notice text with inline `<b>` emphasis.
    pub fn markup(self) -> &'static str {
        match self {
            FeedbackNote::RecruitStatus => "<b>Recruit Status:</b> As a recruited athlete, your admissions bar is significantly different from the general pool. ",
            FeedbackNote::MajorWarning => "<b>Major Warning:</b> Your intended major is highly competitive, lowering your odds despite good stats. ",
            FeedbackNote::ActivitySpike => "<b>Activity Spike:</b> Your extracurriculars are carrying the application. ",
            FeedbackNote::BalancedProfile => "<b>Balanced Profile:</b> Your metrics are well-distributed. Focus on the narrative in your essays.",
        }
    }
}

pub(crate) fn select_notes(
    profile: &Profile,
    ai_score: u16,
    final_score: i32,
) -> Vec<FeedbackNote> {
    let mut notes = Vec::new();

    if profile.is_athlete {
        notes.push(FeedbackNote::RecruitStatus);
    } else if profile.major_multiplier < 1.0 {
        notes.push(FeedbackNote::MajorWarning);
    }

    if ai_score < 220 && final_score > 85 && !profile.is_athlete {
        notes.push(FeedbackNote::ActivitySpike);
    }

    if notes.is_empty() {
        notes.push(FeedbackNote::BalancedProfile);
    }

    notes
}

pub(crate) fn render(notes: &[FeedbackNote]) -> String {
    notes.iter().map(|note| note.markup()).collect()
}
