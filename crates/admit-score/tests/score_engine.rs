//! End-to-end scoring scenarios exercised through the public crate surface.

use admit_score::scoring::{compute, MajorTrack, Profile, ProfileDraft, ScoreEngine, Verdict};

fn student(gpa: f64, sat: u32, act: u32) -> Profile {
    Profile {
        gpa,
        sat,
        act,
        ..Profile::default()
    }
}

#[test]
fn reference_profile_matches_hand_computed_metrics() {
    let metrics = compute(&Profile::default());

    assert_eq!(metrics.test_percentile, 96);
    assert_eq!(metrics.gpa_percentile, 90);
    assert_eq!(metrics.ai_score, 233);
    assert_eq!(metrics.rigor_score, 7.7);
    assert_eq!(metrics.ec_score, 8.5);
    assert_eq!(metrics.final_score, 87);
    assert_eq!(metrics.verdict, Verdict::StrongMatch);
    assert!(metrics.feedback.contains("Balanced Profile"));
}

#[test]
fn every_major_track_orders_final_scores() {
    let engine = ScoreEngine::new();
    let scores: Vec<i32> = MajorTrack::ALL
        .into_iter()
        .map(|track| {
            engine
                .compute(&Profile {
                    major_multiplier: track.multiplier(),
                    ..Profile::default()
                })
                .final_score
        })
        .collect();

    assert_eq!(scores, vec![74, 83, 87, 92]);
}

#[test]
fn gpa_bands_feed_percentiles() {
    let cases = [(4.0, 99), (3.8, 90), (3.79, 75), (3.5, 75), (3.0, 50), (2.0, 25)];
    for (gpa, expected) in cases {
        assert_eq!(
            compute(&student(gpa, 1510, 0)).gpa_percentile,
            expected,
            "gpa {gpa}"
        );
    }
}

#[test]
fn act_only_student_is_scored_on_act() {
    let metrics = compute(&student(3.7, 0, 34));

    assert_eq!(metrics.test_label, "ACT Percentile");
    assert_eq!(metrics.test_percentile, 99);
}

#[test]
fn stacked_hooks_never_exceed_99() {
    let metrics = compute(&Profile {
        is_ed: true,
        is_athlete: true,
        is_legacy: true,
        ..Profile::default()
    });

    assert_eq!(metrics.final_score, 99);
    assert_eq!(metrics.verdict, Verdict::EliteTier);
    assert!(metrics.feedback.starts_with("<b>Recruit Status:</b>"));
}

#[test]
fn weak_profile_lands_in_reach() {
    let metrics = compute(&Profile {
        gpa: 2.8,
        sat: 980,
        act: 0,
        ap_offered: 12,
        ap_taken: 2,
        ec_tier: 3,
        roles: 0,
        major_multiplier: 1.0,
        is_ed: false,
        is_athlete: false,
        is_legacy: false,
    });

    assert_eq!(metrics.test_percentile, 31);
    assert_eq!(metrics.gpa_percentile, 35);
    assert_eq!(metrics.verdict, Verdict::Reach);
}

#[test]
fn drafts_from_json_are_coerced_before_scoring() {
    let draft: ProfileDraft =
        serde_json::from_str(r#"{ "sat": 0, "act": 0, "gpa": 3.95 }"#).expect("draft parses");

    let metrics = compute(&draft.into_profile());

    assert_eq!(metrics.test_sub, "No Score");
    assert_eq!(metrics.test_percentile, 0);
}
