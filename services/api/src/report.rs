use std::fmt::Write as _;
use std::path::PathBuf;
use std::str::FromStr;

use admit_score::error::AppError;
use admit_score::import::ProfileImporter;
use admit_score::scoring::{
    Evaluation, MajorTrack, Metrics, Profile, ProfileDraft, ScoreEngine, Verdict,
};
use clap::Args;
use serde::Serialize;

const METER_WIDTH: usize = 20;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// GPA on a 4.0 scale (defaults to 3.95)
    #[arg(long, value_parser = crate::infra::parse_gpa)]
    pub(crate) gpa: Option<f64>,
    /// SAT total, 0 when not taken (defaults to 1510)
    #[arg(long)]
    pub(crate) sat: Option<u32>,
    /// ACT composite, 0 when not taken (defaults to 0)
    #[arg(long)]
    pub(crate) act: Option<u32>,
    /// AP courses offered by the school
    #[arg(long)]
    pub(crate) ap_offered: Option<u32>,
    /// AP courses taken
    #[arg(long)]
    pub(crate) ap_taken: Option<u32>,
    /// Extracurricular tier from 1 to 10
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub(crate) ec_tier: Option<u32>,
    /// Number of leadership roles
    #[arg(long)]
    pub(crate) roles: Option<u32>,
    /// Intended major preset (engineering, business, liberal-arts, humanities)
    #[arg(long, value_parser = MajorTrack::from_str, conflicts_with = "major_multiplier")]
    pub(crate) major: Option<MajorTrack>,
    /// Explicit major competitiveness multiplier
    #[arg(long, value_parser = crate::infra::parse_multiplier)]
    pub(crate) major_multiplier: Option<f64>,
    /// Applying early decision
    #[arg(long)]
    pub(crate) early_decision: bool,
    /// Recruited athlete
    #[arg(long)]
    pub(crate) athlete: bool,
    /// Legacy applicant
    #[arg(long)]
    pub(crate) legacy: bool,
    /// Print metrics as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

impl ScoreArgs {
    pub(crate) fn draft(&self) -> ProfileDraft {
        ProfileDraft {
            gpa: self.gpa,
            sat: self.sat,
            act: self.act,
            ap_offered: self.ap_offered,
            ap_taken: self.ap_taken,
            ec_tier: self.ec_tier,
            roles: self.roles,
            major_multiplier: self
                .major
                .map(MajorTrack::multiplier)
                .or(self.major_multiplier),
            is_ed: self.early_decision.then_some(true),
            is_athlete: self.athlete.then_some(true),
            is_legacy: self.legacy.then_some(true),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with snake_case profile headers (gpa, sat, act, ap_offered, ...)
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print one JSON document with every scored row
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct ScoredRow {
    row: usize,
    profile: Profile,
    metrics: Metrics,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let profile = args.draft().into_profile();
    let evaluation = ScoreEngine::new().evaluate(&profile);

    if args.json {
        match serde_json::to_string_pretty(&evaluation.metrics) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Metrics payload unavailable: {err}"),
        }
    } else {
        print!("{}", format_report(&profile, &evaluation));
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let drafts = ProfileImporter::from_path(&args.csv)?;
    let engine = ScoreEngine::new();

    let rows: Vec<ScoredRow> = drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            let profile = draft.into_profile();
            ScoredRow {
                row: index + 1,
                metrics: engine.compute(&profile),
                profile,
            }
        })
        .collect();

    if args.json {
        match serde_json::to_string_pretty(&rows) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Batch payload unavailable: {err}"),
        }
    } else {
        print!("{}", format_batch(&args.csv, &rows));
    }

    Ok(())
}

pub(crate) fn format_report(profile: &Profile, evaluation: &Evaluation) -> String {
    let metrics = &evaluation.metrics;
    let breakdown = &evaluation.breakdown;
    let mut out = String::new();

    let _ = writeln!(out, "Admissions confidence report");
    let _ = writeln!(
        out,
        "Profile: GPA {:.2} | {} | APs {}/{} | EC tier {}, {} leadership role(s)",
        profile.gpa,
        test_summary(profile),
        profile.ap_taken,
        profile.ap_offered,
        profile.ec_tier,
        profile.roles
    );
    let _ = writeln!(
        out,
        "Major: {} (x{:.2})",
        major_label(profile.major_multiplier),
        profile.major_multiplier
    );
    let _ = writeln!(out, "Hooks: {}", hooks_summary(profile));

    let _ = writeln!(
        out,
        "\nFinal score: {} / 99 ({})",
        metrics.final_score, metrics.verdict
    );

    let _ = writeln!(out, "\nSub-scores");
    let _ = writeln!(
        out,
        "- Academic index    {:>5} / 240 {}",
        metrics.ai_score,
        meter(f64::from(metrics.ai_score), 240.0)
    );
    let _ = writeln!(
        out,
        "- Course rigor      {:>5.1} / 10  {}",
        metrics.rigor_score,
        meter(metrics.rigor_score, 10.0)
    );
    let _ = writeln!(
        out,
        "- Extracurriculars  {:>5.1} / 10  {}",
        metrics.ec_score,
        meter(metrics.ec_score, 10.0)
    );

    let _ = writeln!(out, "\nPercentiles");
    let _ = writeln!(
        out,
        "- {}: {} ({})",
        metrics.test_label, metrics.test_percentile, metrics.test_sub
    );
    let _ = writeln!(out, "- GPA Percentile: {}", metrics.gpa_percentile);

    let _ = writeln!(out, "\nComposite");
    let _ = writeln!(
        out,
        "- base {:.2} (AI {:.1} x0.4, rigor {:.1} x0.3, EC {:.1} x0.3)",
        breakdown.base_score, breakdown.ai_norm, breakdown.rigor_norm, breakdown.ec_norm
    );
    let _ = writeln!(
        out,
        "- x{:.2} multiplier + {:.0} hook bonus = {:.2}",
        breakdown.major_multiplier, breakdown.hook_bonus, breakdown.adjusted_score
    );

    let _ = writeln!(out, "\nFeedback");
    let _ = writeln!(out, "{}", plain_text(&metrics.feedback));

    out
}

fn format_batch(path: &std::path::Path, rows: &[ScoredRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Batch scoring: {}", path.display());

    if rows.is_empty() {
        let _ = writeln!(out, "No profiles found");
        return out;
    }

    for scored in rows {
        let _ = writeln!(
            out,
            "- row {}: {} ({}) | AI {} | rigor {:.1} | EC {:.1} | {} {}",
            scored.row,
            scored.metrics.final_score,
            scored.metrics.verdict,
            scored.metrics.ai_score,
            scored.metrics.rigor_score,
            scored.metrics.ec_score,
            scored.metrics.test_label,
            scored.metrics.test_percentile
        );
    }

    let _ = writeln!(out, "\nVerdict distribution");
    for verdict in [
        Verdict::EliteTier,
        Verdict::StrongMatch,
        Verdict::Competitive,
        Verdict::Reach,
    ] {
        let count = rows
            .iter()
            .filter(|scored| scored.metrics.verdict == verdict)
            .count();
        let _ = writeln!(out, "- {verdict}: {count}");
    }

    out
}

fn test_summary(profile: &Profile) -> String {
    if profile.sat > 0 {
        format!("SAT {}", profile.sat)
    } else if profile.act > 0 {
        format!("ACT {}", profile.act)
    } else {
        "no test score".to_string()
    }
}

fn major_label(multiplier: f64) -> &'static str {
    MajorTrack::from_multiplier(multiplier)
        .map(MajorTrack::label)
        .unwrap_or("Custom multiplier")
}

fn hooks_summary(profile: &Profile) -> String {
    let hooks: Vec<&str> = [
        (profile.is_ed, "Early decision"),
        (profile.is_athlete, "Recruited athlete"),
        (profile.is_legacy, "Legacy"),
    ]
    .into_iter()
    .filter_map(|(applies, label)| applies.then_some(label))
    .collect();

    if hooks.is_empty() {
        "none".to_string()
    } else {
        hooks.join(", ")
    }
}

fn meter(value: f64, max: f64) -> String {
    let ratio = (value / max).clamp(0.0, 1.0);
    let filled = (ratio * METER_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(METER_WIDTH - filled))
}

/// Drops the `<b>` emphasis tags feedback carries for rich presentation.
pub(crate) fn plain_text(markup: &str) -> String {
    markup
        .replace("<b>", "")
        .replace("</b>", "")
        .trim_end()
        .to_string()
}
