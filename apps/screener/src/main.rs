use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use screener::config::Config;
use screener::dashboard::{BiasMetric, BiasSummary, DashboardSession, ScoreBand};
use screener::models::upload::{MIME_DOC, MIME_DOCX, MIME_PDF};
use screener::models::{JobDescription, ResumeFile};
use screener::routes::{profile, Route};
use screener::screening::ScreeningService;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting screener v{}", env!("CARGO_PKG_VERSION"));

    let service = ScreeningService::from_config(&config);
    let mut session = DashboardSession::new(config.progress_tick);

    let accepted = session.uploads.add(demo_uploads());
    info!("Accepted {accepted} resumes");
    session.job = demo_job();

    session.run_screening(&service).await?;

    let top = session
        .candidates()
        .first()
        .cloned()
        .context("screening returned no candidates")?;
    let metrics = service.analyze_bias(&top).await?;
    session.replace_bias_metrics(&top.id, metrics);

    let route = Route::resolve(&Route::CandidateProfile(top.id.clone()).path());
    if let Route::CandidateProfile(id) = &route {
        let shown = profile(session.candidates(), id)?;
        info!(
            "Profile {}: {} ({:?})",
            id,
            shown.name,
            ScoreBand::for_score(shown.match_score)
        );
    }

    let sample_match = service
        .match_job_with_resume("(resume text is never read)", &session.job)
        .await?;

    let summary = BiasSummary::from_candidates(session.candidates());
    let report = json!({
        "job": session.job.title,
        "rankings": session.ranking.sorted(session.candidates()),
        "biasSummary": summary,
        "fairness": summary.map(|s| s.rating(BiasMetric::Overall).message()),
        "sampleResumeMatch": sample_match,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn demo_uploads() -> Vec<ResumeFile> {
    vec![
        ResumeFile::new("amir_khan.pdf", MIME_PDF, 182_400),
        ResumeFile::new("mei_chen.docx", MIME_DOCX, 94_720),
        ResumeFile::new("headshot.png", "image/png", 512_000),
        ResumeFile::new("jamal_clark.doc", MIME_DOC, 61_440),
        ResumeFile::new("elena_garcia.pdf", MIME_PDF, 203_776),
    ]
}

fn demo_job() -> JobDescription {
    let mut job = JobDescription {
        title: "Frontend Developer".to_string(),
        department: "Engineering".to_string(),
        location: "Remote, US".to_string(),
        description: "Build and maintain the hiring dashboard UI.".to_string(),
        ..JobDescription::default()
    };
    job.add_requirement("3+ years React and TypeScript");
    job.add_requirement("Comfortable with GraphQL APIs");
    job.add_responsibility("Ship accessible, well-tested components");
    job
}
