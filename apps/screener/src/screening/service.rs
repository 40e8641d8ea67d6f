//! Screening Service — the mock "AI" backend.
//!
//! Every operation sleeps for a fixed simulated latency, then computes its
//! answer locally. Delays are `tokio::time::sleep`, so they never block the
//! runtime; dropping the future is the only way to abandon a call.
//!
//! Flow for a screening request: validate → sleep → generate(file_count).
//! The job description is a gate only. Generated scores are returned untouched.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::{BiasAnalyzerKind, Config, LatencyConfig};
use crate::errors::AppError;
use crate::generation::CandidateGenerator;
use crate::models::{BiasMetrics, Candidate, JobDescription};
use crate::screening::bias_analyzer::{
    BiasAnalyzer, PassThroughBiasAnalyzer, RerollBiasAnalyzer,
};
use crate::screening::skill_match::{draw_extracted_skills, score_skill_match, ResumeMatch};

/// Number-of-resumes-in, ranked-candidates-out. Implement this to swap the
/// backend without touching the dashboard session.
#[async_trait]
pub trait Screener: Send + Sync {
    async fn screen(
        &self,
        file_count: usize,
        job: &JobDescription,
    ) -> Result<Vec<Candidate>, AppError>;
}

/// Rejects a request that must never reach the generator.
pub fn validate_request(file_count: usize, job: &JobDescription) -> Result<(), AppError> {
    if file_count == 0 {
        return Err(AppError::Validation(
            "Upload at least one resume before screening.".to_string(),
        ));
    }
    if !job.has_title() {
        return Err(AppError::Validation(
            "Enter a job title before screening.".to_string(),
        ));
    }
    Ok(())
}

pub struct ScreeningService {
    rng: Mutex<StdRng>,
    bias_analyzer: Arc<dyn BiasAnalyzer>,
    latency: LatencyConfig,
}

impl ScreeningService {
    pub fn new(rng: StdRng, bias_analyzer: Arc<dyn BiasAnalyzer>, latency: LatencyConfig) -> Self {
        Self {
            rng: Mutex::new(rng),
            bias_analyzer,
            latency,
        }
    }

    /// Seeded service with the pass-through analyzer.
    pub fn seeded(seed: u64, latency: LatencyConfig) -> Self {
        Self::new(
            StdRng::seed_from_u64(seed),
            Arc::new(PassThroughBiasAnalyzer),
            latency,
        )
    }

    pub fn from_config(config: &Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let bias_analyzer: Arc<dyn BiasAnalyzer> = match config.bias_analyzer {
            BiasAnalyzerKind::PassThrough => Arc::new(PassThroughBiasAnalyzer),
            // forked so the analyzer's draws do not shift the generator's sequence
            BiasAnalyzerKind::Reroll => {
                Arc::new(RerollBiasAnalyzer::new(StdRng::from_rng(&mut rng)))
            }
        };

        info!("Bias analyzer backend: {}", bias_analyzer.backend());
        Self::new(rng, bias_analyzer, config.latency)
    }

    /// Returns the candidate's bias metrics as the configured analyzer sees them.
    pub async fn analyze_bias(&self, candidate: &Candidate) -> Result<BiasMetrics, AppError> {
        tokio::time::sleep(self.latency.bias).await;
        let metrics = self.bias_analyzer.analyze(candidate).await?;
        debug!(
            "Bias analysis for {}: overall={}",
            candidate.id, metrics.overall
        );
        Ok(metrics)
    }

    /// Pretends to pull skills out of resume text. The text is never read.
    pub async fn extract_skills(&self, _resume_text: &str) -> Result<Vec<String>, AppError> {
        tokio::time::sleep(self.latency.extract).await;
        self.with_rng(draw_extracted_skills)
    }

    /// Extracts skills from the resume, then scores them against the job's
    /// requirements.
    pub async fn match_job_with_resume(
        &self,
        resume_text: &str,
        job: &JobDescription,
    ) -> Result<ResumeMatch, AppError> {
        tokio::time::sleep(self.latency.match_resume).await;
        let skills = self.extract_skills(resume_text).await?;
        let report = score_skill_match(&skills, job);
        debug!(
            "Resume match: {}/100, {} matched, {} missing",
            report.match_score,
            report.matched_skills.len(),
            report.missing_skills.len()
        );
        Ok(report)
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, AppError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::Internal(anyhow!("screening RNG lock poisoned")))?;
        Ok(f(&mut *rng))
    }
}

#[async_trait]
impl Screener for ScreeningService {
    async fn screen(
        &self,
        file_count: usize,
        job: &JobDescription,
    ) -> Result<Vec<Candidate>, AppError> {
        if let Err(err) = validate_request(file_count, job) {
            warn!("Screening rejected: {err}");
            return Err(err);
        }

        info!("Screening {} resumes for '{}'", file_count, job.title);
        tokio::time::sleep(self.latency.screen).await;

        let candidates =
            self.with_rng(|rng| CandidateGenerator::new(rng).generate(file_count))?;

        info!(
            "Screening complete: {} candidates, top score {}",
            candidates.len(),
            candidates.first().map(|c| c.match_score).unwrap_or_default()
        );
        Ok(candidates)
    }
}
