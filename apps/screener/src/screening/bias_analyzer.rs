//! Bias Analyzer — pluggable, trait-based producer of a candidate's bias metrics.
//!
//! Default: `PassThroughBiasAnalyzer` (returns the candidate's existing metrics).
//! Alternative: `RerollBiasAnalyzer` (fresh metrics, independent of the candidate).
//!
//! `ScreeningService` holds an `Arc<dyn BiasAnalyzer>`, chosen at startup via config.

use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::errors::AppError;
use crate::models::{BiasMetrics, Candidate};

#[async_trait]
pub trait BiasAnalyzer: Send + Sync {
    async fn analyze(&self, candidate: &Candidate) -> Result<BiasMetrics, AppError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// PassThroughBiasAnalyzer — stable, idempotent contract
// ────────────────────────────────────────────────────────────────────────────

pub struct PassThroughBiasAnalyzer;

#[async_trait]
impl BiasAnalyzer for PassThroughBiasAnalyzer {
    async fn analyze(&self, candidate: &Candidate) -> Result<BiasMetrics, AppError> {
        Ok(candidate.bias_metrics)
    }

    fn backend(&self) -> &'static str {
        "passthrough"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RerollBiasAnalyzer — fresh draw per call
// ────────────────────────────────────────────────────────────────────────────

/// Ignores the candidate entirely:
/// gender 10–49, ethnicity 5–34, age 20–69, overall = floor(mean of the three).
pub struct RerollBiasAnalyzer {
    rng: Mutex<StdRng>,
}

impl RerollBiasAnalyzer {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn draw(&self) -> Result<BiasMetrics, AppError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::Internal(anyhow!("bias analyzer RNG lock poisoned")))?;
        Ok(reroll_metrics(&mut *rng))
    }
}

#[async_trait]
impl BiasAnalyzer for RerollBiasAnalyzer {
    async fn analyze(&self, candidate: &Candidate) -> Result<BiasMetrics, AppError> {
        let metrics = self.draw()?;
        debug!("Re-rolled bias metrics for candidate {}", candidate.id);
        Ok(metrics)
    }

    fn backend(&self) -> &'static str {
        "reroll"
    }
}

fn reroll_metrics<R: Rng>(rng: &mut R) -> BiasMetrics {
    let gender = rng.random_range(10..50);
    let ethnicity = rng.random_range(5..35);
    let age = rng.random_range(20..70);

    BiasMetrics {
        gender,
        ethnicity,
        age,
        // all three are non-negative, so integer division is floor
        overall: (gender + ethnicity + age) / 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::CandidateGenerator;
    use rand::SeedableRng;

    fn candidate() -> Candidate {
        CandidateGenerator::new(StdRng::seed_from_u64(5)).generate_candidate()
    }

    #[tokio::test]
    async fn test_pass_through_returns_existing_metrics() {
        let candidate = candidate();
        let metrics = PassThroughBiasAnalyzer.analyze(&candidate).await.unwrap();
        assert_eq!(metrics, candidate.bias_metrics);
    }

    #[tokio::test]
    async fn test_pass_through_is_idempotent() {
        let candidate = candidate();
        let first = PassThroughBiasAnalyzer.analyze(&candidate).await.unwrap();
        let second = PassThroughBiasAnalyzer
            .analyze(&candidate.with_bias_metrics(first))
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_reroll_ranges() {
        let analyzer = RerollBiasAnalyzer::new(StdRng::seed_from_u64(9));
        let candidate = candidate();
        for _ in 0..200 {
            let m = analyzer.analyze(&candidate).await.unwrap();
            assert!((10..50).contains(&m.gender));
            assert!((5..35).contains(&m.ethnicity));
            assert!((20..70).contains(&m.age));
            assert_eq!(m.overall, (m.gender + m.ethnicity + m.age) / 3);
        }
    }

    #[test]
    fn test_backend_labels() {
        assert_eq!(PassThroughBiasAnalyzer.backend(), "passthrough");
        assert_eq!(
            RerollBiasAnalyzer::new(StdRng::seed_from_u64(0)).backend(),
            "reroll"
        );
    }
}
