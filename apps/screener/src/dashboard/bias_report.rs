//! Bias report — aggregates per-candidate bias metrics into the figures the
//! bias analysis tab and the profile cards display.

use serde::{Deserialize, Serialize};

use crate::models::{BiasMetrics, Candidate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiasMetric {
    Gender,
    Ethnicity,
    Age,
    #[default]
    Overall,
}

impl BiasMetric {
    pub fn of(self, metrics: &BiasMetrics) -> i32 {
        match self {
            BiasMetric::Gender => metrics.gender,
            BiasMetric::Ethnicity => metrics.ethnicity,
            BiasMetric::Age => metrics.age,
            BiasMetric::Overall => metrics.overall,
        }
    }
}

/// Share of a score that is "bias-free".
pub fn neutrality(bias: f64) -> f64 {
    100.0 - bias
}

/// Mean of each metric across a candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasSummary {
    pub gender: f64,
    pub ethnicity: f64,
    pub age: f64,
    pub overall: f64,
}

impl BiasSummary {
    /// `None` for an empty slice; there is nothing to average.
    pub fn from_candidates(candidates: &[Candidate]) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        let n = candidates.len() as f64;
        let mean = |metric: BiasMetric| {
            candidates
                .iter()
                .map(|c| f64::from(metric.of(&c.bias_metrics)))
                .sum::<f64>()
                / n
        };

        Some(Self {
            gender: mean(BiasMetric::Gender),
            ethnicity: mean(BiasMetric::Ethnicity),
            age: mean(BiasMetric::Age),
            overall: mean(BiasMetric::Overall),
        })
    }

    pub fn value(&self, metric: BiasMetric) -> f64 {
        match metric {
            BiasMetric::Gender => self.gender,
            BiasMetric::Ethnicity => self.ethnicity,
            BiasMetric::Age => self.age,
            BiasMetric::Overall => self.overall,
        }
    }

    pub fn rating(&self, metric: BiasMetric) -> FairnessRating {
        FairnessRating::for_bias(self.value(metric))
    }
}

/// Verdict on an averaged bias score (lower bias is better).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FairnessRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl FairnessRating {
    pub fn for_bias(bias: f64) -> Self {
        if bias > 60.0 {
            FairnessRating::Poor
        } else if bias > 40.0 {
            FairnessRating::Fair
        } else if bias > 20.0 {
            FairnessRating::Good
        } else {
            FairnessRating::Excellent
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FairnessRating::Excellent => "Your screening process shows excellent fairness.",
            FairnessRating::Good => {
                "Your screening shows good fairness with some room for improvement."
            }
            FairnessRating::Fair => {
                "Your screening shows moderate fairness with significant room for improvement."
            }
            FairnessRating::Poor => "Your screening shows poor fairness and needs attention.",
        }
    }
}

/// Per-metric level shown on a single candidate's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasLevel {
    Low,
    Moderate,
    High,
}

impl BiasLevel {
    pub fn for_value(value: i32) -> Self {
        if value < 30 {
            BiasLevel::Low
        } else if value < 60 {
            BiasLevel::Moderate
        } else {
            BiasLevel::High
        }
    }
}

/// One bar group in the bias distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionRow {
    pub name: String,
    pub gender: i32,
    pub ethnicity: i32,
    pub age: i32,
    pub overall: i32,
}

pub fn distribution(candidates: &[Candidate]) -> Vec<DistributionRow> {
    candidates
        .iter()
        .map(|c| DistributionRow {
            name: c.first_name().to_string(),
            gender: c.bias_metrics.gender,
            ethnicity: c.bias_metrics.ethnicity,
            age: c.bias_metrics.age,
            overall: c.bias_metrics.overall,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::CandidateGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn with_metrics(name: &str, gender: i32, ethnicity: i32, age: i32, overall: i32) -> Candidate {
        let base = CandidateGenerator::new(StdRng::seed_from_u64(1)).generate_candidate();
        Candidate {
            name: name.to_string(),
            ..base.with_bias_metrics(BiasMetrics {
                gender,
                ethnicity,
                age,
                overall,
            })
        }
    }

    #[test]
    fn test_summary_of_empty_is_none() {
        assert_eq!(BiasSummary::from_candidates(&[]), None);
    }

    #[test]
    fn test_summary_averages_each_metric() {
        let candidates = vec![
            with_metrics("Wei Kim", 10, 20, 30, 20),
            with_metrics("Raj Shah", 20, 40, 0, 15),
        ];
        let summary = BiasSummary::from_candidates(&candidates).unwrap();
        assert_eq!(summary.gender, 15.0);
        assert_eq!(summary.ethnicity, 30.0);
        assert_eq!(summary.age, 15.0);
        assert_eq!(summary.overall, 17.5);
        assert_eq!(summary.value(BiasMetric::Ethnicity), 30.0);
        assert_eq!(neutrality(summary.overall), 82.5);
    }

    #[test]
    fn test_fairness_thresholds() {
        assert_eq!(FairnessRating::for_bias(20.0), FairnessRating::Excellent);
        assert_eq!(FairnessRating::for_bias(20.5), FairnessRating::Good);
        assert_eq!(FairnessRating::for_bias(40.0), FairnessRating::Good);
        assert_eq!(FairnessRating::for_bias(55.0), FairnessRating::Fair);
        assert_eq!(FairnessRating::for_bias(61.0), FairnessRating::Poor);
        assert!(FairnessRating::Poor.message().contains("needs attention"));
    }

    #[test]
    fn test_rating_uses_selected_metric() {
        let candidates = vec![with_metrics("Emma Hall", 70, 10, 10, 30)];
        let summary = BiasSummary::from_candidates(&candidates).unwrap();
        assert_eq!(summary.rating(BiasMetric::Gender), FairnessRating::Poor);
        assert_eq!(summary.rating(BiasMetric::Age), FairnessRating::Excellent);
        assert_eq!(summary.rating(BiasMetric::default()), FairnessRating::Good);
    }

    #[test]
    fn test_bias_levels() {
        assert_eq!(BiasLevel::for_value(-3), BiasLevel::Low);
        assert_eq!(BiasLevel::for_value(29), BiasLevel::Low);
        assert_eq!(BiasLevel::for_value(30), BiasLevel::Moderate);
        assert_eq!(BiasLevel::for_value(60), BiasLevel::High);
    }

    #[test]
    fn test_distribution_uses_first_names() {
        let rows = distribution(&[with_metrics("Fatima Ali", 1, 2, 3, 4)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Fatima");
        assert_eq!(rows[0].overall, 4);
    }
}
