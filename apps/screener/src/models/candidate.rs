use serde::{Deserialize, Serialize};

/// Synthetic fairness figures attached to a candidate. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasMetrics {
    pub gender: i32,
    pub ethnicity: i32,
    pub age: i32,
    pub overall: i32,
}

/// A fabricated candidate record. Never mutated after generation, except for
/// wholesale replacement of `bias_metrics` via [`Candidate::with_bias_metrics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub resume_url: String,
    pub match_score: i32, // 30 – 98
    pub skills: Vec<String>,
    pub experience: i32, // years, 1 – 15
    pub education: String,
    pub bias_metrics: BiasMetrics,
}

impl Candidate {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    pub fn with_bias_metrics(&self, bias_metrics: BiasMetrics) -> Candidate {
        Candidate {
            bias_metrics,
            ..self.clone()
        }
    }

    pub fn experience_label(&self) -> String {
        if self.experience == 1 {
            "1 year".to_string()
        } else {
            format!("{} years", self.experience)
        }
    }
}
