use serde::{Deserialize, Serialize};

use crate::models::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    MatchScore,
    Experience,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Colour band for a match score bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent, // ≥ 80
    Good,      // 60 – 79
    Average,   // 40 – 59
    Low,       // < 40
}

impl ScoreBand {
    pub fn for_score(score: i32) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Good
        } else if score >= 40 {
            ScoreBand::Average
        } else {
            ScoreBand::Low
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "#10b981",
            ScoreBand::Good => "#0ea5e9",
            ScoreBand::Average => "#f59e0b",
            ScoreBand::Low => "#ef4444",
        }
    }
}

/// Sort and expansion state of the candidate ranking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingView {
    pub sort_by: SortField,
    pub order: SortOrder,
    pub expanded: Option<String>,
}

impl Default for RankingView {
    fn default() -> Self {
        Self {
            sort_by: SortField::MatchScore,
            order: SortOrder::Descending,
            expanded: None,
        }
    }
}

impl RankingView {
    /// Clicking the active column flips the order. Clicking another column
    /// switches to it: names start ascending, numbers descending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_by == field {
            self.order = self.order.flipped();
        } else {
            self.sort_by = field;
            self.order = match field {
                SortField::Name => SortOrder::Ascending,
                SortField::MatchScore | SortField::Experience => SortOrder::Descending,
            };
        }
    }

    pub fn toggle_expand(&mut self, candidate_id: &str) {
        if self.expanded.as_deref() == Some(candidate_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(candidate_id.to_string());
        }
    }

    pub fn is_expanded(&self, candidate_id: &str) -> bool {
        self.expanded.as_deref() == Some(candidate_id)
    }

    /// Stable sort by the active column; the input slice is left as is.
    pub fn sorted<'a>(&self, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
        let mut rows: Vec<&Candidate> = candidates.iter().collect();
        rows.sort_by(|a, b| {
            let ordering = match self.sort_by {
                SortField::MatchScore => a.match_score.cmp(&b.match_score),
                SortField::Experience => a.experience.cmp(&b.experience),
                // byte order matches locale order for the ASCII name pools
                SortField::Name => a.name.cmp(&b.name),
            };
            match self.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        rows
    }
}
