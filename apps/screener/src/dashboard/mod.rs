// Dashboard view logic: session state, ranking table, bias report.
// Rendering lives elsewhere; these types hold only what the views read.

pub mod bias_report;
pub mod ranking;
pub mod session;

pub use bias_report::{BiasLevel, BiasMetric, BiasSummary, FairnessRating};
pub use ranking::{RankingView, ScoreBand, SortField, SortOrder};
pub use session::{DashboardSession, Notice, Tab};
