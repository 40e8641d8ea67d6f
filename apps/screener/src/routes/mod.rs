use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Candidate;

const DASHBOARD_PATH: &str = "/dashboard";
const CANDIDATE_PREFIX: &str = "/candidate/";

/// The navigable views. Anything unmatched renders `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Landing,
    Dashboard,
    CandidateProfile(String),
    NotFound(String),
}

impl Route {
    pub fn resolve(path: &str) -> Route {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        if trimmed == "/" {
            return Route::Landing;
        }
        if trimmed == DASHBOARD_PATH {
            return Route::Dashboard;
        }
        if let Some(id) = trimmed.strip_prefix(CANDIDATE_PREFIX) {
            if !id.is_empty() && !id.contains('/') {
                return Route::CandidateProfile(id.to_string());
            }
        }
        Route::NotFound(path.to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Dashboard => DASHBOARD_PATH.to_string(),
            Route::CandidateProfile(id) => format!("{CANDIDATE_PREFIX}{id}"),
            Route::NotFound(path) => path.clone(),
        }
    }
}

/// Looks up the candidate a profile route points at.
pub fn profile<'a>(candidates: &'a [Candidate], id: &str) -> Result<&'a Candidate, AppError> {
    candidates
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| AppError::NotFound(format!("candidate '{id}'")))
}
