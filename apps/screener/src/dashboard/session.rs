//! Dashboard Session — the state one browser tab holds while screening.
//!
//! Flow: uploads + job → run_screening → rankings. While a request is in
//! flight a periodic ticker nudges progress toward 90%; when the request
//! resolves the ticker is dropped and progress is forced to 100%.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, warn};

use crate::dashboard::ranking::RankingView;
use crate::errors::AppError;
use crate::models::{BiasMetrics, Candidate, JobDescription, UploadSet};
use crate::screening::{validate_request, Screener};

const PROGRESS_STEP: u8 = 10;
const PROGRESS_CAP: u8 = 90;
const PROGRESS_DONE: u8 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Upload,
    Rankings,
    Bias,
}

/// User-visible outcome of the last refused or failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    Validation(String),
    Failure(String),
}

pub struct DashboardSession {
    pub uploads: UploadSet,
    pub job: JobDescription,
    pub ranking: RankingView,
    candidates: Vec<Candidate>,
    active_tab: Tab,
    busy: bool,
    notice: Option<Notice>,
    last_screened_at: Option<DateTime<Utc>>,
    progress: watch::Sender<u8>,
    progress_tick: Duration,
}

impl DashboardSession {
    pub fn new(progress_tick: Duration) -> Self {
        let (progress, _) = watch::channel(0);
        Self {
            uploads: UploadSet::new(),
            job: JobDescription::default(),
            ranking: RankingView::default(),
            candidates: Vec::new(),
            active_tab: Tab::Upload,
            busy: false,
            notice: None,
            last_screened_at: None,
            progress,
            progress_tick,
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn last_screened_at(&self) -> Option<DateTime<Utc>> {
        self.last_screened_at
    }

    /// Current progress percentage.
    pub fn progress_value(&self) -> u8 {
        *self.progress.borrow()
    }

    /// Receiver that observes every progress update.
    pub fn progress(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    /// The screen button is enabled only when the request would validate.
    pub fn can_screen(&self) -> bool {
        !self.busy && validate_request(self.uploads.len(), &self.job).is_ok()
    }

    /// Rankings and Bias are reachable only once there are results.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if tab != Tab::Upload && self.candidates.is_empty() {
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// Replaces one candidate's bias metrics wholesale after a secondary
    /// analysis pass. Returns false if the id is unknown.
    pub fn replace_bias_metrics(&mut self, id: &str, metrics: BiasMetrics) -> bool {
        match self.candidates.iter_mut().find(|c| c.id == id) {
            Some(candidate) => {
                *candidate = candidate.with_bias_metrics(metrics);
                true
            }
            None => false,
        }
    }

    /// Runs one screening request to completion.
    ///
    /// Steps:
    /// 1. validate (no files, no title) → `Notice::Validation`, nothing is called
    /// 2. drive the screener alongside the progress ticker
    /// 3. success → progress 100, candidates replaced, Rankings tab
    /// 4. failure → progress 0, `Notice::Failure`, candidates kept; no retry
    ///
    /// Returns the number of candidates produced.
    pub async fn run_screening(&mut self, screener: &dyn Screener) -> Result<usize, AppError> {
        if let Err(err) = validate_request(self.uploads.len(), &self.job) {
            warn!("Screening blocked: {err}");
            self.notice = Some(Notice::Validation(err.to_string()));
            return Err(err);
        }

        self.busy = true;
        self.notice = None;
        self.progress.send_replace(0);

        let file_count = self.uploads.len();
        let job = self.job.clone();
        info!("Submitting {} resumes for '{}'", file_count, job.title);

        let outcome = {
            let screening = screener.screen(file_count, &job);
            tokio::pin!(screening);

            // first tick one period in, not immediately
            let mut ticker = interval_at(Instant::now() + self.progress_tick, self.progress_tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    result = &mut screening => break result,
                    _ = ticker.tick() => {
                        self.progress.send_modify(|p| *p = advance(*p));
                    }
                }
            }
        };

        match outcome {
            Ok(candidates) => {
                self.progress.send_replace(PROGRESS_DONE);
                self.busy = false;
                let count = candidates.len();
                self.candidates = candidates;
                self.active_tab = Tab::Rankings;
                self.ranking = RankingView::default();
                self.last_screened_at = Some(Utc::now());
                info!("Screening produced {count} candidates");
                Ok(count)
            }
            Err(err) => {
                self.progress.send_replace(0);
                self.busy = false;
                warn!("Screening failed: {err}");
                self.notice = Some(Notice::Failure(err.to_string()));
                Err(err)
            }
        }
    }
}

fn advance(progress: u8) -> u8 {
    progress.saturating_add(PROGRESS_STEP).min(PROGRESS_CAP)
}
