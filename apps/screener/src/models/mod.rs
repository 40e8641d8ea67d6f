pub mod candidate;
pub mod job;
pub mod upload;

pub use candidate::{BiasMetrics, Candidate};
pub use job::JobDescription;
pub use upload::{ResumeFile, UploadSet};
