use serde::{Deserialize, Serialize};
use tracing::debug;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const ACCEPTED_MIME_TYPES: &[&str] = &[MIME_PDF, MIME_DOC, MIME_DOCX];

/// An uploaded resume as the browser describes it. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// Accepted purely by declared MIME type; the extension is ignored.
    pub fn is_accepted(&self) -> bool {
        ACCEPTED_MIME_TYPES.contains(&self.mime_type.as_str())
    }
}

/// The resumes queued for screening.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSet {
    files: Vec<ResumeFile>,
}

impl UploadSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends accepted files in order and silently drops the rest.
    /// Returns how many were accepted.
    pub fn add<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = ResumeFile>,
    {
        let before = self.files.len();
        for file in files {
            if file.is_accepted() {
                self.files.push(file);
            } else {
                debug!("Dropping upload {} ({})", file.name, file.mime_type);
            }
        }
        self.files.len() - before
    }

    pub fn remove(&mut self, index: usize) -> Option<ResumeFile> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn files(&self) -> &[ResumeFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
