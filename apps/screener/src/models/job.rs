use serde::{Deserialize, Serialize};

/// Job description form state. No derived invariants; only `title` gates
/// screening.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    pub title: String,
    pub department: String,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
}

impl JobDescription {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Appends a trimmed requirement. Blank input is ignored.
    pub fn add_requirement(&mut self, text: &str) -> bool {
        push_trimmed(&mut self.requirements, text)
    }

    pub fn remove_requirement(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.requirements, index)
    }

    /// Appends a trimmed responsibility. Blank input is ignored.
    pub fn add_responsibility(&mut self, text: &str) -> bool {
        push_trimmed(&mut self.responsibilities, text)
    }

    pub fn remove_responsibility(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.responsibilities, index)
    }
}

fn push_trimmed(list: &mut Vec<String>, text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    list.push(trimmed.to_string());
    true
}

fn remove_at(list: &mut Vec<String>, index: usize) -> Option<String> {
    (index < list.len()).then(|| list.remove(index))
}
