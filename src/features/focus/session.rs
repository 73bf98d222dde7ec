//! Study-session records.

use serde::{Deserialize, Serialize};

/// One planned study session for the day.
///
/// Records are seeded externally (config or defaults); the focus controller
/// never creates or deletes them, it only derives aggregate completion
/// counts for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    /// Subject name.
    pub subject: String,
    /// Planned length, as an opaque display value.
    pub duration: String,
    /// Whether the session has been completed.
    pub completed: bool,
}

impl StudySession {
    /// Create a not-yet-completed session.
    #[must_use]
    pub fn new(subject: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            duration: duration.into(),
            completed: false,
        }
    }

    /// Mark the seed record as already completed.
    #[must_use]
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Count the completed sessions in a plan.
#[must_use]
pub fn completed_count(sessions: &[StudySession]) -> usize {
    sessions.iter().filter(|session| session.completed).count()
}

/// The default study plan shown on first run.
#[must_use]
pub fn default_plan() -> Vec<StudySession> {
    vec![
        StudySession::new("Maths", "45 min").completed(),
        StudySession::new("English", "30 min").completed(),
        StudySession::new("Science", "60 min"),
        StudySession::new("Geography", "25 min"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan() {
        let plan = default_plan();
        assert_eq!(plan.len(), 4);
        assert_eq!(completed_count(&plan), 2);
    }

    #[test]
    fn test_completed_count_empty() {
        assert_eq!(completed_count(&[]), 0);
    }
}
