//! Homework domain model
//!
//! Review status codes reported by the review API and the verdict text shown
//! to the student for each of them.

/// Review status of a submitted homework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    /// Reviewer accepted the work
    Approved,

    /// Reviewer has picked the work up
    Reviewing,

    /// Reviewer returned the work with remarks
    Rejected,
}

impl HomeworkStatus {
    /// Every status the verdict mapping knows about
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Looks up a status by its wire code (e.g. `"approved"`)
    ///
    /// Returns `None` for codes outside the verdict mapping.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(HomeworkStatus::Approved),
            "reviewing" => Some(HomeworkStatus::Reviewing),
            "rejected" => Some(HomeworkStatus::Rejected),
            _ => None,
        }
    }

    /// Wire code as sent by the review API
    pub fn code(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Display text for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}
