//! Application review vocabulary.
//!
//! The `applications.status` column only carries a default, so the closed set
//! of values and the allowed moves between them live here.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Status written to `selected_interns.status` when an intern is created.
pub const INTERN_STATUS_ACTIVE: &str = "active";

/// Review state of a submitted application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    #[default]
    Pending,
    ApplicationReceived,
    UnderReview,
    Interview,
    Selected,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::ApplicationReceived,
        Self::UnderReview,
        Self::Interview,
        Self::Selected,
        Self::Rejected,
    ];

    /// Value stored in the database and exchanged over JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::ApplicationReceived => "application_received",
            Self::UnderReview => "under_review",
            Self::Interview => "interview",
            Self::Selected => "selected",
            Self::Rejected => "rejected",
        }
    }

    fn stage(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::ApplicationReceived => 1,
            Self::UnderReview => 2,
            Self::Interview => 3,
            Self::Selected | Self::Rejected => 4,
        }
    }

    /// `selected` and `rejected` end the review.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Selected | Self::Rejected)
    }

    /// Reviews only move forward, and never out of a terminal state.
    pub fn can_transition_to(self, next: Self) -> bool {
        !self.is_terminal() && next.stage() > self.stage()
    }

    /// Checks a move and returns the target on success.
    pub fn transition_to(self, next: Self) -> Result<Self, Error> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(Error::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::InvalidStatus(s.to_string()))
    }
}
