//! Final-submission stages and the status messages returned to callers.

use std::fmt;

use serde::Serialize;

/// Message returned when a user has no drafts at submit time.
pub const MSG_NOTHING_TO_SUBMIT: &str = "No draft data found for user.";

/// Message returned after the master record is written and drafts removed.
pub const MSG_SUBMITTED: &str = "Final submission successful!";

/// Prefix of every failure message.
pub const MSG_FAILURE_PREFIX: &str = "Error during final submission: ";

/// Build the caller-facing failure message for a submission error.
pub fn failure_message(detail: &impl fmt::Display) -> String {
    format!("{MSG_FAILURE_PREFIX}{detail}")
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// Step of the submission workflow that is executing.
///
/// `Idle -> LoadingDrafts -> Extracting -> Committing`, ending in either a
/// committed master record or a failure tagged with the stage it occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStage {
    LoadingDrafts,
    Extracting,
    Committing,
}

impl SubmissionStage {
    /// Identifier used in structured log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoadingDrafts => "loading_drafts",
            Self::Extracting => "extracting",
            Self::Committing => "committing",
        }
    }
}

impl fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::LoadingDrafts => "loading drafts",
            Self::Extracting => "extracting fields",
            Self::Committing => "committing the master record",
        };
        f.write_str(text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
