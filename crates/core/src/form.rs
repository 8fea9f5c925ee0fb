use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user's attempt at completing the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormSession {
    /// Surrogate key assigned by storage. Never exposed over HTTP.
    #[serde(skip)]
    pub id: i64,
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub is_submitted: bool,
}

impl FormSession {
    #[must_use]
    pub const fn new(
        id: i64,
        session_id: String,
        created_at: DateTime<Utc>,
        submitted_at: Option<DateTime<Utc>>,
        is_submitted: bool,
    ) -> Self {
        Self { id, session_id, created_at, submitted_at, is_submitted }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.is_submitted { SessionState::Submitted } else { SessionState::Open }
    }
}

/// Generate a fresh external session identifier (36-char textual UUID v4).
#[must_use]
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Lifecycle of a form session. `Submitted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Submitted,
}

impl SessionState {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Open => "open",
            Self::Submitted => "submitted",
        }
    }
}

impl Display for SessionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Text response to one question within a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormAnswer {
    #[serde(skip)]
    pub id: i64,
    #[serde(skip)]
    pub session_id: String,
    pub question_number: i32,
    pub answer: String,
    pub saved_at: DateTime<Utc>,
}

impl FormAnswer {
    #[must_use]
    pub const fn new(
        id: i64,
        session_id: String,
        question_number: i32,
        answer: String,
        saved_at: DateTime<Utc>,
    ) -> Self {
        Self { id, session_id, question_number, answer, saved_at }
    }
}

/// A session together with all of its answers, ordered by question number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormSnapshot {
    #[serde(flatten)]
    pub session: FormSession,
    pub answers: Vec<FormAnswer>,
}

impl FormSnapshot {
    #[must_use]
    pub const fn new(session: FormSession, answers: Vec<FormAnswer>) -> Self {
        Self { session, answers }
    }
}
