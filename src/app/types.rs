//! Screen-level UI state.

use crate::models::Question;

/// The modal question viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSheet {
    pub question: Question,
}

impl DetailSheet {
    pub fn new(question: Question) -> Self {
        Self { question }
    }
}

/// One-line notice shown under the results, e.g. when the browser fails to
/// launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    /// Tick at which the notice disappears
    pub expires_at: u64,
}
