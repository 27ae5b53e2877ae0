//! Snapshot of the search screen's state for rendering.

use crate::models::Question;

/// The four observable values, copied out at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub results: Vec<Question>,
    pub error_message: String,
    pub loading: bool,
    pub connected: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            error_message: String::new(),
            loading: false,
            connected: true,
        }
    }
}

/// What the results area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display<'a> {
    Error(&'a str),
    Loading,
    Results(&'a [Question]),
}

impl ViewState {
    /// Resolve the results area: an error beats loading, loading beats the list.
    pub fn display(&self) -> Display<'_> {
        if !self.error_message.is_empty() {
            Display::Error(&self.error_message)
        } else if self.loading {
            Display::Loading
        } else {
            Display::Results(&self.results)
        }
    }
}
