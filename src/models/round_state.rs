//! Per-session drill state: the prompt being shown and whether its translation is visible.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundState {
    pub(crate) current_term: String,
    pub(crate) current_translation: String,
    pub(crate) revealed: bool,
    pub(crate) previous_term: Option<String>,
}

impl RoundState {
    pub(crate) fn new(term: String, translation: String, previous_term: Option<String>) -> Self {
        Self {
            current_term: term,
            current_translation: translation,
            revealed: false,
            previous_term,
        }
    }

    pub fn current_term(&self) -> &str {
        &self.current_term
    }

    pub fn current_translation(&self) -> &str {
        &self.current_translation
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn previous_term(&self) -> Option<&str> {
        self.previous_term.as_deref()
    }

    /// Translation as it should be shown right now, `None` while hidden.
    pub fn visible_translation(&self) -> Option<&str> {
        self.revealed.then_some(self.current_translation.as_str())
    }
}
