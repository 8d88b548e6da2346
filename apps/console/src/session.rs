//! In-memory session state for one interactive run.
//!
//! The session is an explicit object owned by the REPL loop and passed by
//! reference into each handler; nothing here is global. History is
//! append-only for the lifetime of the session: only successful
//! classifications add to it, only an explicit clear empties it, and nothing
//! ever reorders it.

use chrono::{DateTime, Local};
use sentiscope_api::{Classification, Sentiment};

use crate::i18n::{labels, Labels, Lang};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Analysis,
    Dashboard,
}

#[derive(Debug, Clone)]
pub struct HistoryRecord {
    pub text: String,
    pub label: Sentiment,
    pub score: f32,
    pub timestamp: DateTime<Local>,
    pub word_count: usize,
}

pub struct Session {
    pub history: Vec<HistoryRecord>,
    pub language: Lang,
    pub current_text: String,
    pub page: Page,
}

impl Session {
    pub fn new(language: Lang) -> Self {
        Self {
            history: Vec::new(),
            language,
            current_text: String::new(),
            page: Page::Analysis,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        labels(self.language)
    }

    /// Appends one record for a successful classification. The word count is
    /// the whitespace-delimited token count of the input.
    pub fn record(&mut self, text: &str, classification: &Classification) {
        self.history.push(HistoryRecord {
            text: text.to_string(),
            label: classification.label,
            score: classification.score,
            timestamp: Local::now(),
            word_count: text.split_whitespace().count(),
        });
    }

    /// Clears the history. Idempotent: clearing an empty history is a no-op.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(score: f32) -> Classification {
        Classification {
            label: Sentiment::Positive,
            score,
        }
    }

    #[test]
    fn test_history_is_append_only_and_ordered() {
        let mut session = Session::new(Lang::En);
        session.record("first", &positive(0.9));
        session.record("second", &positive(0.8));
        session.record("third", &positive(0.7));

        assert_eq!(session.history.len(), 3);
        let texts: Vec<&str> = session.history.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn test_word_count_is_whitespace_delimited() {
        let mut session = Session::new(Lang::En);
        session.record("I love this, it's amazing!", &positive(0.91));
        assert_eq!(session.history[0].word_count, 5);

        session.record("  padded   out  ", &positive(0.5));
        assert_eq!(session.history[1].word_count, 2);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut session = Session::new(Lang::En);
        session.record("one", &positive(0.6));
        session.clear_history();
        assert!(session.history.is_empty());
        session.clear_history();
        assert!(session.history.is_empty());
    }

    #[test]
    fn test_page_switch_does_not_touch_history() {
        let mut session = Session::new(Lang::En);
        session.record("one", &positive(0.6));
        session.page = Page::Dashboard;
        session.page = Page::Analysis;
        assert_eq!(session.history.len(), 1);
    }
}
