//! View-controller state: the five mutually exclusive screens, the chat
//! widget visibility toggle and the summary topic catalog.
//!
//! Navigation is a pure in-memory transition; the selection itself is never
//! persisted. Per-screen transient state (loading flags, input text) lives
//! in the webview.

use serde::{Deserialize, Serialize};

/// The five screens of the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppSection {
    #[default]
    Home,
    Summaries,
    Quiz,
    Grader,
    Contact,
}

/// Cross-screen shared state: which screen is active and whether the
/// floating chat widget is open. Nothing else is shared between screens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub section: AppSection,
    pub chat_open: bool,
}

impl UiState {
    pub fn navigate_to(&mut self, section: AppSection) {
        self.section = section;
    }

    pub fn set_chat_open(&mut self, open: bool) {
        self.chat_open = open;
    }
}

/// A clickable topic card on the Summaries screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub image_url: &'static str,
    /// What is actually sent to the model for this topic.
    pub prompt: &'static str,
}

/// The shipped topic catalog.
pub fn summary_topics() -> Vec<SummaryTopic> {
    vec![
        SummaryTopic {
            id: "1",
            title: "Anatomia Dental",
            image_url: "https://picsum.photos/400/200?random=1",
            prompt: "Anatomia Dental e morfologia",
        },
        SummaryTopic {
            id: "2",
            title: "Periodontia",
            image_url: "https://picsum.photos/400/200?random=2",
            prompt: "Doenças periodontais e tratamentos",
        },
        SummaryTopic {
            id: "3",
            title: "Endodontia",
            image_url: "https://picsum.photos/400/200?random=3",
            prompt: "Tratamento de canal e patologias pulpares",
        },
        SummaryTopic {
            id: "4",
            title: "Cirurgia Oral",
            image_url: "https://picsum.photos/400/200?random=4",
            prompt: "Exodontia e cirurgias menores",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_home_with_chat_closed() {
        let state = UiState::default();
        assert_eq!(state.section, AppSection::Home);
        assert!(!state.chat_open);
    }

    #[test]
    fn test_navigation_is_a_pure_transition() {
        let mut state = UiState::default();
        state.navigate_to(AppSection::Quiz);
        assert_eq!(state.section, AppSection::Quiz);
        state.navigate_to(AppSection::Grader);
        assert_eq!(state.section, AppSection::Grader);
    }

    #[test]
    fn test_chat_toggle_is_independent_of_section() {
        let mut state = UiState::default();
        state.set_chat_open(true);
        state.navigate_to(AppSection::Contact);
        assert!(state.chat_open);
        assert_eq!(state.section, AppSection::Contact);
    }

    #[test]
    fn test_section_wire_format_matches_frontend() {
        let json = serde_json::to_string(&AppSection::Summaries).unwrap();
        assert_eq!(json, "\"SUMMARIES\"");
        let parsed: AppSection = serde_json::from_str("\"GRADER\"").unwrap();
        assert_eq!(parsed, AppSection::Grader);
    }

    #[test]
    fn test_topic_catalog_has_four_unique_topics() {
        let topics = summary_topics();
        assert_eq!(topics.len(), 4);
        let mut ids: Vec<_> = topics.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}
