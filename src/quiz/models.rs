use serde::{Deserialize, Serialize};

/// A generated multiple-choice question. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    /// Exactly four answer options.
    pub options: Vec<String>,
    /// Index of the correct option.
    pub correct_answer: usize,
    pub explanation: String,
}

impl QuizQuestion {
    /// The generated payload is only usable when the answer index actually
    /// points into the options.
    pub fn is_well_formed(&self) -> bool {
        !self.options.is_empty() && self.correct_answer < self.options.len()
    }
}

/// The single quiz-state slot: what the student sees right now.
/// Overwritten on every fetch/answer event; has no history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    pub question: Option<QuizQuestion>,
    pub selected_option: Option<usize>,
    pub show_result: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> QuizQuestion {
        QuizQuestion {
            question: "Qual estrutura forma a polpa dental?".to_string(),
            options: vec![
                "Tecido conjuntivo".to_string(),
                "Esmalte".to_string(),
                "Cemento".to_string(),
                "Dentina".to_string(),
            ],
            correct_answer: 0,
            explanation: "A polpa é tecido conjuntivo frouxo.".to_string(),
        }
    }

    #[test]
    fn test_well_formed_question() {
        assert!(sample_question().is_well_formed());
    }

    #[test]
    fn test_out_of_range_answer_is_rejected() {
        let mut q = sample_question();
        q.correct_answer = 4;
        assert!(!q.is_well_formed());
    }
}
