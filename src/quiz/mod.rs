//! Quiz models and the single persisted quiz-state slot.

mod models;
mod store;

pub use models::{QuizQuestion, QuizState};
pub use store::QuizStateStore;
