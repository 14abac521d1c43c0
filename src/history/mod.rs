//! Exam-correction history: model and persistent store.

mod models;
mod store;

pub use models::ExamCorrection;
pub use store::HistoryStore;
