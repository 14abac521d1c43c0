//! Gateway to the hosted generative model: topic summaries, quiz
//! generation, image-based exam grading and the chat session.

mod chat;
mod client;
pub mod prompts;
mod wire;

pub use chat::ChatSession;
pub use client::{GatewayError, GeminiClient, GradedExam, FAST_MODEL, VISION_MODEL};
