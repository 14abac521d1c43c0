//! Long-lived conversational session for the floating chat widget.

use super::client::{GeminiClient, FAST_MODEL};
use super::prompts;
use super::wire::{Content, GenerateContentRequest};

/// Carries conversational context across calls for the lifetime of one
/// widget visit. Failed turns are rolled back so the durable context never
/// contains a question the model did not answer.
pub struct ChatSession {
    client: GeminiClient,
    history: Vec<Content>,
}

impl ChatSession {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            history: Vec::new(),
        }
    }

    /// Drop the conversational context (new widget visit).
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Number of turns currently in the context.
    pub fn turn_count(&self) -> usize {
        self.history.len()
    }

    /// Send one user message and return the model's reply.
    ///
    /// Any failure surfaces as a fixed apology string, never as an error.
    pub async fn send_message(&mut self, message: &str) -> String {
        self.history.push(Content::user_text(message.to_string()));

        let request = GenerateContentRequest {
            contents: self.history.clone(),
            system_instruction: Some(Content::system(prompts::CHAT_SYSTEM_INSTRUCTION)),
            generation_config: None,
            tools: None,
        };

        match self.client.generate(FAST_MODEL, &request).await {
            Ok(response) => match response.text() {
                Some(text) => {
                    self.history.push(Content::model_text(text.clone()));
                    text
                }
                None => {
                    self.history.pop();
                    prompts::CHAT_UNAVAILABLE.to_string()
                }
            },
            Err(e) => {
                log::error!("Chat error: {}", e);
                self.history.pop();
                prompts::CHAT_ERROR.to_string()
            }
        }
    }
}
