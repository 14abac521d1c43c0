//! AI-related Tauri commands.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tauri::State;

use super::{CommandError, CommandResult};
use crate::gateway::GradedExam;
use crate::quiz::QuizQuestion;
use crate::AppState;

/// Generate a study summary for a topic prompt.
#[tauri::command]
pub async fn generate_summary(
    state: State<'_, AppState>,
    topic: String,
) -> CommandResult<String> {
    Ok(state.gateway.generate_summary(&topic).await)
}

/// Generate a multiple-choice question; `None` when the model fails.
#[tauri::command]
pub async fn generate_quiz_question(
    state: State<'_, AppState>,
    topic: Option<String>,
) -> CommandResult<Option<QuizQuestion>> {
    Ok(state.gateway.generate_quiz_question(topic.as_deref()).await)
}

/// Grade a photographed exam from already-encoded image data.
#[tauri::command]
pub async fn grade_exam_image(
    state: State<'_, AppState>,
    image_base64: String,
    mime_type: String,
) -> CommandResult<GradedExam> {
    Ok(state.gateway.grade_exam_image(&image_base64, &mime_type).await)
}

/// Grade a photographed exam straight from a picked file path.
#[tauri::command]
pub async fn grade_exam_file(
    state: State<'_, AppState>,
    path: String,
) -> CommandResult<GradedExam> {
    let mime_type = mime_for_path(&path).ok_or_else(|| CommandError {
        message: format!("Unsupported image format: {}", path),
    })?;

    let bytes = std::fs::read(&path).map_err(|e| CommandError {
        message: format!("Failed to read image file: {}", e),
    })?;

    let encoded = BASE64.encode(bytes);
    Ok(state.gateway.grade_exam_image(&encoded, mime_type).await)
}

/// Send one message through the long-lived chat session.
#[tauri::command]
pub async fn chat_send(state: State<'_, AppState>, message: String) -> CommandResult<String> {
    let mut chat = state.chat.lock().await;
    Ok(chat.send_message(&message).await)
}

/// Start a fresh conversational context (new widget visit).
#[tauri::command]
pub async fn chat_reset(state: State<'_, AppState>) -> CommandResult<()> {
    let mut chat = state.chat.lock().await;
    chat.reset();
    Ok(())
}

fn mime_for_path(path: &str) -> Option<&'static str> {
    let extension = std::path::Path::new(path)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_supported_extensions() {
        assert_eq!(mime_for_path("/tmp/prova.JPG"), Some("image/jpeg"));
        assert_eq!(mime_for_path("prova.png"), Some("image/png"));
        assert_eq!(mime_for_path("scan.webp"), Some("image/webp"));
    }

    #[test]
    fn test_mime_rejects_everything_else() {
        assert!(mime_for_path("prova.pdf").is_none());
        assert!(mime_for_path("sem_extensao").is_none());
    }
}
