//! Exam-correction history commands.

use tauri::State;
use uuid::Uuid;

use super::{CommandError, CommandResult};
use crate::history::ExamCorrection;
use crate::AppState;

#[tauri::command]
pub fn get_exam_history(state: State<AppState>) -> CommandResult<Vec<ExamCorrection>> {
    let history = state.history.lock().map_err(|e| CommandError {
        message: format!("Failed to acquire history lock: {}", e),
    })?;
    Ok(history.get_history())
}

#[tauri::command]
pub fn save_exam_correction(
    state: State<AppState>,
    analysis: String,
    sources: Vec<String>,
    image_preview: Option<String>,
) -> CommandResult<Vec<ExamCorrection>> {
    let history = state.history.lock().map_err(|e| CommandError {
        message: format!("Failed to acquire history lock: {}", e),
    })?;
    Ok(history.save_correction(analysis, sources, image_preview))
}

#[tauri::command]
pub fn delete_exam_correction(
    state: State<AppState>,
    correction_id: String,
) -> CommandResult<Vec<ExamCorrection>> {
    let id = Uuid::parse_str(&correction_id).map_err(|e| CommandError {
        message: format!("Invalid correction ID: {}", e),
    })?;
    let history = state.history.lock().map_err(|e| CommandError {
        message: format!("Failed to acquire history lock: {}", e),
    })?;
    Ok(history.delete_correction(id))
}

#[tauri::command]
pub fn clear_exam_history(state: State<AppState>) -> CommandResult<()> {
    let history = state.history.lock().map_err(|e| CommandError {
        message: format!("Failed to acquire history lock: {}", e),
    })?;
    history.clear_history();
    Ok(())
}
