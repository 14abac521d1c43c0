//! Quiz-state slot commands.

use tauri::State;

use super::{CommandError, CommandResult};
use crate::quiz::QuizState;
use crate::AppState;

#[tauri::command]
pub fn get_quiz_state(state: State<AppState>) -> CommandResult<Option<QuizState>> {
    let quiz = state.quiz.lock().map_err(|e| CommandError {
        message: format!("Failed to acquire quiz lock: {}", e),
    })?;
    Ok(quiz.get_state())
}

#[tauri::command]
pub fn save_quiz_state(state: State<AppState>, quiz_state: QuizState) -> CommandResult<()> {
    let quiz = state.quiz.lock().map_err(|e| CommandError {
        message: format!("Failed to acquire quiz lock: {}", e),
    })?;
    quiz.save_state(&quiz_state);
    Ok(())
}

#[tauri::command]
pub fn clear_quiz_state(state: State<AppState>) -> CommandResult<()> {
    let quiz = state.quiz.lock().map_err(|e| CommandError {
        message: format!("Failed to acquire quiz lock: {}", e),
    })?;
    quiz.clear_state();
    Ok(())
}
