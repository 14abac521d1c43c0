//! Screen navigation and topic-catalog commands.

use tauri::State;

use super::{CommandError, CommandResult};
use crate::ui::{summary_topics, AppSection, SummaryTopic, UiState};
use crate::AppState;

#[tauri::command]
pub fn get_ui_state(state: State<AppState>) -> CommandResult<UiState> {
    let ui = state.ui.lock().map_err(|e| CommandError {
        message: format!("Failed to acquire UI lock: {}", e),
    })?;
    Ok(ui.clone())
}

#[tauri::command]
pub fn navigate_to(state: State<AppState>, section: AppSection) -> CommandResult<UiState> {
    let mut ui = state.ui.lock().map_err(|e| CommandError {
        message: format!("Failed to acquire UI lock: {}", e),
    })?;
    ui.navigate_to(section);
    Ok(ui.clone())
}

#[tauri::command]
pub fn set_chat_open(state: State<AppState>, open: bool) -> CommandResult<UiState> {
    let mut ui = state.ui.lock().map_err(|e| CommandError {
        message: format!("Failed to acquire UI lock: {}", e),
    })?;
    ui.set_chat_open(open);
    Ok(ui.clone())
}

#[tauri::command]
pub fn list_summary_topics() -> Vec<SummaryTopic> {
    summary_topics()
}
