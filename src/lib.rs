use std::sync::Mutex;

mod commands;
mod gateway;
mod history;
mod quiz;
mod storage;
mod ui;

use gateway::{ChatSession, GeminiClient};
use history::HistoryStore;
use quiz::QuizStateStore;
use storage::KvStore;
use ui::UiState;

pub struct AppState {
    pub history: Mutex<HistoryStore>,
    pub quiz: Mutex<QuizStateStore>,
    pub ui: Mutex<UiState>,
    pub gateway: GeminiClient,
    pub chat: tokio::sync::Mutex<ChatSession>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Both logical keys live in one storage area and share its quota
    let data_dir = KvStore::default_data_dir().expect("Failed to get data directory");
    let kv = KvStore::new(data_dir).expect("Failed to initialize storage");

    let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        log::warn!("GEMINI_API_KEY is not set; AI features will answer with error messages");
    }
    let gateway = GeminiClient::new(api_key);

    let state = AppState {
        history: Mutex::new(HistoryStore::new(kv.clone())),
        quiz: Mutex::new(QuizStateStore::new(kv)),
        ui: Mutex::new(UiState::default()),
        chat: tokio::sync::Mutex::new(ChatSession::new(gateway.clone())),
        gateway,
    };

    tauri::Builder::default()
        .manage(state)
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // History commands
            commands::get_exam_history,
            commands::save_exam_correction,
            commands::delete_exam_correction,
            commands::clear_exam_history,
            // Quiz state commands
            commands::get_quiz_state,
            commands::save_quiz_state,
            commands::clear_quiz_state,
            // AI commands
            commands::generate_summary,
            commands::generate_quiz_question,
            commands::grade_exam_image,
            commands::grade_exam_file,
            commands::chat_send,
            commands::chat_reset,
            // UI commands
            commands::get_ui_state,
            commands::navigate_to,
            commands::set_chat_open,
            commands::list_summary_topics,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
