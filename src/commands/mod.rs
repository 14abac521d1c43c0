mod ai;
mod history;
mod quiz;
mod ui;

pub use ai::*;
pub use history::*;
pub use quiz::*;
pub use ui::*;

/// Error payload crossing the command boundary, serialized for the
/// frontend.
#[derive(Debug, serde::Serialize)]
pub struct CommandError {
    pub message: String,
}

pub type CommandResult<T> = Result<T, CommandError>;
