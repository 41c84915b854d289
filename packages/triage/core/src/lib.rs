pub mod actions;
pub mod effects;
pub mod error;
pub mod gate;
pub mod messages;
pub mod reducer;
pub mod render;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;

pub use actions::{Action, SessionStartFailure};
pub use effects::Effect;
pub use error::{AudioError, ChatError, Notice, RecognitionError};
pub use gate::PendingOptions;
pub use reducer::reduce;
pub use state::AppState;
