//! Shared state types for the egui UI.

mod composer;
mod status;

pub use composer::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub composer: ComposerState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            composer: ComposerState::default(),
        }
    }
}
