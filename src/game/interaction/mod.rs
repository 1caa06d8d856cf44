// Interaction system
//
// The player aims at things and presses a key:
// - `interactable`: the contract objects implement to be usable
// - `interactor`: line-of-sight detection from the player's eyes
// - `door`: a tween-animated hinged door
// - `prompt`: the crosshair prompt with fade and text-swap animations

pub mod door;
pub mod interactable;
pub mod interactor;
pub mod prompt;

// Re-export commonly used types
pub use door::Door;
pub use interactable::{Interactable, InteractableId};
pub use interactor::Interactor;
pub use prompt::PromptPanel;
