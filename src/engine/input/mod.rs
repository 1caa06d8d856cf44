// Input handling system
//
// This module turns winit window/device events into game actions for the
// local player, with support for input buffering and remapping.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `buffer`: Input buffering for reliable input detection
// - `player`: Player input state (pressed sets, buffer, look delta)
// - `config`: Binding profiles and remapping
// - `manager`: Event routing and per-frame bookkeeping
//
// ## Usage Example
//
// ```rust
// use engine::input::{Action, InputManager};
//
// let mut input = InputManager::from_profile("player")?;
//
// // In your event loop, feed winit events
// input.process_keyboard_event(&key_event);
// input.process_mouse_motion(dx, dy);
//
// // Query input state from gameplay code
// if input.player().just_pressed(Action::Jump) {
//     // ...
// }
// let axes = input.player().move_axes();
//
// // At the end of each frame
// input.update(dt);
// ```

pub mod action;
pub mod buffer;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::{InputConfig, InputConfigError, PLAYER_PROFILE};
pub use manager::InputManager;
pub use player::PlayerInput;
