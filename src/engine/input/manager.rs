// Input manager - routes window events into the player input state

use super::action::InputSource;
use super::config::{InputConfig, InputConfigError};
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Main input manager for the local player
pub struct InputManager {
    /// Active binding configuration
    config: InputConfig,

    /// Input state for the player
    player: PlayerInput,
}

impl InputManager {
    /// Create an input manager from a named binding profile
    pub fn from_profile(profile: &str) -> Result<Self, InputConfigError> {
        Ok(Self {
            config: InputConfig::from_profile(profile)?,
            player: PlayerInput::new(),
        })
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let source = InputSource::key(key_code);

            if let Some(action) = self.config.get_action(source) {
                match event.state {
                    ElementState::Pressed => {
                        if !event.repeat {
                            // Only register if not a key repeat
                            self.player.press(action);
                        }
                    }
                    ElementState::Released => {
                        self.player.release(action);
                    }
                }
            }
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let source = InputSource::mouse(button);

        if let Some(action) = self.config.get_action(source) {
            match state {
                ElementState::Pressed => self.player.press(action),
                ElementState::Released => self.player.release(action),
            }
        }
    }

    /// Process raw mouse motion (from a device event, not cursor position)
    pub fn process_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.player.add_look_delta(dx as f32, dy as f32);
    }

    /// Update the input state for a new frame
    /// Call this once per frame after processing all events
    pub fn update(&mut self, dt: f32) {
        self.player.update(dt);
    }

    /// Get the player's input state
    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    /// Get the player's input state mutably
    pub fn player_mut(&mut self) -> &mut PlayerInput {
        &mut self.player
    }

    /// Get the active configuration
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Get the active configuration mutably (for rebinding)
    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    /// Reset the player input state
    pub fn reset(&mut self) {
        self.player.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::action::Action;
    use crate::engine::input::config::PLAYER_PROFILE;

    fn manager() -> InputManager {
        InputManager::from_profile(PLAYER_PROFILE).unwrap()
    }

    #[test]
    fn test_manager_creation() {
        let manager = manager();
        assert_eq!(manager.config().profile(), PLAYER_PROFILE);
        assert!(!manager.player().is_pressed(Action::Jump));
    }

    #[test]
    fn test_unknown_profile_rejected() {
        assert!(InputManager::from_profile("spectator").is_err());
    }

    #[test]
    fn test_direct_input_manipulation() {
        let mut manager = manager();
        manager.player_mut().press(Action::MoveForward);
        assert!(manager.player().is_pressed(Action::MoveForward));
    }

    #[test]
    fn test_input_release() {
        let mut manager = manager();
        manager.player_mut().press(Action::Jump);
        manager.update(0.016);
        manager.player_mut().release(Action::Jump);

        assert!(!manager.player().is_pressed(Action::Jump));
        assert!(manager.player().just_released(Action::Jump));
    }

    #[test]
    fn test_mouse_motion_accumulates() {
        let mut manager = manager();
        manager.process_mouse_motion(4.0, -2.0);
        manager.process_mouse_motion(1.0, 2.0);

        let delta = manager.player().look_delta();
        assert_eq!(delta.x, 5.0);
        assert_eq!(delta.y, 0.0);
    }

    #[test]
    fn test_unbound_mouse_button_ignored() {
        let mut manager = manager();
        manager.process_mouse_button(MouseButton::Middle, ElementState::Pressed);
        // No action bound to middle mouse in the player profile
        assert!(!manager.player().is_pressed(Action::Interact));
    }

    #[test]
    fn test_update_clears_just_pressed() {
        let mut manager = manager();
        manager.player_mut().press(Action::Interact);
        assert!(manager.player().just_pressed(Action::Interact));

        manager.update(0.016);
        assert!(!manager.player().just_pressed(Action::Interact));
        assert!(manager.player().is_pressed(Action::Interact));
    }

    #[test]
    fn test_reset() {
        let mut manager = manager();
        manager.player_mut().press(Action::Sprint);
        manager.reset();
        assert!(!manager.player().is_pressed(Action::Sprint));
    }
}
