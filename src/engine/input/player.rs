// Player input state management

use super::action::Action;
use super::buffer::InputBuffer;
use glam::Vec2;
use std::collections::HashSet;

/// Snapshot of the player's input for the current frame
#[derive(Debug)]
pub struct PlayerInput {
    /// Actions that are currently pressed this frame
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame (press events)
    just_pressed: HashSet<Action>,

    /// Actions that were just released this frame (release events)
    just_released: HashSet<Action>,

    /// Actions that were pressed in the previous frame
    previous_pressed: HashSet<Action>,

    /// Input buffer for delayed/buffered inputs
    buffer: InputBuffer,

    /// Accumulated mouse delta since the last frame (pixels)
    look_delta: Vec2,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
            previous_pressed: HashSet::new(),
            buffer: InputBuffer::new(),
            look_delta: Vec2::ZERO,
        }
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Check if an action is held (pressed for multiple frames)
    pub fn is_held(&self, action: Action) -> bool {
        self.pressed.contains(&action) && self.previous_pressed.contains(&action)
    }

    /// Check if an action is buffered
    pub fn is_buffered(&self, action: Action) -> bool {
        self.buffer.has(action)
    }

    /// Consume a buffered action
    /// Returns true if the action was buffered and consumed
    pub fn consume_buffered(&mut self, action: Action) -> bool {
        self.buffer.consume(action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if !self.pressed.contains(&action) {
            self.just_pressed.insert(action);
            self.pressed.insert(action);
            // Also add to buffer for reliable input detection
            self.buffer.push(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.contains(&action) {
            self.just_released.insert(action);
            self.pressed.remove(&action);
        }
    }

    /// Accumulate raw mouse motion
    pub(crate) fn add_look_delta(&mut self, dx: f32, dy: f32) {
        self.look_delta += Vec2::new(dx, dy);
    }

    /// Mouse delta accumulated since the last frame
    pub fn look_delta(&self) -> Vec2 {
        self.look_delta
    }

    /// Update input state for a new frame
    /// Call this once per frame after processing all events
    pub(crate) fn update(&mut self, dt: f32) {
        // Clear frame-specific state
        self.just_pressed.clear();
        self.just_released.clear();
        self.look_delta = Vec2::ZERO;

        // Save current pressed state for next frame
        self.previous_pressed = self.pressed.clone();

        // Update buffer
        self.buffer.update(dt);
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed.clear();
        self.buffer.clear();
        self.look_delta = Vec2::ZERO;
    }

    /// Get movement input as axes in [-1, 1]
    /// Returns (strafe, forward): +x is right, +y is forward
    pub fn move_axes(&self) -> Vec2 {
        let mut axes = Vec2::ZERO;

        if self.is_pressed(Action::MoveLeft) {
            axes.x -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            axes.x += 1.0;
        }
        if self.is_pressed(Action::MoveBackward) {
            axes.y -= 1.0;
        }
        if self.is_pressed(Action::MoveForward) {
            axes.y += 1.0;
        }

        axes
    }
}

impl Default for PlayerInput {
    fn default() -> Self {
        Self::new()
    }
}
