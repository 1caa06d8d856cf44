// Input buffering system for reliable input detection

use super::action::Action;
use std::collections::VecDeque;

/// Maximum number of buffered inputs to store
const MAX_BUFFER_SIZE: usize = 16;

/// How long an input remains in the buffer (in seconds)
const BUFFER_DURATION: f32 = 0.2;

/// Represents a single buffered input
#[derive(Debug, Clone, Copy)]
pub struct BufferedInput {
    pub action: Action,
    pub time_remaining: f32,
}

impl BufferedInput {
    /// Create a new buffered input
    pub fn new(action: Action) -> Self {
        Self {
            action,
            time_remaining: BUFFER_DURATION,
        }
    }

    /// Decrease the remaining time
    pub fn age(&mut self, dt: f32) {
        self.time_remaining = (self.time_remaining - dt).max(0.0);
    }

    /// Check if this input has expired
    pub fn is_expired(&self) -> bool {
        self.time_remaining <= 0.0
    }
}

/// Buffers press events so short windows are not missed by the fixed update
///
/// A press that lands between two fixed updates still has to count; the
/// buffer holds it until gameplay consumes it or it expires.
#[derive(Debug)]
pub struct InputBuffer {
    buffer: VecDeque<BufferedInput>,
}

impl InputBuffer {
    /// Create a new input buffer
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::with_capacity(MAX_BUFFER_SIZE),
        }
    }

    /// Add an input to the buffer
    pub fn push(&mut self, action: Action) {
        // Don't add duplicate actions if the same action is already buffered
        if !self.buffer.iter().any(|input| input.action == action) {
            self.buffer.push_back(BufferedInput::new(action));

            // Keep buffer size under control
            if self.buffer.len() > MAX_BUFFER_SIZE {
                self.buffer.pop_front();
            }
        }
    }

    /// Check if an action is currently buffered
    pub fn has(&self, action: Action) -> bool {
        self.buffer.iter().any(|input| input.action == action)
    }

    /// Consume an action from the buffer if it exists
    /// Returns true if the action was found and consumed
    pub fn consume(&mut self, action: Action) -> bool {
        if let Some(pos) = self.buffer.iter().position(|input| input.action == action) {
            self.buffer.remove(pos);
            true
        } else {
            false
        }
    }

    /// Update the buffer, aging all inputs and removing expired ones
    /// Call this once per frame
    pub fn update(&mut self, dt: f32) {
        for input in &mut self.buffer {
            input.age(dt);
        }

        self.buffer.retain(|input| !input.is_expired());
    }

    /// Clear all buffered inputs
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Get the number of buffered inputs
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
