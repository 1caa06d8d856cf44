// Jump-assist timing windows (coyote time + jump buffer)

/// Tracks the two grace windows that make jumping feel responsive
///
/// - Coyote time: after walking off a ledge the character may still jump for
///   a short window, as if the ground were still there.
/// - Jump buffer: a jump pressed slightly before landing is held onto and
///   honored the moment jumping becomes possible.
///
/// Both are plain countdown timers clamped at zero. A jump that fires
/// consumes both windows so a single press can never produce two jumps.
#[derive(Debug)]
pub struct JumpAssist {
    /// Configured coyote window in seconds
    coyote_time: f32,
    /// Configured buffer window in seconds
    jump_buffer_time: f32,

    /// Remaining coyote window; 0 while grounded or expired
    coyote_timer: f32,
    /// Remaining buffer window; 0 when no press is pending
    jump_buffer_timer: f32,

    /// Grounded flag from the previous update, for edge detection
    was_grounded: bool,
}

impl JumpAssist {
    /// Create a new assist tracker with the given windows (in seconds)
    pub fn new(coyote_time: f32, jump_buffer_time: f32) -> Self {
        Self {
            coyote_time,
            jump_buffer_time,
            coyote_timer: 0.0,
            jump_buffer_timer: 0.0,
            was_grounded: false,
        }
    }

    /// Record a jump press; the press stays valid for the buffer window
    pub fn register_jump_press(&mut self) {
        self.jump_buffer_timer = self.jump_buffer_time;
    }

    /// Advance the timers by one frame
    ///
    /// `vertical_velocity` distinguishes walking off a ledge (coyote time
    /// arms) from leaving the ground by jumping (it does not).
    pub fn update(&mut self, dt: f32, grounded: bool, vertical_velocity: f32) {
        // Start the coyote window when leaving the ground, but not from a jump
        if self.was_grounded && !grounded && vertical_velocity <= 0.0 {
            self.coyote_timer = self.coyote_time;
        }

        if grounded {
            self.coyote_timer = 0.0;
        } else {
            self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        }

        self.jump_buffer_timer = (self.jump_buffer_timer - dt).max(0.0);

        self.was_grounded = grounded;
    }

    /// Whether a jump is currently allowed (on the ground or within coyote time)
    pub fn can_jump(&self, grounded: bool) -> bool {
        grounded || self.coyote_timer > 0.0
    }

    /// Whether a valid jump press is pending
    pub fn has_buffered_jump(&self) -> bool {
        self.jump_buffer_timer > 0.0
    }

    /// `can_jump` and `has_buffered_jump` combined: should a jump fire now?
    pub fn should_jump(&self, grounded: bool) -> bool {
        self.can_jump(grounded) && self.has_buffered_jump()
    }

    /// Consume both windows after a jump fires
    pub fn consume(&mut self) {
        self.coyote_timer = 0.0;
        self.jump_buffer_timer = 0.0;
    }

    /// Remaining coyote window (for debugging/HUD)
    pub fn coyote_remaining(&self) -> f32 {
        self.coyote_timer
    }

    /// Remaining buffer window (for debugging/HUD)
    pub fn buffer_remaining(&self) -> f32 {
        self.jump_buffer_timer
    }
}
