// Player tuning parameters

/// Tunable parameters for the first-person character
///
/// These are the numbers a designer tweaks; gameplay code reads them and
/// never hardcodes its own.
#[derive(Debug, Clone)]
pub struct PlayerStats {
    // Movement
    /// Ground movement speed (units/second)
    pub walk_speed: f32,
    /// Speed multiplier while sprint is held
    pub sprint_multiplier: f32,
    /// Upward velocity applied on jump
    pub jump_force: f32,
    /// Scales world gravity while airborne
    pub gravity_multiplier: f32,

    // Jump assist windows
    /// Grace window after walking off a ledge during which a jump still counts
    pub coyote_time: f32,
    /// Grace window before landing during which an early jump press is honored
    pub jump_buffer_time: f32,

    // Look
    /// Degrees of rotation per pixel of mouse movement
    pub mouse_sensitivity: f32,
    /// Vertical look clamp in degrees (symmetric up/down)
    pub up_down_look_range: f32,

    // Dimensions
    /// Capsule height in world units
    pub height: f32,
    /// Capsule radius in world units
    pub radius: f32,
    /// Eye height above the capsule's bottom
    pub eye_height: f32,
}

/// Standard first-person tuning
pub const BASE_STATS: PlayerStats = PlayerStats {
    walk_speed: 3.0,
    sprint_multiplier: 1.6,
    jump_force: 5.0,
    gravity_multiplier: 2.0,

    coyote_time: 0.2,
    jump_buffer_time: 0.2,

    mouse_sensitivity: 0.125,
    up_down_look_range: 85.0,

    height: 1.8,
    radius: 0.3,
    eye_height: 1.6,
};

impl Default for PlayerStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl PlayerStats {
    /// Get the standard player stats
    pub fn standard() -> Self {
        BASE_STATS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = PlayerStats::default();
        assert_eq!(stats.walk_speed, 3.0);
        assert_eq!(stats.coyote_time, 0.2);
        assert_eq!(stats.jump_buffer_time, 0.2);
    }

    #[test]
    fn test_eye_below_top_of_capsule() {
        let stats = PlayerStats::standard();
        assert!(stats.eye_height < stats.height);
    }

    #[test]
    fn test_sprint_is_faster() {
        let stats = PlayerStats::standard();
        assert!(stats.sprint_multiplier > 1.0);
    }
}
