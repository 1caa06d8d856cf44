// The first-person player character
//
// - `controller`: movement, gravity, and mouse-look
// - `jump_assist`: coyote time and jump buffering
// - `stats`: tuning parameters

pub mod controller;
pub mod jump_assist;
pub mod stats;

// Re-export commonly used types
pub use controller::FirstPersonController;
pub use jump_assist::JumpAssist;
pub use stats::PlayerStats;
