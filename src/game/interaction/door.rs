// A hinged door the player can open and close

use glam::Vec3;
use log::{debug, info};

use crate::engine::physics::body::presets;
use crate::engine::physics::{ColliderHandle, PhysicsWorld, RigidBodyHandle};
use crate::engine::tween::{Ease, Tween};

use super::interactable::Interactable;

/// Default swing relative to the closed pose, in radians (negative = inward)
const DEFAULT_OPEN_ANGLE: f32 = -std::f32::consts::FRAC_PI_2;

/// Default swing duration in seconds
const DEFAULT_ANIMATION_DURATION: f32 = 1.0;

/// Door panel half extents (width, height, thickness)
const PANEL_HALF_EXTENTS: (f32, f32, f32) = (0.5, 1.0, 0.05);

/// A door hinged on a kinematic body; opening and closing is a yaw tween
/// around the hinge. While a swing is in flight the door refuses further
/// interaction.
#[derive(Debug)]
pub struct Door {
    /// Name for logging
    name: String,

    // Physics
    body_handle: RigidBodyHandle,
    collider_handle: ColliderHandle,

    // Poses
    /// Yaw of the closed pose, captured at spawn
    closed_yaw: f32,
    /// Swing relative to the closed pose
    open_angle: f32,
    /// Yaw currently applied to the body
    current_yaw: f32,

    // Animation
    animation_duration: f32,
    animation_ease: Ease,
    /// In-flight swing, if any
    current_tween: Option<Tween>,

    // UI
    open_prompt: String,
    close_prompt: String,

    is_open: bool,
}

impl Door {
    /// Spawn a door with its hinge at `hinge_pos`, closed at `closed_yaw`
    pub fn spawn(name: &str, physics: &mut PhysicsWorld, hinge_pos: Vec3, closed_yaw: f32) -> Self {
        let body = presets::door_body(hinge_pos.x, hinge_pos.y, hinge_pos.z, closed_yaw);
        let body_handle = physics.add_rigid_body(body);

        let (hx, hy, hz) = PANEL_HALF_EXTENTS;
        let collider_handle =
            physics.add_collider(presets::door_panel_collider(hx, hy, hz), body_handle);

        info!(
            "Door '{}' spawned - closed yaw {:.2}, open yaw {:.2}",
            name,
            closed_yaw,
            closed_yaw + DEFAULT_OPEN_ANGLE
        );

        Self {
            name: name.to_string(),
            body_handle,
            collider_handle,
            closed_yaw,
            open_angle: DEFAULT_OPEN_ANGLE,
            current_yaw: closed_yaw,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            animation_ease: Ease::InOutQuad,
            current_tween: None,
            open_prompt: "(F) to Open".to_string(),
            close_prompt: "(F) to Close".to_string(),
            is_open: false,
        }
    }

    /// Override the swing angle (radians relative to the closed pose)
    pub fn with_open_angle(mut self, open_angle: f32) -> Self {
        self.open_angle = open_angle;
        self
    }

    /// Override the swing duration
    pub fn with_animation_duration(mut self, duration: f32) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Advance the swing animation and drive the physics body
    pub fn update(&mut self, physics: &mut PhysicsWorld, dt: f32) {
        let Some(tween) = &mut self.current_tween else {
            return;
        };

        self.current_yaw = tween.update(dt);
        physics.set_kinematic_yaw(self.body_handle, self.current_yaw);

        if tween.finished() {
            debug!("Door '{}' finished swinging", self.name);
            self.current_tween = None;
        }
    }

    /// Whether the door is open (or swinging open)
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether a swing is currently in flight
    pub fn is_animating(&self) -> bool {
        self.current_tween.is_some()
    }

    /// Yaw currently applied to the hinge body
    pub fn current_yaw(&self) -> f32 {
        self.current_yaw
    }

    /// Door name (for logging and lookups)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle of the panel collider, for interactable registration
    pub fn collider_handle(&self) -> ColliderHandle {
        self.collider_handle
    }
}

impl Interactable for Door {
    fn can_interact(&self) -> bool {
        self.current_tween.is_none()
    }

    fn interaction_prompt(&self) -> &str {
        if self.is_open {
            &self.close_prompt
        } else {
            &self.open_prompt
        }
    }

    fn interact(&mut self) -> bool {
        if !self.can_interact() {
            return false;
        }

        // Kill-and-replace: any stale tween is dropped before the new swing
        self.current_tween = None;

        let target_yaw = if self.is_open {
            self.closed_yaw
        } else {
            self.closed_yaw + self.open_angle
        };

        debug!(
            "Door '{}' swinging to {:.2} (open: {})",
            self.name, target_yaw, !self.is_open
        );

        self.current_tween = Some(Tween::new(
            self.current_yaw,
            target_yaw,
            self.animation_duration,
            self.animation_ease,
        ));
        self.is_open = !self.is_open;
        true
    }
}
