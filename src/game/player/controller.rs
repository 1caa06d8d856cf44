// First-person character controller
//
// Movement and mouse-look for the player. Collision resolution is done by
// the physics layer's kinematic character controller; this file owns the
// gameplay rules layered on top: speeds, gravity, and the jump-assist
// windows.

use glam::{Quat, Vec3};
use log::debug;

use crate::core::math::wrap_angle;
use crate::engine::input::{Action, PlayerInput};
use crate::engine::physics::body::presets;
use crate::engine::physics::{ColliderHandle, PhysicsWorld, RigidBodyHandle};

use super::jump_assist::JumpAssist;
use super::stats::PlayerStats;

/// Velocity applied while grounded to keep the capsule pressed to the floor
const GROUND_STICK_VELOCITY: f32 = -0.5;

/// The player-controlled first-person character
#[derive(Debug)]
pub struct FirstPersonController {
    /// Tuning parameters
    pub stats: PlayerStats,

    // Physics
    /// Handle to the player's kinematic body
    body_handle: RigidBodyHandle,
    /// Handle to the player's capsule collider
    collider_handle: ColliderHandle,

    // Frame-local movement state
    /// Current velocity vector (units/second)
    current_movement: Vec3,
    /// Ground speed captured at the moment of the last jump; used while airborne
    air_speed: f32,
    /// Grounded flag from the last physics move
    grounded: bool,

    // Look state
    /// Heading around the world Y axis, in radians
    yaw: f32,
    /// Vertical look angle in degrees, positive looking up
    vertical_rotation: f32,

    /// Coyote time + jump buffer tracking
    jump_assist: JumpAssist,
}

impl FirstPersonController {
    /// Spawn the player with their feet at `feet_pos`
    pub fn new(stats: PlayerStats, physics: &mut PhysicsWorld, feet_pos: Vec3) -> Self {
        let center_y = feet_pos.y + stats.height / 2.0;
        let body = presets::player_body(feet_pos.x, center_y, feet_pos.z);
        let body_handle = physics.add_rigid_body(body);

        let collider = presets::player_collider(stats.height, stats.radius);
        let collider_handle = physics.add_collider(collider, body_handle);

        let jump_assist = JumpAssist::new(stats.coyote_time, stats.jump_buffer_time);

        Self {
            stats,
            body_handle,
            collider_handle,
            current_movement: Vec3::ZERO,
            air_speed: 0.0,
            grounded: false,
            yaw: 0.0,
            vertical_rotation: 0.0,
            jump_assist,
        }
    }

    /// Run one fixed update: look, jump timing, then movement
    pub fn update(&mut self, input: &PlayerInput, physics: &mut PhysicsWorld, dt: f32) {
        self.handle_rotation(input);
        self.handle_jump_timing(input, dt);
        self.handle_movement(input, physics, dt);
    }

    fn handle_rotation(&mut self, input: &PlayerInput) {
        let delta = input.look_delta() * self.stats.mouse_sensitivity;

        // Mouse right turns right (negative yaw in a right-handed Y-up world);
        // wrapping keeps the angle bounded over long sessions
        self.yaw = wrap_angle(self.yaw - delta.x.to_radians());

        // Mouse up (negative winit dy) looks up; clamp to the configured range
        self.vertical_rotation = (self.vertical_rotation - delta.y).clamp(
            -self.stats.up_down_look_range,
            self.stats.up_down_look_range,
        );
    }

    fn handle_jump_timing(&mut self, input: &PlayerInput, dt: f32) {
        if input.just_pressed(Action::Jump) {
            self.jump_assist.register_jump_press();
        }

        // Grounded state and vertical velocity are from the previous move,
        // which is exactly what the walk-off-a-ledge check needs
        self.jump_assist
            .update(dt, self.grounded, self.current_movement.y);
    }

    fn handle_movement(&mut self, input: &PlayerInput, physics: &mut PhysicsWorld, dt: f32) {
        let world_direction = self.world_move_direction(input);
        let speed = self.movement_speed(input);
        self.current_movement.x = world_direction.x * speed;
        self.current_movement.z = world_direction.z * speed;

        self.handle_jump(input, physics, dt);

        let desired = self.current_movement * dt;
        if let Some(movement) = physics.move_character(
            self.collider_handle,
            rapier3d::prelude::vector![desired.x, desired.y, desired.z],
            dt,
        ) {
            self.grounded = movement.grounded;
        }
    }

    fn handle_jump(&mut self, input: &PlayerInput, physics: &PhysicsWorld, dt: f32) {
        if self.grounded {
            self.current_movement.y = GROUND_STICK_VELOCITY;
        }

        if self.jump_assist.should_jump(self.grounded) {
            // Lock in the current ground speed for the whole air phase
            self.air_speed = self.ground_speed(input);
            self.current_movement.y = self.stats.jump_force;
            self.jump_assist.consume();
            debug!("Jump (air speed {:.2})", self.air_speed);
        } else if !self.grounded {
            // Apply gravity when not grounded
            self.current_movement.y +=
                physics.gravity().y * self.stats.gravity_multiplier * dt;
        }
    }

    /// Movement input mapped through the current heading, normalized
    fn world_move_direction(&self, input: &PlayerInput) -> Vec3 {
        let axes = input.move_axes();
        let local = Vec3::new(axes.x, 0.0, -axes.y); // forward is -Z
        let world = Quat::from_rotation_y(self.yaw) * local;
        world.normalize_or_zero()
    }

    fn ground_speed(&self, input: &PlayerInput) -> f32 {
        let sprint = if input.is_pressed(Action::Sprint) {
            self.stats.sprint_multiplier
        } else {
            1.0
        };
        self.stats.walk_speed * sprint
    }

    fn movement_speed(&self, input: &PlayerInput) -> f32 {
        if self.grounded {
            self.ground_speed(input)
        } else {
            self.air_speed
        }
    }

    /// Whether the character is standing on something
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Current velocity vector
    pub fn velocity(&self) -> Vec3 {
        self.current_movement
    }

    /// Heading in radians
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Vertical look angle in degrees, positive up
    pub fn vertical_rotation(&self) -> f32 {
        self.vertical_rotation
    }

    /// Position of the capsule's bottom (the feet)
    pub fn feet_position(&self, physics: &PhysicsWorld) -> Option<Vec3> {
        physics.translation(self.body_handle).map(|center| {
            Vec3::new(center.x, center.y - self.stats.height / 2.0, center.z)
        })
    }

    /// World-space eye position, for the camera and the interaction ray
    pub fn eye_position(&self, physics: &PhysicsWorld) -> Option<Vec3> {
        self.feet_position(physics)
            .map(|feet| feet + Vec3::Y * self.stats.eye_height)
    }

    /// Full look direction (yaw + pitch)
    pub fn look_direction(&self) -> Vec3 {
        let pitch = self.vertical_rotation.to_radians();
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(pitch) * Vec3::NEG_Z
    }

    /// Handle to the player's rigid body (for raycast exclusion)
    pub fn body_handle(&self) -> RigidBodyHandle {
        self.body_handle
    }
}
