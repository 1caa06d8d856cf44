use super::collision::CollisionGroups;
use rapier3d::prelude::*;

pub use rapier3d::prelude::{ColliderHandle, RigidBodyHandle};

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    gravity_scale: Real,
    can_sleep: bool,
    locked_axes: LockedAxes,
}

impl BodyBuilder {
    /// Create a new dynamic body (affected by forces and collisions)
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            position: Isometry::identity(),
            gravity_scale: 1.0,
            can_sleep: true,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Create a new kinematic position-based body (not affected by forces)
    pub fn new_kinematic_position_based() -> Self {
        Self {
            body_type: RigidBodyType::KinematicPositionBased,
            position: Isometry::identity(),
            gravity_scale: 0.0,
            can_sleep: false,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            gravity_scale: 0.0,
            can_sleep: false,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real, z: Real) -> Self {
        self.position = Isometry::translation(x, y, z);
        self
    }

    /// Set the initial position and yaw rotation (radians around the Y axis)
    pub fn position_yaw(mut self, x: Real, y: Real, z: Real, yaw: Real) -> Self {
        self.position = Isometry::new(vector![x, y, z], Vector::y() * yaw);
        self
    }

    /// Set the gravity scale (1.0 = normal gravity, 0.0 = no gravity)
    pub fn gravity_scale(mut self, scale: Real) -> Self {
        self.gravity_scale = scale;
        self
    }

    /// Set whether the body can sleep when inactive
    pub fn can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    /// Lock rotation (useful for the player character)
    pub fn lock_rotation(mut self) -> Self {
        self.locked_axes = LockedAxes::ROTATION_LOCKED;
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .gravity_scale(self.gravity_scale)
            .can_sleep(self.can_sleep)
            .locked_axes(self.locked_axes)
            .build()
    }
}

/// Preset bodies and colliders for the objects in the game
pub mod presets {
    use super::*;

    /// The player's kinematic body; translation is driven by the character
    /// controller, so rotation stays locked.
    pub fn player_body(x: Real, y: Real, z: Real) -> RigidBody {
        BodyBuilder::new_kinematic_position_based()
            .position(x, y, z)
            .lock_rotation()
            .build()
    }

    /// Capsule collider sized for the player
    ///
    /// `height` is the full standing height; the capsule is centered on the
    /// body, so spawn the body with its center `height / 2` above the floor.
    pub fn player_collider(height: Real, radius: Real) -> Collider {
        let half_height = (height / 2.0 - radius).max(0.0);
        ColliderBuilder::capsule_y(half_height, radius)
            .collision_groups(CollisionGroups::Player.to_interaction_groups())
            .build()
    }

    /// A fixed body for level geometry
    pub fn level_body(x: Real, y: Real, z: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y, z).build()
    }

    /// Box collider for floors and walls (half extents)
    pub fn level_collider(hx: Real, hy: Real, hz: Real) -> Collider {
        ColliderBuilder::cuboid(hx, hy, hz)
            .collision_groups(CollisionGroups::Level.to_interaction_groups())
            .build()
    }

    /// A door's kinematic body, placed at the hinge
    pub fn door_body(x: Real, y: Real, z: Real, yaw: Real) -> RigidBody {
        BodyBuilder::new_kinematic_position_based()
            .position_yaw(x, y, z, yaw)
            .build()
    }

    /// Door panel collider, offset from the hinge so the panel swings
    /// around the body origin (half extents; width along local X)
    pub fn door_panel_collider(hx: Real, hy: Real, hz: Real) -> Collider {
        ColliderBuilder::cuboid(hx, hy, hz)
            .translation(vector![hx, hy, 0.0])
            .collision_groups(CollisionGroups::Interactable.to_interaction_groups())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_body_defaults() {
        let body = BodyBuilder::new_dynamic().build();
        assert_eq!(body.body_type(), RigidBodyType::Dynamic);
        assert_eq!(body.gravity_scale(), 1.0);
    }

    #[test]
    fn test_fixed_body() {
        let body = BodyBuilder::new_fixed().position(1.0, 2.0, 3.0).build();
        assert_eq!(body.body_type(), RigidBodyType::Fixed);
        assert_eq!(body.translation().x, 1.0);
        assert_eq!(body.translation().y, 2.0);
        assert_eq!(body.translation().z, 3.0);
    }

    #[test]
    fn test_player_body_is_kinematic() {
        let body = presets::player_body(0.0, 1.0, 0.0);
        assert_eq!(body.body_type(), RigidBodyType::KinematicPositionBased);
        assert!(body.is_rotation_locked().iter().all(|locked| *locked));
    }

    #[test]
    fn test_player_collider_dimensions() {
        let collider = presets::player_collider(1.8, 0.3);
        let capsule = collider
            .shape()
            .as_capsule()
            .expect("player collider should be a capsule");
        // Full height = segment + two hemispherical caps
        let full_height = capsule.segment.length() + 2.0 * capsule.radius;
        assert!((full_height - 1.8).abs() < 1.0e-5);
    }

    #[test]
    fn test_door_body_yaw() {
        let body = presets::door_body(0.0, 0.0, 0.0, std::f32::consts::FRAC_PI_2);
        let axis_angle = body.rotation().scaled_axis();
        assert!((axis_angle.y - std::f32::consts::FRAC_PI_2).abs() < 1.0e-5);
    }

    #[test]
    fn test_door_panel_offset_from_hinge() {
        let collider = presets::door_panel_collider(0.5, 1.0, 0.05);
        assert_eq!(collider.translation().x, 0.5);
        assert_eq!(collider.translation().z, 0.0);
    }
}
