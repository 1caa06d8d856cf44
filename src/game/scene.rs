// Level layout and the interactable registry

use std::collections::HashMap;

use glam::Vec3;
use log::info;

use crate::engine::physics::body::presets;
use crate::engine::physics::{ColliderHandle, PhysicsWorld};

use super::interaction::{Door, Interactable, InteractableId};

/// The playable level: static geometry plus every interactable object,
/// indexed by collider so a raycast hit can be resolved to a target.
#[derive(Default)]
pub struct Scene {
    doors: Vec<Door>,
    by_collider: HashMap<ColliderHandle, InteractableId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the demo level: a floored room with two doors
    pub fn demo_level(physics: &mut PhysicsWorld) -> Self {
        let mut scene = Self::new();

        // Floor
        scene.add_level_box(physics, Vec3::new(0.0, -0.5, 0.0), Vec3::new(12.0, 0.5, 12.0));

        // Perimeter walls
        scene.add_level_box(physics, Vec3::new(0.0, 1.5, -12.0), Vec3::new(12.0, 1.5, 0.25));
        scene.add_level_box(physics, Vec3::new(0.0, 1.5, 12.0), Vec3::new(12.0, 1.5, 0.25));
        scene.add_level_box(physics, Vec3::new(-12.0, 1.5, 0.0), Vec3::new(0.25, 1.5, 12.0));
        scene.add_level_box(physics, Vec3::new(12.0, 1.5, 0.0), Vec3::new(0.25, 1.5, 12.0));

        // Interior wall with a doorway, door hinged on the doorway's edge
        scene.add_level_box(physics, Vec3::new(-3.0, 1.5, -5.0), Vec3::new(2.5, 1.5, 0.1));
        scene.add_level_box(physics, Vec3::new(3.0, 1.5, -5.0), Vec3::new(2.5, 1.5, 0.1));
        scene.spawn_door(physics, "hall door", Vec3::new(-0.5, 0.0, -5.0), 0.0);

        // Second door along the east wall
        scene.spawn_door(
            physics,
            "storage door",
            Vec3::new(8.0, 0.0, 4.0),
            std::f32::consts::FRAC_PI_2,
        );

        info!("Demo level built ({} doors)", scene.doors.len());
        scene
    }

    /// Add a fixed box (floor, wall, ceiling) to the level
    pub fn add_level_box(&mut self, physics: &mut PhysicsWorld, center: Vec3, half_extents: Vec3) {
        let body = physics.add_rigid_body(presets::level_body(center.x, center.y, center.z));
        physics.add_collider(
            presets::level_collider(half_extents.x, half_extents.y, half_extents.z),
            body,
        );
    }

    /// Spawn a door and register it as an interactable
    pub fn spawn_door(
        &mut self,
        physics: &mut PhysicsWorld,
        name: &str,
        hinge_pos: Vec3,
        closed_yaw: f32,
    ) -> InteractableId {
        let door = Door::spawn(name, physics, hinge_pos, closed_yaw);
        let id = self.doors.len() as InteractableId;
        self.by_collider.insert(door.collider_handle(), id);
        self.doors.push(door);
        id
    }

    /// Resolve a raycast hit to a registered interactable
    pub fn interactable_at(&self, collider: ColliderHandle) -> Option<InteractableId> {
        self.by_collider.get(&collider).copied()
    }

    pub fn get(&self, id: InteractableId) -> Option<&dyn Interactable> {
        self.doors.get(id as usize).map(|d| d as &dyn Interactable)
    }

    pub fn get_mut(&mut self, id: InteractableId) -> Option<&mut dyn Interactable> {
        self.doors
            .get_mut(id as usize)
            .map(|d| d as &mut dyn Interactable)
    }

    /// Advance every animated object in the scene
    pub fn update(&mut self, physics: &mut PhysicsWorld, dt: f32) {
        for door in &mut self.doors {
            door.update(physics, dt);
        }
    }

    /// Doors in the scene, for inspection
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_level_has_doors() {
        let mut physics = PhysicsWorld::new();
        let scene = Scene::demo_level(&mut physics);
        assert_eq!(scene.doors().len(), 2);
    }

    #[test]
    fn test_door_lookup_by_collider() {
        let mut physics = PhysicsWorld::new();
        let mut scene = Scene::new();
        let id = scene.spawn_door(&mut physics, "door", Vec3::ZERO, 0.0);

        let collider = scene.doors()[id as usize].collider_handle();
        assert_eq!(scene.interactable_at(collider), Some(id));
    }

    #[test]
    fn test_level_collider_is_not_interactable() {
        let mut physics = PhysicsWorld::new();
        let mut scene = Scene::new();
        scene.spawn_door(&mut physics, "door", Vec3::ZERO, 0.0);

        let body = physics.add_rigid_body(presets::level_body(0.0, -0.5, 0.0));
        let floor = physics.add_collider(presets::level_collider(5.0, 0.5, 5.0), body);

        assert_eq!(scene.interactable_at(floor), None);
    }

    #[test]
    fn test_scene_update_drives_door_tweens() {
        let mut physics = PhysicsWorld::new();
        let mut scene = Scene::new();
        let id = scene.spawn_door(&mut physics, "door", Vec3::ZERO, 0.0);

        scene.get_mut(id).unwrap().interact();
        for _ in 0..120 {
            scene.update(&mut physics, 1.0 / 60.0);
            physics.step();
        }

        assert!(!scene.doors()[id as usize].is_animating());
        assert!(scene.doors()[id as usize].current_yaw() < -1.0);
    }
}
