// Line-of-sight interactable detection

use log::debug;

use crate::engine::input::{Action, PlayerInput};
use crate::engine::physics::{CollisionGroups, PhysicsWorld, QueryFilter};
use crate::game::player::FirstPersonController;
use crate::game::scene::Scene;

use super::interactable::InteractableId;
use super::prompt::PromptPanel;

/// How far the player can reach, in world units
const CAST_DISTANCE: f32 = 5.0;

/// Casts a ray from the player's eyes every update and tracks which
/// interactable, if any, is under the crosshair.
///
/// Target transitions drive the prompt: acquiring a target shows it, losing
/// the target fades it out, and keeping the same target refreshes the text
/// when the object's prompt changes.
#[derive(Debug, Default)]
pub struct Interactor {
    current: Option<InteractableId>,
}

impl Interactor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one detection pass and handle the interact input
    pub fn update(
        &mut self,
        input: &mut PlayerInput,
        player: &FirstPersonController,
        physics: &PhysicsWorld,
        scene: &mut Scene,
        prompt: &mut PromptPanel,
    ) {
        let target = self.find_target(player, physics, scene);
        self.apply_target(target, scene, prompt);

        if input.consume_buffered(Action::Interact) {
            self.try_interact(scene, prompt);
        }
    }

    /// Currently targeted interactable, if any
    pub fn current_target(&self) -> Option<InteractableId> {
        self.current
    }

    fn find_target(
        &self,
        player: &FirstPersonController,
        physics: &PhysicsWorld,
        scene: &Scene,
    ) -> Option<InteractableId> {
        let eye = player.eye_position(physics)?;
        let dir = player.look_direction();

        let filter = QueryFilter::default()
            .exclude_rigid_body(player.body_handle())
            .groups(CollisionGroups::interaction_ray());

        let (collider, _toi) = physics.raycast(
            rapier3d::prelude::vector![eye.x, eye.y, eye.z],
            rapier3d::prelude::vector![dir.x, dir.y, dir.z],
            CAST_DISTANCE,
            true,
            filter,
        )?;

        // A wall hit occludes whatever is behind it and resolves to no target
        scene.interactable_at(collider)
    }

    fn apply_target(
        &mut self,
        target: Option<InteractableId>,
        scene: &Scene,
        prompt: &mut PromptPanel,
    ) {
        match (self.current, target) {
            (None, Some(id)) => {
                if let Some(obj) = scene.get(id) {
                    debug!("Interactor acquired target {}", id);
                    prompt.show(obj.interaction_prompt());
                }
                self.current = Some(id);
            }
            (Some(old), Some(id)) if old != id => {
                if let Some(obj) = scene.get(id) {
                    debug!("Interactor switched target {} -> {}", old, id);
                    prompt.refresh(obj.interaction_prompt());
                }
                self.current = Some(id);
            }
            (Some(_), Some(id)) => {
                // Same target; pick up prompt changes (e.g. a door that has
                // finished opening now offers to close)
                if let Some(obj) = scene.get(id) {
                    prompt.refresh(obj.interaction_prompt());
                }
            }
            (Some(old), None) => {
                debug!("Interactor lost target {}", old);
                self.current = None;
                prompt.hide(false);
            }
            (None, None) => {}
        }
    }

    fn try_interact(&mut self, scene: &mut Scene, prompt: &mut PromptPanel) {
        let Some(id) = self.current else {
            return;
        };
        let Some(obj) = scene.get_mut(id) else {
            return;
        };

        if obj.can_interact() && obj.interact() {
            prompt.refresh(obj.interaction_prompt());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::presets;
    use crate::game::player::PlayerStats;
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    struct Fixture {
        physics: PhysicsWorld,
        scene: Scene,
        player: FirstPersonController,
        interactor: Interactor,
        prompt: PromptPanel,
        door_id: InteractableId,
    }

    /// Player at the origin facing -Z, door panel straight ahead at z = -3
    fn fixture() -> Fixture {
        let mut physics = PhysicsWorld::new();
        let floor = physics.add_rigid_body(presets::level_body(0.0, -0.5, 0.0));
        physics.add_collider(presets::level_collider(20.0, 0.5, 20.0), floor);

        let mut scene = Scene::new();
        let door_id = scene.spawn_door(&mut physics, "door", Vec3::new(-0.5, 0.0, -3.0), 0.0);

        let mut player =
            FirstPersonController::new(PlayerStats::standard(), &mut physics, Vec3::ZERO);

        // Land the player and populate the query pipeline
        let idle = PlayerInput::new();
        for _ in 0..30 {
            player.update(&idle, &mut physics, DT);
            physics.step();
        }

        Fixture {
            physics,
            scene,
            player,
            interactor: Interactor::new(),
            prompt: PromptPanel::new(),
            door_id,
        }
    }

    fn detect(f: &mut Fixture, input: &mut PlayerInput) {
        f.interactor.update(
            input,
            &f.player,
            &f.physics,
            &mut f.scene,
            &mut f.prompt,
        );
        f.prompt.update(DT);
    }

    #[test]
    fn test_door_in_view_acquires_target() {
        let mut f = fixture();
        let mut input = PlayerInput::new();

        detect(&mut f, &mut input);

        assert_eq!(f.interactor.current_target(), Some(f.door_id));
        assert!(f.prompt.is_visible());
        assert_eq!(f.prompt.text(), "(F) to Open");
    }

    #[test]
    fn test_looking_away_loses_target() {
        let mut f = fixture();
        let mut input = PlayerInput::new();
        detect(&mut f, &mut input);
        assert!(f.interactor.current_target().is_some());

        // Turn 180 degrees; nothing behind the player within reach
        input.add_look_delta(180.0 / f.player.stats.mouse_sensitivity, 0.0);
        f.player.update(&input, &mut f.physics, DT);
        f.physics.step();
        input.update(DT);

        detect(&mut f, &mut input);
        assert_eq!(f.interactor.current_target(), None);
        assert!(!f.prompt.is_visible());
    }

    #[test]
    fn test_door_beyond_reach_not_targeted() {
        let mut physics = PhysicsWorld::new();
        let floor = physics.add_rigid_body(presets::level_body(0.0, -0.5, 0.0));
        physics.add_collider(presets::level_collider(40.0, 0.5, 40.0), floor);

        let mut scene = Scene::new();
        scene.spawn_door(&mut physics, "far door", Vec3::new(-0.5, 0.0, -20.0), 0.0);

        let mut player =
            FirstPersonController::new(PlayerStats::standard(), &mut physics, Vec3::ZERO);
        let idle = PlayerInput::new();
        for _ in 0..30 {
            player.update(&idle, &mut physics, DT);
            physics.step();
        }

        let mut interactor = Interactor::new();
        let mut prompt = PromptPanel::new();
        let mut input = PlayerInput::new();
        interactor.update(&mut input, &player, &physics, &mut scene, &mut prompt);

        assert_eq!(interactor.current_target(), None);
        assert!(!prompt.is_visible());
    }

    #[test]
    fn test_interact_press_opens_door() {
        let mut f = fixture();
        let mut input = PlayerInput::new();
        detect(&mut f, &mut input);

        input.press(Action::Interact);
        detect(&mut f, &mut input);

        assert!(f.scene.doors()[f.door_id as usize].is_open());
    }

    #[test]
    fn test_interact_rejected_while_door_swings() {
        let mut f = fixture();
        let mut input = PlayerInput::new();
        detect(&mut f, &mut input);

        input.press(Action::Interact);
        detect(&mut f, &mut input);
        f.scene.update(&mut f.physics, DT);
        input.update(DT);
        input.release(Action::Interact);

        // Second press lands mid-swing and must not toggle the door back
        input.press(Action::Interact);
        detect(&mut f, &mut input);
        assert!(f.scene.doors()[f.door_id as usize].is_open());
        assert!(f.scene.doors()[f.door_id as usize].is_animating());
    }

    #[test]
    fn test_interact_without_target_is_ignored() {
        let mut f = fixture();
        let mut input = PlayerInput::new();

        // Turn away before pressing
        input.add_look_delta(180.0 / f.player.stats.mouse_sensitivity, 0.0);
        f.player.update(&input, &mut f.physics, DT);
        f.physics.step();
        input.update(DT);

        input.press(Action::Interact);
        detect(&mut f, &mut input);

        assert!(!f.scene.doors()[f.door_id as usize].is_open());
    }

    #[test]
    fn test_prompt_refreshes_after_door_opens() {
        let mut f = fixture();
        let mut input = PlayerInput::new();
        detect(&mut f, &mut input);
        assert_eq!(f.prompt.text(), "(F) to Open");

        input.press(Action::Interact);
        detect(&mut f, &mut input);

        // Let the swap animation finish
        for _ in 0..30 {
            f.prompt.update(DT);
        }
        assert_eq!(f.prompt.text(), "(F) to Close");
    }
}
