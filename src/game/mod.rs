// Game layer
//
// Gameplay built on top of the engine:
// - `player`: the first-person character
// - `interaction`: aim-and-press object interaction
// - `scene`: level layout and the interactable registry

pub mod interaction;
pub mod player;
pub mod scene;

use glam::Vec3;

use crate::engine::input::PlayerInput;
use crate::engine::physics::PhysicsWorld;

use interaction::{Interactor, PromptPanel};
use player::{FirstPersonController, PlayerStats};
use scene::Scene;

/// The whole running game: physics, level, player, and interaction state
pub struct Game {
    physics: PhysicsWorld,
    scene: Scene,
    player: FirstPersonController,
    interactor: Interactor,
    prompt: PromptPanel,
}

impl Game {
    /// Build the demo level and spawn the player in it
    pub fn new() -> Self {
        let mut physics = PhysicsWorld::new();
        let scene = Scene::demo_level(&mut physics);

        // Spawn in the middle of the room, facing the hall door
        let spawn = Vec3::new(0.0, 0.0, 3.0);
        let player = FirstPersonController::new(PlayerStats::standard(), &mut physics, spawn);

        Self {
            physics,
            scene,
            player,
            interactor: Interactor::new(),
            prompt: PromptPanel::new(),
        }
    }

    /// Run one fixed gameplay step
    ///
    /// Order matters: the player and the doors set their kinematic targets,
    /// the physics step applies them and refreshes the query pipeline, and
    /// only then does the interaction ray see the world as it is this step.
    pub fn fixed_update(&mut self, input: &mut PlayerInput, dt: f32) {
        self.player.update(input, &mut self.physics, dt);
        self.scene.update(&mut self.physics, dt);
        self.physics.step();
        self.interactor.update(
            input,
            &self.player,
            &self.physics,
            &mut self.scene,
            &mut self.prompt,
        );
        self.prompt.update(dt);
    }

    pub fn player(&self) -> &FirstPersonController {
        &self.player
    }

    pub fn prompt(&self) -> &PromptPanel {
        &self.prompt
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Action;

    const DT: f32 = 1.0 / 60.0;

    fn run_idle(game: &mut Game, input: &mut PlayerInput, frames: u32) {
        for _ in 0..frames {
            game.fixed_update(input, DT);
            input.update(DT);
        }
    }

    #[test]
    fn test_player_lands_on_demo_floor() {
        let mut game = Game::new();
        let mut input = PlayerInput::new();
        run_idle(&mut game, &mut input, 60);

        assert!(game.player().is_grounded());
        let feet = game.player().feet_position(game.physics()).unwrap();
        assert!(feet.y.abs() < 0.1);
    }

    #[test]
    fn test_walk_to_door_and_open_it() {
        let mut game = Game::new();
        let mut input = PlayerInput::new();
        run_idle(&mut game, &mut input, 30);

        // Walk toward the hall door at z = -5 until the prompt appears
        input.press(Action::MoveForward);
        let mut saw_prompt = false;
        for _ in 0..600 {
            game.fixed_update(&mut input, DT);
            input.update(DT);
            if game.prompt().is_visible() {
                saw_prompt = true;
                break;
            }
        }
        assert!(saw_prompt, "walking at the door should raise its prompt");
        assert_eq!(game.prompt().text(), "(F) to Open");
        input.release(Action::MoveForward);

        input.press(Action::Interact);
        game.fixed_update(&mut input, DT);
        input.update(DT);

        assert!(game.scene().doors()[0].is_open());
    }

    #[test]
    fn test_prompt_hidden_away_from_doors() {
        let mut game = Game::new();
        let mut input = PlayerInput::new();
        run_idle(&mut game, &mut input, 60);

        // Spawn pose looks at the hall door wall from 8 units away, which is
        // beyond interaction reach
        assert!(!game.prompt().is_visible());
    }
}
