// Engine modules: game loop, input, physics, tweening

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod tween;
