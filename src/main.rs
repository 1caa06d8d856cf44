use anyhow::Result;
use log::{debug, info, warn};
use winit::{
    event::{DeviceEvent, Event, WindowEvent},
    event_loop::EventLoop,
    window::{CursorGrabMode, Window, WindowBuilder},
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager, PLAYER_PROFILE};
use game::Game;

/// Lock the cursor to the window for mouse-look; not every platform
/// supports `Locked`, so fall back to `Confined`.
fn grab_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(e) = grabbed {
        warn!("Failed to grab cursor: {}", e);
    }
    window.set_cursor_visible(false);
}

fn release_cursor(window: &Window) {
    if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
        warn!("Failed to release cursor: {}", e);
    }
    window.set_cursor_visible(true);
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Halls...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Halls")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");
    grab_cursor(&window);

    let mut input = InputManager::from_profile(PLAYER_PROFILE)?;
    let mut game_loop = GameLoop::new();
    let mut game = Game::new();

    // Main event loop
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                info!("Window resized to {:?}", physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { button, state, .. },
                ..
            } => {
                input.process_mouse_button(button, state);
            }
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta: (dx, dy) },
                ..
            } => {
                input.process_mouse_motion(dx, dy);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                window.request_redraw();
            }
            Event::AboutToWait => {
                if input.player().just_pressed(Action::Menu) {
                    game_loop.toggle_pause();
                    if game_loop.is_paused() {
                        release_cursor(&window);
                    } else {
                        grab_cursor(&window);
                    }
                }

                let updates = game_loop.begin_frame();
                for _ in 0..updates {
                    game.fixed_update(input.player_mut(), game_loop.fixed_timestep());
                }

                if game_loop.frame_count() % 600 == 0 {
                    debug!(
                        "{:.1} fps, {} fixed steps",
                        game_loop.fps(),
                        game_loop.step_count()
                    );
                }

                // Age buffers and clear per-frame state even while paused
                input.update(game_loop.frame_delta_time());

                window.request_redraw();
            }
            _ => {}
        }
    }).map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
