//! The render loop shared by both demo binaries.

use log::{debug, info};

use crate::config::Config;
use crate::engine::Engine;
use crate::error::Result;
use crate::scene::Scene;
use crate::window::{FrameLimiter, InputState, Window, WindowEvent};

/// Opens the window and runs `scene` until the window closes or Escape is hit.
pub fn run(config: &Config, scene: Scene, capture_mouse: bool) -> Result<()> {
    let mut window = Window::new(&config.title, config.width, config.height)?;
    window.capture_mouse(capture_mouse);

    let mut engine = Engine::new(window.width(), window.height(), scene);
    let mut input = InputState::new();
    let mut frame_limiter = FrameLimiter::new(&window);

    info!(
        "starting {} at {}x{}, capped at {} fps",
        config.title, config.width, config.height, config.fps
    );

    loop {
        match window.poll_events(&mut input) {
            WindowEvent::Quit => break,
            WindowEvent::Resize(width, height) => {
                debug!("resized to {width}x{height}");
                window.resize(width, height)?;
                engine.resize(width, height);
            }
            WindowEvent::None => {}
        }

        let delta_ms = frame_limiter.wait_and_get_delta(&window);
        engine.update(&input, delta_ms as f32 / 1000.0);
        input.end_frame();

        engine.render();
        window.present(engine.frame_buffer())?;
    }

    info!("shutting down");
    Ok(())
}
