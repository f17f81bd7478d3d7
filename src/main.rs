use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Fullscreen, WindowBuilder},
};

mod app;
mod core;
mod engine;
mod game;

use app::App;
use engine::input::Gamepads;
use engine::settings::{Settings, DEFAULT_PATH};

/// How long to sleep between iterations when nothing else wakes the loop
const FRAME_INTERVAL: Duration = Duration::from_millis(8);

fn main() -> Result<()> {
    // Info by default, RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Pong...");

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));
    let settings = Settings::load_or_default(&settings_path);

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let mut builder = WindowBuilder::new()
        .with_title("Pong")
        .with_inner_size(winit::dpi::LogicalSize::new(
            settings.window.width,
            settings.window.height,
        ))
        .with_resizable(true);
    if settings.window.fullscreen {
        builder = builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }
    let window = builder.build(&event_loop)?;

    info!("Window created successfully");

    let mut gamepads = Gamepads::new();
    let mut app = App::new(settings, settings_path);
    let mut title = String::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::KeyboardInput { event: key, .. } => {
                    if let PhysicalKey::Code(code) = key.physical_key {
                        app.on_key(code, key.state, key.repeat);
                    }
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    app.on_mouse(button, state);
                }
                _ => {}
            },
            Event::AboutToWait => {
                for gamepad_event in gamepads.poll() {
                    app.on_gamepad(&gamepad_event);
                }
                app.frame();

                let next = app.title();
                if next != title {
                    window.set_title(&next);
                    title = next;
                }

                elwt.set_control_flow(ControlFlow::WaitUntil(Instant::now() + FRAME_INTERVAL));
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
