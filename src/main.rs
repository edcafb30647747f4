use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use lights::cli::Cli;
use lights::clock::{Clock, Rotation};
use lights::renderer::Renderer;
use lights::replay::QuadBatcher;
use lights::scene::Scene;

// === Constants ===

const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 480;
const WINDOW_TITLE: &str = "lights";

// === Application ===

struct App {
    scene: Scene,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    clock: Clock,
    rotation: Rotation,
}

impl App {
    fn new(scene: Scene) -> Self {
        Self {
            scene,
            window: None,
            renderer: None,
            clock: Clock::new(),
            rotation: Rotation::new(),
        }
    }

    /// Re-parses the scene file and swaps in the new mesh. Synchronous on
    /// the render thread; the frame waits for the file read.
    fn reload_scene(&mut self) {
        self.scene.reload();
        if let Some(renderer) = &mut self.renderer {
            let batch = QuadBatcher::batch(self.scene.records());
            renderer.upload_scene(batch.vertices());
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                    .with_resizable(false),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    std::process::exit(1);
                }
            };

            let batch = QuadBatcher::batch(self.scene.records());
            let renderer = match pollster::block_on(Renderer::new(
                window.clone(),
                batch.vertices(),
            )) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {}", e);
                    std::process::exit(1);
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Space),
                        ..
                    },
                ..
            } => self.reload_scene(),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let delta_ms = self.clock.tick();
                self.rotation.advance(delta_ms);

                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.render(self.rotation.degrees()) {
                        eprintln!("Render error: {}", e);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let scene = Scene::load(&cli.scene);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(scene);

    println!("lights - Escape to quit, Space to reload the scene file");
    event_loop.run_app(&mut app)?;

    Ok(())
}
