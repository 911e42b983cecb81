use anyhow::Result;
use clap::Parser;
use std::io::{BufWriter, Write};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

use trail_walker::cli::Cli;
use trail_walker::core::{Clock, FpsCounter, JsonLinesSink, RenderSink, WinitController};
use trail_walker::headless::run_headless;
use trail_walker::loaders::{spawn_actor_load, spawn_scenery_load, PendingActor, PendingScenery};
use trail_walker::window::Window;
use trail_walker::World;

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

// === Application ===

struct App {
    window: Option<Window>,
    world: World,
    controller: WinitController,
    pending: PendingActor,
    scenery: PendingScenery,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    fn new(world: World, pending: PendingActor, scenery: PendingScenery) -> Self {
        Self {
            window: None,
            world,
            controller: WinitController::new(),
            pending,
            scenery,
            clock: Clock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }

    fn redraw(&mut self) {
        let frame = self.clock.tick();
        if let Some(fps) = self.fps.record(frame.delta) {
            log::info!("FPS: {:.1}", fps);
        }

        let Some(window) = self.window.as_mut() else {
            return;
        };

        if let Some(result) = self.pending.poll() {
            if let Some(actor) = self.world.receive_actor(result) {
                if let Err(e) = window.actor_ready(actor) {
                    log::error!("Render error: {:#}", e);
                }
            }
        }

        if let Some(model) = self.scenery.poll() {
            if let Err(e) = window.model_ready(&model) {
                log::error!("Render error: {:#}", e);
            }
        }

        let input = self.controller.input_state(self.world.actor().is_some());

        if let Some(state) = self.world.tick(&input) {
            if let Err(e) = window.submit(&state.to_uniform()) {
                log::error!("Render error: {:#}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let inner = match event_loop.create_window(
            WinitWindow::default_attributes()
                .with_title("Trail Walker")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let mut window = Window::new(inner);
        if let Err(e) = window.stage(&self.world.stage()) {
            log::error!("Failed to stage scene: {:#}", e);
        }
        self.window = Some(window);
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
            WindowEvent::KeyboardInput { .. } => self.controller.process_event(&event),
            WindowEvent::RedrawRequested => self.redraw(),
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
    let config = cli.scene_config()?;
    let pending = spawn_actor_load(cli.actor_source(), config.model_scale);
    let mut world = World::new(config, cli.mode)?;
    let scenery = spawn_scenery_load(world.config());

    if cli.headless {
        let script = cli.input_script()?;
        let stdout = std::io::stdout();
        let mut sink = JsonLinesSink::new(BufWriter::new(stdout.lock()));
        run_headless(&mut world, pending, scenery, &script, &mut sink)?;
        sink.into_inner().flush()?;
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(world, pending, scenery);

    log::info!("Trail Walker - Controls: arrows/WASD to walk, P toggles free roam, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
