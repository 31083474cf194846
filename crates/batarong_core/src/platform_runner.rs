// crates/batarong_core/src/platform_runner.rs

use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use batarong_ecs::World;
use batarong_shared::{InputState, SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::app::App;
use crate::engine_loop::EngineLoop;
use crate::input::poller::InputPoller;
use crate::inspector;
use crate::renderer::Renderer;

/// Owns App and runs the platform (winit) event loop.
/// This isolates OS interaction from the engine core.
pub struct PlatformRunner {
    app: App,
}

impl PlatformRunner {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    pub fn start(mut self) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let window = WindowBuilder::new()
            .with_title(&self.app.window_title)
            .with_inner_size(winit::dpi::LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(false)
            .build(&event_loop)
            .expect("Failed to create window");

        // GUI + renderer initialization
        self.app.gui.init(&window);
        let mut renderer = pollster::block_on(Renderer::new(&window));

        // World + game initialization. The game registers its components and
        // spawns the scene during on_load.
        let mut world = World::new();
        self.app.game.on_load(&mut world, &self.app.registry);

        // Engine loop + input poller
        const SIM_DT: f32 = 1.0 / 30.0;
        let mut engine_loop = EngineLoop::new(SIM_DT);
        let mut input_poller = InputPoller::new();

        event_loop
            .run(move |event, elwt| {
                elwt.set_control_flow(ControlFlow::Poll);

                // Give GUI first shot at all window events (for focus, etc.).
                if let Event::WindowEvent {
                    event: ref w_event, ..
                } = event
                {
                    self.app.gui.handle_event(&window, w_event);
                }

                match event {
                    Event::WindowEvent {
                        event: win_event, ..
                    } => {
                        match win_event {
                            WindowEvent::CloseRequested => elwt.exit(),

                            // Low-level input: delegate to InputPoller unless GUI owns keyboard.
                            WindowEvent::KeyboardInput { .. } => {
                                if !self.app.gui.wants_keyboard_input() {
                                    input_poller.handle_event(&win_event);
                                }
                            }

                            WindowEvent::Resized(size) => renderer.resize(size),

                            WindowEvent::RedrawRequested => {
                                // --- RENDER PHASE ---

                                let mut inspector_open = self.app.gui.show_inspector;
                                let (primitives, textures_delta) =
                                    self.app.gui.draw(&window, |ctx| {
                                        // Game overlays: HUD, modal screens, dialog.
                                        self.app.game.draw_overlay(ctx, &world);

                                        inspector::show(
                                            ctx,
                                            &self.app.registry,
                                            &self.app.last_input_state,
                                            &world,
                                            &mut inspector_open,
                                        );
                                    });
                                self.app.gui.show_inspector = inspector_open;

                                match renderer.render(
                                    &world,
                                    Some((&self.app.gui.ctx, &primitives, &textures_delta)),
                                ) {
                                    Ok(()) => {}
                                    Err(wgpu::SurfaceError::Lost)
                                    | Err(wgpu::SurfaceError::Outdated) => {
                                        tracing::warn!(
                                            "surface lost/outdated; reconfiguring swapchain"
                                        );
                                        renderer.resize(window.inner_size());
                                    }
                                    Err(wgpu::SurfaceError::OutOfMemory) => {
                                        tracing::error!("out of GPU memory; exiting");
                                        elwt.exit();
                                    }
                                    Err(wgpu::SurfaceError::Timeout) => {
                                        tracing::warn!("surface timeout; skipping frame");
                                    }
                                }
                            }

                            _ => {}
                        }
                    }

                    Event::AboutToWait => {
                        // --- UPDATE PHASE ---

                        // 1) Time step
                        let frame_dt = engine_loop.tick_timer();

                        // 2) Input resolution: raw keys -> digital action mask
                        let input_state = input_poller.resolve(&self.app.input_map);

                        // 3) Engine internal actions (Inspector toggle), edge-triggered.
                        self.handle_engine_actions(&input_state);

                        // 4) Fixed-step simulation.
                        engine_loop.update_simulation(
                            frame_dt,
                            &mut world,
                            self.app.game.as_mut(),
                            input_state,
                        );

                        // 5) Store for next-frame edge detection and request redraw.
                        self.app.last_input_state = input_state;
                        window.request_redraw();
                    }

                    _ => {}
                }
            })
            .expect("Event loop terminated abnormally");
    }

    /// Edge-triggered engine actions, split out to keep the main loop readable.
    fn handle_engine_actions(&mut self, current_state: &InputState) {
        let toggle_now = current_state.is_active(self.app.engine_toggle_inspector)
            && !self
                .app
                .last_input_state
                .is_active(self.app.engine_toggle_inspector);

        if toggle_now {
            self.app.gui.toggle_inspector();
        }
    }
}
