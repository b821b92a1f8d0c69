//! Core engine implementation
//!
//! [`Engine`] is the simulation context: it owns the component registry,
//! the physics system, the frame timer, the camera and the debug-draw
//! recorder, and runs them in a fixed order once per frame.

use crate::{
    application::Application,
    config::ConfigError,
    core::config::SimulationConfig,
    debug::{CollisionDebugVisualizer, DebugDrawSystem},
    ecs::{ComponentKinds, ComponentRegistry},
    foundation::{
        math::Vec4,
        time::{SystemClock, TimeSource, Timer},
    },
    physics::{PhysicsSystem, StepReport},
    render::{Camera, MovementInput, RenderSubmit},
};
use thiserror::Error;

/// Wireframe color of octree cells in the debug overlay
fn octree_color() -> Vec4 {
    Vec4::new(0.0, 0.8, 0.8, 0.1)
}

/// Input sampled for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Horizontal cursor travel since the previous frame
    pub look_dx: f32,
    /// Vertical cursor travel since the previous frame
    pub look_dy: f32,
    /// Free-fly movement axes
    pub movement: MovementInput,
}

/// Summary of one finished frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Frame number, starting at 1
    pub frame: u64,
    /// Wall-clock seconds since the previous frame
    pub delta_time: f32,
    /// What the physics step did
    pub physics: StepReport,
    /// Nodes in this frame's octree
    pub octree_nodes: usize,
    /// Leaves in this frame's octree
    pub octree_leaves: usize,
    /// Entities handed to the renderer
    pub drawn: usize,
}

/// Main engine struct
///
/// The engine coordinates all subsystems and manages the main loop.
pub struct Engine {
    /// Every entity and component in the simulation
    pub registry: ComponentRegistry,

    /// Viewpoint used for rendering
    pub camera: Camera,

    /// Debug shapes recorded this frame
    pub debug_draw: DebugDrawSystem,

    physics: PhysicsSystem,
    collision_debug: CollisionDebugVisualizer,
    timer: Timer,
    config: SimulationConfig,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: SimulationConfig) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");
        config.validate()?;

        let capacity = u32::try_from(config.engine.max_entities)
            .map_err(|_| {
                EngineError::InitializationFailed("max_entities does not fit in u32".to_string())
            })?;

        let mut debug_draw = DebugDrawSystem::new();
        debug_draw.enabled = config.engine.debug_draw_octree || config.engine.debug_draw_colliders;

        Ok(Self {
            registry: ComponentRegistry::with_capacity(capacity),
            camera: Camera::from_config(&config.camera),
            debug_draw,
            physics: PhysicsSystem::new(config.physics.clone(), config.octree.clone()),
            collision_debug: CollisionDebugVisualizer::new(),
            timer: Timer::new(),
            config,
            running: true,
        })
    }

    /// Run the main loop against the system clock until the application quits
    pub fn run<A: Application, R: RenderSubmit>(
        &mut self,
        app: &mut A,
        renderer: &mut R,
    ) -> Result<(), EngineError> {
        self.run_with_clock(app, renderer, &SystemClock::new())
    }

    /// Run the main loop against an arbitrary time source
    ///
    /// [`Application::cleanup`] runs once the loop ends, whether the
    /// application quit or its update failed.
    pub fn run_with_clock<A, R, C>(
        &mut self,
        app: &mut A,
        renderer: &mut R,
        clock: &C,
    ) -> Result<(), EngineError>
    where
        A: Application,
        R: RenderSubmit,
        C: TimeSource,
    {
        app.initialize(self)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {e}")))?;

        log::info!("Starting main loop with {} entities", self.registry.entity_count());

        let outcome = self.main_loop(app, renderer, clock);
        if let Err(e) = &outcome {
            log::error!("Main loop stopped: {e}");
        }

        app.cleanup(self);

        log::info!(
            "Engine shutdown complete after {} frames ({:.1} fps average)",
            self.timer.frame_count(),
            self.timer.average_fps()
        );
        outcome
    }

    fn main_loop<A, R, C>(
        &mut self,
        app: &mut A,
        renderer: &mut R,
        clock: &C,
    ) -> Result<(), EngineError>
    where
        A: Application,
        R: RenderSubmit,
        C: TimeSource,
    {
        while self.is_running() {
            let input = app.poll_input(self);
            let report = self.run_frame(clock.now_seconds(), &input, renderer);

            app.update(self, &report)
                .map_err(|e| EngineError::ApplicationError(format!("App update: {e}")))?;
        }
        Ok(())
    }

    /// Run one frame: time, camera, physics, debug overlay, render
    ///
    /// `now_seconds` is a sample of a monotonic clock. The frame's octree is
    /// dropped before this returns.
    ///
    /// # Panics
    ///
    /// Panics if an enabled body has non-positive mass.
    pub fn run_frame<R: RenderSubmit>(
        &mut self,
        now_seconds: f64,
        input: &FrameInput,
        renderer: &mut R,
    ) -> FrameReport {
        let delta_time = self.timer.tick(now_seconds);

        self.camera.apply_look(input.look_dx, input.look_dy, delta_time);
        self.camera.apply_movement(input.movement, delta_time);

        let (octree, physics) = self.physics.step(&mut self.registry);

        self.debug_draw.update(delta_time);
        if self.config.engine.debug_draw_octree {
            octree.draw(&mut self.debug_draw, octree_color());
        }
        if self.config.engine.debug_draw_colliders {
            self.collision_debug.draw_colliders(&self.registry, &mut self.debug_draw);
            self.collision_debug
                .draw_contacts(&self.registry, &physics.collisions, &mut self.debug_draw);
        }

        let view = self.camera.view_matrix();
        let projection = self.camera.projection(renderer.aspect_ratio());

        let mut drawn = 0;
        for entity in self.registry.query(ComponentKinds::TRANSFORM | ComponentKinds::MESH) {
            renderer.draw_entity(&self.registry, entity, &view, &projection);
            drawn += 1;
        }
        renderer.draw_debug(&self.debug_draw, &view, &projection);

        let report = FrameReport {
            frame: self.timer.frame_count(),
            delta_time,
            octree_nodes: octree.node_count(),
            octree_leaves: octree.leaf_count(),
            physics,
            drawn,
        };
        drop(octree);

        log::trace!("Frame {} done in {:.4}s, {} drawn", report.frame, delta_time, drawn);
        report
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop will run another frame
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The configuration the engine was built from
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The physics system
    pub fn physics(&self) -> &PhysicsSystem {
        &self.physics
    }

    /// Frame timing
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Get the current frame delta time
    pub fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Configuration rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}
