//! Integration tests for complete frames
//!
//! Drives the engine through whole frames with a recording renderer and a
//! scripted clock, checking what the renderer observes.

use crate::application::{AppError, Application};
use crate::core::config::SimulationConfig;
use crate::debug::DebugDrawSystem;
use crate::ecs::components::{GpuHandle, Material, MeshHandle};
use crate::ecs::{ComponentRegistry, EntityId};
use crate::engine::{Engine, EngineError, FrameInput, FrameReport};
use crate::foundation::math::{Mat4, Vec3};
use crate::foundation::time::TimeSource;
use crate::render::{MovementInput, RenderSubmit};
use std::cell::Cell;

/// Renderer that remembers what it was asked to draw
#[derive(Default)]
struct RecordingRenderer {
    drawn: Vec<EntityId>,
    stale_matrices: usize,
    debug_shapes: Vec<usize>,
}

impl RenderSubmit for RecordingRenderer {
    fn aspect_ratio(&self) -> f32 {
        16.0 / 9.0
    }

    fn draw_entity(
        &mut self,
        registry: &ComponentRegistry,
        entity: EntityId,
        _view: &Mat4,
        _projection: &Mat4,
    ) {
        let transform = &registry.transforms[entity];
        let synced = transform.matrix == transform.to_matrix()
            && transform.position == registry.bodies[entity].position;
        if !synced {
            self.stale_matrices += 1;
        }
        self.drawn.push(entity);
    }

    fn draw_debug(&mut self, debug: &DebugDrawSystem, _view: &Mat4, _projection: &Mat4) {
        self.debug_shapes.push(debug.shapes().count());
    }
}

/// Clock that advances a fixed amount every time it is read
struct SteppingClock {
    now: Cell<f64>,
    step: f64,
}

impl TimeSource for SteppingClock {
    fn now_seconds(&self) -> f64 {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

struct CountdownApp {
    frames_left: u32,
    initialized: bool,
    cleaned_up: bool,
    reports: Vec<FrameReport>,
}

impl CountdownApp {
    fn new(frames: u32) -> Self {
        Self {
            frames_left: frames,
            initialized: false,
            cleaned_up: false,
            reports: Vec::new(),
        }
    }
}

impl Application for CountdownApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let entity = engine.registry.try_register_entity()?;
        engine.registry.transforms[entity] = crate::ecs::components::TransformComponent::identity();
        engine.registry.meshes[entity] = MeshHandle::new(GpuHandle(3));
        engine.registry.spawn_body(Vec3::new(120.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 9.0), 1.0, 0.5);
        self.initialized = true;
        Ok(())
    }

    fn poll_input(&mut self, _engine: &Engine) -> FrameInput {
        FrameInput {
            look_dx: 2.0,
            look_dy: 0.0,
            movement: MovementInput::new(0.0, 0.0, 1.0),
        }
    }

    fn update(&mut self, engine: &mut Engine, frame: &FrameReport) -> Result<(), AppError> {
        self.reports.push(frame.clone());
        self.frames_left -= 1;
        if self.frames_left == 0 {
            engine.quit();
        }
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        self.cleaned_up = true;
    }
}

/// Fails its update on the given frame
struct FailingApp {
    fail_on: u64,
    cleaned_up: bool,
}

impl Application for FailingApp {
    fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        Ok(())
    }

    fn update(&mut self, _engine: &mut Engine, frame: &FrameReport) -> Result<(), AppError> {
        if frame.frame == self.fail_on {
            return Err(AppError::Custom("scripted failure".to_string()));
        }
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        self.cleaned_up = true;
    }
}

fn small_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.engine.max_entities = 64;
    config.engine.debug_draw_octree = false;
    config.engine.debug_draw_colliders = false;
    config
}

fn attach_mesh(engine: &mut Engine, entity: EntityId) {
    engine.registry.meshes[entity] = MeshHandle::new(GpuHandle(1));
    engine.registry.materials[entity] = Material::new(GpuHandle(2), GpuHandle(4), GpuHandle(5));
}

#[test]
fn test_renderer_sees_synced_current_matrices() {
    let mut engine = Engine::new(small_config()).unwrap();
    for i in 1..=6u8 {
        let f = f32::from(i);
        let position = Vec3::new(f * 15.0, f, -f * 4.0);
        let entity = engine.registry.spawn_body(position, Vec3::new(0.0, 3.0, f), f, 0.25);
        attach_mesh(&mut engine, entity);
    }

    let mut renderer = RecordingRenderer::default();
    for frame in 0..4u8 {
        engine.run_frame(f64::from(frame) / 60.0, &FrameInput::default(), &mut renderer);
    }

    assert_eq!(renderer.drawn.len(), 24);
    assert_eq!(renderer.stale_matrices, 0);
}

#[test]
fn test_only_entities_with_mesh_are_drawn() {
    let mut engine = Engine::new(small_config()).unwrap();
    let visible = engine.registry.spawn_body(Vec3::new(30.0, 0.0, 0.0), Vec3::zeros(), 1.0, 0.5);
    let _invisible =
        engine.registry.spawn_body(Vec3::new(-30.0, 0.0, 0.0), Vec3::zeros(), 1.0, 0.5);
    attach_mesh(&mut engine, visible);

    let mut renderer = RecordingRenderer::default();
    let report = engine.run_frame(0.0, &FrameInput::default(), &mut renderer);

    assert_eq!(renderer.drawn, vec![visible]);
    assert_eq!(report.drawn, 1);
    assert_eq!(report.physics.integrated, 2);
}

#[test]
fn test_head_on_bodies_freeze_and_stay_put() {
    let mut engine = Engine::new(small_config()).unwrap();
    let a = engine
        .registry
        .spawn_body(Vec3::new(60.0, -1.5, 0.0), Vec3::new(0.0, 100.0, 0.0), 1.0, 1.0);
    let b = engine
        .registry
        .spawn_body(Vec3::new(60.0, 1.5, 0.0), Vec3::new(0.0, -100.0, 0.0), 1.0, 1.0);
    let mut renderer = RecordingRenderer::default();

    let first = engine.run_frame(0.0, &FrameInput::default(), &mut renderer);
    assert_eq!(first.physics.frozen, 2);
    assert_eq!(first.physics.collisions.len(), 1);

    let frozen_at = (engine.registry.bodies[a].position, engine.registry.bodies[b].position);
    for frame in 1..5u8 {
        let now = f64::from(frame) * 0.016;
        let report = engine.run_frame(now, &FrameInput::default(), &mut renderer);
        assert_eq!(report.physics.integrated, 0);
    }

    assert_eq!(engine.registry.bodies[a].position, frozen_at.0);
    assert_eq!(engine.registry.bodies[b].position, frozen_at.1);
    assert_eq!(engine.registry.bodies[a].velocity, Vec3::zeros());
    assert_eq!(engine.registry.transforms[b].position, frozen_at.1);
}

#[test]
fn test_octree_overlay_matches_frame_octree() {
    let mut config = small_config();
    config.engine.debug_draw_octree = true;
    config.octree.max_points_per_node = 2;
    let mut engine = Engine::new(config).unwrap();
    for i in 0..12u8 {
        let f = f32::from(i);
        let position = Vec3::new(20.0 + f * 7.0, f * 5.0 - 30.0, f * 3.0);
        engine.registry.spawn_body(position, Vec3::zeros(), 1.0, 0.1);
    }

    let mut renderer = RecordingRenderer::default();
    let report = engine.run_frame(0.0, &FrameInput::default(), &mut renderer);
    assert!(report.octree_nodes > 1);
    // Every split turns one leaf into eight
    assert_eq!(report.octree_leaves * 8, report.octree_nodes * 7 + 1);
    assert_eq!(renderer.debug_shapes, vec![report.octree_nodes]);

    // Last frame's cells expire before the next overlay is recorded
    let next = engine.run_frame(0.016, &FrameInput::default(), &mut renderer);
    assert_eq!(renderer.debug_shapes[1], next.octree_nodes);
}

#[test]
fn test_empty_world_still_draws_root_cell() {
    let mut config = small_config();
    config.engine.debug_draw_octree = true;
    let mut engine = Engine::new(config).unwrap();

    let mut renderer = RecordingRenderer::default();
    let report = engine.run_frame(0.0, &FrameInput::default(), &mut renderer);

    assert_eq!(report.octree_nodes, 1);
    assert_eq!(report.octree_leaves, 1);
    assert_eq!(renderer.debug_shapes, vec![1]);
}

#[test]
fn test_run_loop_drives_application_lifecycle() {
    let mut engine = Engine::new(small_config()).unwrap();
    let mut app = CountdownApp::new(5);
    let mut renderer = RecordingRenderer::default();
    let clock = SteppingClock {
        now: Cell::new(10.0),
        step: 0.02,
    };
    let start = engine.camera.position();

    engine.run_with_clock(&mut app, &mut renderer, &clock).unwrap();

    assert!(app.initialized && app.cleaned_up);
    assert!(!engine.is_running());
    assert_eq!(app.reports.len(), 5);
    assert_eq!(app.reports[0].delta_time, 0.0);
    assert!(app.reports[4].delta_time > 0.0);
    assert_eq!(app.reports.iter().map(|r| r.frame).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(engine.physics().step_count(), 5);
    // The mesh-only entity is drawn every frame; the body has no mesh
    assert_eq!(renderer.drawn.len(), 5);
    // Input moved and turned the camera using the wall-clock delta
    assert_ne!(engine.camera.position(), start);
    assert!(engine.camera.yaw() > 0.0);
}

#[test]
fn test_failed_update_still_cleans_up() {
    let mut engine = Engine::new(small_config()).unwrap();
    let mut app = FailingApp {
        fail_on: 3,
        cleaned_up: false,
    };
    let clock = SteppingClock {
        now: Cell::new(0.0),
        step: 0.02,
    };

    let result = engine.run_with_clock(&mut app, &mut RecordingRenderer::default(), &clock);

    assert!(matches!(result, Err(EngineError::ApplicationError(_))));
    assert!(app.cleaned_up);
    assert_eq!(engine.timer().frame_count(), 3);
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = small_config();
    config.physics.fixed_timestep = 0.0;
    assert!(matches!(Engine::new(config), Err(EngineError::Config(_))));
}

#[test]
fn test_registry_capacity_follows_config() {
    let engine = Engine::new(small_config()).unwrap();
    assert_eq!(engine.registry.capacity(), 64);
}
