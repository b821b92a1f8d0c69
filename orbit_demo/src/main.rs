//! Orbit Demo
//!
//! Headless run of the simulation core: a swarm of bodies seeded on roughly
//! circular orbits around the attractor, four point lights, and a renderer
//! that only counts what it is handed. Bodies that touch freeze in place,
//! so the moving population shrinks as the run goes on.
//!
//! Usage: `orbit_demo [config.toml|config.ron] [frames]`
//!
//! A config path that does not exist is created with the default settings.

use lite_engine::foundation::logging;
use lite_engine::prelude::*;
use rand::Rng;
use thiserror::Error;

const DEFAULT_FRAMES: u64 = 1200;
const NUM_BODIES: usize = 200;
const MIN_ORBIT_RADIUS: f32 = 60.0;
const MAX_ORBIT_RADIUS: f32 = 220.0;
const NUM_LIGHTS: usize = 4;
const BODY_RADIUS: f32 = 0.6;
const STATS_INTERVAL: u64 = 120;
const ATTRACTOR_MARKER: &str = "attractor";

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("invalid frame count '{0}'")]
    FrameCount(String),
}

/// Renderer that draws nothing and keeps per-frame counts
///
/// It still evaluates point-light falloff per drawn entity, which is the
/// per-object lighting input a real backend would upload.
#[derive(Default)]
struct HeadlessRenderer {
    entities_drawn: u64,
    debug_shapes_drawn: u64,
    light_received: f64,
}

impl RenderSubmit for HeadlessRenderer {
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
        self.entities_drawn += 1;

        let position = registry.transforms[entity].position;
        let received: f32 = registry
            .query(ComponentKinds::POINT_LIGHT | ComponentKinds::TRANSFORM)
            .map(|light| {
                let distance = (registry.transforms[light].position - position).magnitude();
                registry.lights[light].attenuation(distance)
            })
            .sum();
        self.light_received += f64::from(received);
    }

    fn draw_debug(&mut self, debug: &DebugDrawSystem, _view: &Mat4, _projection: &Mat4) {
        self.debug_shapes_drawn += debug.shape_count() as u64;
    }
}

struct OrbitApp {
    frame_limit: u64,
    bodies: Vec<EntityId>,
    total_contacts: usize,
}

impl OrbitApp {
    fn new(frame_limit: u64) -> Self {
        Self {
            frame_limit,
            bodies: Vec::with_capacity(NUM_BODIES),
            total_contacts: 0,
        }
    }

    /// Speed of a circular orbit of `radius` under the engine's integrator
    ///
    /// Velocity gains the full acceleration each step while position moves
    /// by `v·dt`, so the balance point is `v² = G·M / (r·dt)`.
    fn orbital_speed(physics: &PhysicsConfig, radius: f32) -> f32 {
        let pull = physics.gravitational_constant * physics.attractor_mass;
        (pull / (radius * physics.fixed_timestep)).sqrt()
    }

    fn spawn_bodies(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let mut rng = rand::thread_rng();
        let physics = engine.physics().config().clone();
        let mesh = MeshHandle::new(GpuHandle(1));
        let material = Material::new(GpuHandle(1), GpuHandle(2), GpuHandle(3)).with_shininess(64.0);

        for _ in 0..NUM_BODIES {
            let radius = rng.gen_range(MIN_ORBIT_RADIUS..MAX_ORBIT_RADIUS);
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let height = rng.gen_range(-5.0..5.0);
            let offset = Vec3::new(radius * angle.cos(), height, radius * angle.sin());
            let position = physics.attractor_position + offset;

            // Tangent in the XZ plane, with a little spread so orbits cross
            let tangent = Vec3::new(-angle.sin(), 0.0, angle.cos());
            let speed = Self::orbital_speed(&physics, radius) * rng.gen_range(0.9..1.1);
            let mass = rng.gen_range(0.5..5.0);

            let entity = engine.registry.try_register_entity()?;
            engine.registry.transforms[entity] =
                TransformComponent::from_position(position).with_uniform_scale(BODY_RADIUS);
            engine.registry.bodies[entity] = KinematicBody::new(position, tangent * speed, mass);
            engine.registry.colliders[entity] = ColliderSphere::new(BODY_RADIUS);
            engine.registry.meshes[entity] = mesh;
            engine.registry.materials[entity] = material;
            self.bodies.push(entity);
        }
        Ok(())
    }

    fn spawn_lights(engine: &mut Engine) {
        let lamp = MeshHandle::new(GpuHandle(2)).wireframe();
        let positions = [
            Vec3::new(0.7, 0.2, 2.0),
            Vec3::new(2.3, -3.3, -4.0),
            Vec3::new(-4.0, 2.0, -12.0),
            Vec3::new(0.0, 0.0, -3.0),
        ];
        for position in positions {
            let light = PointLight::new(Vec3::new(0.8, 0.8, 0.8), Vec3::new(1.0, 1.0, 1.0))
                .with_attenuation(1.0, 0.0014, 0.000_007);
            let entity = engine.registry.spawn_point_light(position * 40.0, light);
            engine.registry.meshes[entity] = lamp;
        }
    }

    /// Solid marker at the attractor, kept until cleanup
    fn mark_attractor(engine: &mut Engine) {
        let physics = engine.physics().config();
        let marker = DebugShape::Sphere {
            center: physics.attractor_position,
            radius: physics.attractor_mass.cbrt() * 0.25,
            color: Vec4::new(1.0, 0.8, 0.2, 1.0),
            duration: 0.0,
            wireframe: false,
        };
        engine.debug_draw.draw_persistent(ATTRACTOR_MARKER, marker);
    }

    fn moving_bodies(&self, engine: &Engine) -> usize {
        self.bodies
            .iter()
            .filter(|&&entity| !engine.registry.bodies[entity].is_frozen())
            .count()
    }
}

impl Application for OrbitApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        self.spawn_bodies(engine)?;
        Self::spawn_lights(engine);
        Self::mark_attractor(engine);
        log::info!(
            "Spawned {} bodies and {NUM_LIGHTS} lights ({} of {} entity slots)",
            self.bodies.len(),
            engine.registry.entity_count(),
            engine.registry.capacity()
        );
        Ok(())
    }

    fn poll_input(&mut self, _engine: &Engine) -> FrameInput {
        // Slow automatic pan so the camera sweeps the scene
        FrameInput {
            look_dx: 0.5,
            ..FrameInput::default()
        }
    }

    fn update(&mut self, engine: &mut Engine, frame: &FrameReport) -> Result<(), AppError> {
        self.total_contacts += frame.physics.collisions.len();
        if frame.physics.frozen > 0 {
            log::debug!("Frame {}: {} bodies froze", frame.frame, frame.physics.frozen);
        }

        if frame.frame % STATS_INTERVAL == 0 {
            log::info!(
                "Frame {}: {} / {} bodies moving, octree {} nodes ({} leaves), {:.1} fps",
                frame.frame,
                self.moving_bodies(engine),
                self.bodies.len(),
                frame.octree_nodes,
                frame.octree_leaves,
                engine.timer().current_fps()
            );
        }

        if frame.frame >= self.frame_limit {
            engine.quit();
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        engine.debug_draw.clear_persistent(ATTRACTOR_MARKER);
        let kinetic_energy: f32 = self
            .bodies
            .iter()
            .map(|&entity| engine.registry.bodies[entity].kinetic_energy())
            .sum();
        log::info!(
            "Finished after {} physics steps: {} / {} bodies still moving, {} contact reports, \
             total kinetic energy {:.1}",
            engine.physics().step_count(),
            self.moving_bodies(engine),
            self.bodies.len(),
            self.total_contacts,
            kinetic_energy
        );
    }
}

fn main() -> Result<(), DemoError> {
    let mut args = std::env::args().skip(1);

    // A config path that does not exist yet is seeded with the defaults
    let mut written_to = None;
    let mut config = match args.next() {
        Some(path) if std::path::Path::new(&path).exists() => {
            SimulationConfig::load_from_file(&path)?
        }
        Some(path) => {
            let config = SimulationConfig::default();
            config.save_to_file(&path)?;
            written_to = Some(path);
            config
        }
        None => SimulationConfig::default(),
    };
    let frame_limit = match args.next() {
        Some(raw) => raw.parse().map_err(|_| DemoError::FrameCount(raw))?,
        None => DEFAULT_FRAMES,
    };

    logging::init_with_level(&config.engine.log_level);
    log::info!("=== Orbit Demo ({frame_limit} frames) ===");
    if let Some(path) = written_to {
        log::info!("Wrote default configuration to {path}");
    }

    // Room for the swarm, the lights and the null slot
    let needed = NUM_BODIES + NUM_LIGHTS + 1;
    if config.engine.max_entities < needed {
        log::warn!("max_entities {} too small, raising to {needed}", config.engine.max_entities);
        config.engine = config.engine.with_max_entities(needed);
    }

    let mut engine = Engine::new(config)?;
    let mut app = OrbitApp::new(frame_limit);
    let mut renderer = HeadlessRenderer::default();
    engine.run(&mut app, &mut renderer)?;

    #[allow(clippy::cast_precision_loss)]
    let mean_light = if renderer.entities_drawn > 0 {
        renderer.light_received / renderer.entities_drawn as f64
    } else {
        0.0
    };
    log::info!(
        "Renderer received {} entity draws and {} debug shapes, mean light falloff {:.4}",
        renderer.entities_drawn,
        renderer.debug_shapes_drawn,
        mean_light
    );
    Ok(())
}
