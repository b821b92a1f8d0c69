//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError, FrameInput, FrameReport};
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to drive a simulation with [`Engine::run`].
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first frame. Spawn the initial entities here.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Gather input for the coming frame
    ///
    /// The default feeds no look or movement input.
    fn poll_input(&mut self, _engine: &Engine) -> FrameInput {
        FrameInput::default()
    }

    /// React to a finished frame
    ///
    /// Called after physics and rendering. Call [`Engine::quit`] to stop the loop.
    fn update(&mut self, engine: &mut Engine, frame: &FrameReport) -> Result<(), AppError>;

    /// Cleanup the application
    ///
    /// Called once after the loop exits, including when [`Application::update`] fails.
    fn cleanup(&mut self, _engine: &mut Engine) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Entity registration failed
    #[error("Entity error: {0}")]
    Entity(#[from] crate::ecs::EcsError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}
