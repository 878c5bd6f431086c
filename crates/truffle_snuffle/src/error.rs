//! Game-level errors

use thiserror::Error;
use truffle_engine::assets::ModelError;
use truffle_engine::config::ConfigError;

/// Errors that can stop the game from starting
#[derive(Error, Debug)]
pub enum GameError {
    /// Config file could not be read or written
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A model's bounds could not be derived
    #[error("Model error for {object}: {source}")]
    Model {
        /// Which game object failed
        object: &'static str,
        /// Underlying cause
        source: ModelError,
    },
}
