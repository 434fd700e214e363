//! Shader composition module
//!
//! Provides the layered shader-source composer and the backend seams it
//! drives (compilation service, program handle).

// Module declarations
pub mod builtins;
pub mod compiler;
pub mod effect;
pub mod stage;

#[cfg(test)]
pub mod mock_compiler;

// Re-exports
pub use compiler::{ShaderCompiler, ShaderProgram};
pub use effect::{
    Effect, EffectDesc, LayerDesc, SequenceSelect, DEFAULT_MAX_CLIP_PLANES, DEFAULT_MAX_JOINTS,
    DEFAULT_MAX_LIGHTS, DEFAULT_VERSION,
};
pub use stage::{ShaderLanguage, ShaderStage, StageSources};
