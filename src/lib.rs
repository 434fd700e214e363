/*!
# Nebula3D Shader FX

Layered GLSL shader-source composition for the Nebula3D engine.

This crate provides the [`shader::Effect`] composer: callers append named
"layers" of GLSL snippets (per-stage body statements plus uniform and
attribute declarations), and the composer concatenates them into complete
per-stage shader sources which it submits to the engine's shader compiler.

## Architecture

- **Effect**: the layered shader-source composer (the core of this crate)
- **ShaderCompiler**: backend seam that turns stage sources into a program
- **ShaderProgram**: opaque compiled-program handle trait
- **ShaderTarget**: scene-graph seam that receives a composed program

Backend implementations (Vulkan, OpenGL, etc.) provide concrete types for
the compiler and program traits; scene-graph nodes implement the target
trait. This crate only manages the text-composition state.
*/

// Internal modules
mod error;
pub mod log;
pub mod scene;
pub mod shader;

// Main nebula3d namespace module
pub mod nebula3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            reset_logger, set_logger, DefaultLogger, LogEntry, LogSeverity, Logger,
        };
        // Note: engine_* macros are NOT re-exported here - they live at the crate root
    }

    // Shader sub-module with the composer and backend seams
    pub mod shader {
        pub use crate::shader::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}
