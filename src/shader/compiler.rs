/// ShaderCompiler trait - the external shader compilation service seam.

use std::sync::Arc;

use crate::error::Result;
use crate::shader::stage::{ShaderLanguage, StageSources};

/// Opaque compiled-program handle
///
/// Implemented by backend-specific program types (e.g. a GL program object
/// or a Vulkan pipeline-library wrapper). The program is destroyed when the
/// last handle is dropped.
pub trait ShaderProgram: Send + Sync {
    // No public methods, programs are consumed by scene-graph targets
}

/// Shader compilation service trait
///
/// Takes a shading-language tag and the five stage source strings and
/// returns a compiled, linked program handle. Empty-string stages mean
/// "stage not present" and must be skipped by the backend.
///
/// # Errors
///
/// Compilation or link failures are reported as
/// [`Error::BackendError`](crate::nebula3d::Error::BackendError) carrying
/// the language's diagnostic text; the composer propagates them unchanged.
pub trait ShaderCompiler: Send + Sync {
    /// Compile and link a program from the given stage sources
    fn compile(
        &mut self,
        language: ShaderLanguage,
        sources: &StageSources,
    ) -> Result<Arc<dyn ShaderProgram>>;
}
