/// ShaderTarget trait - scene-graph attachment seam.

use std::sync::Arc;

use crate::shader::ShaderProgram;

/// Renderable target that can receive a composed shader program
///
/// Implemented by the host application's scene-graph node types. Attaching
/// is idempotent: re-applying overwrites the previously attached program on
/// this target. The program handle's lifetime is owned by the target(s) it
/// is attached to, independent of the composer that produced it.
pub trait ShaderTarget: Send + Sync {
    /// Attach a program to this target for rendering
    fn set_shader(&mut self, program: Arc<dyn ShaderProgram>);
}
