//! Scene attachment module
//!
//! Provides the seam through which composed shader programs reach the host
//! application's scene graph. Scene management itself lives in the host.

mod shader_target;

pub use shader_target::ShaderTarget;
