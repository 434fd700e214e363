/// Shader stage and stage-source bundle types.

/// One programmable stage of the graphics pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
    /// Geometry shader
    Geometry,
    /// Tessellation control shader
    TessControl,
    /// Tessellation evaluation shader
    TessEval,
}

impl ShaderStage {
    /// All five stages, in submission order
    pub const ALL: [ShaderStage; 5] = [
        ShaderStage::Vertex,
        ShaderStage::Fragment,
        ShaderStage::Geometry,
        ShaderStage::TessControl,
        ShaderStage::TessEval,
    ];
}

/// Shading language tag passed to the compilation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderLanguage {
    /// OpenGL Shading Language
    Glsl,
}

/// Complete per-stage source strings for one shader program
///
/// An empty string means "this stage is not present"; backends must skip
/// empty slots rather than compile them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageSources {
    pub vertex: String,
    pub fragment: String,
    pub geometry: String,
    pub tess_control: String,
    pub tess_eval: String,
}

impl StageSources {
    /// Get the source string for a stage
    pub fn get(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
            ShaderStage::Geometry => &self.geometry,
            ShaderStage::TessControl => &self.tess_control,
            ShaderStage::TessEval => &self.tess_eval,
        }
    }

    /// True if no stage has any source text
    pub fn is_empty(&self) -> bool {
        ShaderStage::ALL.iter().all(|stage| self.get(*stage).is_empty())
    }

    /// Number of stages with non-empty source text
    pub fn active_stage_count(&self) -> usize {
        ShaderStage::ALL
            .iter()
            .filter(|stage| !self.get(**stage).is_empty())
            .count()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
