/// Layered shader-source composer.
///
/// An Effect accumulates ordered GLSL fragments per pipeline stage: body
/// statements that end up inside `main`, declaration fragments that appear
/// outside it, and one global uniform sequence shared by every stage. Each
/// mutation rebuilds the full source text of every non-empty stage and
/// submits the five stage strings to the shader compilation backend in a
/// single call, replacing the stored program handle.
///
/// The composer works at the text level only: fragments are joined with
/// newlines and wrapped in a single `void main(){...}` pair, with no
/// validation of the caller-supplied GLSL.

use std::sync::{Arc, Mutex};

use bitflags::bitflags;

use crate::error::Result;
use crate::scene::ShaderTarget;
use crate::shader::builtins;
use crate::shader::compiler::{ShaderCompiler, ShaderProgram};
use crate::shader::stage::{ShaderLanguage, ShaderStage, StageSources};
use crate::{engine_bail, engine_debug, engine_err};

// ===== CONSTRUCTION DEFAULTS =====

/// Default version directive (note the trailing newline, so the directive
/// stays on its own line in the composed source)
pub const DEFAULT_VERSION: &str = "#version 150\n";
/// Default maximum light count
pub const DEFAULT_MAX_LIGHTS: u32 = 32;
/// Default maximum joint count for hardware skinning
pub const DEFAULT_MAX_JOINTS: u32 = 64;
/// Default maximum clip-plane count
pub const DEFAULT_MAX_CLIP_PLANES: u32 = 4;

// ===== SEQUENCE SELECTION =====

bitflags! {
    /// Selects which fragment sequences a removal applies to
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SequenceSelect: u16 {
        const UNIFORMS                = 1 << 0;
        const VERTEX_ATTRIBUTES       = 1 << 1;
        const VERTEX                  = 1 << 2;
        const FRAGMENT_ATTRIBUTES     = 1 << 3;
        const FRAGMENT                = 1 << 4;
        const GEOMETRY_ATTRIBUTES     = 1 << 5;
        const GEOMETRY                = 1 << 6;
        const TESS_CONTROL_ATTRIBUTES = 1 << 7;
        const TESS_CONTROL            = 1 << 8;
        const TESS_EVAL_ATTRIBUTES    = 1 << 9;
        const TESS_EVAL               = 1 << 10;
    }
}

// ===== DESCRIPTORS =====

/// Effect creation descriptor
pub struct EffectDesc {
    /// Shader compilation backend the effect submits its sources to
    pub compiler: Arc<Mutex<dyn ShaderCompiler>>,
    /// Version directive prefixed to every non-empty stage
    pub version: String,
    /// Maximum light count substituted into the built-in uniform block
    pub max_lights: u32,
    /// Maximum joint count substituted into the built-in uniform block
    pub max_joints: u32,
    /// Maximum clip-plane count substituted into the built-in uniform block
    pub max_clip_planes: u32,
}

/// One layer of caller-supplied shader fragments
///
/// Every field is optional; `None` or an empty string contributes nothing
/// to the corresponding sequence. Body texts honor `order`; declaration
/// and uniform texts always append regardless of it.
#[derive(Debug, Clone, Default)]
pub struct LayerDesc {
    /// Uniform declarations, shared by every non-empty stage
    pub uniforms: Option<String>,
    pub vertex_attributes: Option<String>,
    /// Vertex-stage statements placed inside `main`
    pub vertex: Option<String>,
    pub fragment_attributes: Option<String>,
    /// Fragment-stage statements placed inside `main`
    pub fragment: Option<String>,
    pub geometry_attributes: Option<String>,
    /// Geometry-stage statements placed inside `main`
    pub geometry: Option<String>,
    pub tess_control_attributes: Option<String>,
    /// Tessellation-control statements placed inside `main`
    pub tess_control: Option<String>,
    pub tess_eval_attributes: Option<String>,
    /// Tessellation-evaluation statements placed inside `main`
    pub tess_eval: Option<String>,
    /// Insertion position for the body texts of this layer; append when None
    pub order: Option<usize>,
}

// ===== EFFECT =====

/// Layered shader-source composer
///
/// Holds the per-stage fragment sequences and at most one live program
/// handle. Not internally synchronized: concurrent mutation of one Effect
/// requires external mutual exclusion.
pub struct Effect {
    version: String,

    // Global uniform declarations, prepended to every non-empty stage
    uniforms: Vec<String>,

    // Per-stage declaration sequences
    vertex_attributes: Vec<String>,
    fragment_attributes: Vec<String>,
    geometry_attributes: Vec<String>,
    tess_control_attributes: Vec<String>,
    tess_eval_attributes: Vec<String>,

    // Per-stage body sequences (statements inside main)
    vertex: Vec<String>,
    fragment: Vec<String>,
    geometry: Vec<String>,
    tess_control: Vec<String>,
    tess_eval: Vec<String>,

    compiler: Arc<Mutex<dyn ShaderCompiler>>,
    program: Option<Arc<dyn ShaderProgram>>,
}

impl Effect {
    /// Create an effect with the default version directive and limits
    pub fn new(compiler: Arc<Mutex<dyn ShaderCompiler>>) -> Self {
        Self::from_desc(EffectDesc {
            compiler,
            version: DEFAULT_VERSION.to_string(),
            max_lights: DEFAULT_MAX_LIGHTS,
            max_joints: DEFAULT_MAX_JOINTS,
            max_clip_planes: DEFAULT_MAX_CLIP_PLANES,
        })
    }

    /// Create an effect from a descriptor
    ///
    /// Seeds the global uniform sequence with the built-in uniform block
    /// (limits substituted) and the vertex attribute sequence with the
    /// built-in vertex inputs. Nothing is compiled yet: all body sequences
    /// are empty, so no stage would be submitted.
    pub fn from_desc(desc: EffectDesc) -> Self {
        Self {
            version: desc.version,
            uniforms: vec![builtins::builtin_uniform_block(
                desc.max_lights,
                desc.max_joints,
                desc.max_clip_planes,
            )],
            vertex_attributes: vec![builtins::builtin_vertex_attributes()],
            fragment_attributes: Vec::new(),
            geometry_attributes: Vec::new(),
            tess_control_attributes: Vec::new(),
            tess_eval_attributes: Vec::new(),
            vertex: Vec::new(),
            fragment: Vec::new(),
            geometry: Vec::new(),
            tess_control: Vec::new(),
            tess_eval: Vec::new(),
            compiler: desc.compiler,
            program: None,
        }
    }

    // ===== MUTATORS =====

    /// Add a layer of fragments and recompose
    ///
    /// Body texts are inserted at `layer.order` when given (shifting
    /// subsequent fragments right), otherwise appended. Declaration and
    /// uniform texts always append; `order` does not apply to them.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfRange` if `layer.order` exceeds the current length of a
    ///   targeted body sequence
    /// - `BackendError` if the recompiled sources are rejected by the
    ///   compilation backend (the previous program handle stays in place)
    pub fn add_layer(&mut self, layer: LayerDesc) -> Result<()> {
        if let Some(text) = filled(layer.uniforms) {
            self.uniforms.push(text);
        }
        if let Some(text) = filled(layer.vertex_attributes) {
            self.vertex_attributes.push(text);
        }
        if let Some(text) = filled(layer.fragment_attributes) {
            self.fragment_attributes.push(text);
        }
        if let Some(text) = filled(layer.geometry_attributes) {
            self.geometry_attributes.push(text);
        }
        if let Some(text) = filled(layer.tess_control_attributes) {
            self.tess_control_attributes.push(text);
        }
        if let Some(text) = filled(layer.tess_eval_attributes) {
            self.tess_eval_attributes.push(text);
        }

        if let Some(text) = filled(layer.vertex) {
            insert_body(&mut self.vertex, text, layer.order, "vertex")?;
        }
        if let Some(text) = filled(layer.fragment) {
            insert_body(&mut self.fragment, text, layer.order, "fragment")?;
        }
        if let Some(text) = filled(layer.geometry) {
            insert_body(&mut self.geometry, text, layer.order, "geometry")?;
        }
        if let Some(text) = filled(layer.tess_control) {
            insert_body(&mut self.tess_control, text, layer.order, "tess_control")?;
        }
        if let Some(text) = filled(layer.tess_eval) {
            insert_body(&mut self.tess_eval, text, layer.order, "tess_eval")?;
        }

        self.recompose()
    }

    /// Remove fragments at the given positions from the selected sequences,
    /// then recompose
    ///
    /// Positions are consumed in the order given, directly against current
    /// indices; there is no batch re-indexing. Callers removing more than
    /// one fragment must pass positions in descending order, or earlier
    /// removals will shift the meaning of later ones.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfRange` if a position is outside a selected sequence
    ///   (sequences already processed stay modified)
    /// - `BackendError` if the recompiled sources are rejected by the
    ///   compilation backend
    pub fn remove_layer(&mut self, positions: &[usize], select: SequenceSelect) -> Result<()> {
        for &position in positions {
            if select.contains(SequenceSelect::UNIFORMS) {
                remove_at(&mut self.uniforms, position, "uniform")?;
            }
            if select.contains(SequenceSelect::VERTEX_ATTRIBUTES) {
                remove_at(&mut self.vertex_attributes, position, "vertex attribute")?;
            }
            if select.contains(SequenceSelect::VERTEX) {
                remove_at(&mut self.vertex, position, "vertex body")?;
            }
            if select.contains(SequenceSelect::FRAGMENT_ATTRIBUTES) {
                remove_at(&mut self.fragment_attributes, position, "fragment attribute")?;
            }
            if select.contains(SequenceSelect::FRAGMENT) {
                remove_at(&mut self.fragment, position, "fragment body")?;
            }
            if select.contains(SequenceSelect::GEOMETRY_ATTRIBUTES) {
                remove_at(&mut self.geometry_attributes, position, "geometry attribute")?;
            }
            if select.contains(SequenceSelect::GEOMETRY) {
                remove_at(&mut self.geometry, position, "geometry body")?;
            }
            if select.contains(SequenceSelect::TESS_CONTROL_ATTRIBUTES) {
                remove_at(&mut self.tess_control_attributes, position, "tess_control attribute")?;
            }
            if select.contains(SequenceSelect::TESS_CONTROL) {
                remove_at(&mut self.tess_control, position, "tess_control body")?;
            }
            if select.contains(SequenceSelect::TESS_EVAL_ATTRIBUTES) {
                remove_at(&mut self.tess_eval_attributes, position, "tess_eval attribute")?;
            }
            if select.contains(SequenceSelect::TESS_EVAL) {
                remove_at(&mut self.tess_eval, position, "tess_eval body")?;
            }
        }

        self.recompose()
    }

    // ===== COMPOSITION =====

    /// Build the five stage source strings from the current sequences
    ///
    /// Pure function of the current state. A stage whose body sequence is
    /// empty composes to the empty string and is thereby omitted from the
    /// program. For the others the layout is: version directive, the global
    /// uniform fragments joined with newlines, the fixed output-color
    /// declaration (fragment stage only), the stage's declaration fragments
    /// joined with newlines, then a newline and `void main(){`, the body
    /// fragments joined with newlines, and the closing `}`.
    pub fn compose(&self) -> StageSources {
        let uniforms = self.uniforms.join("\n");
        StageSources {
            vertex: self.compose_stage(&uniforms, &self.vertex_attributes, &self.vertex, false),
            fragment: self.compose_stage(
                &uniforms,
                &self.fragment_attributes,
                &self.fragment,
                true,
            ),
            geometry: self.compose_stage(
                &uniforms,
                &self.geometry_attributes,
                &self.geometry,
                false,
            ),
            tess_control: self.compose_stage(
                &uniforms,
                &self.tess_control_attributes,
                &self.tess_control,
                false,
            ),
            tess_eval: self.compose_stage(
                &uniforms,
                &self.tess_eval_attributes,
                &self.tess_eval,
                false,
            ),
        }
    }

    fn compose_stage(
        &self,
        uniforms: &str,
        attributes: &[String],
        bodies: &[String],
        fragment_output: bool,
    ) -> String {
        if bodies.is_empty() {
            return String::new();
        }

        let mut source = String::new();
        source.push_str(&self.version);
        source.push_str(uniforms);
        if fragment_output {
            source.push_str(builtins::FRAGMENT_OUTPUT_DECLARATION);
        }
        source.push_str(&attributes.join("\n"));
        // Newline terminates any trailing line comment in the last
        // declaration fragment before the main opener
        source.push_str("\nvoid main(){");
        source.push_str(&bodies.join("\n"));
        source.push('}');
        source
    }

    /// Rebuild all stage sources and submit them to the compilation backend
    ///
    /// The returned program handle replaces the stored one. On failure the
    /// previously stored handle is left untouched.
    fn recompose(&mut self) -> Result<()> {
        let sources = self.compose();

        engine_debug!(
            "nebula3d::Effect",
            "Recomposed {} active stage(s): vertex {}B, fragment {}B, geometry {}B, tess_control {}B, tess_eval {}B",
            sources.active_stage_count(),
            sources.vertex.len(),
            sources.fragment.len(),
            sources.geometry.len(),
            sources.tess_control.len(),
            sources.tess_eval.len()
        );

        let program = {
            let mut compiler = self.compiler.lock().map_err(|_| {
                engine_err!(BackendError, "nebula3d::Effect", "Shader compiler lock poisoned")
            })?;
            compiler.compile(ShaderLanguage::Glsl, &sources)?
        };
        self.program = Some(program);
        Ok(())
    }

    // ===== SCENE ATTACHMENT =====

    /// Attach the current program to a renderable scene-graph target
    ///
    /// Re-applying overwrites the target's previously attached program.
    ///
    /// # Errors
    ///
    /// `ShaderNotComposed` if no layer has been added yet (no program
    /// exists to attach).
    pub fn apply(&self, target: &mut dyn ShaderTarget) -> Result<()> {
        match &self.program {
            Some(program) => {
                target.set_shader(program.clone());
                Ok(())
            }
            None => Err(engine_err!(
                ShaderNotComposed,
                "nebula3d::Effect",
                "No shader program composed yet; add a layer first"
            )),
        }
    }

    // ===== ACCESSORS =====

    /// Get the version directive
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Get the current program handle, if one has been composed
    pub fn program(&self) -> Option<&Arc<dyn ShaderProgram>> {
        self.program.as_ref()
    }

    /// Get the global uniform fragment sequence
    pub fn uniform_fragments(&self) -> &[String] {
        &self.uniforms
    }

    /// Get a stage's declaration fragment sequence
    pub fn attribute_fragments(&self, stage: ShaderStage) -> &[String] {
        match stage {
            ShaderStage::Vertex => &self.vertex_attributes,
            ShaderStage::Fragment => &self.fragment_attributes,
            ShaderStage::Geometry => &self.geometry_attributes,
            ShaderStage::TessControl => &self.tess_control_attributes,
            ShaderStage::TessEval => &self.tess_eval_attributes,
        }
    }

    /// Get a stage's body fragment sequence
    pub fn body_fragments(&self, stage: ShaderStage) -> &[String] {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
            ShaderStage::Geometry => &self.geometry,
            ShaderStage::TessControl => &self.tess_control,
            ShaderStage::TessEval => &self.tess_eval,
        }
    }
}

// ===== HELPERS =====

/// Treat absent and empty texts alike: no contribution
fn filled(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}

fn insert_body(
    sequence: &mut Vec<String>,
    text: String,
    order: Option<usize>,
    name: &str,
) -> Result<()> {
    match order {
        Some(index) => {
            if index > sequence.len() {
                engine_bail!(
                    IndexOutOfRange,
                    "nebula3d::Effect",
                    "{} body insertion index {} out of range (length {})",
                    name,
                    index,
                    sequence.len()
                );
            }
            sequence.insert(index, text);
        }
        None => sequence.push(text),
    }
    Ok(())
}

fn remove_at(sequence: &mut Vec<String>, position: usize, name: &str) -> Result<()> {
    if position >= sequence.len() {
        engine_bail!(
            IndexOutOfRange,
            "nebula3d::Effect",
            "{} removal position {} out of range (length {})",
            name,
            position,
            sequence.len()
        );
    }
    sequence.remove(position);
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
