/// Built-in declaration blocks seeded into every new Effect.
///
/// These describe the standard engine-provided shader inputs: the transform
/// matrix family, material/light/fog parameter structs, texture samplers and
/// the built-in vertex columns. Array sizes are template placeholders
/// substituted with the construction-time limits.

/// Placeholder substituted with the maximum light count
const MAX_LIGHTS_PLACEHOLDER: &str = "MAX_LIGHTS";
/// Placeholder substituted with the maximum joint count
const MAX_JOINTS_PLACEHOLDER: &str = "MAX_JOINTS";
/// Placeholder substituted with the maximum clip-plane count
const MAX_CLIP_PLANES_PLACEHOLDER: &str = "MAX_CLIP_PLANES";

/// Template for the built-in uniform declaration block
const UNIFORM_BLOCK_TEMPLATE: &str = r#"// Transforms a model-space coordinate into a clip-space coordinate.
// Usually used in the vertex shader to compute gl_Position.
uniform mat4 nb3d_ModelViewProjectionMatrix;

// The individual parts of the matrix above.
uniform mat4 nb3d_ModelViewMatrix;
uniform mat4 nb3d_ProjectionMatrix;
uniform mat4 nb3d_ModelMatrix;
uniform mat4 nb3d_ViewMatrix;
uniform mat4 nb3d_ViewProjectionMatrix;

// Upper 3x3 of the inverse transpose of the ModelViewMatrix, used to
// transform normal vectors into view space.
uniform mat3 nb3d_NormalMatrix;

// Inverse and/or transpose variants of the matrices above.
uniform mat4 nb3d_ProjectionMatrixInverse;
uniform mat4 nb3d_ProjectionMatrixTranspose;
uniform mat4 nb3d_ModelViewMatrixInverseTranspose;

// The Nth texture applied to the model. The index matches the one used by
// nb3d_MultiTexCoordN, nb3d_TangentN and nb3d_BinormalN.
uniform sampler2D nb3d_Texture0;

// Textures assigned through a particular texture-stage mode. A dummy
// texture with the listed default color is bound when no such texture
// has been assigned.
uniform sampler2D nb3d_TextureModulate[]; // default color: (1, 1, 1, 1)
uniform sampler2D nb3d_TextureAdd[];      // default color: (0, 0, 0, 1)
uniform sampler2D nb3d_TextureNormal[];   // default color: (0.5, 0.5, 1, 0)
uniform sampler2D nb3d_TextureHeight[];   // default color: (0.5, 0.5, 1, 0)
uniform sampler2D nb3d_TextureGloss[];    // default color: (1, 1, 1, 1)

// Matrix generated from the texture pos and scale.
uniform mat4 nb3d_TextureMatrix[];

// Color scale applied to the node.
uniform vec4 nb3d_ColorScale;

// Material attributes assigned via a Material object. Unused struct
// members may be omitted without consequence.
uniform struct nb3d_MaterialParameters {
  vec4 ambient;
  vec4 diffuse;
  vec4 emission;
  vec3 specular;
  float shininess;

  vec4 baseColor;
  float roughness;
  float metallic;
  float refractiveIndex;
} nb3d_Material;

// The sum of all active ambient light colors.
uniform struct nb3d_LightModelParameters {
  vec4 ambient;
} nb3d_LightModel;

// Active clip planes, in view space. Indices without an active clip plane
// are guaranteed to contain vec4(0, 0, 0, 0).
uniform vec4 nb3d_ClipPlane[MAX_CLIP_PLANES];

// Frame time of the current frame, for animations.
uniform float nb3d_FrameTime;
// Time elapsed since the previous frame.
uniform float nb3d_DeltaFrameTime;
// Number of frames elapsed since program start.
uniform int nb3d_FrameNumber;

// When hardware skinning is enabled, the transform of each joint.
// Superfluous array entries contain the identity matrix.
uniform mat4 nb3d_TransformTable[MAX_JOINTS];

// Information for each non-ambient light.
uniform struct nb3d_LightSourceParameters {
  // Primary light color.
  vec4 color;

  // Light color broken up into components, for legacy shaders.
  vec4 ambient;
  vec4 diffuse;
  vec4 specular;

  // View-space position. If w=0, this is a directional light, with the
  // xyz being -direction.
  vec4 position;

  // Spotlight-only settings
  vec3 spotDirection;
  float spotExponent;
  float spotCutoff;
  float spotCosCutoff;

  // Individual attenuation constants
  float constantAttenuation;
  float linearAttenuation;
  float quadraticAttenuation;

  // constant, linear, quadratic attenuation in one vector
  vec3 attenuation;

  // Shadow map for this light source
  sampler2DShadow shadowMap;

  // Transforms view-space coordinates to shadow map coordinates
  mat4 shadowViewMatrix;
} nb3d_LightSource[MAX_LIGHTS];

// Fog state.
uniform struct nb3d_FogParameters {
  vec4 color;
  float density;
  float start;
  float end;
  float scale; // 1.0 / (end - start)
} nb3d_Fog;
"#;

/// Built-in vertex input declarations
pub const VERTEX_ATTRIBUTE_BLOCK: &str = r#"// The position, normal vector and color of the currently processed vertex.
in vec4 nb3d_Vertex;
in vec3 nb3d_Normal;
in vec4 nb3d_Color;

// The texture coordinates associated with the Nth texture.
in vec2 nb3d_MultiTexCoord0;
in vec2 nb3d_MultiTexCoord1;
in vec2 nb3d_MultiTexCoord2;

// Tangent and binormal vectors, if present. An appended index selects the
// set associated with the Nth texture.
in vec3 nb3d_Binormal;
in vec3 nb3d_Binormal0;
in vec3 nb3d_Binormal1;
in vec3 nb3d_Tangent;
in vec3 nb3d_Tangent0;
in vec3 nb3d_Tangent1;

// Present when hardware skinning is enabled: indices into the
// nb3d_TransformTable array for the four most influential joints, and the
// corresponding weights.
in vec4 transform_weight;
in uvec4 transform_index;
"#;

/// Fixed output-color declaration, present in every fragment stage
pub const FRAGMENT_OUTPUT_DECLARATION: &str = "out vec4 nb3d_FragColor;\n";

/// Build the built-in uniform block with the given limits substituted
pub fn builtin_uniform_block(max_lights: u32, max_joints: u32, max_clip_planes: u32) -> String {
    UNIFORM_BLOCK_TEMPLATE
        .replace(MAX_LIGHTS_PLACEHOLDER, &max_lights.to_string())
        .replace(MAX_JOINTS_PLACEHOLDER, &max_joints.to_string())
        .replace(MAX_CLIP_PLANES_PLACEHOLDER, &max_clip_planes.to_string())
}

/// The built-in vertex attribute block
pub fn builtin_vertex_attributes() -> String {
    VERTEX_ATTRIBUTE_BLOCK.to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "builtins_tests.rs"]
mod tests;
