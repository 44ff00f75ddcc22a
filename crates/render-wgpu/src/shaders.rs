/// WGSL shader for the galaxy point sprites.
///
/// Ported visual contract:
/// - spiral warp from the ORIGINAL particle position each frame
///   (angle offset = distance from origin * 0.2), never cumulative;
/// - point size on screen = base size * (300 / -viewZ) pixels, expanded
///   into a screen-aligned quad via the viewport uniform;
/// - circular fragment mask (discard outside radius 0.5 in quad UV).
///
/// Blending (additive, no depth test) is configured on the pipeline.
pub const GALAXY_SHADER: &str = r#"
struct Uniforms {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
    model: mat4x4<f32>,
    time: f32,
    point_scale: f32,
    viewport: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) corner: vec2<f32>,
};

struct InstanceInput {
    @location(1) position: vec3<f32>,
    @location(2) color: vec3<f32>,
    @location(3) size: f32,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    var pos = instance.position;

    // Spiral warp from the original position: twist grows with distance
    // from the origin.
    let angle = atan2(pos.z, pos.x) + length(pos) * 0.2;
    let radius = length(pos.xz);
    pos.x = radius * cos(angle);
    pos.z = radius * sin(angle);

    let mv_position = uniforms.view * uniforms.model * vec4<f32>(pos, 1.0);
    let point_size = instance.size * (uniforms.point_scale / -mv_position.z);

    var clip = uniforms.proj * mv_position;
    // Expand to a screen-aligned quad. The corner spans [-0.5, 0.5], so the
    // full quad is point_size pixels across.
    clip.x += vertex.corner.x * point_size * 2.0 * clip.w / uniforms.viewport.x;
    clip.y += vertex.corner.y * point_size * 2.0 * clip.w / uniforms.viewport.y;

    var out: VertexOutput;
    out.clip_position = clip;
    out.color = instance.color;
    out.uv = vertex.corner + vec2<f32>(0.5);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    if (length(in.uv - vec2<f32>(0.5)) > 0.5) {
        discard;
    }
    return vec4<f32>(in.color, 1.0);
}
"#;
