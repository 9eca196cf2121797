//! Embedded shader sources for the rectangle pipeline
//!
//! The sources are fixed constants, not configurable assets. The vertex
//! stage passes `vPos` through to clip space untransformed and forwards the
//! uniform color; the fragment stage emits it fully opaque.

/// Vertex stage of the rectangle program
pub const RECT_VERTEX_SHADER: &str = "\
#version 330
uniform vec3 uColor;
in vec2 vPos;
out vec3 color;
void main()
{
    gl_Position = vec4(vPos, 0.0, 1.0);
    color = uColor;
}
";

/// Fragment stage of the rectangle program
pub const RECT_FRAGMENT_SHADER: &str = "\
#version 330
in vec3 color;
out vec4 fragment;
void main()
{
    fragment = vec4(color, 1.0);
}
";
