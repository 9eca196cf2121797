//! The fixed rectangle shader pipeline
//!
//! One program, one vertex array, one buffer, reused for every draw call.
//! Each `draw` fully replaces the buffer contents with the six vertices of
//! the requested rectangle and issues a single triangle draw. Compile and
//! link failures are hard errors carrying the driver's info log.

use glow::HasContext as _;

use crate::render::shaders::{RECT_FRAGMENT_SHADER, RECT_VERTEX_SHADER};
use crate::render::{Color, Rect};
use crate::window::{WindowError, WindowResult};

const FLOATS_PER_VERTEX: i32 = 2;
const VERTEX_COUNT: i32 = 6;

pub(crate) struct RectPipeline {
    program: glow::Program,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    color_location: glow::UniformLocation,
}

impl RectPipeline {
    /// Compile, link, and configure the rectangle pipeline
    ///
    /// Requires the target context to be current. Each failure branch
    /// deletes the GL objects created before it.
    pub fn new(gl: &glow::Context) -> WindowResult<Self> {
        unsafe {
            let vertex = compile_shader(gl, glow::VERTEX_SHADER, "vertex", RECT_VERTEX_SHADER)?;
            let fragment =
                match compile_shader(gl, glow::FRAGMENT_SHADER, "fragment", RECT_FRAGMENT_SHADER) {
                    Ok(shader) => shader,
                    Err(err) => {
                        gl.delete_shader(vertex);
                        return Err(err);
                    }
                };

            let linked = link_program(gl, vertex, fragment);
            // The program keeps the compiled stages alive; the shader
            // objects themselves are no longer needed either way.
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
            let program = linked?;

            let Some(color_location) = gl.get_uniform_location(program, "uColor") else {
                gl.delete_program(program);
                return Err(WindowError::MissingBinding("uColor"));
            };
            let Some(vpos_location) = gl.get_attrib_location(program, "vPos") else {
                gl.delete_program(program);
                return Err(WindowError::MissingBinding("vPos"));
            };

            let vao = match gl.create_vertex_array() {
                Ok(vao) => vao,
                Err(message) => {
                    gl.delete_program(program);
                    return Err(WindowError::Allocation(message));
                }
            };
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(message) => {
                    gl.delete_vertex_array(vao);
                    gl.delete_program(program);
                    return Err(WindowError::Allocation(message));
                }
            };

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.enable_vertex_attrib_array(vpos_location);
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let stride = FLOATS_PER_VERTEX * std::mem::size_of::<f32>() as i32;
            gl.vertex_attrib_pointer_f32(
                vpos_location,
                FLOATS_PER_VERTEX,
                glow::FLOAT,
                false,
                stride,
                0,
            );
            gl.bind_vertex_array(None);

            Ok(Self {
                program,
                vao,
                vbo,
                color_location,
            })
        }
    }

    /// Upload one rectangle and draw it
    pub fn draw(&self, gl: &glow::Context, rect: Rect, color: Color) {
        let vertices = rect.vertices();
        unsafe {
            gl.use_program(Some(self.program));
            gl.bind_vertex_array(Some(self.vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&vertices),
                glow::STREAM_DRAW,
            );
            gl.uniform_3_f32(Some(&self.color_location), color.r, color.g, color.b);
            gl.draw_arrays(glow::TRIANGLES, 0, VERTEX_COUNT);
            gl.bind_vertex_array(None);
        }
    }

    /// Release the pipeline's GL objects
    ///
    /// Called from the owning window's drop while the context is still
    /// current; glow handles are plain ids without their own destructors.
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.program);
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
        }
    }
}

unsafe fn compile_shader(
    gl: &glow::Context,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> WindowResult<glow::Shader> {
    let shader = gl.create_shader(kind).map_err(WindowError::Allocation)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if gl.get_shader_compile_status(shader) {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        Err(WindowError::ShaderCompile { stage, log })
    }
}

unsafe fn link_program(
    gl: &glow::Context,
    vertex: glow::Shader,
    fragment: glow::Shader,
) -> WindowResult<glow::Program> {
    let program = gl.create_program().map_err(WindowError::Allocation)?;
    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);
    if gl.get_program_link_status(program) {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(program);
        gl.delete_program(program);
        Err(WindowError::ShaderLink(log))
    }
}
