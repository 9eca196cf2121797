//! GLFW-based window with an OpenGL 3.3 core context
//!
//! Lifecycle notes:
//!
//! - `glfw::init` is idempotent process-wide and library termination is
//!   scoped to process exit, so creating or dropping one window never tears
//!   down backend state under another. Multi-window use is supported.
//! - GLFW errors are routed through the `log` facade instead of a global
//!   stderr callback.
//! - Construction failures clean up behind themselves: everything acquired
//!   before the failing step is released by drop order before the error
//!   returns.

use glfw::{Action, Context as _, Key, WindowEvent};
use glow::HasContext as _;

use crate::config::WindowConfig;
use crate::render::{Color, Rect};
use crate::window::backend::WindowBackend;
use crate::window::{WindowError, WindowResult};

use super::pipeline::RectPipeline;

fn error_callback(err: glfw::Error, description: String) {
    log::error!("GLFW error ({err:?}): {description}");
}

/// GLFW window wrapper owning the GL context and the rectangle pipeline
pub(crate) struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    gl: glow::Context,
    pipeline: RectPipeline,
    framebuffer_size: (u32, u32),
    close_on_escape: bool,
}

impl Window {
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(error_callback)
            .map_err(|e| WindowError::Init(format!("{e:?}")))?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::Creation)?;

        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);

        window.make_current();
        glfw.set_swap_interval(if config.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        // glfwGetProcAddress returns null for symbols the context does not
        // provide; probe a core entry point so loader failure surfaces as an
        // error instead of a crash on first use.
        if (window.get_proc_address("glCreateShader") as *const std::ffi::c_void).is_null() {
            return Err(WindowError::FunctionLoader(
                "glCreateShader is not exported by the current context".to_string(),
            ));
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| {
                window.get_proc_address(symbol) as *const _
            })
        };

        let pipeline = RectPipeline::new(&gl)?;

        let (width, height) = window.get_framebuffer_size();
        #[allow(clippy::cast_sign_loss)]
        let framebuffer_size = (width as u32, height as u32);

        log::info!(
            "opened window \"{}\" ({}x{}, vsync {})",
            config.title,
            config.width,
            config.height,
            if config.vsync { "on" } else { "off" }
        );

        Ok(Self {
            glfw,
            window,
            events,
            gl,
            pipeline,
            framebuffer_size,
            close_on_escape: config.close_on_escape,
        })
    }
}

impl Window {
    /// Rebind this window's context if another window's is current
    ///
    /// GL calls target whichever context is current on the thread, so every
    /// operation that touches GL state rebinds first. Without this, two
    /// windows on one thread would render into each other's contexts.
    fn ensure_current(&mut self) {
        if !self.window.is_current() {
            self.window.make_current();
        }
    }
}

impl WindowBackend for Window {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.framebuffer_size
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn clear(&mut self, color: Color) {
        self.ensure_current();
        unsafe {
            self.gl.clear_color(color.r, color.g, color.b, color.a);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.ensure_current();
        self.pipeline.draw(&self.gl, rect, color);
    }

    fn process(&mut self) {
        self.ensure_current();
        self.window.swap_buffers();
        self.glfw.poll_events();

        for (_, event) in glfw::flush_messages(&self.events) {
            match event {
                WindowEvent::Key(Key::Escape, _, Action::Press, _) if self.close_on_escape => {
                    self.window.set_should_close(true);
                }
                WindowEvent::Close => {
                    self.window.set_should_close(true);
                }
                #[allow(clippy::cast_sign_loss)]
                WindowEvent::FramebufferSize(width, height) => {
                    self.framebuffer_size = (width as u32, height as u32);
                }
                _ => {}
            }
        }

        // Resize events are dispatched above, so the viewport applied here
        // matches the framebuffer being rendered this frame.
        let (width, height) = self.framebuffer_size;
        #[allow(clippy::cast_possible_wrap)]
        unsafe {
            self.gl.viewport(0, 0, width as i32, height as i32);
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        // Object ids are per-context: another window's context may be
        // current by now, and deleting against it would tear down that
        // window's pipeline instead. Rebind ours before releasing.
        self.window.make_current();
        self.pipeline.destroy(&self.gl);
    }
}
