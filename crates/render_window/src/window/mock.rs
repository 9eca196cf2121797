//! Software window backend for headless tests
//!
//! Implements [`WindowBackend`] over an in-memory RGBA framebuffer with a
//! minimal rasterizer for the rectangle primitive, so clear and draw results
//! can be read back without a display or GL driver. State lives behind a
//! shared `Rc` handle the test keeps, which also makes teardown observable
//! after the window is dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::render::{Color, Rect};
use crate::window::backend::WindowBackend;

thread_local! {
    /// Which mock context is current on this thread, 0 when none is.
    ///
    /// Models GL's per-thread current context: operations and teardown must
    /// rebind their own window's context first, exactly as the OpenGL
    /// backend does, or they would target a sibling window's objects.
    static CURRENT_CONTEXT: Cell<u64> = Cell::new(0);
    static NEXT_CONTEXT_ID: Cell<u64> = Cell::new(1);
}

/// The mock context currently bound on this thread
pub(crate) fn current_context() -> u64 {
    CURRENT_CONTEXT.with(Cell::get)
}

/// Shared handle to a mock backend's observable state
pub(crate) type SharedState = Rc<RefCell<MockState>>;

/// Observable state of a mock window
pub(crate) struct MockState {
    pub width: u32,
    pub height: u32,
    /// RGBA pixels, row-major, row 0 at clip-space y = -1 (bottom)
    pub framebuffer: Vec<[f32; 4]>,
    pub viewport: (u32, u32),
    pub should_close: bool,
    pub title: String,
    pub draw_calls: u32,
    pub frames_presented: u32,
    /// Resize delivered on the next `process` call, as a real backend would
    pub pending_resize: Option<(u32, u32)>,
    /// This window's context id; construction makes it current
    pub context_id: u64,
    /// The context that was current when teardown released the resources
    pub released_context: Option<u64>,
    /// False once the owning backend has been dropped
    pub alive: bool,
}

impl MockState {
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        self.framebuffer[(y * self.width + x) as usize]
    }
}

pub(crate) struct MockBackend {
    state: SharedState,
}

impl MockBackend {
    pub fn new(width: u32, height: u32) -> (Self, SharedState) {
        let context_id = NEXT_CONTEXT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        // A freshly created window's context is made current, as the real
        // backend's construction does.
        CURRENT_CONTEXT.with(|current| current.set(context_id));

        let state = Rc::new(RefCell::new(MockState {
            width,
            height,
            framebuffer: vec![[0.0; 4]; (width * height) as usize],
            viewport: (width, height),
            should_close: false,
            title: String::new(),
            draw_calls: 0,
            frames_presented: 0,
            pending_resize: None,
            context_id,
            released_context: None,
            alive: true,
        }));
        (
            Self {
                state: Rc::clone(&state),
            },
            state,
        )
    }

    /// Rebind this window's context, as every GL-touching operation must
    fn ensure_current(&self) {
        let id = self.state.borrow().context_id;
        CURRENT_CONTEXT.with(|current| current.set(id));
    }
}

impl WindowBackend for MockBackend {
    fn should_close(&self) -> bool {
        self.state.borrow().should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.state.borrow_mut().should_close = should_close;
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let state = self.state.borrow();
        (state.width, state.height)
    }

    fn set_title(&mut self, title: &str) {
        self.state.borrow_mut().title = title.to_string();
    }

    fn clear(&mut self, color: Color) {
        self.ensure_current();
        let mut state = self.state.borrow_mut();
        let pixel = [color.r, color.g, color.b, color.a];
        state.framebuffer.fill(pixel);
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.ensure_current();
        let mut state = self.state.borrow_mut();
        state.draw_calls += 1;

        // The fragment stage emits the color fully opaque.
        let pixel = [color.r, color.g, color.b, 1.0];

        let (x0, x1) = span(rect.x, rect.width);
        let (y0, y1) = span(rect.y, rect.height);
        let (width, height) = (state.width, state.height);

        // A pixel is covered when its center falls inside the half-open
        // clip-space span, matching how sample points rasterize.
        for py in 0..height {
            let cy = center(py, height);
            if cy < y0 || cy >= y1 {
                continue;
            }
            for px in 0..width {
                let cx = center(px, width);
                if cx >= x0 && cx < x1 {
                    state.framebuffer[(py * width + px) as usize] = pixel;
                }
            }
        }
    }

    fn process(&mut self) {
        self.ensure_current();
        let mut state = self.state.borrow_mut();
        state.frames_presented += 1;
        if let Some((width, height)) = state.pending_resize.take() {
            state.width = width;
            state.height = height;
            state.framebuffer = vec![[0.0; 4]; (width * height) as usize];
        }
        state.viewport = (state.width, state.height);
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        // Teardown rebinds its own context before releasing resources;
        // deleting against whichever context happened to be current would
        // destroy a sibling window's objects.
        self.ensure_current();
        let mut state = self.state.borrow_mut();
        state.released_context = Some(current_context());
        state.alive = false;
    }
}

/// Normalize a possibly negative extent into an ordered clip-space span
fn span(origin: f32, extent: f32) -> (f32, f32) {
    let end = origin + extent;
    if origin <= end {
        (origin, end)
    } else {
        (end, origin)
    }
}

/// Clip-space coordinate of a pixel center
#[allow(clippy::cast_precision_loss)]
fn center(index: u32, total: u32) -> f32 {
    (index as f32 + 0.5) / total as f32 * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_extents_rasterize_like_positive_ones() {
        let (mut backend, state) = MockBackend::new(4, 4);
        backend.clear(Color::BLACK);
        // Same quadrant as Rect::new(-1.0, -1.0, 1.0, 1.0), specified from
        // the opposite corner.
        backend.draw_rect(Rect::new(0.0, 0.0, -1.0, -1.0), Color::RED);

        let state = state.borrow();
        assert_eq!(state.pixel(0, 0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(state.pixel(1, 1), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(state.pixel(2, 2), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn zero_area_rect_touches_nothing() {
        let (mut backend, state) = MockBackend::new(4, 4);
        backend.clear(Color::BLACK);
        backend.draw_rect(Rect::new(0.0, 0.0, 0.0, 0.0), Color::RED);

        let state = state.borrow();
        assert_eq!(state.draw_calls, 1);
        assert!(state
            .framebuffer
            .iter()
            .all(|&p| p == [0.0, 0.0, 0.0, 1.0]));
    }
}
