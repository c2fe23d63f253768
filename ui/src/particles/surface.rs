//! Drawing targets for the particle field.

/// Minimal immediate-mode 2D drawing API.
pub trait Surface {
    /// Reset to an empty surface of the given size.
    fn clear(&mut self, width: f64, height: f64);
    fn fill_disc(&mut self, x: f64, y: f64, radius: f64, color: &str, opacity: f64);
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, opacity: f64);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Disc {
        x: f64,
        y: f64,
        radius: f64,
        color: String,
        opacity: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
        opacity: f64,
    },
}

/// Recorded frame, rendered as SVG where no canvas is reachable from Rust.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    width: f64,
    height: f64,
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Surface for Scene {
    fn clear(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.shapes.clear();
    }

    fn fill_disc(&mut self, x: f64, y: f64, radius: f64, color: &str, opacity: f64) {
        self.shapes.push(Shape::Disc {
            x,
            y,
            radius,
            color: color.to_string(),
            opacity,
        });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, opacity: f64) {
        self.shapes.push(Shape::Line {
            x1,
            y1,
            x2,
            y2,
            color: color.to_string(),
            opacity,
        });
    }
}

/// `<canvas>` 2D context.
#[cfg(target_arch = "wasm32")]
pub struct CanvasSurface {
    context: web_sys::CanvasRenderingContext2d,
}

#[cfg(target_arch = "wasm32")]
impl CanvasSurface {
    /// Look up a canvas by element id, size it and grab its 2D context.
    /// `None` when the element is missing or is not a canvas.
    pub fn by_id(id: &str, width: f64, height: f64) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let canvas: web_sys::HtmlCanvasElement = web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into()
            .ok()?;
        let (w, h) = (width.max(0.0) as u32, height.max(0.0) as u32);
        if canvas.width() != w {
            canvas.set_width(w);
        }
        if canvas.height() != h {
            canvas.set_height(h);
        }
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { context })
    }
}

#[cfg(target_arch = "wasm32")]
#[allow(deprecated)]
impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_disc(&mut self, x: f64, y: f64, radius: f64, color: &str, opacity: f64) {
        let ctx = &self.context;
        ctx.set_global_alpha(opacity);
        ctx.set_fill_style(&wasm_bindgen::JsValue::from_str(color));
        ctx.begin_path();
        if ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU).is_ok() {
            ctx.fill();
        }
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, opacity: f64) {
        let ctx = &self.context;
        ctx.set_global_alpha(opacity);
        ctx.set_stroke_style(&wasm_bindgen::JsValue::from_str(color));
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(x1, y1);
        ctx.line_to(x2, y2);
        ctx.stroke();
    }
}
