use crate::{
    foundation::core::{Affine, Canvas, Rect, Rgba8, Vec2},
    foundation::error::{StepmoreError, StepmoreResult},
    render::{FrameRGBA, surface::Surface},
};

#[derive(Clone, Copy, Debug)]
struct DrawState {
    transform: Affine,
    fill: Rgba8,
}

/// [`Surface`] rasterized on the CPU with `vello_cpu`.
///
/// Draw calls are recorded into a render context and resolved into pixels by
/// [`CpuSurface::finish`].
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl CpuSurface {
    pub fn new(canvas: Canvas) -> StepmoreResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| StepmoreError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| StepmoreError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(StepmoreError::render("surface must not be empty"));
        }

        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            state: DrawState {
                transform: Affine::IDENTITY,
                fill: Rgba8::BLACK,
            },
            stack: Vec::new(),
        })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    /// Rasterize everything drawn so far into premultiplied RGBA8 pixels.
    pub fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

impl Surface for CpuSurface {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform = self.state.transform * Affine::translate(Vec2::new(dx, dy));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform = self.state.transform * Affine::scale_non_uniform(sx, sy);
    }

    fn set_fill(&mut self, color: Rgba8) {
        self.state.fill = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        // A collapsed transform covers no pixels.
        if self.state.transform.determinant() == 0.0 || rect.area() == 0.0 {
            return;
        }
        let Rgba8 { r, g, b, a } = self.state.fill;

        self.ctx.set_transform(affine_to_cpu(self.state.transform));
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
