use crate::foundation::core::{Rect, Rgba8};

/// 2D drawing surface with canvas-style state.
///
/// `save`/`restore` snapshot and restore both the current transform and the
/// fill color. `translate` and `scale` post-multiply the current transform.
pub trait Surface {
    fn save(&mut self);

    /// Pop the last saved state. Ignored when nothing was saved.
    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);

    fn scale(&mut self, sx: f64, sy: f64);

    fn set_fill(&mut self, color: Rgba8);

    /// Fill `rect` (in local coordinates) with the current fill color.
    fn fill_rect(&mut self, rect: Rect);
}

/// One recorded [`Surface`] call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCmd {
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Scale { sx: f64, sy: f64 },
    SetFill { color: Rgba8 },
    FillRect { x0: f64, y0: f64, x1: f64, y1: f64 },
}

/// [`Surface`] that records every call instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    cmds: Vec<DrawCmd>,
    depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Number of `save` calls not yet matched by a `restore`.
    pub fn save_depth(&self) -> usize {
        self.depth
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
        self.depth = 0;
    }

    /// Recorded rectangles, in call order.
    pub fn filled_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.cmds.iter().filter_map(|cmd| match *cmd {
            DrawCmd::FillRect { x0, y0, x1, y1 } => Some(Rect::new(x0, y0, x1, y1)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.cmds.push(DrawCmd::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.cmds.push(DrawCmd::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.cmds.push(DrawCmd::Translate { dx, dy });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.cmds.push(DrawCmd::Scale { sx, sy });
    }

    fn set_fill(&mut self, color: Rgba8) {
        self.cmds.push(DrawCmd::SetFill { color });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.cmds.push(DrawCmd::FillRect {
            x0: rect.x0,
            y0: rect.y0,
            x1: rect.x1,
            y1: rect.y1,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
