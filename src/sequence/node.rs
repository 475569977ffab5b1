use crate::{
    animation::scale::{AdvanceResult, ScaleState},
    config::{ACCENT, CONTRAST},
    foundation::core::{Canvas, Rect, Rgba8},
    foundation::math::reveal_phase,
    render::surface::Surface,
};

/// Half-extent divisors and fills of the two nested squares, outer first.
const PHASES: [(f64, Rgba8); 2] = [(3.0, ACCENT), (4.0, CONTRAST)];

/// Direction of travel along the chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sweep {
    /// Towards higher indices.
    #[default]
    Forward,
    /// Towards lower indices.
    Backward,
}

impl Sweep {
    pub fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Result of looking up a neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The neighbor at this index exists.
    Moved(usize),
    /// No neighbor in that direction; the caller stays put.
    Boundary,
}

/// Horizontal slotting shared by all nodes of one sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeLayout {
    /// Distance between neighboring node centers.
    pub gap: f64,
    /// Vertical center line.
    pub center_y: f64,
}

impl NodeLayout {
    /// Spread `count` nodes evenly across the viewport, leaving one gap of
    /// margin on each side.
    pub fn new(viewport: Canvas, count: usize) -> Self {
        Self {
            gap: f64::from(viewport.width) / (count as f64 + 1.0),
            center_y: f64::from(viewport.height) / 2.0,
        }
    }

    /// Center of the node at `index`.
    pub fn slot(&self, index: usize) -> (f64, f64) {
        (self.gap * index as f64 + self.gap, self.center_y)
    }
}

/// One animatable square-reveal element at a fixed slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    index: usize,
    state: ScaleState,
}

impl Node {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            state: ScaleState::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &ScaleState {
        &self.state
    }

    /// Draw the outer and inner squares at this node's slot.
    ///
    /// The outer square grows while progress runs `0..0.5`, the inner one
    /// while it runs `0.5..1`. The surface state is left as found.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, layout: &NodeLayout) {
        let (x, y) = layout.slot(self.index);
        surface.save();
        surface.translate(x, y);
        for (phase, (divisor, color)) in (0u32..).zip(PHASES) {
            let sc = reveal_phase(self.state.scale(), phase);
            let size = layout.gap / divisor;
            surface.set_fill(color);
            surface.save();
            surface.scale(sc, sc);
            surface.fill_rect(Rect::new(-size, -size, size, size));
            surface.restore();
        }
        surface.restore();
    }

    pub fn start_advancing(&mut self) -> bool {
        self.state.start_advancing()
    }

    pub fn advance(&mut self) -> AdvanceResult {
        self.state.advance()
    }

    /// Neighbor in `sweep` direction within a chain of `len` nodes.
    pub fn step(&self, sweep: Sweep, len: usize) -> Step {
        let next = match sweep {
            Sweep::Forward => self.index.checked_add(1).filter(|&i| i < len),
            Sweep::Backward => self.index.checked_sub(1),
        };
        match next {
            Some(i) => Step::Moved(i),
            None => Step::Boundary,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/node.rs"]
mod tests;
