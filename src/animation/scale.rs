/// Progress added per [`ScaleState::advance`] call.
pub const SCALE_STEP: f64 = 0.05;

/// Which way a node's scale is currently moving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// No segment in flight.
    #[default]
    Idle,
    /// Moving from 0 towards 1.
    Opening,
    /// Moving from 1 towards 0.
    Closing,
}

impl Motion {
    /// Signed unit of travel: `0`, `+1` or `-1`.
    pub fn sign(self) -> f64 {
        match self {
            Self::Idle => 0.0,
            Self::Opening => 1.0,
            Self::Closing => -1.0,
        }
    }

    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}

/// Outcome of one animation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceResult {
    /// The segment is still in flight (or nothing is animating).
    Continuing,
    /// The segment reached its target on this step.
    SegmentComplete,
}

impl AdvanceResult {
    pub fn is_complete(self) -> bool {
        self == Self::SegmentComplete
    }
}

/// Per-node animation progress with a target-seeking update rule.
///
/// `scale` walks from `committed` towards `committed + motion.sign()` in
/// fixed steps. Once a full unit has been covered it snaps to the exact
/// endpoint, so the committed value is always exactly `0.0` or `1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ScaleState {
    scale: f64,
    motion: Motion,
    committed: f64,
}

impl ScaleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn committed(&self) -> f64 {
        self.committed
    }

    pub fn is_animating(&self) -> bool {
        !self.motion.is_idle()
    }

    /// Begin a segment towards the opposite endpoint.
    ///
    /// Returns `false` without touching the state when a segment is already
    /// in flight.
    pub fn start_advancing(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        // 1 - 2 * committed: grow from 0, shrink from 1.
        self.motion = if self.committed < 0.5 {
            Motion::Opening
        } else {
            Motion::Closing
        };
        true
    }

    /// Move one step; report whether this step completed the segment.
    pub fn advance(&mut self) -> AdvanceResult {
        if self.motion.is_idle() {
            return AdvanceResult::Continuing;
        }

        let dir = self.motion.sign();
        self.scale += SCALE_STEP * dir;
        if (self.scale - self.committed).abs() > 1.0 {
            self.scale = self.committed + dir;
            self.motion = Motion::Idle;
            self.committed = self.scale;
            return AdvanceResult::SegmentComplete;
        }
        AdvanceResult::Continuing
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scale.rs"]
mod tests;
