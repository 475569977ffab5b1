use crate::{
    animation::{
        clock::Clock,
        scale::AdvanceResult,
        timer::{TimerHandle, TimerPort},
    },
    config::{BACKGROUND, NODE_COUNT, StageConfig},
    foundation::error::StepmoreResult,
    render::surface::Surface,
    sequence::{
        controller::{NodeSnapshot, Sequence},
        node::{NodeLayout, Sweep},
    },
};

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TickOutcome {
    /// Node that was advanced on this tick.
    pub node: usize,
    pub result: AdvanceResult,
    /// Whether the clock is still running after the tick.
    pub clock_active: bool,
}

/// Serializable view of the whole stage.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StageSnapshot {
    pub current: usize,
    pub sweep: Sweep,
    pub animating: bool,
    pub clock_active: bool,
    pub nodes: Vec<NodeSnapshot>,
}

/// Wires pointer presses and timer ticks to the sequence and the clock.
///
/// The stage never owns the host timer; every call that may start or stop
/// the clock takes the [`TimerPort`] to register with.
#[derive(Debug)]
pub struct Stage {
    config: StageConfig,
    layout: NodeLayout,
    sequence: Sequence,
    clock: Clock,
}

impl Stage {
    pub fn new(config: StageConfig) -> StepmoreResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            layout: NodeLayout::new(config.viewport, NODE_COUNT),
            sequence: Sequence::new(NODE_COUNT),
            clock: Clock::default(),
        })
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn is_animating(&self) -> bool {
        self.clock.is_active()
    }

    /// Primary pointer press. Returns whether a new segment started.
    #[tracing::instrument(skip_all, fields(node = self.sequence.current_index()))]
    pub fn press<T: TimerPort + ?Sized>(&mut self, timers: &mut T) -> bool {
        if !self.sequence.begin_interaction() {
            tracing::debug!("press ignored, segment in flight");
            return false;
        }
        self.clock.start(timers);
        true
    }

    /// Deliver a timer firing. Handles not owned by this stage's clock are
    /// ignored and yield `None`.
    #[tracing::instrument(skip_all, fields(handle = handle.0))]
    pub fn on_timer<S, T>(
        &mut self,
        handle: TimerHandle,
        surface: &mut S,
        timers: &mut T,
    ) -> Option<TickOutcome>
    where
        S: Surface + ?Sized,
        T: TimerPort + ?Sized,
    {
        if self.clock.handle() != Some(handle) {
            return None;
        }
        Some(self.tick(surface, timers))
    }

    /// Redraw, advance the current node, and stop the clock once its
    /// segment completes.
    pub fn tick<S, T>(&mut self, surface: &mut S, timers: &mut T) -> TickOutcome
    where
        S: Surface + ?Sized,
        T: TimerPort + ?Sized,
    {
        self.render(surface);
        let node = self.sequence.current_index();
        let result = self.sequence.advance_once();
        tracing::trace!(node, scale = self.sequence.nodes()[node].state().scale(), "tick");
        if result.is_complete() {
            self.clock.stop(timers);
        }
        TickOutcome {
            node,
            result,
            clock_active: self.clock.is_active(),
        }
    }

    /// Clear the surface to the background and draw the nodes.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.save();
        surface.set_fill(BACKGROUND);
        surface.fill_rect(self.config.viewport.bounds());
        surface.restore();
        self.sequence.draw(surface, &self.layout, self.config.redraw);
    }

    pub fn snapshot(&self) -> StageSnapshot {
        StageSnapshot {
            current: self.sequence.current_index(),
            sweep: self.sequence.sweep(),
            animating: self.sequence.is_animating(),
            clock_active: self.clock.is_active(),
            nodes: self.sequence.node_snapshots(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/stage.rs"]
mod tests;
