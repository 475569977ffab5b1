use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::timer::VirtualTimers,
    config::StageConfig,
    foundation::core::FrameIndex,
    foundation::error::{StepmoreError, StepmoreResult},
    render::{FrameRGBA, cpu::CpuSurface, surface::Surface},
    stage::{Stage, TickOutcome},
};

/// A stage driven by virtual time, for headless runs and tests.
#[derive(Debug)]
pub struct Session {
    stage: Stage,
    timers: VirtualTimers,
}

impl Session {
    pub fn new(config: StageConfig) -> StepmoreResult<Self> {
        Ok(Self {
            stage: Stage::new(config)?,
            timers: VirtualTimers::new(),
        })
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn timers(&self) -> &VirtualTimers {
        &self.timers
    }

    /// Simulate a pointer press.
    pub fn press(&mut self) -> bool {
        self.stage.press(&mut self.timers)
    }

    /// Fire the next due timer into `surface`. Returns `None` once no timer
    /// is pending.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<TickOutcome> {
        loop {
            let handle = self.timers.fire_next()?;
            if let Some(outcome) = self.stage.on_timer(handle, surface, &mut self.timers) {
                return Some(outcome);
            }
        }
    }

    /// Like [`Session::step`], rasterizing the tick into a fresh frame.
    pub fn step_frame(&mut self) -> StepmoreResult<Option<(TickOutcome, FrameRGBA)>> {
        let mut surface = CpuSurface::new(self.stage.config().viewport)?;
        Ok(self
            .step(&mut surface)
            .map(|outcome| (outcome, surface.finish())))
    }

    /// Tick until the clock stops. Returns the number of ticks run.
    pub fn settle<S: Surface + ?Sized>(&mut self, surface: &mut S) -> u64 {
        let mut ticks = 0;
        while self.step(surface).is_some() {
            ticks += 1;
        }
        ticks
    }

    /// Rasterize the stage as it stands, without advancing anything.
    pub fn render_current(&self) -> StepmoreResult<FrameRGBA> {
        let mut surface = CpuSurface::new(self.stage.config().viewport)?;
        self.stage.render(&mut surface);
        Ok(surface.finish())
    }
}

/// Counters reported by [`render_interactions`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    pub clicks: u64,
    pub frames_rendered: u64,
    pub segments_completed: u64,
}

/// Simulate `clicks` presses, each followed by ticking until the clock
/// stops, and hand every tick's frame to `sink`.
///
/// A final frame showing the settled stage is emitted after the last click.
#[tracing::instrument(skip(config, sink))]
pub fn render_interactions<F>(
    config: StageConfig,
    clicks: u64,
    mut sink: F,
) -> StepmoreResult<RenderStats>
where
    F: FnMut(FrameIndex, FrameRGBA) -> StepmoreResult<()>,
{
    let mut session = Session::new(config)?;
    let mut stats = RenderStats::default();

    for _ in 0..clicks {
        session.press();
        stats.clicks += 1;
        while let Some((outcome, frame)) = session.step_frame()? {
            sink(FrameIndex(stats.frames_rendered), frame)?;
            stats.frames_rendered += 1;
            if outcome.result.is_complete() {
                stats.segments_completed += 1;
            }
        }
    }

    sink(FrameIndex(stats.frames_rendered), session.render_current()?)?;
    stats.frames_rendered += 1;

    tracing::info!(
        clicks = stats.clicks,
        frames = stats.frames_rendered,
        segments = stats.segments_completed,
        "render complete"
    );
    Ok(stats)
}

/// Write `frame` as an RGBA8 PNG, creating parent directories.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> StepmoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    if frame.data.len() != frame.width as usize * frame.height as usize * 4 {
        return Err(StepmoreError::render("frame byte length mismatch"));
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
