//! stepmore renders a row of square nodes that reveal themselves one click
//! at a time.
//!
//! Each press animates the current node through one full segment: a
//! nested-square reveal from 0 to 1 (or back from 1 to 0). When the
//! segment completes the cursor moves to the next node; at either end of
//! the row the sweep reverses, so repeated presses walk back and forth.
//!
//! # Architecture
//!
//! - [`ScaleState`]: per-node progress with a fixed-step, snap-at-target
//!   update rule.
//! - [`Clock`]: idempotent start/stop over an injected [`TimerPort`].
//! - [`Node`] / [`Sequence`]: the chain of nodes, the cursor and the sweep
//!   direction.
//! - [`Stage`]: routes presses and timer firings, redraws every tick.
//! - [`Surface`]: the drawing port. [`CpuSurface`] rasterizes with
//!   `vello_cpu`, [`RecordingSurface`] records calls.
//!
//! Everything runs on one thread; time only advances when the host (or a
//! [`VirtualTimers`] instance) fires a timer.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod foundation;
mod render;
mod sequence;
mod stage;

pub use animation::clock::{Clock, TICK_INTERVAL};
pub use animation::scale::{AdvanceResult, Motion, SCALE_STEP, ScaleState};
pub use animation::timer::{TimerHandle, TimerPort, VirtualTimers};
pub use config::{ACCENT, BACKGROUND, CONTRAST, NODE_COUNT, RedrawPolicy, StageConfig};
pub use foundation::core::{Affine, Canvas, FrameIndex, Rect, Rgba8, Vec2};
pub use foundation::error::{StepmoreError, StepmoreResult};
pub use foundation::math::reveal_phase;
pub use render::FrameRGBA;
pub use render::cpu::CpuSurface;
pub use render::pipeline::{RenderStats, Session, render_interactions, write_png};
pub use render::surface::{DrawCmd, RecordingSurface, Surface};
pub use sequence::controller::{NodeSnapshot, Sequence};
pub use sequence::node::{Node, NodeLayout, Step, Sweep};
pub use stage::{Stage, StageSnapshot, TickOutcome};
