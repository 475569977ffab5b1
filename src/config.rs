use std::path::Path;

use crate::foundation::{
    core::{Canvas, Rgba8},
    error::{StepmoreError, StepmoreResult},
};

/// Number of nodes in the sweep.
pub const NODE_COUNT: usize = 5;

/// Surface fill behind the nodes.
pub const BACKGROUND: Rgba8 = Rgba8::opaque(0xBD, 0xBD, 0xBD);
/// Outer square fill.
pub const ACCENT: Rgba8 = Rgba8::opaque(0x45, 0x27, 0xA0);
/// Inner square fill.
pub const CONTRAST: Rgba8 = Rgba8::WHITE;

/// Which nodes a tick repaints after clearing the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedrawPolicy {
    /// Every node, so settled nodes stay visible after the clear.
    #[default]
    AllNodes,
    /// Only the node currently being animated.
    CurrentOnly,
}

/// Stage settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub viewport: Canvas,
    pub redraw: RedrawPolicy,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            viewport: Canvas {
                width: 600,
                height: 400,
            },
            redraw: RedrawPolicy::default(),
        }
    }
}

impl StageConfig {
    pub fn validate(&self) -> StepmoreResult<()> {
        self.viewport.validate()
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> StepmoreResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> StepmoreResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|err| {
            StepmoreError::Other(
                anyhow::Error::new(err).context(format!("read config '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
