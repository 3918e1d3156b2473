use std::fs;
use std::path::Path;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Tunables for the reconciliation loop. The retry bound was never pinned
/// down by product, so both the tick interval and the tick cap are
/// configuration rather than constants.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoordinatorConfig {
    /// Interval between gate re-checks while an enter request is waiting,
    /// in milliseconds.
    #[serde(default = "default_gate_tick_ms")]
    pub gate_tick_ms: u64,
    /// Number of gate ticks before a waiting enter request resolves with
    /// `GateTimeout`.
    #[serde(default = "default_max_gate_ticks")]
    pub max_gate_ticks: u32,
    /// Interval between media position samples while playing, in
    /// milliseconds.
    #[serde(default = "default_position_sample_ms")]
    pub position_sample_ms: u64,
    /// Proactively reclaim the external surface when the host returns to
    /// the foreground.
    #[serde(default = "default_auto_exit_on_foreground")]
    pub auto_exit_on_foreground: bool,
    /// Capacity of the outward session event channel.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

fn default_gate_tick_ms() -> u64 {
    100
}

fn default_max_gate_ticks() -> u32 {
    10
}

fn default_position_sample_ms() -> u64 {
    500
}

fn default_auto_exit_on_foreground() -> bool {
    true
}

fn default_event_capacity() -> usize {
    256
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            gate_tick_ms: default_gate_tick_ms(),
            max_gate_ticks: default_max_gate_ticks(),
            position_sample_ms: default_position_sample_ms(),
            auto_exit_on_foreground: default_auto_exit_on_foreground(),
            event_capacity: default_event_capacity(),
        }
    }
}

impl CoordinatorConfig {
    /// Load from a TOML file, falling back to defaults for missing keys.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make the gate degenerate.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.gate_tick_ms == 0 {
            bail!("gate_tick_ms must be > 0");
        }
        if self.max_gate_ticks == 0 {
            bail!("max_gate_ticks must be > 0");
        }
        if self.position_sample_ms == 0 {
            bail!("position_sample_ms must be > 0");
        }
        Ok(())
    }
}
