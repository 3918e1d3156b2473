use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lifecycle::LifecycleState;
use crate::locator::MediaLocator;
use crate::readiness::MediaReadiness;

/// Direction of a caller request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestDirection {
    Enter,
    Exit,
}

/// Where the coordinator currently is in the hand-off lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    AwaitingReadiness,
    Entering,
    HandedOff,
    Exiting,
}

/// Best-effort view of the session, readable at any time, including after
/// teardown (values may be stale).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Most recent media-time sample, in milliseconds.
    pub last_known_position_ms: Option<i64>,
    /// Whether the external surface currently owns presentation.
    pub is_handoff_active: bool,
    /// When the position was last sampled.
    pub sampled_at: Option<DateTime<Utc>>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            last_known_position_ms: None,
            is_handoff_active: false,
            sampled_at: None,
        }
    }
}

/// Caller options for an enter request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnterOptions {
    /// Media to prepare before entering. `None` reuses whatever is already
    /// prepared.
    pub locator: Option<MediaLocator>,
    /// Position to cue before entering, in milliseconds.
    pub position_ms: Option<i64>,
    /// Allow the hand-off to start while the host is still
    /// foreground-active.
    #[serde(default)]
    pub force_foreground: bool,
    /// Keep the enter intent armed after a rejected attempt so the next
    /// readiness tick retries silently.
    #[serde(default)]
    pub retry_on_failure: bool,
}

impl EnterOptions {
    pub fn with_locator(locator: MediaLocator) -> Self {
        Self {
            locator: Some(locator),
            ..Self::default()
        }
    }
}

/// Point-in-time diagnostic view of the coordinator, for callers that want
/// to display or log the full picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatorStatus {
    pub phase: SessionPhase,
    pub readiness: MediaReadiness,
    pub lifecycle: LifecycleState,
    pub capable: bool,
    pub auto_trigger_armed: bool,
    pub is_playing: bool,
    pub position_ms: Option<i64>,
}
