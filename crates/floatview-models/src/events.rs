use serde::{Deserialize, Serialize};

/// Asynchronous notifications from the external presentation surface. The
/// coordinator treats `Entered` / `Exited` as the authoritative completion
/// events for an attempted hand-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PortEvent {
    /// The external surface took ownership of presentation.
    Entered,
    /// The external surface relinquished presentation.
    Exited,
    /// The external system rejected the last enter attempt.
    Failed { reason: String },
    /// "Externally presentable now" flipped. Can change at any time,
    /// independent of media state or caller intent.
    CapabilityChanged { capable: bool },
}

/// Outward notifications emitted by the coordinator for whoever embeds it
/// (UI chrome, channel glue). Delivery is best-effort broadcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    ReadinessChanged { readiness: crate::MediaReadiness },
    HandoffEntered,
    HandoffExited { position_ms: Option<i64> },
    HandoffFailed { reason: String },
    GateTimedOut,
    PlaybackEnded,
    PositionSampled { position_ms: i64 },
}
