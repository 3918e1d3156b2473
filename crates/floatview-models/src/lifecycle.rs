use serde::{Deserialize, Serialize};

/// Activation-state notifications pushed by the host runtime. The
/// coordinator never forces a transition, only reacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// The application is about to lose foreground-active state.
    WillResignActive,
    /// The application moved to the background.
    DidEnterBackground,
    /// A specific scene is about to deactivate.
    WillDeactivateScene { scene: String },
    /// The application (optionally a specific scene) became active again.
    DidBecomeActive { scene: Option<String> },
}

/// Aggregated host activation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    Active,
    TransitioningOut,
    Background,
}
