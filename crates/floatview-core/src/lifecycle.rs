use floatview_models::{HostEvent, LifecycleState};

/// Folds host activation-state notifications into a single
/// [`LifecycleState`], deduplicated against spurious repeats. Also keeps a
/// scene hint (the last scene identifier seen on a transition) so that
/// reconciliation begun under one scene is not resumed under an unrelated
/// scene after a fast app-switch.
#[derive(Debug)]
pub struct LifecycleTracker {
    state: LifecycleState,
    scene_hint: Option<String>,
}

impl LifecycleTracker {
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Active,
            scene_hint: None,
        }
    }

    /// Apply one host event. Returns the new state only when it actually
    /// changed; repeated identical events collapse to nothing.
    pub fn on_host_event(&mut self, event: &HostEvent) -> Option<LifecycleState> {
        let next = match event {
            HostEvent::WillResignActive => self.state_for(LifecycleState::TransitioningOut),
            HostEvent::DidEnterBackground => self.state_for(LifecycleState::Background),
            HostEvent::WillDeactivateScene { scene } => {
                self.scene_hint = Some(scene.clone());
                self.state_for(LifecycleState::TransitioningOut)
            }
            HostEvent::DidBecomeActive { scene } => {
                if let Some(scene) = scene {
                    self.scene_hint = Some(scene.clone());
                }
                self.state_for(LifecycleState::Active)
            }
        };
        match next {
            Some(state) => {
                self.state = state;
                Some(state)
            }
            None => None,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn scene_hint(&self) -> Option<&str> {
        self.scene_hint.as_deref()
    }

    fn state_for(&self, target: LifecycleState) -> Option<LifecycleState> {
        if self.state == target {
            None
        } else {
            Some(target)
        }
    }
}

impl Default for LifecycleTracker {
    fn default() -> Self {
        Self::new()
    }
}
