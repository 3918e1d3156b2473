/// Tracks whether the external presentation mode is technically startable
/// right now, plus the auto-trigger arming flag.
///
/// Capability can flip true/false at any time, independent of intent or
/// media state. The auto-trigger flag must be held high only while enter
/// intent exists and media is actively playing; a stale armed flag lets the
/// external runtime auto-start a hand-off the application no longer wants.
#[derive(Debug)]
pub struct CapabilityGate {
    capable: bool,
    auto_trigger_armed: bool,
}

impl CapabilityGate {
    pub fn new() -> Self {
        Self {
            capable: false,
            auto_trigger_armed: false,
        }
    }

    /// Overwrite current capability. Returns `true` if the value changed.
    pub fn set_capable(&mut self, capable: bool) -> bool {
        if self.capable == capable {
            return false;
        }
        self.capable = capable;
        true
    }

    pub fn is_capable(&self) -> bool {
        self.capable
    }

    /// Arm or drop the auto-trigger flag. Returns `true` if the value
    /// changed.
    pub fn arm_auto_trigger(&mut self, armed: bool) -> bool {
        if self.auto_trigger_armed == armed {
            return false;
        }
        self.auto_trigger_armed = armed;
        true
    }

    pub fn is_auto_trigger_armed(&self) -> bool {
        self.auto_trigger_armed
    }

    /// Drop back to the initial state. Capability itself is owned by port
    /// notifications, so only the arming flag is cleared.
    pub fn reset(&mut self) {
        self.auto_trigger_armed = false;
    }
}

impl Default for CapabilityGate {
    fn default() -> Self {
        Self::new()
    }
}
