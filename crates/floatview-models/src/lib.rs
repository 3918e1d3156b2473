pub mod events;
pub mod lifecycle;
pub mod locator;
pub mod readiness;
pub mod session;

pub use events::{PortEvent, SessionEvent};
pub use lifecycle::{HostEvent, LifecycleState};
pub use locator::MediaLocator;
pub use readiness::{ItemStatus, MediaReadiness, PlayerSignal};
pub use session::{
    CoordinatorStatus, EnterOptions, RequestDirection, SessionPhase, SessionSnapshot,
};
