pub mod capability;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod events;
pub mod handoff;
pub mod lifecycle;
pub mod media;
pub mod pending;
pub mod readiness;

pub use config::CoordinatorConfig;
pub use coordinator::{SessionCoordinator, SessionHandle};
pub use error::{MediaError, SessionError};
pub use events::SessionEvents;
pub use handoff::HandoffPort;
pub use media::MediaSource;
