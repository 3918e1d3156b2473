use chrono::{DateTime, Utc};
use tokio::sync::oneshot;

use crate::error::SessionError;

/// A single in-flight caller request holding the responder that must be
/// invoked exactly once.
///
/// The exactly-once discipline is structural: the responder is consumed by
/// value on the first `resolve()` and the slot holds `None` afterwards, so
/// a second resolution has nothing left to fire. Dropping an unresolved
/// request closes the responder, which the caller observes as
/// `SessionClosed` rather than silence.
#[derive(Debug)]
pub struct PendingRequest<T> {
    responder: Option<oneshot::Sender<Result<T, SessionError>>>,
    pub created_at: DateTime<Utc>,
    pub armed_for_retry: bool,
}

impl<T> PendingRequest<T> {
    pub fn new(responder: oneshot::Sender<Result<T, SessionError>>) -> Self {
        Self {
            responder: Some(responder),
            created_at: Utc::now(),
            armed_for_retry: false,
        }
    }

    /// Install a new request into `slot`. If a request of the same
    /// direction is already pending it is resolved with `Superseded` first,
    /// strictly before the new one can reach any terminal outcome. A
    /// responder is never silently dropped.
    pub fn arm(
        slot: &mut Option<PendingRequest<T>>,
        responder: oneshot::Sender<Result<T, SessionError>>,
    ) {
        if let Some(mut old) = slot.take() {
            old.resolve(Err(SessionError::Superseded));
        }
        *slot = Some(PendingRequest::new(responder));
    }

    /// Fire the responder. Idempotent: the second and later calls are
    /// no-ops. Returns whether this call actually delivered the result.
    pub fn resolve(&mut self, result: Result<T, SessionError>) -> bool {
        match self.responder.take() {
            Some(responder) => {
                // A dropped receiver just means the caller stopped waiting.
                let _ = responder.send(result);
                true
            }
            None => false,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.responder.is_none()
    }
}

/// Resolve and clear a pending slot in one step. No-op on an empty slot.
pub fn resolve_slot<T>(slot: &mut Option<PendingRequest<T>>, result: Result<T, SessionError>) {
    if let Some(mut pending) = slot.take() {
        pending.resolve(result);
    }
}
