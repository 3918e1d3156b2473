use floatview_models::MediaLocator;

use crate::error::MediaError;

/// The in-process media player as the coordinator sees it. Implemented
/// once per platform; the coordinator never inspects concrete player
/// types.
///
/// Status, buffer and surface changes are not pulled through this trait:
/// the platform glue pushes them into the session as
/// [`PlayerSignal`](floatview_models::PlayerSignal)s and surface-ready
/// flags, feeding the single reconciliation entry point.
pub trait MediaSource: Send + 'static {
    /// Load the given media and optionally cue it to a starting position.
    /// Replaces whatever was prepared before.
    fn prepare(
        &mut self,
        locator: &MediaLocator,
        start_position_ms: Option<i64>,
    ) -> Result<(), MediaError>;

    fn play(&mut self);

    fn pause(&mut self);

    /// Seek to an absolute position. Implementations that are not ready
    /// yet may ignore this; the coordinator re-applies pending seeks once
    /// the item reports ready.
    fn seek(&mut self, position_ms: i64);

    /// Most recent confirmed playback position, if the player knows one.
    fn current_position_ms(&self) -> Option<i64>;
}
