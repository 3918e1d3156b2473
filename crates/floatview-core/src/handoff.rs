/// The external presentation surface as the coordinator sees it: one
/// implementation per target platform, owned exclusively by the session
/// coordinator. Nothing else may call `attempt_enter` / `attempt_exit`.
///
/// Both attempts are fire-and-forget: the coordinator does not block on
/// them and resumes only when the platform glue pushes the matching
/// [`PortEvent`](floatview_models::PortEvent) (`Entered`, `Exited`,
/// `Failed`) back into the session. Those events are authoritative; the
/// return of an attempt call means nothing.
pub trait HandoffPort: Send + 'static {
    /// Whether the platform can ever host an external presentation. A
    /// `false` here fails enter requests immediately with `Unsupported`.
    fn is_supported(&self) -> bool;

    /// Ask the external system to take over presentation.
    fn attempt_enter(&mut self);

    /// Ask the external system to give presentation back.
    fn attempt_exit(&mut self);

    /// Whether the external surface currently owns presentation, as far as
    /// the platform knows.
    fn is_active(&self) -> bool;
}
