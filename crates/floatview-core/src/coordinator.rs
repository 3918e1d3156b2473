//! The session coordinator: a single-actor state machine that decides when
//! a prepared media session may be handed off to the externally-hosted
//! presentation surface, and when it must be reclaimed.
//!
//! All state mutation happens on one tokio task. Caller requests, player
//! signals, host lifecycle events, port events and timer ticks are all
//! marshalled into one command channel and processed sequentially, so no
//! two reconciliation passes can ever run concurrently.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};
use uuid::Uuid;

use floatview_models::{
    CoordinatorStatus, EnterOptions, HostEvent, LifecycleState, MediaLocator, PlayerSignal,
    PortEvent, SessionEvent, SessionPhase, SessionSnapshot,
};

use crate::capability::CapabilityGate;
use crate::config::CoordinatorConfig;
use crate::error::SessionError;
use crate::events::SessionEvents;
use crate::handoff::HandoffPort;
use crate::lifecycle::LifecycleTracker;
use crate::media::MediaSource;
use crate::pending::{resolve_slot, PendingRequest};
use crate::readiness::ReadinessTracker;

/// Command channel depth. Producers are the handle and platform glue, both
/// of which await capacity, so a modest buffer is enough.
const COMMAND_BUFFER: usize = 64;

enum Command {
    Prepare {
        locator: MediaLocator,
        position_ms: Option<i64>,
        respond: oneshot::Sender<Result<(), SessionError>>,
    },
    RequestEnter {
        options: EnterOptions,
        respond: oneshot::Sender<Result<bool, SessionError>>,
    },
    RequestExit {
        respond: oneshot::Sender<Result<Option<i64>, SessionError>>,
    },
    Play,
    Pause,
    Seek {
        position_ms: i64,
    },
    Host(HostEvent),
    Player(PlayerSignal),
    SurfaceReady(bool),
    Port(PortEvent),
    IsCapable {
        respond: oneshot::Sender<bool>,
    },
    Status {
        respond: oneshot::Sender<CoordinatorStatus>,
    },
}

/// Cloneable caller-facing handle. The coordinator itself is owned by its
/// task; the handle is what gets dependency-injected into whichever
/// component needs the session. Dropping every handle shuts the session
/// down.
#[derive(Clone)]
pub struct SessionHandle {
    session_id: Uuid,
    commands: mpsc::Sender<Command>,
    snapshot: watch::Receiver<SessionSnapshot>,
    events: SessionEvents,
}

impl SessionHandle {
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Prepare media without entering the external surface.
    pub async fn prepare(
        &self,
        locator: MediaLocator,
        position_ms: Option<i64>,
    ) -> Result<(), SessionError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Prepare {
            locator,
            position_ms,
            respond: tx,
        })
        .await?;
        rx.await.map_err(|_| SessionError::SessionClosed)?
    }

    /// Request a hand-off to the external surface. Resolves exactly once:
    /// `Ok(true)` when the surface took over (or already owned
    /// presentation), or one of the [`SessionError`] outcomes.
    pub async fn request_enter(&self, options: EnterOptions) -> Result<bool, SessionError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::RequestEnter {
            options,
            respond: tx,
        })
        .await?;
        rx.await.map_err(|_| SessionError::SessionClosed)?
    }

    /// Reclaim presentation from the external surface. Resolves with the
    /// last known playback position once the surface has let go.
    pub async fn request_exit(&self) -> Result<Option<i64>, SessionError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::RequestExit { respond: tx }).await?;
        rx.await.map_err(|_| SessionError::SessionClosed)?
    }

    pub async fn play(&self) -> Result<(), SessionError> {
        self.send(Command::Play).await
    }

    pub async fn pause(&self) -> Result<(), SessionError> {
        self.send(Command::Pause).await
    }

    /// Seek to an absolute position. Applied immediately when the item is
    /// ready, held as the pending cue point otherwise.
    pub async fn seek(&self, position_ms: i64) -> Result<(), SessionError> {
        self.send(Command::Seek { position_ms }).await
    }

    /// Push a host lifecycle notification into the session.
    pub async fn host_event(&self, event: HostEvent) -> Result<(), SessionError> {
        self.send(Command::Host(event)).await
    }

    /// Push a media sub-signal into the session.
    pub async fn player_signal(&self, signal: PlayerSignal) -> Result<(), SessionError> {
        self.send(Command::Player(signal)).await
    }

    /// Push the presentation host's ready-for-display flag.
    pub async fn surface_ready(&self, ready: bool) -> Result<(), SessionError> {
        self.send(Command::SurfaceReady(ready)).await
    }

    /// Push a notification from the external presentation surface.
    pub async fn port_event(&self, event: PortEvent) -> Result<(), SessionError> {
        self.send(Command::Port(event)).await
    }

    /// Whether a hand-off could be hosted right now.
    pub async fn is_capable(&self) -> bool {
        let (tx, rx) = oneshot::channel();
        if self.send(Command::IsCapable { respond: tx }).await.is_err() {
            return false;
        }
        rx.await.unwrap_or(false)
    }

    /// Full diagnostic view of the coordinator.
    pub async fn status(&self) -> Result<CoordinatorStatus, SessionError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Status { respond: tx }).await?;
        rx.await.map_err(|_| SessionError::SessionClosed)
    }

    /// Most recent position sample. Readable at any time, including after
    /// teardown; the value may be stale.
    pub fn current_position(&self) -> Option<i64> {
        self.snapshot.borrow().last_known_position_ms
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to outward session notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    async fn send(&self, command: Command) -> Result<(), SessionError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| SessionError::SessionClosed)
    }
}

/// The coordinator state machine. Constructed and consumed by
/// [`SessionCoordinator::spawn`]; all fields live on the actor task.
pub struct SessionCoordinator {
    session_id: Uuid,
    config: CoordinatorConfig,
    media: Box<dyn MediaSource>,
    port: Box<dyn HandoffPort>,

    readiness: ReadinessTracker,
    lifecycle: LifecycleTracker,
    gate: CapabilityGate,

    phase: SessionPhase,
    pending_enter: Option<PendingRequest<bool>>,
    pending_exit: Option<PendingRequest<Option<i64>>>,
    attempt_in_flight: bool,
    retry_intent: bool,
    force_foreground: bool,
    armed_scene: Option<String>,
    gate_ticks: u32,

    is_playing: bool,
    pending_seek_ms: Option<i64>,
    current_locator: Option<MediaLocator>,
    exit_position_ms: Option<i64>,

    snapshot: watch::Sender<SessionSnapshot>,
    events: SessionEvents,
}

impl SessionCoordinator {
    /// Spawn the coordinator task and return the caller-facing handle.
    pub fn spawn(
        media: Box<dyn MediaSource>,
        port: Box<dyn HandoffPort>,
        config: CoordinatorConfig,
    ) -> SessionHandle {
        let (commands, rx) = mpsc::channel(COMMAND_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(SessionSnapshot::default());
        let events = SessionEvents::new(config.event_capacity);
        let session_id = Uuid::new_v4();

        let coordinator = Self {
            session_id,
            config,
            media,
            port,
            readiness: ReadinessTracker::new(),
            lifecycle: LifecycleTracker::new(),
            gate: CapabilityGate::new(),
            phase: SessionPhase::Idle,
            pending_enter: None,
            pending_exit: None,
            attempt_in_flight: false,
            retry_intent: false,
            force_foreground: false,
            armed_scene: None,
            gate_ticks: 0,
            is_playing: false,
            pending_seek_ms: None,
            current_locator: None,
            exit_position_ms: None,
            snapshot: snapshot_tx,
            events: events.clone(),
        };
        tokio::spawn(coordinator.run(rx));

        SessionHandle {
            session_id,
            commands,
            snapshot: snapshot_rx,
            events,
        }
    }

    async fn run(mut self, mut rx: mpsc::Receiver<Command>) {
        let mut gate_tick = time::interval(Duration::from_millis(self.config.gate_tick_ms));
        gate_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut sampler = time::interval(Duration::from_millis(self.config.position_sample_ms));
        sampler.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(session_id = %self.session_id, "session coordinator started");
        loop {
            tokio::select! {
                command = rx.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                _ = gate_tick.tick() => self.on_gate_tick(),
                _ = sampler.tick() => self.on_sample_tick(),
            }
        }
        self.shutdown();
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Prepare {
                locator,
                position_ms,
                respond,
            } => {
                let result = self.prepare_media(&locator, position_ms, false);
                let _ = respond.send(result);
            }
            Command::RequestEnter { options, respond } => {
                self.on_request_enter(options, respond);
            }
            Command::RequestExit { respond } => self.on_request_exit(respond),
            Command::Play => {
                if self.current_locator.is_some() {
                    self.media.play();
                    self.is_playing = true;
                }
            }
            Command::Pause => {
                self.media.pause();
                self.is_playing = false;
            }
            Command::Seek { position_ms } => self.apply_seek(position_ms),
            Command::Host(event) => {
                if let Some(state) = self.lifecycle.on_host_event(&event) {
                    self.on_lifecycle_changed(state);
                }
            }
            Command::Player(signal) => self.on_player_signal(signal),
            Command::SurfaceReady(ready) => {
                if let Some(readiness) = self.readiness.set_surface_ready(ready) {
                    self.events
                        .publish(SessionEvent::ReadinessChanged { readiness });
                    self.reconcile();
                }
            }
            Command::Port(event) => self.on_port_event(event),
            Command::IsCapable { respond } => {
                let _ = respond.send(self.port.is_supported() && self.gate.is_capable());
            }
            Command::Status { respond } => {
                let _ = respond.send(self.status());
            }
        }
        self.refresh_auto_trigger();
    }

    // ── Caller requests ──────────────────────────────────────────────────

    fn on_request_enter(
        &mut self,
        options: EnterOptions,
        respond: oneshot::Sender<Result<bool, SessionError>>,
    ) {
        if !self.port.is_supported() {
            let _ = respond.send(Err(SessionError::Unsupported));
            return;
        }
        match self.phase {
            SessionPhase::HandedOff => {
                // Double entry is a success, not an error.
                let _ = respond.send(Ok(true));
                return;
            }
            SessionPhase::Exiting => {
                let _ = respond.send(Err(SessionError::NotReady));
                return;
            }
            SessionPhase::Idle | SessionPhase::AwaitingReadiness | SessionPhase::Entering => {}
        }

        if let Some(locator) = options.locator {
            if self.current_locator.as_ref() != Some(&locator) {
                if let Err(err) = self.prepare_media(&locator, options.position_ms, true) {
                    let _ = respond.send(Err(err));
                    return;
                }
            }
        } else if self.current_locator.is_none() {
            let _ = respond.send(Err(SessionError::NotReady));
            return;
        }

        if let Some(position_ms) = options.position_ms {
            self.apply_seek(position_ms);
        }

        if self.port.is_active() {
            let _ = respond.send(Ok(true));
            return;
        }

        PendingRequest::arm(&mut self.pending_enter, respond);
        if let Some(pending) = self.pending_enter.as_mut() {
            pending.armed_for_retry = options.retry_on_failure;
        }
        self.retry_intent = options.retry_on_failure;
        self.force_foreground = options.force_foreground;
        self.armed_scene = self.lifecycle.scene_hint().map(str::to_string);
        self.gate_ticks = 0;
        if self.phase == SessionPhase::Idle {
            self.phase = SessionPhase::AwaitingReadiness;
        }
        debug!(
            session_id = %self.session_id,
            phase = ?self.phase,
            "enter requested"
        );
        self.reconcile();
    }

    fn on_request_exit(&mut self, respond: oneshot::Sender<Result<Option<i64>, SessionError>>) {
        let position = self.best_position();
        match self.phase {
            SessionPhase::Idle => {
                let _ = respond.send(Ok(position));
                self.teardown("exit requested while idle");
            }
            SessionPhase::AwaitingReadiness | SessionPhase::Entering => {
                // Cancel the enter intent synchronously; we never entered.
                // An already-dispatched attempt cannot be rescinded; a late
                // Entered is handled in on_port_event.
                resolve_slot(&mut self.pending_enter, Err(SessionError::Cancelled));
                self.phase = SessionPhase::Idle;
                self.clear_enter_intent();
                let _ = respond.send(Ok(position));
                self.teardown("enter cancelled by exit request");
            }
            SessionPhase::HandedOff => {
                PendingRequest::arm(&mut self.pending_exit, respond);
                self.exit_position_ms = position;
                self.phase = SessionPhase::Exiting;
                info!(session_id = %self.session_id, "exit requested; detaching external surface");
                self.port.attempt_exit();
            }
            SessionPhase::Exiting => {
                // Attempt already dispatched; just replace the responder.
                PendingRequest::arm(&mut self.pending_exit, respond);
                if self.exit_position_ms.is_none() {
                    self.exit_position_ms = position;
                }
            }
        }
    }

    // ── Tracker notifications ────────────────────────────────────────────

    fn on_player_signal(&mut self, signal: PlayerSignal) {
        if signal == PlayerSignal::PlaybackEnded {
            self.media.pause();
            self.is_playing = false;
            self.media.seek(0);
            self.pending_seek_ms = None;
            self.update_position(0);
            self.events.publish(SessionEvent::PlaybackEnded);
            return;
        }

        let change = self.readiness.update(&signal);

        // A seek issued before the item was ready is applied the moment it
        // confirms readiness.
        if self.readiness.item_ready() {
            if let Some(position_ms) = self.pending_seek_ms.take() {
                self.media.seek(position_ms);
                self.update_position(position_ms);
            }
        }

        if let Some(readiness) = change {
            debug!(session_id = %self.session_id, readiness = ?readiness, "readiness changed");
            self.events
                .publish(SessionEvent::ReadinessChanged { readiness });
            self.reconcile();
        }
    }

    fn on_lifecycle_changed(&mut self, state: LifecycleState) {
        debug!(session_id = %self.session_id, lifecycle = ?state, "lifecycle changed");
        if state == LifecycleState::Active
            && self.phase == SessionPhase::HandedOff
            && self.config.auto_exit_on_foreground
        {
            // Reclaim presentation the moment the host is back in the
            // foreground; a stuck external window is worse than an early
            // exit.
            info!(session_id = %self.session_id, "host active again; reclaiming presentation");
            self.exit_position_ms = self.best_position();
            self.phase = SessionPhase::Exiting;
            self.port.attempt_exit();
            return;
        }
        self.reconcile();
    }

    fn on_port_event(&mut self, event: PortEvent) {
        match event {
            PortEvent::Entered => self.on_entered(),
            PortEvent::Exited => self.on_exited(),
            PortEvent::Failed { reason } => self.on_enter_failed(reason),
            PortEvent::CapabilityChanged { capable } => {
                if self.gate.set_capable(capable) {
                    debug!(session_id = %self.session_id, capable, "capability changed");
                    self.reconcile();
                }
            }
        }
    }

    fn on_entered(&mut self) {
        self.attempt_in_flight = false;
        match self.phase {
            SessionPhase::Entering | SessionPhase::AwaitingReadiness => {
                resolve_slot(&mut self.pending_enter, Ok(true));
                self.phase = SessionPhase::HandedOff;
                self.clear_enter_intent();
                self.set_handoff_active(true);
                self.events.publish(SessionEvent::HandoffEntered);
                info!(session_id = %self.session_id, "external surface entered");
            }
            SessionPhase::Idle | SessionPhase::Exiting => {
                // The attempt landed after its intent was cancelled. Push
                // the surface straight back out.
                warn!(session_id = %self.session_id, "late external entry without intent; exiting");
                self.phase = SessionPhase::Exiting;
                self.port.attempt_exit();
            }
            SessionPhase::HandedOff => {}
        }
    }

    fn on_exited(&mut self) {
        match self.phase {
            SessionPhase::Exiting => self.finish_exit(),
            SessionPhase::HandedOff => {
                // The user dismissed the external surface directly.
                info!(session_id = %self.session_id, "external surface exited on its own");
                self.finish_exit();
            }
            _ => {}
        }
    }

    fn on_enter_failed(&mut self, reason: String) {
        self.attempt_in_flight = false;
        if self.phase != SessionPhase::Entering {
            return;
        }
        warn!(session_id = %self.session_id, reason = %reason, "hand-off attempt rejected");
        self.events.publish(SessionEvent::HandoffFailed {
            reason: reason.clone(),
        });
        let retry = self
            .pending_enter
            .as_ref()
            .map(|p| p.armed_for_retry)
            .unwrap_or(self.retry_intent);
        resolve_slot(
            &mut self.pending_enter,
            Err(SessionError::HandoffFailed(reason)),
        );
        if retry {
            // Intent persists: wait for the next tracker change or tick.
            self.phase = SessionPhase::AwaitingReadiness;
            self.gate_ticks = 0;
        } else {
            self.phase = SessionPhase::Idle;
            self.clear_enter_intent();
        }
    }

    fn finish_exit(&mut self) {
        let position = self.exit_position_ms.take().or_else(|| self.best_position());
        resolve_slot(&mut self.pending_exit, Ok(position));
        // An enter armed behind an exit can never complete now.
        resolve_slot(&mut self.pending_enter, Err(SessionError::Cancelled));
        self.phase = SessionPhase::Idle;
        self.set_handoff_active(false);
        self.events
            .publish(SessionEvent::HandoffExited { position_ms: position });
        info!(session_id = %self.session_id, position_ms = ?position, "external surface exited");
        self.teardown("hand-off exited");
    }

    // ── Reconciliation ───────────────────────────────────────────────────

    /// The single gate-evaluation pass. Run on every tracker mutation and
    /// on each fallback tick; safe to call from any of them because the
    /// `attempt_in_flight` flag keeps re-entrant evaluations from
    /// dispatching a second attempt.
    fn reconcile(&mut self) {
        if self.phase != SessionPhase::AwaitingReadiness {
            return;
        }

        // Reconciliation armed under one scene must not resume under an
        // unrelated scene after a fast app-switch.
        if let (Some(armed), Some(current)) = (self.armed_scene.as_deref(), self.lifecycle.scene_hint())
        {
            if armed != current {
                warn!(
                    session_id = %self.session_id,
                    armed_scene = %armed,
                    current_scene = %current,
                    "scene changed while waiting; cancelling enter intent"
                );
                resolve_slot(&mut self.pending_enter, Err(SessionError::Cancelled));
                self.phase = SessionPhase::Idle;
                self.clear_enter_intent();
                return;
            }
        }

        let lifecycle_ok =
            self.lifecycle.state() != LifecycleState::Active || self.force_foreground;
        let gate_open = self.readiness.is_displayable() && self.gate.is_capable() && lifecycle_ok;

        if gate_open && !self.attempt_in_flight {
            debug!(session_id = %self.session_id, "gate open; attempting hand-off");
            self.attempt_in_flight = true;
            self.phase = SessionPhase::Entering;
            self.port.attempt_enter();
        }
    }

    fn on_gate_tick(&mut self) {
        if self.phase != SessionPhase::AwaitingReadiness {
            return;
        }
        self.gate_ticks += 1;
        if self.gate_ticks >= self.config.max_gate_ticks {
            warn!(
                session_id = %self.session_id,
                ticks = self.gate_ticks,
                "gate never opened; giving up"
            );
            resolve_slot(&mut self.pending_enter, Err(SessionError::GateTimeout));
            self.events.publish(SessionEvent::GateTimedOut);
            self.phase = SessionPhase::Idle;
            self.clear_enter_intent();
        } else {
            self.reconcile();
        }
        self.refresh_auto_trigger();
    }

    fn on_sample_tick(&mut self) {
        if !self.is_playing || self.current_locator.is_none() {
            return;
        }
        let position = self
            .pending_seek_ms
            .or_else(|| self.media.current_position_ms());
        if let Some(position_ms) = position {
            self.update_position(position_ms);
            self.events
                .publish(SessionEvent::PositionSampled { position_ms });
        }
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn prepare_media(
        &mut self,
        locator: &MediaLocator,
        position_ms: Option<i64>,
        autoplay: bool,
    ) -> Result<(), SessionError> {
        if let Err(err) = self.media.prepare(locator, position_ms) {
            warn!(session_id = %self.session_id, locator = %locator, error = %err, "prepare failed");
            return Err(SessionError::NotReady);
        }
        info!(session_id = %self.session_id, locator = %locator, "media prepared");
        self.current_locator = Some(locator.clone());
        self.readiness.reset_item_signals();
        self.pending_seek_ms = position_ms;
        if let Some(position_ms) = position_ms {
            self.update_position(position_ms);
        }
        if autoplay {
            self.media.play();
            self.is_playing = true;
        }
        Ok(())
    }

    fn apply_seek(&mut self, position_ms: i64) {
        if self.readiness.item_ready() {
            self.media.seek(position_ms);
            self.pending_seek_ms = None;
        } else {
            // Hold the target until the item confirms readiness.
            self.pending_seek_ms = Some(position_ms);
        }
        self.update_position(position_ms);
    }

    /// Position to report right now: a pending seek target wins over the
    /// player's confirmed time, which wins over the last sample.
    fn best_position(&self) -> Option<i64> {
        self.pending_seek_ms
            .or_else(|| self.media.current_position_ms())
            .or_else(|| self.snapshot.borrow().last_known_position_ms)
    }

    fn update_position(&mut self, position_ms: i64) {
        self.snapshot.send_modify(|snapshot| {
            snapshot.last_known_position_ms = Some(position_ms);
            snapshot.sampled_at = Some(Utc::now());
        });
    }

    fn set_handoff_active(&mut self, active: bool) {
        self.snapshot.send_modify(|snapshot| {
            snapshot.is_handoff_active = active;
        });
    }

    fn clear_enter_intent(&mut self) {
        self.retry_intent = false;
        self.force_foreground = false;
        self.armed_scene = None;
        self.gate_ticks = 0;
    }

    /// The auto-trigger flag may be armed only while enter intent exists
    /// and media is actively playing; it drops the instant either goes
    /// away. A stale armed flag lets the external runtime start a hand-off
    /// nobody wants anymore.
    fn refresh_auto_trigger(&mut self) {
        let intent = matches!(
            self.phase,
            SessionPhase::AwaitingReadiness | SessionPhase::Entering
        );
        let desired = intent && self.is_playing;
        if self.gate.arm_auto_trigger(desired) {
            debug!(session_id = %self.session_id, armed = desired, "auto-trigger flag updated");
        }
    }

    /// Full teardown: stop playback, forget the item, clear tracker state
    /// and zero both pending slots. Capability itself is owned by port
    /// notifications and survives; the snapshot keeps its last position
    /// for best-effort reads.
    fn teardown(&mut self, reason: &str) {
        debug!(session_id = %self.session_id, reason, "teardown");
        self.media.pause();
        self.is_playing = false;
        self.readiness.reset();
        self.gate.reset();
        self.pending_seek_ms = None;
        self.current_locator = None;
        self.exit_position_ms = None;
        self.clear_enter_intent();
        resolve_slot(&mut self.pending_enter, Err(SessionError::Cancelled));
        resolve_slot(&mut self.pending_exit, Err(SessionError::Cancelled));
        self.set_handoff_active(false);
    }

    fn status(&self) -> CoordinatorStatus {
        CoordinatorStatus {
            phase: self.phase,
            readiness: self.readiness.current().clone(),
            lifecycle: self.lifecycle.state(),
            capable: self.port.is_supported() && self.gate.is_capable(),
            auto_trigger_armed: self.gate.is_auto_trigger_armed(),
            is_playing: self.is_playing,
            position_ms: self.best_position(),
        }
    }

    fn shutdown(&mut self) {
        resolve_slot(&mut self.pending_enter, Err(SessionError::SessionClosed));
        resolve_slot(&mut self.pending_exit, Err(SessionError::SessionClosed));
        self.media.pause();
        info!(session_id = %self.session_id, "session coordinator stopped");
    }
}
