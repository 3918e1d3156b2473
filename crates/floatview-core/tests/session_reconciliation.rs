use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use floatview_core::{
    CoordinatorConfig, HandoffPort, MediaError, MediaSource, SessionCoordinator, SessionError,
    SessionHandle,
};
use floatview_models::{
    EnterOptions, HostEvent, ItemStatus, MediaLocator, PlayerSignal, PortEvent, SessionEvent,
    SessionPhase,
};

// ── Scripted collaborators ───────────────────────────────────────────────

#[derive(Default)]
struct FakeMediaState {
    fail_prepare: bool,
    prepared: Vec<MediaLocator>,
    playing: bool,
    position_ms: Option<i64>,
    seeks: Vec<i64>,
}

#[derive(Clone)]
struct FakeMedia {
    state: Arc<Mutex<FakeMediaState>>,
}

impl FakeMedia {
    fn new() -> (Self, Arc<Mutex<FakeMediaState>>) {
        let state = Arc::new(Mutex::new(FakeMediaState::default()));
        (
            Self {
                state: state.clone(),
            },
            state,
        )
    }
}

impl MediaSource for FakeMedia {
    fn prepare(
        &mut self,
        locator: &MediaLocator,
        start_position_ms: Option<i64>,
    ) -> Result<(), MediaError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_prepare {
            return Err(MediaError::PrepareFailed("scripted failure".into()));
        }
        state.prepared.push(locator.clone());
        state.position_ms = start_position_ms;
        Ok(())
    }

    fn play(&mut self) {
        self.state.lock().unwrap().playing = true;
    }

    fn pause(&mut self) {
        self.state.lock().unwrap().playing = false;
    }

    fn seek(&mut self, position_ms: i64) {
        let mut state = self.state.lock().unwrap();
        state.seeks.push(position_ms);
        state.position_ms = Some(position_ms);
    }

    fn current_position_ms(&self) -> Option<i64> {
        self.state.lock().unwrap().position_ms
    }
}

#[derive(Default)]
struct FakePortState {
    unsupported: bool,
    active: bool,
    enter_attempts: u32,
    exit_attempts: u32,
}

#[derive(Clone)]
struct FakePort {
    state: Arc<Mutex<FakePortState>>,
}

impl FakePort {
    fn new() -> (Self, Arc<Mutex<FakePortState>>) {
        let state = Arc::new(Mutex::new(FakePortState::default()));
        (
            Self {
                state: state.clone(),
            },
            state,
        )
    }
}

impl HandoffPort for FakePort {
    fn is_supported(&self) -> bool {
        !self.state.lock().unwrap().unsupported
    }

    fn attempt_enter(&mut self) {
        self.state.lock().unwrap().enter_attempts += 1;
    }

    fn attempt_exit(&mut self) {
        self.state.lock().unwrap().exit_attempts += 1;
    }

    fn is_active(&self) -> bool {
        self.state.lock().unwrap().active
    }
}

// ── Test context ─────────────────────────────────────────────────────────

struct TestSession {
    handle: SessionHandle,
    media: Arc<Mutex<FakeMediaState>>,
    port: Arc<Mutex<FakePortState>>,
    events: broadcast::Receiver<SessionEvent>,
}

/// Config with a gate bound far beyond any test's runtime, so only the
/// dedicated timeout tests ever hit it.
fn patient_config() -> CoordinatorConfig {
    CoordinatorConfig {
        gate_tick_ms: 50,
        max_gate_ticks: 600,
        position_sample_ms: 25,
        auto_exit_on_foreground: true,
        event_capacity: 64,
    }
}

fn spawn_session(config: CoordinatorConfig) -> TestSession {
    let (media, media_state) = FakeMedia::new();
    let (port, port_state) = FakePort::new();
    let handle = SessionCoordinator::spawn(Box::new(media), Box::new(port), config);
    let events = handle.subscribe();
    TestSession {
        handle,
        media: media_state,
        port: port_state,
        events,
    }
}

fn locator() -> MediaLocator {
    MediaLocator::parse("https://example.com/feature.mp4").unwrap()
}

/// Let the coordinator drain everything queued so far.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(60)).await;
}

impl TestSession {
    /// Drive readiness to ReadyToDisplay: item ready plus surface attached.
    async fn make_displayable(&self) {
        self.handle
            .player_signal(PlayerSignal::ItemStatusChanged {
                status: ItemStatus::Ready,
            })
            .await
            .unwrap();
        self.handle.surface_ready(true).await.unwrap();
    }

    async fn make_capable(&self) {
        self.handle
            .port_event(PortEvent::CapabilityChanged { capable: true })
            .await
            .unwrap();
    }

    async fn go_background(&self) {
        self.handle
            .host_event(HostEvent::WillResignActive)
            .await
            .unwrap();
        self.handle
            .host_event(HostEvent::DidEnterBackground)
            .await
            .unwrap();
    }

    fn enter_attempts(&self) -> u32 {
        self.port.lock().unwrap().enter_attempts
    }

    fn exit_attempts(&self) -> u32 {
        self.port.lock().unwrap().exit_attempts
    }

    fn spawn_enter(&self, options: EnterOptions) -> JoinHandle<Result<bool, SessionError>> {
        let handle = self.handle.clone();
        tokio::spawn(async move { handle.request_enter(options).await })
    }

    /// Wait for a specific event, skipping unrelated ones (position
    /// samples in particular).
    async fn expect_event(&mut self, want: impl Fn(&SessionEvent) -> bool) -> SessionEvent {
        timeout(Duration::from_secs(5), async {
            loop {
                let event = self.events.recv().await.unwrap();
                if want(&event) {
                    return event;
                }
            }
        })
        .await
        .expect("event not observed in time")
    }
}

// ── Scenarios ────────────────────────────────────────────────────────────

#[tokio::test]
async fn scenario_a_enters_once_backgrounded_and_ready() {
    let mut session = spawn_session(patient_config());
    session
        .handle
        .prepare(locator(), Some(1500))
        .await
        .unwrap();
    session.handle.play().await.unwrap();
    session.make_displayable().await;
    session.make_capable().await;
    session.go_background().await;

    let enter = session.spawn_enter(EnterOptions::default());
    settle().await;
    assert_eq!(session.enter_attempts(), 1);

    session.handle.port_event(PortEvent::Entered).await.unwrap();
    assert_eq!(
        timeout(Duration::from_secs(2), enter).await.unwrap().unwrap(),
        Ok(true)
    );
    session
        .expect_event(|e| matches!(e, SessionEvent::HandoffEntered))
        .await;

    assert!(session.handle.snapshot().is_handoff_active);
    assert_eq!(session.handle.current_position(), Some(1500));
}

#[tokio::test]
async fn scenario_b_attempt_waits_for_capability() {
    let mut session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session.make_displayable().await;
    session.go_background().await;

    // Capability is still false: no attempt may fire.
    let enter = session.spawn_enter(EnterOptions::default());
    settle().await;
    assert_eq!(session.enter_attempts(), 0);

    session.make_capable().await;
    settle().await;
    assert_eq!(session.enter_attempts(), 1);

    session.handle.port_event(PortEvent::Entered).await.unwrap();
    assert_eq!(
        timeout(Duration::from_secs(2), enter).await.unwrap().unwrap(),
        Ok(true)
    );
    session
        .expect_event(|e| matches!(e, SessionEvent::HandoffEntered))
        .await;
}

#[tokio::test]
async fn scenario_c_exit_cancels_pending_enter() {
    let session = spawn_session(patient_config());
    session
        .handle
        .prepare(locator(), Some(4200))
        .await
        .unwrap();
    session.make_displayable().await;
    session.go_background().await;

    // Gate stays closed (capability false), so the enter keeps waiting.
    let enter = session.spawn_enter(EnterOptions::default());
    settle().await;

    let position = session.handle.request_exit().await.unwrap();
    assert_eq!(position, Some(4200));
    assert_eq!(
        timeout(Duration::from_secs(2), enter).await.unwrap().unwrap(),
        Err(SessionError::Cancelled)
    );
    assert_eq!(session.enter_attempts(), 0);
}

#[tokio::test]
async fn scenario_d_foreground_return_auto_exits() {
    let mut session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session.make_displayable().await;
    session.make_capable().await;
    session.go_background().await;

    let enter = session.spawn_enter(EnterOptions::default());
    settle().await;
    session.handle.port_event(PortEvent::Entered).await.unwrap();
    timeout(Duration::from_secs(2), enter)
        .await
        .unwrap()
        .unwrap()
        .unwrap();

    // Host comes back to the foreground: the coordinator must reclaim the
    // surface on its own.
    session
        .handle
        .host_event(HostEvent::DidBecomeActive { scene: None })
        .await
        .unwrap();
    settle().await;
    assert_eq!(session.exit_attempts(), 1);

    session.handle.port_event(PortEvent::Exited).await.unwrap();
    session
        .expect_event(|e| matches!(e, SessionEvent::HandoffExited { .. }))
        .await;
    assert!(!session.handle.snapshot().is_handoff_active);
}

// ── Properties ───────────────────────────────────────────────────────────

#[tokio::test]
async fn p2_no_attempt_before_readiness() {
    let session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session.make_capable().await;
    session.go_background().await;

    // Capability and lifecycle are open, but the media never reported
    // displayable.
    let _enter = session.spawn_enter(EnterOptions::default());
    settle().await;
    assert_eq!(session.enter_attempts(), 0);

    session.make_displayable().await;
    settle().await;
    assert_eq!(session.enter_attempts(), 1);
}

#[tokio::test]
async fn p3_duplicate_notifications_do_not_double_attempt() {
    let session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session.make_displayable().await;
    session.make_capable().await;
    session.go_background().await;

    let _enter = session.spawn_enter(EnterOptions::default());
    settle().await;
    assert_eq!(session.enter_attempts(), 1);

    // Re-deliver every gate input while the attempt is in flight.
    session.make_displayable().await;
    session.make_capable().await;
    session.go_background().await;
    session.make_capable().await;
    settle().await;
    assert_eq!(session.enter_attempts(), 1);
}

#[tokio::test]
async fn p4_newer_enter_supersedes_older() {
    let session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session.go_background().await;

    let first = session.spawn_enter(EnterOptions::default());
    settle().await;
    let second = session.spawn_enter(EnterOptions::default());
    settle().await;

    // The superseded callback fires before the superseding request reaches
    // any terminal outcome.
    assert_eq!(
        timeout(Duration::from_millis(100), first)
            .await
            .expect("first enter must already be resolved")
            .unwrap(),
        Err(SessionError::Superseded)
    );

    session.make_displayable().await;
    session.make_capable().await;
    settle().await;
    session.handle.port_event(PortEvent::Entered).await.unwrap();
    assert_eq!(
        timeout(Duration::from_secs(2), second).await.unwrap().unwrap(),
        Ok(true)
    );
}

#[tokio::test]
async fn p5_gate_timeout_resolves_within_bound() {
    let mut session = spawn_session(CoordinatorConfig {
        gate_tick_ms: 20,
        max_gate_ticks: 5,
        position_sample_ms: 25,
        auto_exit_on_foreground: true,
        event_capacity: 64,
    });
    session.handle.prepare(locator(), None).await.unwrap();
    session.go_background().await;

    // Capability never arrives.
    let enter = session.spawn_enter(EnterOptions::default());
    assert_eq!(
        timeout(Duration::from_secs(2), enter).await.unwrap().unwrap(),
        Err(SessionError::GateTimeout)
    );
    session
        .expect_event(|e| matches!(e, SessionEvent::GateTimedOut))
        .await;

    let status = session.handle.status().await.unwrap();
    assert_eq!(status.phase, SessionPhase::Idle);
    assert_eq!(session.enter_attempts(), 0);
}

// ── Edge behavior ────────────────────────────────────────────────────────

#[tokio::test]
async fn unsupported_platform_fails_immediately() {
    let session = spawn_session(patient_config());
    session.port.lock().unwrap().unsupported = true;
    let result = session.handle.request_enter(EnterOptions::default()).await;
    assert_eq!(result, Err(SessionError::Unsupported));
    assert!(!session.handle.is_capable().await);
}

#[tokio::test]
async fn enter_without_prepared_media_is_not_ready() {
    let session = spawn_session(patient_config());
    let result = session.handle.request_enter(EnterOptions::default()).await;
    assert_eq!(result, Err(SessionError::NotReady));
}

#[tokio::test]
async fn failed_prepare_surfaces_as_not_ready() {
    let session = spawn_session(patient_config());
    session.media.lock().unwrap().fail_prepare = true;
    let result = session
        .handle
        .request_enter(EnterOptions::with_locator(locator()))
        .await;
    assert_eq!(result, Err(SessionError::NotReady));
}

#[tokio::test]
async fn enter_with_locator_prepares_and_plays() {
    let session = spawn_session(patient_config());
    session.go_background().await;
    let _enter = session.spawn_enter(EnterOptions::with_locator(locator()));
    settle().await;

    let media = session.media.lock().unwrap();
    assert_eq!(media.prepared.len(), 1);
    assert!(media.playing);
}

#[tokio::test]
async fn seek_before_ready_is_held_then_applied() {
    let session = spawn_session(patient_config());
    session.handle.prepare(locator(), Some(3000)).await.unwrap();
    assert_eq!(session.handle.current_position(), Some(3000));

    // Not ready yet: the target is remembered, not forwarded.
    session.handle.seek(5000).await.unwrap();
    settle().await;
    assert_eq!(session.handle.current_position(), Some(5000));
    assert!(session.media.lock().unwrap().seeks.is_empty());

    session
        .handle
        .player_signal(PlayerSignal::ItemStatusChanged {
            status: ItemStatus::Ready,
        })
        .await
        .unwrap();
    settle().await;
    assert_eq!(session.media.lock().unwrap().seeks, vec![5000]);
}

#[tokio::test]
async fn failed_attempt_resolves_and_returns_to_idle() {
    let session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session.make_displayable().await;
    session.make_capable().await;
    session.go_background().await;

    let enter = session.spawn_enter(EnterOptions::default());
    settle().await;
    session
        .handle
        .port_event(PortEvent::Failed {
            reason: "surface busy".into(),
        })
        .await
        .unwrap();

    assert_eq!(
        timeout(Duration::from_secs(2), enter).await.unwrap().unwrap(),
        Err(SessionError::HandoffFailed("surface busy".into()))
    );
    let status = session.handle.status().await.unwrap();
    assert_eq!(status.phase, SessionPhase::Idle);
}

#[tokio::test]
async fn failed_attempt_with_retry_intent_tries_again() {
    let mut session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session.make_displayable().await;
    session.make_capable().await;
    session.go_background().await;

    let enter = session.spawn_enter(EnterOptions {
        retry_on_failure: true,
        ..EnterOptions::default()
    });
    settle().await;
    assert_eq!(session.enter_attempts(), 1);

    session
        .handle
        .port_event(PortEvent::Failed {
            reason: "transient".into(),
        })
        .await
        .unwrap();
    // The caller still hears about the failure...
    assert_eq!(
        timeout(Duration::from_secs(2), enter).await.unwrap().unwrap(),
        Err(SessionError::HandoffFailed("transient".into()))
    );

    // ...but the intent stays armed and the next readiness change retries.
    session
        .handle
        .player_signal(PlayerSignal::BufferEmptyChanged { empty: true })
        .await
        .unwrap();
    session
        .handle
        .player_signal(PlayerSignal::BufferEmptyChanged { empty: false })
        .await
        .unwrap();
    settle().await;
    assert_eq!(session.enter_attempts(), 2);

    session.handle.port_event(PortEvent::Entered).await.unwrap();
    session
        .expect_event(|e| matches!(e, SessionEvent::HandoffEntered))
        .await;
    assert!(session.handle.snapshot().is_handoff_active);
}

#[tokio::test]
async fn external_exit_without_request_tears_down() {
    let mut session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session.make_displayable().await;
    session.make_capable().await;
    session.go_background().await;

    let enter = session.spawn_enter(EnterOptions::default());
    settle().await;
    session.handle.port_event(PortEvent::Entered).await.unwrap();
    timeout(Duration::from_secs(2), enter)
        .await
        .unwrap()
        .unwrap()
        .unwrap();

    // The user closes the external surface themselves.
    session.handle.port_event(PortEvent::Exited).await.unwrap();
    session
        .expect_event(|e| matches!(e, SessionEvent::HandoffExited { .. }))
        .await;

    let status = session.handle.status().await.unwrap();
    assert_eq!(status.phase, SessionPhase::Idle);
    assert!(!status.is_playing);
    assert!(!session.handle.snapshot().is_handoff_active);
}

#[tokio::test]
async fn late_entry_after_cancel_is_pushed_back_out() {
    let session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session.make_displayable().await;
    session.make_capable().await;
    session.go_background().await;

    let enter = session.spawn_enter(EnterOptions::default());
    settle().await;
    assert_eq!(session.enter_attempts(), 1);

    // Cancel while the attempt is in flight.
    session.handle.request_exit().await.unwrap();
    assert_eq!(
        timeout(Duration::from_secs(2), enter).await.unwrap().unwrap(),
        Err(SessionError::Cancelled)
    );

    // The unrescindable attempt lands anyway; the coordinator must push
    // the surface straight back out.
    session.handle.port_event(PortEvent::Entered).await.unwrap();
    settle().await;
    assert_eq!(session.exit_attempts(), 1);

    session.handle.port_event(PortEvent::Exited).await.unwrap();
    settle().await;
    let status = session.handle.status().await.unwrap();
    assert_eq!(status.phase, SessionPhase::Idle);
}

#[tokio::test]
async fn foreground_entry_requires_force_flag() {
    let session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session.make_displayable().await;
    session.make_capable().await;
    // Lifecycle stays Active.

    let first = session.spawn_enter(EnterOptions::default());
    settle().await;
    assert_eq!(session.enter_attempts(), 0);

    let _second = session.spawn_enter(EnterOptions {
        force_foreground: true,
        ..EnterOptions::default()
    });
    settle().await;
    assert_eq!(session.enter_attempts(), 1);
    assert_eq!(
        timeout(Duration::from_millis(100), first)
            .await
            .expect("superseded enter must already be resolved")
            .unwrap(),
        Err(SessionError::Superseded)
    );
}

#[tokio::test]
async fn scene_switch_cancels_armed_enter() {
    let session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session
        .handle
        .host_event(HostEvent::WillDeactivateScene {
            scene: "scene-a".into(),
        })
        .await
        .unwrap();

    // Armed under scene-a with the gate closed.
    let enter = session.spawn_enter(EnterOptions::default());
    settle().await;

    // A fast app-switch resumes under an unrelated scene.
    session
        .handle
        .host_event(HostEvent::DidBecomeActive {
            scene: Some("scene-b".into()),
        })
        .await
        .unwrap();
    assert_eq!(
        timeout(Duration::from_secs(2), enter).await.unwrap().unwrap(),
        Err(SessionError::Cancelled)
    );
    assert_eq!(session.enter_attempts(), 0);
}

#[tokio::test]
async fn playback_end_rewinds_and_pauses() {
    let mut session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session
        .handle
        .player_signal(PlayerSignal::ItemStatusChanged {
            status: ItemStatus::Ready,
        })
        .await
        .unwrap();
    session.handle.play().await.unwrap();
    session.handle.seek(9000).await.unwrap();

    session
        .handle
        .player_signal(PlayerSignal::PlaybackEnded)
        .await
        .unwrap();
    session
        .expect_event(|e| matches!(e, SessionEvent::PlaybackEnded))
        .await;

    assert_eq!(session.handle.current_position(), Some(0));
    let media = session.media.lock().unwrap();
    assert!(!media.playing);
    assert_eq!(media.seeks.last(), Some(&0));
}

#[tokio::test]
async fn position_samples_flow_while_playing() {
    let mut session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session
        .handle
        .player_signal(PlayerSignal::ItemStatusChanged {
            status: ItemStatus::Ready,
        })
        .await
        .unwrap();
    session.handle.play().await.unwrap();
    session.media.lock().unwrap().position_ms = Some(777);

    let event = session
        .expect_event(|e| matches!(e, SessionEvent::PositionSampled { .. }))
        .await;
    assert_eq!(event, SessionEvent::PositionSampled { position_ms: 777 });
    assert_eq!(session.handle.current_position(), Some(777));
}

#[tokio::test]
async fn auto_trigger_arms_with_intent_and_drops_on_cancel() {
    let session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session.handle.play().await.unwrap();
    session.go_background().await;

    let status = session.handle.status().await.unwrap();
    assert!(!status.auto_trigger_armed);

    // Intent plus playing media arms the flag.
    let _enter = session.spawn_enter(EnterOptions::default());
    settle().await;
    let status = session.handle.status().await.unwrap();
    assert!(status.auto_trigger_armed);

    // Cancelling the intent must drop it immediately.
    session.handle.request_exit().await.unwrap();
    let status = session.handle.status().await.unwrap();
    assert!(!status.auto_trigger_armed);
}

#[tokio::test]
async fn enter_while_already_handed_off_succeeds_without_new_attempt() {
    let session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session.make_displayable().await;
    session.make_capable().await;
    session.go_background().await;

    let enter = session.spawn_enter(EnterOptions::default());
    settle().await;
    session.handle.port_event(PortEvent::Entered).await.unwrap();
    timeout(Duration::from_secs(2), enter)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert_eq!(session.enter_attempts(), 1);

    let again = session.handle.request_enter(EnterOptions::default()).await;
    assert_eq!(again, Ok(true));
    assert_eq!(session.enter_attempts(), 1);
}

#[tokio::test]
async fn exit_from_handed_off_reports_position() {
    let session = spawn_session(patient_config());
    session.handle.prepare(locator(), None).await.unwrap();
    session.make_displayable().await;
    session.make_capable().await;
    session.go_background().await;

    let enter = session.spawn_enter(EnterOptions::default());
    settle().await;
    session.handle.port_event(PortEvent::Entered).await.unwrap();
    timeout(Duration::from_secs(2), enter)
        .await
        .unwrap()
        .unwrap()
        .unwrap();

    session.media.lock().unwrap().position_ms = Some(61_250);
    let exit = {
        let handle = session.handle.clone();
        tokio::spawn(async move { handle.request_exit().await })
    };
    settle().await;
    assert_eq!(session.exit_attempts(), 1);

    session.handle.port_event(PortEvent::Exited).await.unwrap();
    assert_eq!(
        timeout(Duration::from_secs(2), exit).await.unwrap().unwrap(),
        Ok(Some(61_250))
    );
}
