//! Standalone session-coordinator harness for development. Wires the
//! coordinator to simulated collaborators (a player that reports readiness
//! after a delay, a presentation surface that accepts hand-offs after a
//! delay) and drives a scripted background/foreground timeline so the
//! reconciliation behavior can be watched from a terminal.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use floatview_core::{
    CoordinatorConfig, HandoffPort, MediaError, MediaSource, SessionCoordinator,
};
use floatview_models::{
    EnterOptions, HostEvent, ItemStatus, MediaLocator, PlayerSignal, PortEvent,
};

#[derive(Parser, Debug)]
#[command(name = "floatview-sim", about = "Simulated hand-off session for development")]
struct Args {
    /// Media URL or file path to run the session against.
    #[arg(long, default_value = "https://example.com/feature.mp4")]
    url: String,

    /// Starting playback position in milliseconds.
    #[arg(long, default_value = "0")]
    position_ms: i64,

    /// Delay before the simulated player reports ready, in milliseconds.
    #[arg(long, default_value = "400")]
    ready_after_ms: u64,

    /// Delay before the simulated surface confirms an attempt, in
    /// milliseconds.
    #[arg(long, default_value = "250")]
    surface_delay_ms: u64,

    /// Optional coordinator config file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Player that confirms readiness a fixed delay after `prepare`.
struct SimPlayer {
    signals: mpsc::UnboundedSender<PlayerSignal>,
    ready_after: Duration,
    position_ms: Option<i64>,
}

impl MediaSource for SimPlayer {
    fn prepare(
        &mut self,
        locator: &MediaLocator,
        start_position_ms: Option<i64>,
    ) -> Result<(), MediaError> {
        info!(locator = %locator, "sim player preparing");
        self.position_ms = start_position_ms;
        let signals = self.signals.clone();
        let delay = self.ready_after;
        tokio::spawn(async move {
            sleep(delay).await;
            let _ = signals.send(PlayerSignal::ItemStatusChanged {
                status: ItemStatus::Ready,
            });
        });
        Ok(())
    }

    fn play(&mut self) {
        info!("sim player playing");
    }

    fn pause(&mut self) {
        info!("sim player paused");
    }

    fn seek(&mut self, position_ms: i64) {
        self.position_ms = Some(position_ms);
    }

    fn current_position_ms(&self) -> Option<i64> {
        self.position_ms
    }
}

/// Surface that flips capability on after construction and confirms every
/// attempt a fixed delay later.
struct SimSurface {
    events: mpsc::UnboundedSender<PortEvent>,
    delay: Duration,
    active: bool,
}

impl HandoffPort for SimSurface {
    fn is_supported(&self) -> bool {
        true
    }

    fn attempt_enter(&mut self) {
        info!("sim surface asked to enter");
        self.active = true;
        let events = self.events.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            sleep(delay).await;
            let _ = events.send(PortEvent::Entered);
        });
    }

    fn attempt_exit(&mut self) {
        info!("sim surface asked to exit");
        self.active = false;
        let events = self.events.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            sleep(delay).await;
            let _ = events.send(PortEvent::Exited);
        });
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => CoordinatorConfig::load(path)?,
        None => CoordinatorConfig::default(),
    };
    config.validate()?;

    let locator = MediaLocator::parse(&args.url)
        .ok_or_else(|| anyhow::anyhow!("cannot parse media url: {}", args.url))?;

    let (signal_tx, mut signal_rx) = mpsc::unbounded_channel();
    let (port_tx, mut port_rx) = mpsc::unbounded_channel();

    let player = SimPlayer {
        signals: signal_tx,
        ready_after: Duration::from_millis(args.ready_after_ms),
        position_ms: None,
    };
    let surface = SimSurface {
        events: port_tx,
        delay: Duration::from_millis(args.surface_delay_ms),
        active: false,
    };

    let handle = SessionCoordinator::spawn(Box::new(player), Box::new(surface), config);
    info!(session_id = %handle.session_id(), "sim session started");

    // Pump simulated collaborator notifications into the session.
    {
        let handle = handle.clone();
        tokio::spawn(async move {
            while let Some(signal) = signal_rx.recv().await {
                if handle.player_signal(signal).await.is_err() {
                    break;
                }
            }
        });
    }
    {
        let handle = handle.clone();
        tokio::spawn(async move {
            while let Some(event) = port_rx.recv().await {
                if handle.port_event(event).await.is_err() {
                    break;
                }
            }
        });
    }

    // Print every outward notification as it happens.
    {
        let mut events = handle.subscribe();
        tokio::spawn(async move {
            while let Ok(event) = events.recv().await {
                info!(event = %serde_json::to_string(&event).unwrap_or_default(), "session event");
            }
        });
    }

    // Scripted timeline: prepare and play, attach the surface, go to the
    // background with an enter request armed, then come back and watch the
    // coordinator reclaim the session.
    handle.prepare(locator, Some(args.position_ms)).await?;
    handle.play().await?;
    handle.surface_ready(true).await?;
    handle
        .port_event(PortEvent::CapabilityChanged { capable: true })
        .await?;

    sleep(Duration::from_millis(200)).await;
    info!("host resigning active");
    handle.host_event(HostEvent::WillResignActive).await?;
    handle.host_event(HostEvent::DidEnterBackground).await?;

    match handle.request_enter(EnterOptions::default()).await {
        Ok(entered) => info!(entered, "enter request resolved"),
        Err(err) => warn!(error = %err, "enter request failed"),
    }
    info!(status = ?handle.status().await, "after enter");

    sleep(Duration::from_secs(2)).await;
    info!("host becoming active again");
    handle
        .host_event(HostEvent::DidBecomeActive { scene: None })
        .await?;

    sleep(Duration::from_secs(1)).await;
    info!(
        position_ms = ?handle.current_position(),
        snapshot = ?handle.snapshot(),
        "sim session finished"
    );
    Ok(())
}
