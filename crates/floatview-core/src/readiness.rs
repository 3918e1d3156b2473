use floatview_models::{ItemStatus, MediaReadiness, PlayerSignal};

/// Merges the independently-arriving media sub-signals into a single
/// [`MediaReadiness`] verdict. Pure aggregation, no failure modes.
///
/// `ReadyToDisplay` requires the item status to be ready, the buffer to be
/// healthy (not empty, or keep-up likely), and the rendering surface to
/// report ready-for-display.
#[derive(Debug)]
pub struct ReadinessTracker {
    item_status: ItemStatus,
    presentation_ready: bool,
    buffer_empty: bool,
    keep_up_likely: bool,
    current: MediaReadiness,
}

impl ReadinessTracker {
    pub fn new() -> Self {
        Self {
            item_status: ItemStatus::Unknown,
            presentation_ready: false,
            buffer_empty: false,
            keep_up_likely: false,
            current: MediaReadiness::NotReady,
        }
    }

    /// Merge one sub-signal and recompute. Returns the new verdict only on
    /// an actual transition; no-op updates return `None` so that callers
    /// never run a reconcile pass for a value that did not change.
    pub fn update(&mut self, signal: &PlayerSignal) -> Option<MediaReadiness> {
        match signal {
            PlayerSignal::ItemStatusChanged { status } => {
                self.item_status = status.clone();
            }
            PlayerSignal::BufferEmptyChanged { empty } => {
                self.buffer_empty = *empty;
            }
            PlayerSignal::KeepUpLikelyChanged { likely } => {
                self.keep_up_likely = *likely;
            }
            PlayerSignal::PlaybackEnded => return None,
        }
        self.recompute()
    }

    /// Merge the surface ready-for-display flag pushed by the presentation
    /// host.
    pub fn set_surface_ready(&mut self, ready: bool) -> Option<MediaReadiness> {
        self.presentation_ready = ready;
        self.recompute()
    }

    pub fn current(&self) -> &MediaReadiness {
        &self.current
    }

    pub fn is_displayable(&self) -> bool {
        self.current == MediaReadiness::ReadyToDisplay
    }

    /// Whether the item itself has confirmed it can produce frames,
    /// regardless of buffer or surface state. Seeks issued before this
    /// point are held as pending.
    pub fn item_ready(&self) -> bool {
        self.item_status == ItemStatus::Ready
    }

    /// Drop all accumulated signals back to their initial values.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Forget the item-side signals after a new item replaces the current
    /// one. The surface ready-for-display flag is owned by the
    /// presentation host and survives item swaps.
    pub fn reset_item_signals(&mut self) -> Option<MediaReadiness> {
        self.item_status = ItemStatus::Unknown;
        self.buffer_empty = false;
        self.keep_up_likely = false;
        self.recompute()
    }

    fn recompute(&mut self) -> Option<MediaReadiness> {
        let next = match &self.item_status {
            ItemStatus::Failed { reason } => MediaReadiness::Failed {
                reason: reason.clone(),
            },
            ItemStatus::Unknown => MediaReadiness::NotReady,
            ItemStatus::Ready => {
                if !self.presentation_ready {
                    MediaReadiness::NotReady
                } else if self.buffer_empty && !self.keep_up_likely {
                    MediaReadiness::Buffering
                } else {
                    MediaReadiness::ReadyToDisplay
                }
            }
        };
        if next == self.current {
            None
        } else {
            self.current = next.clone();
            Some(next)
        }
    }
}

impl Default for ReadinessTracker {
    fn default() -> Self {
        Self::new()
    }
}
