use serde::{Deserialize, Serialize};

/// Decoder/item status as reported by the media source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemStatus {
    /// No item loaded, or the item has not reported a status yet.
    Unknown,
    /// The item can produce frames.
    Ready,
    /// The item failed to load or decode.
    Failed { reason: String },
}

/// Aggregated "content is displayable" verdict derived from the raw
/// sub-signals. Transitions are freely reversible: `Buffering` can recur
/// after `ReadyToDisplay` when the buffer drains mid-playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "readiness", rename_all = "snake_case")]
pub enum MediaReadiness {
    /// The pipeline cannot display a frame: no item, item not yet ready,
    /// or the rendering surface is not attached.
    NotReady,
    /// The item is ready but the buffer is starved.
    Buffering,
    /// A visible frame can be rendered right now.
    ReadyToDisplay,
    /// The item failed; the reason comes from the media source.
    Failed { reason: String },
}

/// Raw sub-signals pushed by the media source. Each arrives independently;
/// the readiness tracker merges them into one [`MediaReadiness`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum PlayerSignal {
    ItemStatusChanged { status: ItemStatus },
    BufferEmptyChanged { empty: bool },
    KeepUpLikelyChanged { likely: bool },
    /// The item played to its end.
    PlaybackEnded,
}
