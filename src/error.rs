//! Error types shared by the page sections.

use thiserror::Error;

/// Why the host media element failed to load a source.
///
/// Decoded from the numeric `MediaError.code` exposed by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaErrorKind {
    Aborted,
    Network,
    Decode,
    Unsupported,
    Unknown,
}

impl MediaErrorKind {
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Aborted,
            2 => Self::Network,
            3 => Self::Decode,
            4 => Self::Unsupported,
            _ => Self::Unknown,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Aborted => "playback was aborted before the file loaded",
            Self::Network => "network error while loading the file",
            Self::Decode => "the file could not be decoded",
            Self::Unsupported => "no supported source was found",
            Self::Unknown => "unable to load this audio source",
        }
    }
}

/// Playback errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// The runtime refused to start playback (usually autoplay policy)
    #[error("Playback was rejected: {0}")]
    Rejected(String),

    /// The audio source failed to load
    #[error("Failed to load {src}: {}", .kind.describe())]
    MediaLoad { src: String, kind: MediaErrorKind },

    /// The `<audio>` element is not mounted
    #[error("No audio element is mounted")]
    NoMediaElement,
}

/// Contact form delivery errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactError {
    /// Raised by transports that can fail; the simulated one always delivers.
    #[allow(dead_code)]
    #[error("Message could not be sent: {0}")]
    Delivery(String),
}

/// Site configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Site configuration has an empty playlist")]
    EmptyPlaylist,
}
