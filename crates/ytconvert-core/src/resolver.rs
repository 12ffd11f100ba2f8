//! Media resolution seam: turning a source URL into a title and stream list

use crate::error::{FetchError, ResolveError};
use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;

/// Container a stream is delivered in, derived from its file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    /// ISO base media (`mp4`, `m4a`)
    Mp4,
    /// Matroska/WebM (`webm`, `weba`)
    WebM,
    Other(String),
}

impl Container {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "mp4" | "m4a" => Container::Mp4,
            "webm" | "weba" => Container::WebM,
            other => Container::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Mp4 => write!(f, "mp4"),
            Container::WebM => write!(f, "webm"),
            Container::Other(ext) => write!(f, "{}", ext),
        }
    }
}

/// Where the bytes of a stream can be fetched from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamSource {
    pub url: String,
    /// Headers the upstream expects on the media request
    pub headers: Vec<(String, String)>,
}

/// One downloadable stream offered for a video.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamDescriptor {
    pub id: String,
    pub audio_only: bool,
    pub container: Container,
    /// Average bitrate in kbit/s, when the platform reports one
    pub abr: Option<f64>,
    pub source: StreamSource,
}

/// Result of resolving a URL.
#[derive(Debug, Clone)]
pub struct ResolvedMedia {
    pub title: String,
    pub streams: Vec<StreamDescriptor>,
}

/// External media-resolution capability.
///
/// Implementations own every platform-specific detail: page fetching,
/// signature handling, protocol negotiation.
#[async_trait]
pub trait MediaResolver: Send + Sync {
    /// Fetch title and available streams for `url`.
    async fn resolve(&self, url: &str) -> Result<ResolvedMedia, ResolveError>;

    /// Read the whole stream into memory.
    async fn fetch(&self, stream: &StreamDescriptor) -> Result<Bytes, FetchError>;
}
