//! Error types for ytconvert-core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Failures of a single conversion request.
///
/// The `Display` text of `MissingUrl` and `NoAudioStream` is what callers
/// receive verbatim; everything else is reported as a conversion failure
/// carrying the underlying message.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("URL es requerida")]
    MissingUrl,

    #[error("No se encontró stream de audio disponible")]
    NoAudioStream,

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("yt-dlp not found. Install with: pip install yt-dlp")]
    YtDlpNotFound,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Video unavailable or private: {0}")]
    VideoUnavailable(String),

    #[error("yt-dlp failed with exit code {code:?}: {message}")]
    Failed { code: Option<i32>, message: String },

    #[error("Failed to parse metadata: {0}")]
    MetadataParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid request header: {0}")]
    InvalidHeader(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadError(String),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}
