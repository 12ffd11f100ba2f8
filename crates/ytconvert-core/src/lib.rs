//! ytconvert-core: media resolution, stream selection and buffering for ytconvert

pub mod config;
pub mod converter;
pub mod error;
pub mod resolver;
pub mod sanitize;
pub mod selector;
pub mod ytdlp;

pub use config::Config;
pub use converter::{ConvertedAudio, Converter};
pub use error::{ConvertError, Result};
pub use resolver::{Container, MediaResolver, ResolvedMedia, StreamDescriptor, StreamSource};
pub use ytdlp::YtDlpResolver;
