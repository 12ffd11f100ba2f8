//! URL to audio conversion: resolve, select, buffer

use crate::error::{ConvertError, Result};
use crate::resolver::MediaResolver;
use crate::sanitize::sanitize_title;
use crate::selector::{select_audio_stream, TARGET_CONTAINER};
use bytes::Bytes;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Media type of the delivered audio
pub const AUDIO_MIME_TYPE: &str = "audio/mp4";

/// File extension of the delivered audio
pub const AUDIO_EXTENSION: &str = "m4a";

/// A fully buffered audio stream ready to be sent to the caller.
#[derive(Debug, Clone)]
pub struct ConvertedAudio {
    pub title: String,
    pub clean_title: String,
    pub data: Bytes,
}

impl ConvertedAudio {
    pub fn filename(&self) -> String {
        format!("{}.{}", self.clean_title, AUDIO_EXTENSION)
    }

    /// `Content-Disposition` value offering the audio as a download
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename())
    }
}

#[derive(Clone)]
pub struct Converter {
    resolver: Arc<dyn MediaResolver>,
}

impl Converter {
    pub fn new(resolver: Arc<dyn MediaResolver>) -> Self {
        Self { resolver }
    }

    pub async fn convert(&self, url: &str) -> Result<ConvertedAudio> {
        if url.is_empty() {
            return Err(ConvertError::MissingUrl);
        }

        let start_time = Instant::now();
        info!("Processing: {}", url);

        let media = self.resolver.resolve(url).await?;
        let clean_title = sanitize_title(&media.title);

        info!("Original title: {}", media.title);
        info!("Clean title: {}", clean_title);

        let stream = select_audio_stream(&media.streams, &TARGET_CONTAINER)
            .ok_or(ConvertError::NoAudioStream)?;
        debug!(
            "Selected stream {} ({} kbit/s) out of {}",
            stream.id,
            stream.abr.unwrap_or_default(),
            media.streams.len()
        );

        info!("Downloading audio...");
        let data = self.resolver.fetch(stream).await?;

        info!(
            "Download complete: {} ({} bytes, {:.1}s)",
            clean_title,
            data.len(),
            start_time.elapsed().as_secs_f32()
        );

        Ok(ConvertedAudio {
            title: media.title,
            clean_title,
            data,
        })
    }
}
