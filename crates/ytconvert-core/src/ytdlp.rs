//! Media resolution backed by yt-dlp

use crate::error::{FetchError, ResolveError};
use crate::resolver::{Container, MediaResolver, ResolvedMedia, StreamDescriptor, StreamSource};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct YtDlpResolver {
    yt_dlp_path: PathBuf,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct VideoInfo {
    title: String,
    #[serde(default)]
    formats: Vec<FormatInfo>,
}

#[derive(Debug, Deserialize)]
struct FormatInfo {
    #[serde(default)]
    format_id: String,
    #[serde(default)]
    ext: String,
    #[serde(default)]
    vcodec: Option<String>,
    #[serde(default)]
    acodec: Option<String>,
    #[serde(default)]
    abr: Option<f64>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    protocol: Option<String>,
    #[serde(default)]
    http_headers: BTreeMap<String, String>,
}

impl FormatInfo {
    /// yt-dlp marks a missing track with the codec name "none".
    fn is_audio_only(&self) -> bool {
        let has_audio = matches!(self.acodec.as_deref(), Some(codec) if codec != "none");
        let has_video = !matches!(self.vcodec.as_deref(), Some("none"));
        has_audio && !has_video
    }

    /// Only progressive formats can be read with a single GET; manifest
    /// protocols (`m3u8_native`, `http_dash_segments`, ...) cannot.
    fn is_direct_download(&self) -> bool {
        matches!(self.protocol.as_deref(), None | Some("http") | Some("https"))
    }

    fn into_descriptor(self) -> Option<StreamDescriptor> {
        if !self.is_direct_download() {
            return None;
        }
        let audio_only = self.is_audio_only();
        let url = self.url?;
        Some(StreamDescriptor {
            id: self.format_id,
            audio_only,
            container: Container::from_extension(&self.ext),
            abr: self.abr,
            source: StreamSource {
                url,
                headers: self.http_headers.into_iter().collect(),
            },
        })
    }
}

impl YtDlpResolver {
    pub fn new(yt_dlp_path: PathBuf) -> Self {
        Self {
            yt_dlp_path,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl MediaResolver for YtDlpResolver {
    async fn resolve(&self, url: &str) -> Result<ResolvedMedia, ResolveError> {
        info!("Resolving media for: {}", url);

        let output = Command::new(&self.yt_dlp_path)
            .args(["--dump-single-json", "--no-playlist", "--no-warnings", "--", url])
            .output()
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ResolveError::YtDlpNotFound,
                _ => ResolveError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("yt-dlp stderr: {}", stderr);
            return Err(classify_failure(url, output.status.code(), &stderr));
        }

        let media = parse_video_info(&output.stdout)?;
        debug!("Resolved '{}' with {} streams", media.title, media.streams.len());
        Ok(media)
    }

    async fn fetch(&self, stream: &StreamDescriptor) -> Result<Bytes, FetchError> {
        debug!("Fetching stream {} ({})", stream.id, stream.container);

        let headers = header_map(&stream.source.headers)?;
        let bytes = self
            .client
            .get(&stream.source.url)
            .headers(headers)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        debug!("Fetched {} bytes for stream {}", bytes.len(), stream.id);
        Ok(bytes)
    }
}

fn parse_video_info(stdout: &[u8]) -> Result<ResolvedMedia, ResolveError> {
    let info: VideoInfo =
        serde_json::from_slice(stdout).map_err(|e| ResolveError::MetadataParse(e.to_string()))?;

    Ok(ResolvedMedia {
        title: info.title,
        streams: info
            .formats
            .into_iter()
            .filter_map(FormatInfo::into_descriptor)
            .collect(),
    })
}

fn classify_failure(url: &str, code: Option<i32>, stderr: &str) -> ResolveError {
    if stderr.contains("Video unavailable") || stderr.contains("Private video") {
        return ResolveError::VideoUnavailable(url.to_string());
    }
    if stderr.contains("is not a valid URL") || stderr.contains("Unsupported URL") {
        return ResolveError::InvalidUrl(url.to_string());
    }

    let message = stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("no output")
        .to_string();
    ResolveError::Failed { code, message }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, FetchError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| FetchError::InvalidHeader(name.clone()))?;
        let value =
            HeaderValue::from_str(value).map_err(|_| FetchError::InvalidHeader(name.to_string()))?;
        map.insert(name, value);
    }
    Ok(map)
}
