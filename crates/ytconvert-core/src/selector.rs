//! Best-stream selection

use crate::resolver::{Container, StreamDescriptor};

/// Container the service delivers (`audio/mp4`, saved as `.m4a`).
pub const TARGET_CONTAINER: Container = Container::Mp4;

/// Pick the audio-only stream in `container` with the highest average bitrate.
///
/// Streams without a usable bitrate are not ranked. On equal bitrate the
/// earliest stream in `streams` wins, so the result only depends on the
/// input order.
pub fn select_audio_stream<'a>(
    streams: &'a [StreamDescriptor],
    container: &Container,
) -> Option<&'a StreamDescriptor> {
    let mut best: Option<(&StreamDescriptor, f64)> = None;

    for stream in streams {
        if !stream.audio_only || &stream.container != container {
            continue;
        }
        let Some(abr) = stream.abr.filter(|abr| abr.is_finite()) else {
            continue;
        };
        match best {
            Some((_, best_abr)) if abr <= best_abr => {}
            _ => best = Some((stream, abr)),
        }
    }

    best.map(|(stream, _)| stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::StreamSource;

    fn stream(id: &str, audio_only: bool, ext: &str, abr: Option<f64>) -> StreamDescriptor {
        StreamDescriptor {
            id: id.to_string(),
            audio_only,
            container: Container::from_extension(ext),
            abr,
            source: StreamSource::default(),
        }
    }

    #[test]
    fn test_highest_bitrate_wins() {
        let streams = vec![
            stream("139", true, "m4a", Some(48.0)),
            stream("140", true, "m4a", Some(129.5)),
            stream("251", true, "webm", Some(160.0)),
            stream("18", false, "mp4", Some(200.0)),
        ];
        let chosen = select_audio_stream(&streams, &TARGET_CONTAINER).unwrap();
        assert_eq!(chosen.id, "140");
    }

    #[test]
    fn test_tie_keeps_first() {
        let streams = vec![
            stream("a", true, "m4a", Some(128.0)),
            stream("b", true, "m4a", Some(128.0)),
        ];
        assert_eq!(select_audio_stream(&streams, &TARGET_CONTAINER).unwrap().id, "a");

        let reversed: Vec<_> = streams.into_iter().rev().collect();
        assert_eq!(select_audio_stream(&reversed, &TARGET_CONTAINER).unwrap().id, "b");
    }

    #[test]
    fn test_no_matching_container() {
        let streams = vec![
            stream("249", true, "webm", Some(50.0)),
            stream("251", true, "webm", Some(160.0)),
        ];
        assert!(select_audio_stream(&streams, &TARGET_CONTAINER).is_none());
        assert!(select_audio_stream(&[], &TARGET_CONTAINER).is_none());
    }

    #[test]
    fn test_unranked_streams_skipped() {
        let streams = vec![
            stream("x", true, "m4a", None),
            stream("y", true, "m4a", Some(f64::NAN)),
            stream("z", true, "m4a", Some(32.0)),
        ];
        assert_eq!(select_audio_stream(&streams, &TARGET_CONTAINER).unwrap().id, "z");
        assert!(select_audio_stream(&streams[..2], &TARGET_CONTAINER).is_none());
    }
}
