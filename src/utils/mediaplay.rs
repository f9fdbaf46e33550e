use futures_util::StreamExt;
use rodio::{Decoder, OutputStream, Sink, Source};
use std::error::Error;
use std::io::Cursor;
use std::time::{Duration, Instant};

pub type PlayerResult<T> = Result<T, Box<dyn Error>>;

/// One loaded track on the default output device
///
/// The whole stream is downloaded before decoding so the decoder can seek
/// inside an in-memory buffer. Position is tracked from wall-clock time
/// since the last play/seek, the same way for every container format.
pub struct AudioPlayer {
    sink: Sink,
    _stream: OutputStream,
    total_duration: Option<Duration>,
    start_time: Instant,
    start_position: Duration,
    paused_at: Option<Duration>,
}

impl AudioPlayer {
    /// Download `url`, decode it and start playback at `volume`
    pub async fn new_and_play(
        url: &str,
        duration_hint: Option<Duration>,
        volume: f32,
    ) -> PlayerResult<Self> {
        let data = fetch_audio(url).await?;

        let source = Decoder::new(Cursor::new(data))?;
        let total_duration = source.total_duration().or(duration_hint);
        log::info!(
            "[AudioPlayer] Decoded stream: {} Hz, {} channels, duration {:?}",
            source.sample_rate(),
            source.channels(),
            total_duration
        );

        let (stream, stream_handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&stream_handle)?;
        sink.set_volume(volume);
        sink.append(source);

        Ok(Self {
            sink,
            _stream: stream,
            total_duration,
            start_time: Instant::now(),
            start_position: Duration::ZERO,
            paused_at: None,
        })
    }

    pub fn pause(&mut self) {
        if !self.sink.is_paused() {
            self.paused_at = Some(self.get_position());
            self.sink.pause();
            log::debug!("[AudioPlayer] Paused at {:?}", self.paused_at);
        }
    }

    pub fn resume(&mut self) {
        if self.sink.is_paused() {
            if let Some(paused) = self.paused_at {
                self.start_position = paused;
                self.start_time = Instant::now();
                log::debug!("[AudioPlayer] Resuming from {:?}", paused);
            }
            self.sink.play();
            self.paused_at = None;
        }
    }

    pub fn stop(&mut self) {
        log::debug!("[AudioPlayer] Stopping playback");
        self.sink.stop();
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }

    pub fn is_finished(&self) -> bool {
        self.sink.empty() && self.paused_at.is_none()
    }

    pub fn get_duration(&self) -> Option<Duration> {
        self.total_duration
    }

    pub fn get_position(&self) -> Duration {
        let position = match self.paused_at {
            Some(paused) => paused,
            None => self.start_position.saturating_add(self.start_time.elapsed()),
        };
        match self.total_duration {
            Some(total) => position.min(total),
            None => position,
        }
    }

    pub fn seek(&mut self, position: Duration) -> PlayerResult<()> {
        let position = match self.total_duration {
            Some(total) => position.min(total),
            None => position,
        };
        self.sink.try_seek(position)?;
        self.start_position = position;
        self.start_time = Instant::now();
        if self.paused_at.is_some() {
            self.paused_at = Some(position);
        }
        log::debug!("[AudioPlayer] Seeked to {:?}", position);
        Ok(())
    }
}

/// Upper bound on the buffer reserved up front from `Content-Length`
const MAX_PREALLOC_BYTES: u64 = 64 * 1024 * 1024;

fn initial_capacity(content_length: Option<u64>) -> usize {
    content_length.unwrap_or(0).min(MAX_PREALLOC_BYTES) as usize
}

/// Download the full audio body, logging progress per megabyte
async fn fetch_audio(url: &str) -> PlayerResult<Vec<u8>> {
    let response = crate::utils::http::streaming_client()
        .get(url)
        .send()
        .await?
        .error_for_status()?;

    let expected = response.content_length();
    let mut data = Vec::with_capacity(initial_capacity(expected));
    let mut next_report = 1024 * 1024;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        data.extend_from_slice(&chunk?);
        if data.len() >= next_report {
            log::debug!(
                "[AudioPlayer] Downloaded {} KB of {:?}",
                data.len() / 1024,
                expected.map(|b| b / 1024)
            );
            next_report += 1024 * 1024;
        }
    }

    if data.is_empty() {
        return Err("Stream returned no audio data".into());
    }
    log::info!("[AudioPlayer] Download complete: {} KB", data.len() / 1024);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_capacity_is_capped() {
        assert_eq!(initial_capacity(None), 0);
        assert_eq!(initial_capacity(Some(4096)), 4096);
        assert_eq!(initial_capacity(Some(u64::MAX)), MAX_PREALLOC_BYTES as usize);
    }
}
