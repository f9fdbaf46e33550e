use crate::utils::error_handling::safe_lock;
use crate::utils::mediaplay::AudioPlayer;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub enum AudioCommand {
    Play {
        url: String,
        track_id: String,
        duration_hint: Option<Duration>,
    },
    Pause,
    Resume,
    Stop,
    SetVolume(f32),
    Seek(Duration),
}

/// Shared between the UI and the audio thread
#[derive(Default)]
struct PlaybackStatus {
    position: Duration,
    duration: Option<Duration>,
    is_finished: bool,
    is_loading: bool,
    track_id: Option<String>,
    last_error: Option<String>,
}

/// Handle to the audio thread. Commands are fire-and-forget; state is read
/// back through a mutex the thread refreshes every tick.
pub struct AudioController {
    command_tx: Sender<AudioCommand>,
    status: Arc<Mutex<PlaybackStatus>>,
}

impl AudioController {
    pub fn new(initial_volume: f32) -> Self {
        let (command_tx, command_rx): (Sender<AudioCommand>, Receiver<AudioCommand>) = channel();
        let status = Arc::new(Mutex::new(PlaybackStatus::default()));
        let status_clone = Arc::clone(&status);

        std::thread::Builder::new()
            .name("audio".into())
            .spawn(move || audio_thread(command_rx, status_clone, initial_volume))
            .map_err(|e| log::error!("[AudioController] Failed to spawn audio thread: {}", e))
            .ok();

        Self { command_tx, status }
    }

    fn send(&self, cmd: AudioCommand) {
        if self.command_tx.send(cmd).is_err() {
            log::error!("[AudioController] Audio thread is gone, command dropped");
        }
    }

    pub fn play(&self, url: String, track_id: String, duration_hint: Option<Duration>) {
        // Mark loading right away so the UI does not see the previous track as finished
        if let Some(mut s) = safe_lock(&self.status, "AudioController") {
            s.is_loading = true;
            s.is_finished = false;
            s.last_error = None;
            s.position = Duration::ZERO;
            s.duration = duration_hint;
            s.track_id = Some(track_id.clone());
        }
        self.send(AudioCommand::Play {
            url,
            track_id,
            duration_hint,
        });
    }

    pub fn pause(&self) {
        self.send(AudioCommand::Pause);
    }

    pub fn resume(&self) {
        self.send(AudioCommand::Resume);
    }

    pub fn stop(&self) {
        self.send(AudioCommand::Stop);
    }

    pub fn set_volume(&self, volume: f32) {
        self.send(AudioCommand::SetVolume(volume.clamp(0.0, 1.0)));
    }

    pub fn seek(&self, position: Duration) {
        self.send(AudioCommand::Seek(position));
    }

    pub fn get_position(&self) -> Duration {
        safe_lock(&self.status, "AudioController")
            .map(|s| s.position)
            .unwrap_or(Duration::ZERO)
    }

    pub fn get_duration(&self) -> Option<Duration> {
        safe_lock(&self.status, "AudioController").and_then(|s| s.duration)
    }

    /// True once the loaded track ran to its end
    pub fn is_finished(&self) -> bool {
        safe_lock(&self.status, "AudioController")
            .map(|s| s.is_finished && !s.is_loading)
            .unwrap_or(false)
    }

    pub fn is_loading(&self) -> bool {
        safe_lock(&self.status, "AudioController")
            .map(|s| s.is_loading)
            .unwrap_or(false)
    }

    pub fn take_error(&self) -> Option<String> {
        safe_lock(&self.status, "AudioController").and_then(|mut s| s.last_error.take())
    }
}

fn audio_thread(
    command_rx: Receiver<AudioCommand>,
    status: Arc<Mutex<PlaybackStatus>>,
    initial_volume: f32,
) {
    let rt = match crate::utils::error_handling::create_runtime() {
        Ok(r) => r,
        Err(e) => {
            log::error!("[AudioController] Failed to create runtime for audio thread: {}", e);
            return;
        }
    };
    let mut player: Option<AudioPlayer> = None;
    let mut volume = initial_volume.clamp(0.0, 1.0);

    loop {
        loop {
            let cmd = match command_rx.try_recv() {
                Ok(cmd) => cmd,
                Err(std::sync::mpsc::TryRecvError::Empty) => break,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    log::info!("[AudioController] Controller dropped, stopping audio thread");
                    return;
                }
            };

            match cmd {
                AudioCommand::Play {
                    url,
                    track_id,
                    duration_hint,
                } => {
                    log::info!(
                        "[AudioController] Received Play command for track {} (hint {:?})",
                        track_id,
                        duration_hint
                    );

                    // Free the old decoder before downloading the next one
                    if let Some(mut old_player) = player.take() {
                        old_player.stop();
                    }

                    let result = rt.block_on(AudioPlayer::new_and_play(&url, duration_hint, volume));

                    // A newer Play may have been issued while this one downloaded
                    let still_current = safe_lock(&status, "AudioController")
                        .map(|s| s.track_id.as_deref() == Some(track_id.as_str()))
                        .unwrap_or(true);

                    match result {
                        Ok(p) if still_current => {
                            log::info!("[AudioController] Audio playback started");
                            if let Some(mut s) = safe_lock(&status, "AudioController") {
                                s.duration = p.get_duration();
                                s.position = Duration::ZERO;
                                s.is_finished = false;
                                s.is_loading = false;
                            }
                            player = Some(p);
                        }
                        Ok(mut stale) => {
                            log::debug!("[AudioController] Dropping stale load for {}", track_id);
                            stale.stop();
                        }
                        Err(e) => {
                            log::error!("[AudioController] Error loading audio: {}", e);
                            if still_current {
                                if let Some(mut s) = safe_lock(&status, "AudioController") {
                                    s.is_loading = false;
                                    s.last_error = Some(format!("Playback failed: {}", e));
                                }
                            }
                        }
                    }
                }
                AudioCommand::Pause => {
                    if let Some(p) = player.as_mut() {
                        p.pause();
                    }
                }
                AudioCommand::Resume => {
                    if let Some(p) = player.as_mut() {
                        p.resume();
                    }
                }
                AudioCommand::Stop => {
                    log::debug!("[AudioController] Received Stop command");
                    if let Some(mut p) = player.take() {
                        p.stop();
                    }
                    if let Some(mut s) = safe_lock(&status, "AudioController") {
                        *s = PlaybackStatus::default();
                    }
                }
                AudioCommand::SetVolume(vol) => {
                    volume = vol;
                    if let Some(p) = player.as_mut() {
                        p.set_volume(vol);
                    }
                }
                AudioCommand::Seek(pos) => {
                    if let Some(p) = player.as_mut() {
                        if let Err(e) = p.seek(pos) {
                            log::error!("[AudioController] Seek error: {}", e);
                        }
                    }
                }
            }
        }

        if let Some(p) = player.as_ref() {
            if let Some(mut s) = safe_lock(&status, "AudioController") {
                s.position = p.get_position();
                s.is_finished = p.is_finished();
            }
        }

        std::thread::sleep(Duration::from_millis(50));
    }
}
