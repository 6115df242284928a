//! Generator lifecycle: device-context ownership and track handles.
//!
//! The device context is an explicitly constructed, exclusively owned
//! resource rather than ambient global state. Hosts that gate audio on a
//! user gesture should call [`MusicGenerator::initialize`] after a
//! qualifying interaction; `generate_mood_music` also resumes on demand.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use tokio::sync::Mutex;

use crate::error::{SynthError, SynthResult};
use crate::render::{render, RenderConfig, DEFAULT_DURATION_SECONDS};

/// What the host environment advertises about audio support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Whether a device context type is available at all.
    pub has_device_context: bool,
}

impl HostCapabilities {
    /// Detects the capabilities of the current host.
    ///
    /// The offline engine always has a device context; embedders with a
    /// real audio host substitute their own probe result.
    pub fn detect() -> Self {
        Self {
            has_device_context: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeviceState {
    Suspended,
    Running,
    Closed,
}

/// Exclusively owned audio device context.
///
/// State machine: opens `Suspended`, [`resume`](Self::resume) moves it to
/// `Running` (idempotent), [`close`](Self::close) is terminal.
#[derive(Debug)]
pub struct AudioDevice {
    sample_rate: u32,
    state: DeviceState,
}

impl AudioDevice {
    /// Opens a device context at the given sample rate.
    ///
    /// Fails with [`SynthError::EnvironmentUnsupported`] when the host has
    /// no device context type, and [`SynthError::InvalidSampleRate`] for a
    /// zero rate.
    pub fn open(caps: HostCapabilities, sample_rate: u32) -> SynthResult<Self> {
        if !caps.has_device_context {
            return Err(SynthError::EnvironmentUnsupported);
        }
        if sample_rate == 0 {
            return Err(SynthError::InvalidSampleRate { rate: sample_rate });
        }
        Ok(Self {
            sample_rate,
            state: DeviceState::Suspended,
        })
    }

    /// Device sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Whether the device is currently running.
    pub fn is_running(&self) -> bool {
        self.state == DeviceState::Running
    }

    /// Resumes a suspended device. Idempotent while the device is open.
    pub fn resume(&mut self) -> SynthResult<()> {
        match self.state {
            DeviceState::Closed => Err(SynthError::DeviceClosed),
            _ => {
                self.state = DeviceState::Running;
                Ok(())
            }
        }
    }

    /// Closes the device. Terminal: the device cannot be resumed afterward.
    pub fn close(&mut self) {
        self.state = DeviceState::Closed;
    }
}

/// Caller-revocable reference to a generated track's encoded bytes.
///
/// Cloning the handle does not clone the bytes; all clones are revoked
/// together by [`MusicGenerator::cleanup`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackHandle(String);

impl TrackHandle {
    /// The opaque track id this handle refers to.
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// A generated track and the handle to its encoded audio.
#[derive(Debug, Clone)]
pub struct GeneratedTrack {
    /// Opaque id, `"ai-<millis>-<suffix>"`.
    pub id: String,
    /// Display title, `"<mood> Ambient Soundscape"`.
    pub title: String,
    /// The mood label the track was generated from.
    pub mood: String,
    /// Track duration in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Revocable reference to the WAV bytes.
    pub handle: TrackHandle,
}

/// Owns the device context and the registry of live track handles.
///
/// The device mutex serializes `initialize`/`close` against concurrent
/// generation calls; renders themselves run outside the lock on a blocking
/// worker and share no mutable state.
#[derive(Debug)]
pub struct MusicGenerator {
    device: Mutex<AudioDevice>,
    tracks: Mutex<HashMap<TrackHandle, Arc<Vec<u8>>>>,
    base_seed: u32,
}

impl MusicGenerator {
    /// Creates a generator around an opened device.
    pub fn new(device: AudioDevice, base_seed: u32) -> Self {
        Self {
            device: Mutex::new(device),
            tracks: Mutex::new(HashMap::new()),
            base_seed,
        }
    }

    /// Resumes the device context if it is suspended. Idempotent.
    pub async fn initialize(&self) -> SynthResult<()> {
        self.device.lock().await.resume()
    }

    /// Closes the device context. Outstanding track handles stay valid;
    /// only new generation calls fail afterward.
    pub async fn close(&self) {
        self.device.lock().await.close();
    }

    /// Generates a mood track of the default 120-second duration.
    pub async fn generate_default(&self, mood: &str) -> SynthResult<GeneratedTrack> {
        self.generate_mood_music(mood, DEFAULT_DURATION_SECONDS).await
    }

    /// Generates a mood track and registers a revocable handle for it.
    ///
    /// Ensures the device is running, then renders on a blocking worker so
    /// the caller's executor is not stalled by the CPU-bound synthesis.
    pub async fn generate_mood_music(
        &self,
        mood: &str,
        duration_seconds: f64,
    ) -> SynthResult<GeneratedTrack> {
        let sample_rate = {
            let mut device = self.device.lock().await;
            device.resume()?;
            device.sample_rate()
        };

        let config = RenderConfig::new(mood)
            .with_duration(duration_seconds)
            .with_sample_rate(sample_rate)
            .with_seed(self.base_seed);

        let result = tokio::task::spawn_blocking(move || render(&config))
            .await
            .map_err(|e| SynthError::Io(std::io::Error::other(e)))??;

        let id = fresh_track_id();
        let handle = TrackHandle(id.clone());
        let bytes = Arc::new(result.wav.wav_data);

        self.tracks.lock().await.insert(handle.clone(), bytes);

        Ok(GeneratedTrack {
            id,
            title: format!("{mood} Ambient Soundscape"),
            mood: mood.to_string(),
            duration_seconds,
            pcm_hash: result.wav.pcm_hash,
            handle,
        })
    }

    /// Dereferences a live handle.
    ///
    /// Fails with [`SynthError::HandleRevoked`] once the handle has been
    /// cleaned up.
    pub async fn audio_bytes(&self, handle: &TrackHandle) -> SynthResult<Arc<Vec<u8>>> {
        self.tracks
            .lock()
            .await
            .get(handle)
            .cloned()
            .ok_or_else(|| SynthError::HandleRevoked {
                id: handle.id().to_string(),
            })
    }

    /// Revokes a handle and releases the generator's reference to the bytes.
    ///
    /// Manual release contract: callers invoke this once playback is done.
    /// A second cleanup of the same handle fails with
    /// [`SynthError::HandleRevoked`].
    pub async fn cleanup(&self, handle: TrackHandle) -> SynthResult<()> {
        match self.tracks.lock().await.remove(&handle) {
            Some(_) => Ok(()),
            None => Err(SynthError::HandleRevoked {
                id: handle.id().to_string(),
            }),
        }
    }

    /// Number of live handles, for diagnostics.
    pub async fn live_handles(&self) -> usize {
        self.tracks.lock().await.len()
    }
}

/// Builds a fresh opaque track id: millisecond timestamp plus a random
/// suffix to keep ids unique within the same millisecond.
fn fresh_track_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix: u32 = rand::thread_rng().gen_range(0..0xFFFFFF);
    format!("ai-{millis}-{suffix:06x}")
}
