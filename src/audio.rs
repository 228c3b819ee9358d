use crate::config::SketcherConfig;
use crate::error::AudioError;

/// Every cue the board can ask for.
pub const CUES: [&str; 7] = ["click", "paint", "erase", "reset", "toggle", "grid", "resize"];

/// Fire-and-forget sound effects keyed by cue identifier.
///
/// Playing a cue that has no clip, or playing anything without an audio
/// device, does nothing.
pub struct AudioCues {
    player: Option<backend::Player>,
}

impl std::fmt::Debug for AudioCues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioCues")
            .field("silent", &self.is_silent())
            .finish()
    }
}

impl AudioCues {
    pub fn silent() -> Self {
        Self { player: None }
    }

    pub fn open(config: &SketcherConfig) -> Self {
        if !config.audio_enabled {
            return Self::silent();
        }
        match backend::Player::open(&config.sounds_dir) {
            Ok(player) => Self {
                player: Some(player),
            },
            Err(err) => {
                log::warn!("Sound effects disabled: {err}");
                Self::silent()
            }
        }
    }

    pub fn is_silent(&self) -> bool {
        self.player.is_none()
    }

    pub fn play(&self, cue: &str) {
        let Some(player) = &self.player else {
            return;
        };
        if let Err(err) = player.play(cue) {
            log::debug!("Skipping cue {cue:?}: {err}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::path::Path;
    use std::sync::Arc;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

    use super::{AudioError, CUES};

    pub struct Player {
        _stream: OutputStream,
        stream_handle: OutputStreamHandle,
        clips: HashMap<&'static str, Arc<[u8]>>,
    }

    impl Player {
        pub fn open(sounds_dir: &str) -> Result<Self, AudioError> {
            let (_stream, stream_handle) = OutputStream::try_default()
                .map_err(|e| AudioError::InitError(e.to_string()))?;

            // Clips are read up front so playback never touches the disk.
            let mut clips = HashMap::new();
            for cue in CUES {
                let path = Path::new(sounds_dir).join(format!("{cue}.wav"));
                match std::fs::read(&path) {
                    Ok(bytes) => {
                        clips.insert(cue, Arc::from(bytes));
                    }
                    Err(err) => log::debug!("No clip for {cue:?} at {}: {err}", path.display()),
                }
            }
            log::info!("Loaded {} of {} sound cues", clips.len(), CUES.len());

            Ok(Self {
                _stream,
                stream_handle,
                clips,
            })
        }

        pub fn play(&self, cue: &str) -> Result<(), AudioError> {
            let clip = self
                .clips
                .get(cue)
                .ok_or_else(|| AudioError::MissingClip(cue.to_owned()))?;

            let decoder = Decoder::new(Cursor::new(clip.clone()))
                .map_err(|e| AudioError::PlaybackError(e.to_string()))?;
            let sink = Sink::try_new(&self.stream_handle)
                .map_err(|e| AudioError::PlaybackError(e.to_string()))?;

            sink.append(decoder);
            sink.detach();
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::AudioError;

    /// Plays clips served next to the page through `<audio>` elements.
    pub struct Player {
        base_url: String,
    }

    impl Player {
        pub fn open(sounds_dir: &str) -> Result<Self, AudioError> {
            Ok(Self {
                base_url: sounds_dir.trim_end_matches('/').to_owned(),
            })
        }

        pub fn play(&self, cue: &str) -> Result<(), AudioError> {
            let url = format!("{}/{cue}.wav", self.base_url);
            let audio = web_sys::HtmlAudioElement::new_with_src(&url)
                .map_err(|e| AudioError::PlaybackError(format!("{e:?}")))?;
            // A missing clip only rejects the returned promise; nothing to do.
            let _ = audio
                .play()
                .map_err(|e| AudioError::PlaybackError(format!("{e:?}")))?;
            Ok(())
        }
    }
}
