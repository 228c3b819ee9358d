use thiserror::Error;

/// Errors from the sound-effect player. None of these reach the user: the
/// cue is skipped and the error is logged.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output unavailable: {0}")]
    InitError(String),

    #[error("no clip loaded for cue {0:?}")]
    MissingClip(String),

    #[error("failed to play cue: {0}")]
    PlaybackError(String),
}

/// Errors while reading the optional config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    ParseError(#[from] serde_json::Error),
}
