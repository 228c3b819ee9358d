use crate::audio::AudioCues;
use crate::event::{EventHandler, SketchEvent};

/// Logs every event at debug level
#[derive(Debug, Default)]
pub struct LogHandler;

impl EventHandler for LogHandler {
    fn handle_event(&mut self, event: &SketchEvent) {
        log::debug!("{event:?}");
    }
}

/// Plays the sound cue that belongs to an event
pub struct CueHandler {
    cues: AudioCues,
}

impl CueHandler {
    pub fn new(cues: AudioCues) -> Self {
        Self { cues }
    }

    /// The cue identifier for an event, if it has one
    pub fn cue_for(event: &SketchEvent) -> Option<&'static str> {
        match event {
            SketchEvent::ToolChanged { .. } => Some("click"),
            SketchEvent::CellPainted { tool, .. } => Some(tool.cue()),
            SketchEvent::BoardReset => Some("reset"),
            SketchEvent::BoardRegenerated { .. } => Some("resize"),
            SketchEvent::GridStyleChanged(_) => Some("grid"),
            SketchEvent::ThemeChanged(_) => Some("toggle"),
            SketchEvent::ColorChanged { .. }
            | SketchEvent::StrokeStarted { .. }
            | SketchEvent::StrokeEnded => None,
        }
    }
}

impl EventHandler for CueHandler {
    fn handle_event(&mut self, event: &SketchEvent) {
        if let Some(cue) = Self::cue_for(event) {
            self.cues.play(cue);
        }
    }
}
