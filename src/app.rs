use crate::audio::AudioCues;
use crate::command::{Preferences, SketchContext};
use crate::config::SketcherConfig;
use crate::event::{CueHandler, LogHandler};
use crate::input::InputHandler;
use crate::panels::{board_panel, control_panel};
use crate::theme::Theme;

pub struct PixelSketcherApp {
    sketch: SketchContext,
    input: InputHandler,
    applied_theme: Option<Theme>,
}

impl PixelSketcherApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = SketcherConfig::load();

        // Restore the previous session's choices, if any.
        let preferences = cc
            .storage
            .and_then(|storage| eframe::get_value::<Preferences>(storage, eframe::APP_KEY))
            .unwrap_or_else(|| Preferences::from_config(&config));

        let app = Self::with_parts(&config, preferences, AudioCues::open(&config));
        app.sketch.theme().apply(&cc.egui_ctx);
        app
    }

    pub fn with_parts(config: &SketcherConfig, preferences: Preferences, cues: AudioCues) -> Self {
        let sketch = SketchContext::new(config, preferences);
        sketch.event_bus().subscribe(Box::new(LogHandler));
        sketch.event_bus().subscribe(Box::new(CueHandler::new(cues)));
        log::info!(
            "Starting with a {} board",
            sketch.renderer().dimension_label()
        );
        Self {
            applied_theme: Some(sketch.theme()),
            sketch,
            input: InputHandler::new(),
        }
    }

    pub fn sketch(&self) -> &SketchContext {
        &self.sketch
    }
}

impl eframe::App for PixelSketcherApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.sketch.preferences());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The side panel has to be laid out before the central one.
        for command in control_panel(ctx, &self.sketch) {
            self.sketch.execute(command);
        }

        let theme = self.sketch.theme();
        if self.applied_theme != Some(theme) {
            theme.apply(ctx);
            self.applied_theme = Some(theme);
        }

        board_panel(ctx, &mut self.sketch, &mut self.input);
    }
}
