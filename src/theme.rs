use egui::Color32;
use serde::{Deserialize, Serialize};

/// Day/night look of the whole window. Has no effect on cell colors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Day => "☀",
            Self::Night => "🌙",
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Self::Day => egui::Visuals::light(),
            Self::Night => egui::Visuals::dark(),
        }
    }

    /// Frame drawn around the board.
    pub fn board_frame(&self) -> Color32 {
        match self {
            Self::Day => Color32::from_gray(60),
            Self::Night => Color32::from_gray(200),
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());
    }
}
