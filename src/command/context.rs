use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::Command;
use crate::board::Board;
use crate::config::SketcherConfig;
use crate::event::{EventBus, SketchEvent};
use crate::input::{InputEvent, InputRouter};
use crate::renderer::Renderer;
use crate::state::PointerState;
use crate::theme::Theme;
use crate::tools::{ColorTarget, ToolState};

/// User choices restored on the next launch. The drawing itself is not kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub tools: ToolState,
    pub theme: Theme,
    pub dimension: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::from_config(&SketcherConfig::default())
    }
}

impl Preferences {
    pub fn from_config(config: &SketcherConfig) -> Self {
        Self {
            tools: config.tool_state(),
            theme: Theme::default(),
            dimension: config.initial_dimension,
        }
    }
}

/// The application state: board, tool settings, pointer state and theme,
/// plus the renderer that mirrors them and the bus that announces changes.
///
/// All mutation goes through [`SketchContext::execute`] (control panel) and
/// [`SketchContext::handle_input`] (pointer), one event at a time.
#[derive(Debug)]
pub struct SketchContext {
    board: Board,
    tools: ToolState,
    theme: Theme,
    router: InputRouter,
    renderer: Renderer,
    event_bus: EventBus,
    rng: StdRng,
}

impl SketchContext {
    pub fn new(config: &SketcherConfig, preferences: Preferences) -> Self {
        Self::with_rng(config, preferences, StdRng::from_entropy())
    }

    /// Same as [`SketchContext::new`] with a caller-provided random source.
    pub fn with_rng(config: &SketcherConfig, preferences: Preferences, rng: StdRng) -> Self {
        let Preferences {
            tools,
            theme,
            dimension,
        } = preferences;
        let board = Board::new(config.dimensions, dimension as i64, tools.background());
        let renderer = Renderer::new(&board, &tools);
        Self {
            board,
            tools,
            theme,
            router: InputRouter::new(),
            renderer,
            event_bus: EventBus::new(),
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn pointer(&self) -> PointerState {
        self.router.pointer()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            tools: self.tools.clone(),
            theme: self.theme,
            dimension: self.board.dimension(),
        }
    }

    /// Run one control panel command
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::SelectTool(tool) => {
                let old = std::mem::replace(&mut self.tools.tool, tool);
                self.renderer.set_tool(tool);
                log::info!("Tool selected: {}", tool.name());
                self.event_bus.emit(SketchEvent::ToolChanged { old, new: tool });
            }
            Command::SetColor { target, color } => {
                if self.tools.set_color(target, color) {
                    log::debug!("Active paint color is now {}", crate::board::to_hex(color));
                }
                if target == ColorTarget::GridLine {
                    self.renderer.set_grid_color(color);
                }
                self.event_bus.emit(SketchEvent::ColorChanged { target, color });
            }
            Command::SetDimension(requested) => {
                let dimension = self.board.regenerate(requested, self.tools.background());
                self.renderer.rebuild(&self.board);
                log::info!("Board regenerated at {}", self.renderer.dimension_label());
                self.event_bus.emit(SketchEvent::BoardRegenerated { dimension });
            }
            Command::CycleGridStyle => {
                self.tools.grid_style = self.tools.grid_style.next();
                self.renderer.set_grid_style(self.tools.grid_style);
                self.event_bus.emit(SketchEvent::GridStyleChanged(self.tools.grid_style));
            }
            Command::Reset => {
                self.board.reset(self.tools.background());
                self.renderer.rebuild(&self.board);
                log::info!("Board reset");
                self.event_bus.emit(SketchEvent::BoardReset);
            }
            Command::ToggleTheme => {
                self.theme = self.theme.toggled();
                log::info!("Theme switched to {:?}", self.theme);
                self.event_bus.emit(SketchEvent::ThemeChanged(self.theme));
            }
        }
    }

    /// Route one pointer event to the board
    pub fn handle_input(&mut self, event: &InputEvent) {
        let before = self.router.pointer();
        let painted = self
            .router
            .route(event, &mut self.board, &self.tools, &mut self.rng);

        if let Some(pos) = painted {
            self.renderer.refresh_cell(&self.board, pos);
        }

        match (before, self.router.pointer(), event) {
            (PointerState::Idle, PointerState::Painting, InputEvent::PointerDown { cell }) => {
                self.event_bus.emit(SketchEvent::StrokeStarted { pos: *cell });
            }
            (PointerState::Painting, PointerState::Idle, _) => {
                self.event_bus.emit(SketchEvent::StrokeEnded);
            }
            _ => {}
        }

        if let Some(pos) = painted {
            self.event_bus.emit(SketchEvent::CellPainted {
                pos,
                tool: self.tools.tool,
            });
        }
    }
}
